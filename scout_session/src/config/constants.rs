//! Fixed domain constants
//!
//! These are properties of the games and of the dashboard layout, not user
//! preferences. Preferences live in `config::runtime`.

pub mod session {
    /// Valid task numbers are 1..=6
    pub const MIN_TASK_NUMBER: i32 = 1;
    pub const MAX_TASK_NUMBER: i32 = 6;

    /// Session identifier telling the game to generate its own trials
    pub const RANDOM_SESSION_NAME: &str = "randomList";

    /// Session documents are named `task<N>.xml`
    pub const TASK_PREFIX: &str = "task";
    pub const DOCUMENT_EXTENSION: &str = "xml";

    /// Root element and events container of a session document
    pub const ROOT_ELEMENT: &str = "session";
    pub const EVENTS_ELEMENT: &str = "events";
    pub const EVENT_ELEMENT: &str = "event";

    /// Session name used in result filenames when none was chosen
    pub const NO_SESSION_NAME: &str = "None";
}

pub mod spatial {
    pub const MIN_DOT: i32 = 1;
    pub const MAX_DOT: i32 = 9;
    pub const MAX_DOTS_PER_EVENT: usize = 3;

    pub const SHORT_DELAY: f32 = 0.1;
    pub const LONG_DELAY: f32 = 3.0;
    pub const ALLOWED_DELAYS: [f32; 2] = [SHORT_DELAY, LONG_DELAY];
}

pub mod inhibition {
    pub const ALLOWED_SIDES: [char; 2] = ['l', 'r'];
    pub const ALLOWED_COLORS: [&str; 2] = ["yellow", "purple"];
}

pub mod star {
    /// Playing field bounds for object positions
    pub const X_MIN: f32 = -170.0;
    pub const X_MAX: f32 = 170.0;
    pub const Y_MIN: f32 = -75.0;
    pub const Y_MAX: f32 = 90.0;

    /// Object type codes that map to a known kind
    pub const MIN_TYPE_CODE: i32 = 0;
    pub const MAX_TYPE_CODE: i32 = 3;

    /// Marks an object slot with no type; never kept, whatever the policy
    pub const NO_TYPE_CODE: i32 = -1;

    /// The field is tallied in 4 columns by 2 rows
    pub const AREA_COLUMNS: usize = 4;
    pub const AREA_ROWS: usize = 2;
    pub const AREA_COUNT: usize = AREA_COLUMNS * AREA_ROWS;

    /// Responses averaged at the start and at the end of a trial
    pub const RESPONSE_WINDOW: usize = 10;
}

pub mod folders {
    pub const DASHBOARD: &str = "yl";
    pub const LOG_FILES: &str = "log_files";
    pub const TRACE_FILES: &str = "trace_files";
    pub const PLAYER_SPECIFIC: &str = "player_specific";
    pub const SESSION_FILES: &str = "session_files";
    pub const PLAYER_MEASURES: &str = "indiv_measures";
    pub const PITCH_FILES: &str = "pitch_files";
    pub const UNFINISHED_SESSIONS: &str = "unfinished_files";
}

pub mod logging {
    /// Events kept by in-memory loggers before the oldest are dropped
    pub const LOG_BUFFER_SIZE: usize = 10_000;

    /// Messages longer than this are truncated
    pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;
}
