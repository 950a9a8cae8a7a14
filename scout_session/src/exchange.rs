//! Session exchange facade
//!
//! Holds the player and the session identifier across the read at the start
//! of a game and the write at its end. A failed read leaves the identifier on
//! the random sentinel so the game generates its own trials and the result
//! file is named accordingly.

use crate::config::runtime::ExchangePreferences;
use crate::output::{self, ExitMarkerError, ExitStatus};
use crate::paths::{FolderError, SessionPaths};
use crate::reader::{self, FileSessionSource, PreferenceStore, ReadError, SessionRead, SessionSource};
use crate::types::{SessionId, SessionMode, SessionRecord};
use crate::writer::{self, ScreenGeometry, WriteError};
use chrono::NaiveDateTime;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct SessionExchange {
    preferences: ExchangePreferences,
    paths: SessionPaths,
    player: String,
    session_id: Option<SessionId>,
}

impl SessionExchange {
    pub fn new(preferences: ExchangePreferences) -> Self {
        let paths = SessionPaths::new(&preferences.data_root);
        Self {
            preferences,
            paths,
            player: String::new(),
            session_id: None,
        }
    }

    pub fn paths(&self) -> &SessionPaths {
        &self.paths
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    /// `None` until a read has been attempted
    pub fn session_id(&self) -> Option<SessionId> {
        self.session_id
    }

    /// Set the session directly, for writing results of a session read elsewhere
    pub fn set_session_id(&mut self, session_id: Option<SessionId>) {
        self.session_id = session_id;
    }

    /// Spaces are not allowed in player names used for filenames
    pub fn set_player(&mut self, name: &str) {
        self.player = name.chars().filter(|c| *c != ' ').collect();
    }

    pub fn geometry(&self) -> ScreenGeometry {
        ScreenGeometry::from_preferences(&self.preferences)
    }

    /// Create any missing dashboard folder
    pub fn prepare_folders(&self) -> Result<(), FolderError> {
        self.paths.ensure_folders()
    }

    /// Source over the session-files folder and the configured bundled folder
    pub fn file_source(&self) -> FileSessionSource {
        FileSessionSource::new(
            self.paths.session_files(),
            self.preferences.bundled_sessions_dir.clone(),
        )
    }

    /// Read the session chosen in `preferences` for `mode`
    pub fn read(
        &mut self,
        preferences: &dyn PreferenceStore,
        mode: SessionMode,
        source: &dyn SessionSource,
    ) -> Result<SessionRead, ReadError> {
        self.set_player(&preferences.player_name().unwrap_or_default());
        let task = preferences.task_number().unwrap_or_default();

        match reader::read_session(task, mode, source, self.preferences.star_type_policy) {
            Ok(read) => {
                self.session_id = Some(read.session_id);
                Ok(read)
            }
            Err(error) => {
                self.session_id = Some(SessionId::Random);
                Err(error)
            }
        }
    }

    /// `read` against the dashboard folders
    pub fn read_from_folders(
        &mut self,
        preferences: &dyn PreferenceStore,
        mode: SessionMode,
    ) -> Result<SessionRead, ReadError> {
        let source = self.file_source();
        self.read(preferences, mode, &source)
    }

    pub fn next_file_name(&self, now: &NaiveDateTime) -> String {
        output::allocate_file_name(&self.paths.log_files(), &self.player, self.session_id, now)
    }

    /// Write `record` to the log folder under a fresh name
    pub fn write(&self, record: &SessionRecord, now: &NaiveDateTime) -> Result<PathBuf, WriteError> {
        let file_name = self.next_file_name(now);
        writer::write_session(record, &self.geometry(), &self.paths.log_files(), &file_name)
    }

    pub fn write_exit_code(
        &self,
        module: &str,
        status: ExitStatus,
    ) -> Result<PathBuf, ExitMarkerError> {
        output::write_exit_marker(
            &self.paths.trace_files(),
            &output::machine_name(),
            module,
            status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::InMemoryPreferences;
    use crate::types::{SpatialEvent, TrialEvent};
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn exchange(root: &TempDir) -> SessionExchange {
        let preferences = ExchangePreferences {
            data_root: root.path().to_path_buf(),
            bundled_sessions_dir: None,
            screen_width: 600.0,
            screen_height: 300.0,
            star_type_policy: Default::default(),
        };
        let exchange = SessionExchange::new(preferences);
        exchange.prepare_folders().unwrap();
        exchange
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_read_then_write() {
        let root = TempDir::new().unwrap();
        let mut exchange = exchange(&root);
        fs::write(
            exchange.paths().session_files().join("task2.xml"),
            r#"<session type="0"><events><event dots="3;9;1" delay=".1"/></events></session>"#,
        )
        .unwrap();

        let read = exchange
            .read_from_folders(&InMemoryPreferences::new(2, "Bob Smith"), SessionMode::Spatial)
            .unwrap();
        assert_eq!(exchange.player(), "BobSmith");
        assert_eq!(exchange.session_id(), Some(SessionId::Task(2)));

        let mut record = SessionRecord::new(SessionMode::Spatial);
        record.trials = read.events;
        let first = exchange.write(&record, &now()).unwrap();
        let second = exchange.write(&record, &now()).unwrap();

        assert_eq!(
            first.file_name().unwrap(),
            "BobSmith_task2_1-2-2024-10-00-00.xml"
        );
        assert_eq!(
            second.file_name().unwrap(),
            "BobSmith_task2_1-2-2024-10-00-00_try2.xml"
        );
    }

    #[test]
    fn test_mode_mismatch_falls_back_to_random() {
        let root = TempDir::new().unwrap();
        let mut exchange = exchange(&root);
        fs::write(
            exchange.paths().session_files().join("task1.xml"),
            r#"<session type="1"><events><event side="l"/></events></session>"#,
        )
        .unwrap();

        let result =
            exchange.read_from_folders(&InMemoryPreferences::new(1, "ann"), SessionMode::Spatial);

        assert_matches!(result, Err(ReadError::ModeMismatch { .. }));
        assert_eq!(exchange.session_id(), Some(SessionId::Random));
        assert_eq!(
            exchange.next_file_name(&now()),
            "ann_randomList_1-2-2024-10-00-00.xml"
        );
    }

    #[test]
    fn test_missing_task_preference_is_invalid() {
        let root = TempDir::new().unwrap();
        let mut exchange = exchange(&root);

        let result = exchange.read_from_folders(&InMemoryPreferences::default(), SessionMode::Star);

        assert_matches!(result, Err(ReadError::InvalidTaskIdentifier { task: 0 }));
        assert!(exchange.session_id().unwrap().is_random());
    }

    #[test]
    fn test_name_before_any_read() {
        let root = TempDir::new().unwrap();
        let mut exchange = exchange(&root);
        exchange.set_player("dee");

        assert_eq!(exchange.next_file_name(&now()), "dee_None_1-2-2024-10-00-00.xml");
    }

    #[test]
    fn test_exit_code_goes_to_trace_folder() {
        let root = TempDir::new().unwrap();
        let exchange = exchange(&root);

        let path = exchange.write_exit_code("spatial", ExitStatus::Success).unwrap();
        assert_eq!(path.parent().unwrap(), exchange.paths().trace_files());
        assert_eq!(fs::read_to_string(path).unwrap(), "0\n");

        let record = SessionRecord {
            mode: SessionMode::Spatial,
            practice: vec![],
            trials: vec![TrialEvent::Spatial(SpatialEvent::new(vec![1], 0.1))],
        };
        assert!(exchange.write(&record, &now()).is_ok());
    }
}
