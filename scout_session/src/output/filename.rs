//! Collision-avoiding result filenames
//!
//! `<player>_<session>_<M-D-YYYY>-<HH-MM-SS>[_try<N>].xml`, where N is one more
//! than the number of files already in the log folder for the same player and
//! session.

use crate::config::constants::session::{DOCUMENT_EXTENSION, NO_SESSION_NAME};
use crate::types::SessionId;
use chrono::NaiveDateTime;
use std::path::Path;
use walkdir::WalkDir;

/// `M-D-YYYY-HH-MM-SS` without leading zeros on month and day
pub fn timestamp(now: &NaiveDateTime) -> String {
    now.format("%-m-%-d-%Y-%H-%M-%S").to_string()
}

/// Files directly inside `log_dir` whose name contains `prefix`.
/// A missing folder counts as empty.
pub fn count_previous_attempts(log_dir: &Path, prefix: &str) -> usize {
    WalkDir::new(log_dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.file_name().to_string_lossy().contains(prefix))
        .count()
}

/// Name for the next result document of `player` in `session`
pub fn allocate_file_name(
    log_dir: &Path,
    player: &str,
    session: Option<SessionId>,
    now: &NaiveDateTime,
) -> String {
    let time = timestamp(now);

    let Some(session) = session else {
        return format!("{}_{}_{}.{}", player, NO_SESSION_NAME, time, DOCUMENT_EXTENSION);
    };

    let prefix = format!("{}_{}", player, session.name());
    let attempt = 1 + count_previous_attempts(log_dir, &prefix);

    if attempt > 1 && !session.is_random() {
        format!("{}_{}_try{}.{}", prefix, time, attempt, DOCUMENT_EXTENSION)
    } else {
        format!("{}_{}.{}", prefix, time, DOCUMENT_EXTENSION)
    }
}
