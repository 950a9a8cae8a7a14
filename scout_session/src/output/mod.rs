//! Names and markers written next to result documents

pub mod exit_code;
pub mod filename;

pub use exit_code::{machine_name, write_exit_marker, ExitMarkerError, ExitStatus};
pub use filename::{allocate_file_name, count_previous_attempts, timestamp};
