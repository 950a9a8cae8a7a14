//! Exit marker read by the dashboard to learn how a module ended

use crate::logging::codes;
use crate::{log_debug, log_error, log_success};
use std::fs;
use std::path::{Path, PathBuf};

const UNKNOWN_HOST: &str = "unknown-host";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl ExitStatus {
    pub fn code(&self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Error => 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExitMarkerError {
    #[error("Cannot write exit marker {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExitMarkerError {
    pub fn error_code(&self) -> crate::logging::Code {
        codes::output::EXIT_MARKER_FAILED
    }
}

pub fn machine_name() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

pub fn exit_marker_name(machine: &str, module: &str) -> String {
    format!("{}_{}_exit_code.txt", machine, module)
}

/// Write `<machine>_<module>_exit_code.txt` into `trace_dir`
pub fn write_exit_marker(
    trace_dir: &Path,
    machine: &str,
    module: &str,
    status: ExitStatus,
) -> Result<PathBuf, ExitMarkerError> {
    log_debug!("Writing exit marker", "module" => module, "code" => status.code());

    let path = trace_dir.join(exit_marker_name(machine, module));
    match fs::write(&path, format!("{}\n", status.code())) {
        Ok(()) => {
            log_success!(
                codes::success::EXIT_MARKER_WRITTEN,
                "Exit marker written",
                "path" => path.display(),
                "code" => status.code()
            );
            Ok(path)
        }
        Err(source) => {
            let error = ExitMarkerError::Io {
                path: path.display().to_string(),
                source,
            };
            log_error!(error.error_code(), &error.to_string());
            Err(error)
        }
    }
}
