//! Dashboard folder layout under the data root

use crate::config::constants::folders;
use crate::log_success;
use crate::logging::codes;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FolderError {
    #[error("Cannot create folder {path}: {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FolderError {
    pub fn error_code(&self) -> crate::logging::Code {
        codes::output::FOLDER_CREATION_FAILED
    }
}

/// `<root>/yl` and the folders the dashboard reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    dashboard: PathBuf,
}

impl SessionPaths {
    pub fn new(data_root: &Path) -> Self {
        Self {
            dashboard: data_root.join(folders::DASHBOARD),
        }
    }

    pub fn dashboard(&self) -> &Path {
        &self.dashboard
    }

    /// Result documents
    pub fn log_files(&self) -> PathBuf {
        self.dashboard.join(folders::LOG_FILES)
    }

    /// Exit markers
    pub fn trace_files(&self) -> PathBuf {
        self.dashboard.join(folders::TRACE_FILES)
    }

    pub fn player_specific(&self) -> PathBuf {
        self.dashboard.join(folders::PLAYER_SPECIFIC)
    }

    /// Session definition documents
    pub fn session_files(&self) -> PathBuf {
        self.dashboard.join(folders::SESSION_FILES)
    }

    pub fn player_measures(&self) -> PathBuf {
        self.dashboard.join(folders::PLAYER_MEASURES)
    }

    pub fn pitch_files(&self) -> PathBuf {
        self.dashboard.join(folders::PITCH_FILES)
    }

    pub fn unfinished_sessions(&self) -> PathBuf {
        self.dashboard.join(folders::UNFINISHED_SESSIONS)
    }

    /// Dashboard folder first, then its children
    pub fn all_folders(&self) -> Vec<PathBuf> {
        vec![
            self.dashboard.clone(),
            self.log_files(),
            self.trace_files(),
            self.player_specific(),
            self.session_files(),
            self.player_measures(),
            self.pitch_files(),
            self.unfinished_sessions(),
        ]
    }

    /// Create whatever is missing. Stops at the first folder that fails.
    pub fn ensure_folders(&self) -> Result<(), FolderError> {
        for folder in self.all_folders() {
            if folder.is_dir() {
                continue;
            }
            fs::create_dir_all(&folder).map_err(|source| FolderError::Create {
                path: folder.display().to_string(),
                source,
            })?;
        }

        log_success!(
            codes::success::FOLDERS_READY,
            "Dashboard folders ready",
            "dashboard" => self.dashboard.display()
        );
        Ok(())
    }
}
