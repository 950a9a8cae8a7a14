//! Where session documents and player preferences come from

use crate::config::constants::session::DOCUMENT_EXTENSION;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supplier of session document text
pub trait SessionSource {
    /// Document from the session-files folder. `Ok(None)` when it does not exist.
    fn load_primary(&self, file_name: &str) -> io::Result<Option<String>>;

    /// Copy shipped with the game, looked up by session name without extension.
    /// `Ok(None)` when there is no such copy.
    fn load_bundled(&self, name: &str) -> io::Result<Option<String>>;
}

/// Reads the session-files folder and an optional folder of bundled sessions
#[derive(Debug, Clone)]
pub struct FileSessionSource {
    session_dir: PathBuf,
    bundled_dir: Option<PathBuf>,
}

impl FileSessionSource {
    pub fn new(session_dir: impl Into<PathBuf>, bundled_dir: Option<PathBuf>) -> Self {
        Self {
            session_dir: session_dir.into(),
            bundled_dir,
        }
    }

    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }
}

impl SessionSource for FileSessionSource {
    fn load_primary(&self, file_name: &str) -> io::Result<Option<String>> {
        read_if_exists(&self.session_dir.join(file_name))
    }

    fn load_bundled(&self, name: &str) -> io::Result<Option<String>> {
        match &self.bundled_dir {
            Some(dir) => read_if_exists(&dir.join(format!("{}.{}", name, DOCUMENT_EXTENSION))),
            None => Ok(None),
        }
    }
}

fn read_if_exists(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Key-value store holding the chosen task and the player's name
pub trait PreferenceStore {
    fn task_number(&self) -> Option<i32>;
    fn player_name(&self) -> Option<String>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryPreferences {
    pub task_number: Option<i32>,
    pub player_name: Option<String>,
}

impl InMemoryPreferences {
    pub fn new(task_number: i32, player_name: &str) -> Self {
        Self {
            task_number: Some(task_number),
            player_name: Some(player_name.to_string()),
        }
    }
}

impl PreferenceStore for InMemoryPreferences {
    fn task_number(&self) -> Option<i32> {
        self.task_number
    }

    fn player_name(&self) -> Option<String> {
        self.player_name.clone()
    }
}
