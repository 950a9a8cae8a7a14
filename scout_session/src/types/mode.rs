use crate::config::constants::session::{
    MAX_TASK_NUMBER, MIN_TASK_NUMBER, RANDOM_SESSION_NAME, TASK_PREFIX,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Game mode of a session. The document root tags it with a numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionMode {
    Spatial,
    Inhibition,
    Star,
}

impl SessionMode {
    /// Code stored as the first attribute of the `session` element
    pub fn code(&self) -> &'static str {
        match self {
            SessionMode::Spatial => "0",
            SessionMode::Inhibition => "1",
            SessionMode::Star => "2",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "0" => Some(SessionMode::Spatial),
            "1" => Some(SessionMode::Inhibition),
            "2" => Some(SessionMode::Star),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionMode::Spatial => "spatial",
            SessionMode::Inhibition => "inhibition",
            SessionMode::Star => "star",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which session a player is on: a numbered task document, or the sentinel
/// telling the game to generate trials itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionId {
    Task(u8),
    #[default]
    Random,
}

impl SessionId {
    /// `None` when the task number is outside 1..=6
    pub fn from_task_number(task: i32) -> Option<Self> {
        if (MIN_TASK_NUMBER..=MAX_TASK_NUMBER).contains(&task) {
            Some(SessionId::Task(task as u8))
        } else {
            None
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, SessionId::Random)
    }

    pub fn name(&self) -> String {
        match self {
            SessionId::Task(n) => format!("{}{}", TASK_PREFIX, n),
            SessionId::Random => RANDOM_SESSION_NAME.to_string(),
        }
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_codes() {
        for mode in [SessionMode::Spatial, SessionMode::Inhibition, SessionMode::Star] {
            assert_eq!(SessionMode::from_code(mode.code()), Some(mode));
        }
        assert_eq!(SessionMode::from_code("3"), None);
        assert_eq!(SessionMode::from_code("spatial"), None);
    }

    #[test]
    fn test_session_id_bounds() {
        assert_eq!(SessionId::from_task_number(0), None);
        assert_eq!(SessionId::from_task_number(7), None);
        assert_eq!(SessionId::from_task_number(-1), None);
        assert_eq!(SessionId::from_task_number(1), Some(SessionId::Task(1)));
        assert_eq!(SessionId::from_task_number(6), Some(SessionId::Task(6)));
    }

    #[test]
    fn test_session_id_names() {
        assert_eq!(SessionId::Task(3).name(), "task3");
        assert_eq!(SessionId::Random.to_string(), "randomList");
        assert!(SessionId::default().is_random());
    }
}
