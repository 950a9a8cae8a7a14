use crate::logging::codes;
use crate::types::SessionMode;

/// Terminal read failures. Any of these sends the game to its random session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReadError {
    #[error("Task number {task} is outside 1..=6")]
    InvalidTaskIdentifier { task: i32 },

    #[error("Session document {name} not found in session folder or bundled sessions")]
    DocumentNotFound { name: String },

    #[error("Session document {name} could not be read: {message}")]
    DocumentUnreadable { name: String, message: String },

    #[error("Session document {name} is malformed: {reason}")]
    DocumentMalformed { name: String, reason: String },

    #[error("Session document is tagged '{found}' but the active mode is {expected}")]
    ModeMismatch { expected: SessionMode, found: String },

    #[error("Session document {name} has no usable events")]
    EmptyEventList { name: String },
}

impl ReadError {
    pub fn malformed(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::DocumentMalformed {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ReadError::InvalidTaskIdentifier { .. } => codes::session::INVALID_TASK_IDENTIFIER,
            ReadError::DocumentNotFound { .. } => codes::session::DOCUMENT_NOT_FOUND,
            ReadError::DocumentUnreadable { .. } => codes::session::DOCUMENT_UNREADABLE,
            ReadError::DocumentMalformed { .. } => codes::session::DOCUMENT_MALFORMED,
            ReadError::ModeMismatch { .. } => codes::session::MODE_MISMATCH,
            ReadError::EmptyEventList { .. } => codes::session::EMPTY_EVENT_LIST,
        }
    }

    pub fn category(&self) -> &'static str {
        codes::get_category(self.error_code().as_str())
    }

    pub fn is_recoverable(&self) -> bool {
        codes::is_recoverable(self.error_code().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ReadError::InvalidTaskIdentifier { task: 9 }.error_code().as_str(),
            "S001"
        );
        let mismatch = ReadError::ModeMismatch {
            expected: SessionMode::Star,
            found: "0".to_string(),
        };
        assert_eq!(mismatch.error_code().as_str(), "S005");
        assert_eq!(mismatch.category(), "SessionRead");
        assert!(mismatch.to_string().contains("active mode is star"));
    }
}
