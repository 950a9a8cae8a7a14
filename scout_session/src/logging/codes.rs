//! Error, warning and success codes with their classification metadata
//!
//! Single source of truth for every code the session exchange emits. Each code
//! carries a category, a severity and whether it is recoverable.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for error, warning and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    pub const fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const CONFIG_LOAD_FAILURE: Code = Code::new("ERR003");
}

/// Terminal session read failures. All of them send the caller to a random session.
pub mod session {
    use super::Code;

    pub const INVALID_TASK_IDENTIFIER: Code = Code::new("S001");
    pub const DOCUMENT_NOT_FOUND: Code = Code::new("S002");
    pub const DOCUMENT_UNREADABLE: Code = Code::new("S003");
    pub const DOCUMENT_MALFORMED: Code = Code::new("S004");
    pub const MODE_MISMATCH: Code = Code::new("S005");
    pub const EMPTY_EVENT_LIST: Code = Code::new("S006");
}

/// Recoverable field-level findings raised while applying an event grammar
pub mod validation {
    use super::Code;

    pub const FIELD_VALIDATION: Code = Code::new("V001");
    pub const UNKNOWN_FIELD: Code = Code::new("V002");
    pub const EVENT_DROPPED: Code = Code::new("V003");
    pub const OBJECT_DROPPED: Code = Code::new("V004");
}

/// Result document, folder and exit marker codes
pub mod output {
    use super::Code;

    pub const WRITE_FAILED: Code = Code::new("O001");
    pub const FOLDER_CREATION_FAILED: Code = Code::new("O002");
    pub const EXIT_MARKER_FAILED: Code = Code::new("O003");
    pub const EVENT_MODE_MISMATCH: Code = Code::new("O004");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const SESSION_READ_COMPLETE: Code = Code::new("I010");
    pub const BUNDLED_FALLBACK_LOADED: Code = Code::new("I011");
    pub const SESSION_WRITE_COMPLETE: Code = Code::new("I020");
    pub const FOLDERS_READY: Code = Code::new("I021");
    pub const EXIT_MARKER_WRITTEN: Code = Code::new("I022");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let entries = [
            // System
            CodeMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal error",
                "File a bug report with the log output",
            ),
            CodeMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Logging or configuration could not be initialized",
                "Check environment variables and restart",
            ),
            CodeMetadata::new(
                "ERR003",
                "System",
                Severity::High,
                true,
                "Runtime configuration file could not be loaded",
                "Check the TOML file path and syntax; defaults are used meanwhile",
            ),
            // Session read
            CodeMetadata::new(
                "S001",
                "SessionRead",
                Severity::High,
                true,
                "Task number outside the valid range",
                "Set a task number between 1 and 6; a random session is used meanwhile",
            ),
            CodeMetadata::new(
                "S002",
                "SessionRead",
                Severity::High,
                true,
                "Session document missing from both the session folder and the bundle",
                "Copy the task file into session_files; a random session is used meanwhile",
            ),
            CodeMetadata::new(
                "S003",
                "SessionRead",
                Severity::High,
                true,
                "Session document exists but could not be read",
                "Check file permissions on session_files",
            ),
            CodeMetadata::new(
                "S004",
                "SessionRead",
                Severity::High,
                true,
                "Session document is not well-formed",
                "Fix the XML structure and the session root element",
            ),
            CodeMetadata::new(
                "S005",
                "SessionRead",
                Severity::High,
                true,
                "Session document was written for a different game mode",
                "Use a task file whose session type matches the running game",
            ),
            CodeMetadata::new(
                "S006",
                "SessionRead",
                Severity::Medium,
                true,
                "Session document contains no usable events",
                "Add event elements to the events section",
            ),
            // Validation
            CodeMetadata::new(
                "V001",
                "Validation",
                Severity::Low,
                true,
                "Attribute value failed validation and was defaulted or skipped",
                "Correct the attribute value in the session document",
            ),
            CodeMetadata::new(
                "V002",
                "Validation",
                Severity::Low,
                true,
                "Unknown attribute ignored",
                "Remove or rename the attribute",
            ),
            CodeMetadata::new(
                "V003",
                "Validation",
                Severity::Medium,
                true,
                "Event dropped because no valid value remained for a required field",
                "Supply at least one valid value for the field",
            ),
            CodeMetadata::new(
                "V004",
                "Validation",
                Severity::Low,
                true,
                "Star object dropped because its type or position was invalid",
                "Correct the object's type and position",
            ),
            // Output
            CodeMetadata::new(
                "O001",
                "Output",
                Severity::High,
                false,
                "Result document could not be rendered or saved",
                "Check free space and permissions on log_files",
            ),
            CodeMetadata::new(
                "O002",
                "Output",
                Severity::High,
                false,
                "Dashboard folder could not be created",
                "Check permissions on the data root",
            ),
            CodeMetadata::new(
                "O003",
                "Output",
                Severity::Medium,
                true,
                "Exit marker could not be written",
                "Check permissions on trace_files",
            ),
            CodeMetadata::new(
                "O004",
                "Output",
                Severity::Low,
                true,
                "Event of another game mode skipped while writing results",
                "Only hand events of the running mode to the writer",
            ),
            // Success
            CodeMetadata::new(
                "I001",
                "System",
                Severity::Low,
                true,
                "Logging initialized",
                "Continue",
            ),
            CodeMetadata::new(
                "I010",
                "SessionRead",
                Severity::Low,
                true,
                "Session document read",
                "Continue to trial execution",
            ),
            CodeMetadata::new(
                "I011",
                "SessionRead",
                Severity::Low,
                true,
                "Bundled fallback session loaded",
                "Continue to trial execution",
            ),
            CodeMetadata::new(
                "I020",
                "Output",
                Severity::Low,
                true,
                "Result document written",
                "Continue",
            ),
            CodeMetadata::new(
                "I021",
                "Output",
                Severity::Low,
                true,
                "Dashboard folders ready",
                "Continue",
            ),
            CodeMetadata::new(
                "I022",
                "Output",
                Severity::Low,
                true,
                "Exit marker written",
                "Continue",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if the condition behind a code is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for a code
pub fn get_action(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_metadata(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
