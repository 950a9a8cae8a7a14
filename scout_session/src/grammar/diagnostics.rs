//! Recoverable problems found while reading event attributes
//!
//! A diagnostic never stops a parse. Each one is logged when recorded and also
//! kept so callers can inspect what was defaulted or dropped.

use crate::log_warning;
use crate::logging::{codes, Code};
use crate::values::ValueError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// Recognized field with an invalid value
    FieldValidation,
    /// Field name the grammar does not know
    UnknownField,
    /// Event left out of the session
    EventDropped,
    /// Star object left out of its trial
    ObjectDropped,
}

impl DiagnosticKind {
    pub fn code(&self) -> Code {
        match self {
            DiagnosticKind::FieldValidation => codes::validation::FIELD_VALIDATION,
            DiagnosticKind::UnknownField => codes::validation::UNKNOWN_FIELD,
            DiagnosticKind::EventDropped => codes::validation::EVENT_DROPPED,
            DiagnosticKind::ObjectDropped => codes::validation::OBJECT_DROPPED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based trial ordinal
    pub trial: usize,
    /// 1-based object ordinal inside a star trial
    pub object: Option<usize>,
    pub field: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.object {
            Some(object) => write!(
                f,
                "trial {} object {}: {}: {}",
                self.trial, object, self.field, self.message
            ),
            None => write!(f, "trial {}: {}: {}", self.trial, self.field, self.message),
        }
    }
}

/// Location of the element being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub trial: usize,
    pub object: Option<usize>,
}

impl Position {
    pub fn trial(trial: usize) -> Self {
        Self {
            trial,
            object: None,
        }
    }

    pub fn object(trial: usize, object: usize) -> Self {
        Self {
            trial,
            object: Some(object),
        }
    }
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field_validation(
        &mut self,
        at: Position,
        field: &str,
        error: &ValueError,
        expected: &str,
        fallback: Option<&str>,
    ) {
        let message = match fallback {
            Some(fallback) => format!("{}; expected {}; using {}", error, expected, fallback),
            None => format!("{}; expected {}", error, expected),
        };
        self.record(DiagnosticKind::FieldValidation, at, field, message);
    }

    /// Valid value rejected by a rule spanning several values
    pub fn constraint(&mut self, at: Position, field: &str, message: &str) {
        self.record(DiagnosticKind::FieldValidation, at, field, message.to_string());
    }

    pub fn unknown_field(&mut self, at: Position, field: &str) {
        self.record(
            DiagnosticKind::UnknownField,
            at,
            field,
            "unrecognized field ignored".to_string(),
        );
    }

    pub fn event_dropped(&mut self, at: Position, field: &str, reason: &str) {
        self.record(DiagnosticKind::EventDropped, at, field, reason.to_string());
    }

    pub fn object_dropped(&mut self, at: Position, reason: &str) {
        self.record(DiagnosticKind::ObjectDropped, at, "event", reason.to_string());
    }

    fn record(&mut self, kind: DiagnosticKind, at: Position, field: &str, message: String) {
        let diagnostic = Diagnostic {
            kind,
            trial: at.trial,
            object: at.object,
            field: field.to_string(),
            message,
        };

        log_warning!(kind.code(), &diagnostic.to_string(),
            "trial" => diagnostic.trial,
            "field" => &diagnostic.field
        );

        self.items.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_keep_location_and_kind() {
        let mut diagnostics = Diagnostics::new();
        let error = ValueError::NotANumber {
            raw: "slow".to_string(),
        };

        diagnostics.field_validation(Position::trial(2), "delay", &error, "0.1 or 3", Some("0.1"));
        diagnostics.unknown_field(Position::object(1, 4), "colour");

        let items = diagnostics.into_vec();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].kind, DiagnosticKind::FieldValidation);
        assert_eq!(items[0].trial, 2);
        assert!(items[0].message.contains("using 0.1"));
        assert_eq!(items[1].object, Some(4));
        assert_eq!(
            items[1].to_string(),
            "trial 1 object 4: colour: unrecognized field ignored"
        );
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(DiagnosticKind::FieldValidation.code().as_str(), "V001");
        assert_eq!(DiagnosticKind::ObjectDropped.code().as_str(), "V004");
    }
}
