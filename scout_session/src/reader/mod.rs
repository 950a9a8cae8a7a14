//! Session document reader
//!
//! Validates the task number, finds the document (primary folder first, then
//! the bundled copy), checks the mode tag and hands the events to the grammar
//! for the active mode.

pub mod error;
pub mod source;

pub use error::ReadError;
pub use source::{FileSessionSource, InMemoryPreferences, PreferenceStore, SessionSource};

use crate::config::constants::session::{DOCUMENT_EXTENSION, EVENTS_ELEMENT, ROOT_ELEMENT};
use crate::document::parse_document;
use crate::grammar::{parse_events, Diagnostic, StarTypePolicy};
use crate::logging::codes;
use crate::types::{SessionId, SessionMode, TrialEvent};
use crate::{log_error, log_info, log_success};
use std::path::Path;

/// A successfully read session
#[derive(Debug, Clone)]
pub struct SessionRead {
    pub session_id: SessionId,
    pub mode: SessionMode,
    pub events: Vec<TrialEvent>,
    pub diagnostics: Vec<Diagnostic>,
    /// Whether the bundled copy was used
    pub from_bundled: bool,
}

/// Read the session document for `task` in `mode`
pub fn read_session(
    task: i32,
    mode: SessionMode,
    source: &dyn SessionSource,
    policy: StarTypePolicy,
) -> Result<SessionRead, ReadError> {
    let result = read_session_inner(task, mode, source, policy);

    match &result {
        Ok(read) => log_success!(
            codes::success::SESSION_READ_COMPLETE,
            "Session read",
            "session" => read.session_id,
            "events" => read.events.len(),
            "diagnostics" => read.diagnostics.len()
        ),
        Err(error) => log_error!(error.error_code(), &error.to_string(), "task" => task),
    }

    result
}

fn read_session_inner(
    task: i32,
    mode: SessionMode,
    source: &dyn SessionSource,
    policy: StarTypePolicy,
) -> Result<SessionRead, ReadError> {
    let session_id =
        SessionId::from_task_number(task).ok_or(ReadError::InvalidTaskIdentifier { task })?;
    let name = session_id.name();
    let file_name = format!("{}.{}", name, DOCUMENT_EXTENSION);

    let (text, from_bundled) = load_document(source, &name, &file_name)?;

    crate::logging::with_document_context(Path::new(&file_name), || {
        let root = parse_document(&text).map_err(|e| ReadError::malformed(&file_name, e))?;

        if !root.is_named(ROOT_ELEMENT) {
            return Err(ReadError::malformed(
                &file_name,
                format!("root element is '{}', expected '{}'", root.name, ROOT_ELEMENT),
            ));
        }

        let (_, tag) = root
            .first_attribute()
            .ok_or_else(|| ReadError::malformed(&file_name, "session element has no mode tag"))?;

        if SessionMode::from_code(tag) != Some(mode) {
            return Err(ReadError::ModeMismatch {
                expected: mode,
                found: tag.to_string(),
            });
        }

        let events = root
            .child(EVENTS_ELEMENT)
            .ok_or_else(|| ReadError::EmptyEventList {
                name: file_name.clone(),
            })?;

        let parsed = parse_events(mode, events, policy);
        if parsed.events.is_empty() {
            return Err(ReadError::EmptyEventList {
                name: file_name.clone(),
            });
        }

        Ok(SessionRead {
            session_id,
            mode,
            events: parsed.events,
            diagnostics: parsed.diagnostics,
            from_bundled,
        })
    })
}

/// Primary folder first, then the bundled copy
fn load_document(
    source: &dyn SessionSource,
    name: &str,
    file_name: &str,
) -> Result<(String, bool), ReadError> {
    match source.load_primary(file_name) {
        Ok(Some(text)) => Ok((text, false)),
        Ok(None) => {
            log_info!("Session document not in session folder, trying bundled copy",
                "document" => file_name
            );
            let text = source
                .load_bundled(name)
                .map_err(|error| ReadError::DocumentUnreadable {
                    name: file_name.to_string(),
                    message: error.to_string(),
                })?
                .ok_or_else(|| ReadError::DocumentNotFound {
                    name: file_name.to_string(),
                })?;
            log_success!(
                codes::success::BUNDLED_FALLBACK_LOADED,
                "Loaded bundled session document",
                "document" => name
            );
            Ok((text, true))
        }
        Err(error) => Err(ReadError::DocumentUnreadable {
            name: file_name.to_string(),
            message: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DotColor, Side};
    use assert_matches::assert_matches;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::io;

    /// Source over fixed documents that counts lookups
    #[derive(Default)]
    struct FixedSource {
        primary: HashMap<String, String>,
        bundled: HashMap<String, String>,
        unreadable: bool,
        bundled_unreadable: bool,
        lookups: Cell<usize>,
    }

    impl FixedSource {
        fn primary(file_name: &str, text: &str) -> Self {
            let mut source = Self::default();
            source.primary.insert(file_name.to_string(), text.to_string());
            source
        }
    }

    impl SessionSource for FixedSource {
        fn load_primary(&self, file_name: &str) -> io::Result<Option<String>> {
            self.lookups.set(self.lookups.get() + 1);
            if self.unreadable {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            Ok(self.primary.get(file_name).cloned())
        }

        fn load_bundled(&self, name: &str) -> io::Result<Option<String>> {
            self.lookups.set(self.lookups.get() + 1);
            if self.bundled_unreadable {
                return Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8"));
            }
            Ok(self.bundled.get(name).cloned())
        }
    }

    const SPATIAL: &str = r#"<session type="0"><events><event dots="3;9;1" delay=".1"/></events></session>"#;

    #[test]
    fn test_invalid_task_touches_no_source() {
        let source = FixedSource::primary("task1.xml", SPATIAL);

        for task in [0, 7, -3, 100] {
            let result = read_session(task, SessionMode::Spatial, &source, StarTypePolicy::default());
            assert_matches!(result, Err(ReadError::InvalidTaskIdentifier { task: t }) if t == task);
        }
        assert_eq!(source.lookups.get(), 0);
    }

    #[test]
    fn test_reads_primary_document() {
        let source = FixedSource::primary("task1.xml", SPATIAL);
        let read = read_session(1, SessionMode::Spatial, &source, StarTypePolicy::default()).unwrap();

        assert_eq!(read.session_id, SessionId::Task(1));
        assert!(!read.from_bundled);
        assert_eq!(read.events.len(), 1);
        assert_matches!(&read.events[0], TrialEvent::Spatial(e) if e.dots == vec![3, 9, 1]);
        assert!(read.diagnostics.is_empty());
    }

    #[test]
    fn test_falls_back_to_bundled() {
        let mut source = FixedSource::default();
        source.bundled.insert(
            "task4".to_string(),
            r#"<session type="1"><events><event side="r" color="purple"/></events></session>"#
                .to_string(),
        );

        let read =
            read_session(4, SessionMode::Inhibition, &source, StarTypePolicy::default()).unwrap();
        assert!(read.from_bundled);
        assert_matches!(
            &read.events[0],
            TrialEvent::Inhibition(e) if e.side == Side::Right && e.dot_color == DotColor::Purple
        );
    }

    #[test]
    fn test_not_found_and_unreadable() {
        let source = FixedSource::default();
        assert_matches!(
            read_session(2, SessionMode::Spatial, &source, StarTypePolicy::default()),
            Err(ReadError::DocumentNotFound { .. })
        );

        let source = FixedSource {
            unreadable: true,
            ..Default::default()
        };
        assert_matches!(
            read_session(2, SessionMode::Spatial, &source, StarTypePolicy::default()),
            Err(ReadError::DocumentUnreadable { .. })
        );
    }

    #[test]
    fn test_unreadable_bundled_copy_is_not_reported_missing() {
        let source = FixedSource {
            bundled_unreadable: true,
            ..Default::default()
        };
        assert_matches!(
            read_session(3, SessionMode::Spatial, &source, StarTypePolicy::default()),
            Err(ReadError::DocumentUnreadable { name, .. }) if name == "task3.xml"
        );
        assert_eq!(source.lookups.get(), 2);
    }

    #[test]
    fn test_mode_mismatch() {
        let source = FixedSource::primary(
            "task1.xml",
            r#"<session type="1"><events><event side="l"/></events></session>"#,
        );

        assert_matches!(
            read_session(1, SessionMode::Spatial, &source, StarTypePolicy::default()),
            Err(ReadError::ModeMismatch { expected: SessionMode::Spatial, ref found }) if found == "1"
        );
    }

    #[test]
    fn test_malformed_documents() {
        for text in [
            "<session type=\"0\"><events>",
            "<session/>",
            "<trials type=\"0\"><events><event dots=\"1\"/></events></trials>",
            "not xml at all",
        ] {
            let source = FixedSource::primary("task3.xml", text);
            let result = read_session(3, SessionMode::Spatial, &source, StarTypePolicy::default());
            assert!(
                matches!(result, Err(ReadError::DocumentMalformed { .. })),
                "{:?} gave {:?}",
                text,
                result
            );
        }
    }

    #[test]
    fn test_empty_event_lists() {
        for text in [
            r#"<session type="0"><practice/></session>"#,
            r#"<session type="0"><events/></session>"#,
            r#"<session type="0"><events><event dots="0;10"/></events></session>"#,
        ] {
            let source = FixedSource::primary("task5.xml", text);
            assert_matches!(
                read_session(5, SessionMode::Spatial, &source, StarTypePolicy::default()),
                Err(ReadError::EmptyEventList { .. })
            );
        }
    }
}
