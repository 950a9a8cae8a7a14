//! Result document writer
//!
//! The whole document is built as an immutable element tree first and then
//! rendered once, so nothing reaches the disk unless every part was built.

pub mod format;
pub mod inhibition;
pub mod layout;
pub mod spatial;
pub mod star;

pub use layout::ScreenGeometry;

use crate::aggregation::StarAggregate;
use crate::config::constants::session::ROOT_ELEMENT;
use crate::document::{render_document, DocumentError, Element};
use crate::logging::codes;
use crate::types::{SessionMode, SessionRecord, TrialEvent};
use crate::{log_error, log_success, log_warning};
use std::fs;
use std::path::{Path, PathBuf};

/// Result document write errors
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error(transparent)]
    Render(#[from] DocumentError),

    #[error("Cannot write result document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    pub fn error_code(&self) -> crate::logging::Code {
        codes::output::WRITE_FAILED
    }
}

/// Build the result tree for `record`
pub fn build_session_document(record: &SessionRecord, geometry: &ScreenGeometry) -> Element {
    let mut session = Element::new(ROOT_ELEMENT);

    match record.mode {
        SessionMode::Spatial => {
            session = session.with_child(spatial::layout(geometry));
        }
        SessionMode::Inhibition => {
            session = session.with_child(inhibition::layout(geometry));
        }
        SessionMode::Star => {}
    }

    let practice = Element::new("practice").with_children(trial_elements(
        record.mode,
        &record.practice,
        "practice",
    ));
    let mut trials = Element::new("trials").with_children(trial_elements(
        record.mode,
        &record.trials,
        "trials",
    ));

    if record.mode == SessionMode::Star {
        let aggregate = StarAggregate::from_trials(record.trials.iter().filter_map(|t| match t {
            TrialEvent::Star(event) => Some(event),
            _ => None,
        }));
        trials = star::with_aggregate(trials, &aggregate);
    }

    session.with_child(practice).with_child(trials)
}

/// Render `record` and write it to `dir/file_name`
pub fn write_session(
    record: &SessionRecord,
    geometry: &ScreenGeometry,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf, WriteError> {
    let path = dir.join(file_name);
    let result = render_document(&build_session_document(record, geometry))
        .map_err(WriteError::from)
        .and_then(|text| {
            fs::write(&path, text).map_err(|source| WriteError::Io {
                path: path.display().to_string(),
                source,
            })
        });

    match result {
        Ok(()) => {
            log_success!(
                codes::success::SESSION_WRITE_COMPLETE,
                "Session results written",
                "path" => path.display(),
                "mode" => record.mode,
                "trials" => record.trials.len()
            );
            Ok(path)
        }
        Err(error) => {
            log_error!(error.error_code(), &error.to_string(), "path" => path.display());
            Err(error)
        }
    }
}

/// Elements for events of the record's mode. Others are skipped with a warning.
fn trial_elements(mode: SessionMode, events: &[TrialEvent], section: &str) -> Vec<Element> {
    events
        .iter()
        .enumerate()
        .filter_map(|(i, event)| match (mode, event) {
            (SessionMode::Spatial, TrialEvent::Spatial(e)) => Some(spatial::trial(e)),
            (SessionMode::Inhibition, TrialEvent::Inhibition(e)) => Some(inhibition::trial(e)),
            (SessionMode::Star, TrialEvent::Star(e)) => Some(star::trial(e)),
            (_, other) => {
                log_warning!(
                    codes::output::EVENT_MODE_MISMATCH,
                    "Skipping event that does not match the session mode",
                    "section" => section,
                    "index" => i + 1,
                    "session_mode" => mode,
                    "event_mode" => other.mode()
                );
                None
            }
        })
        .collect()
}
