//! Event grammars for the three session modes
//!
//! Each grammar walks the attributes of one event element in source order.
//! Names match case-insensitively. Invalid values are defaulted or cause the
//! element to be dropped, and every such decision is recorded as a
//! `Diagnostic`.

pub mod diagnostics;
pub mod inhibition;
pub mod spatial;
pub mod star;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Position};

use crate::document::Element;
use crate::types::{SessionMode, TrialEvent};
use serde::{Deserialize, Serialize};

/// Treatment of star object `type` codes outside 0..=3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarTypePolicy {
    /// Keep the object as `Unrecognized`; it is not counted under any kind
    #[default]
    Permissive,
    /// Drop the object with a validation diagnostic
    Strict,
}

/// Events read from one `events` element
#[derive(Debug, Default)]
pub struct ParsedEvents {
    pub events: Vec<TrialEvent>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Dispatch the children of `events` to the grammar for `mode`
pub fn parse_events(mode: SessionMode, events: &Element, policy: StarTypePolicy) -> ParsedEvents {
    let mut diagnostics = Diagnostics::new();

    let parsed: Vec<TrialEvent> = match mode {
        SessionMode::Spatial => spatial::parse_spatial_events(events, &mut diagnostics)
            .into_iter()
            .map(TrialEvent::Spatial)
            .collect(),
        SessionMode::Inhibition => inhibition::parse_inhibition_events(events, &mut diagnostics)
            .into_iter()
            .map(TrialEvent::Inhibition)
            .collect(),
        SessionMode::Star => star::parse_star_trials(events, policy, &mut diagnostics)
            .into_iter()
            .map(TrialEvent::Star)
            .collect(),
    };

    ParsedEvents {
        events: parsed,
        diagnostics: diagnostics.into_vec(),
    }
}

/// Event elements under `parent` with their 1-based ordinal
pub(crate) fn numbered_events(parent: &Element) -> impl Iterator<Item = (usize, &Element)> {
    parent
        .children_named(crate::config::constants::session::EVENT_ELEMENT)
        .enumerate()
        .map(|(i, element)| (i + 1, element))
}
