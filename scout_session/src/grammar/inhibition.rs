use super::diagnostics::{Diagnostics, Position};
use super::numbered_events;
use crate::config::constants::inhibition::{ALLOWED_COLORS, ALLOWED_SIDES};
use crate::document::Element;
use crate::types::{DotColor, InhibitionEvent, Side};
use crate::values;

pub fn parse_inhibition_events(
    events: &Element,
    diagnostics: &mut Diagnostics,
) -> Vec<InhibitionEvent> {
    numbered_events(events)
        .map(|(trial, element)| parse_inhibition_event(element, trial, diagnostics))
        .collect()
}

pub fn parse_inhibition_event(
    element: &Element,
    trial: usize,
    diagnostics: &mut Diagnostics,
) -> InhibitionEvent {
    let at = Position::trial(trial);
    let mut side = Side::Left;
    let mut dot_color = DotColor::Yellow;

    for (key, value) in &element.attributes {
        match key.to_lowercase().as_str() {
            "side" => {
                side = match values::enum_char(value, &ALLOWED_SIDES) {
                    Ok(c) => Side::from_char(c).unwrap_or_default(),
                    Err(error) => {
                        diagnostics.field_validation(at, key, &error, "l or r", Some("l"));
                        Side::Left
                    }
                }
            }
            "color" => {
                dot_color = match values::enum_str(value, &ALLOWED_COLORS) {
                    Ok(name) => DotColor::from_name(name).unwrap_or_default(),
                    Err(error) => {
                        diagnostics.field_validation(
                            at,
                            key,
                            &error,
                            "yellow or purple",
                            Some("yellow"),
                        );
                        DotColor::Yellow
                    }
                }
            }
            _ => diagnostics.unknown_field(at, key),
        }
    }

    InhibitionEvent::new(side, dot_color)
}
