use super::diagnostics::{Diagnostics, Position};
use super::numbered_events;
use crate::config::constants::spatial::{
    ALLOWED_DELAYS, MAX_DOT, MAX_DOTS_PER_EVENT, MIN_DOT, SHORT_DELAY,
};
use crate::document::Element;
use crate::types::SpatialEvent;
use crate::values;

const DOTS_EXPECTED: &str = "';'-separated integers in [1, 9]";
const DELAY_EXPECTED: &str = "0.1 or 3";

pub fn parse_spatial_events(events: &Element, diagnostics: &mut Diagnostics) -> Vec<SpatialEvent> {
    numbered_events(events)
        .filter_map(|(trial, element)| parse_spatial_event(element, trial, diagnostics))
        .collect()
}

/// `None` when no valid dot survives
pub fn parse_spatial_event(
    element: &Element,
    trial: usize,
    diagnostics: &mut Diagnostics,
) -> Option<SpatialEvent> {
    let at = Position::trial(trial);
    let mut dots: Vec<u8> = Vec::new();
    let mut delay = SHORT_DELAY;

    for (key, value) in &element.attributes {
        match key.to_lowercase().as_str() {
            "dots" => {
                for entry in value.split(';') {
                    match values::int_in_range(entry, MIN_DOT, MAX_DOT) {
                        Ok(_) if dots.len() >= MAX_DOTS_PER_EVENT => {
                            diagnostics.constraint(
                                at,
                                key,
                                &format!("dot '{}' ignored; at most 3 dots per event", entry.trim()),
                            );
                        }
                        Ok(dot) => dots.push(dot as u8),
                        Err(error) => {
                            diagnostics.field_validation(at, key, &error, DOTS_EXPECTED, None)
                        }
                    }
                }
            }
            "delay" => match values::float_in_set(value, &ALLOWED_DELAYS) {
                Ok(parsed) => delay = parsed,
                Err(error) => {
                    delay = SHORT_DELAY;
                    diagnostics.field_validation(at, key, &error, DELAY_EXPECTED, Some("0.1"));
                }
            },
            _ => diagnostics.unknown_field(at, key),
        }
    }

    if dots.is_empty() {
        diagnostics.event_dropped(at, "dots", "event has no valid dots");
        return None;
    }

    Some(SpatialEvent::new(dots, delay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_document;
    use crate::grammar::DiagnosticKind;

    fn parse(xml: &str) -> (Vec<SpatialEvent>, Vec<crate::grammar::Diagnostic>) {
        let root = parse_document(xml).unwrap();
        let mut diagnostics = Diagnostics::new();
        let events = parse_spatial_events(&root, &mut diagnostics);
        (events, diagnostics.into_vec())
    }

    #[test]
    fn test_valid_event() {
        let (events, diagnostics) = parse(r#"<events><event dots="3;9;1" delay=".1"/></events>"#);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].dots, vec![3, 9, 1]);
        assert_eq!(events[0].delay, 0.1);
        assert!(events[0].responses.is_empty());
        assert!(events[0].bad_responses.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_out_of_range_dot_is_skipped() {
        let (events, diagnostics) = parse(r#"<events><event dots="3;10;1" delay="3"/></events>"#);

        assert_eq!(events[0].dots, vec![3, 1]);
        assert_eq!(events[0].delay, 3.0);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::FieldValidation);
        assert_eq!(diagnostics[0].field, "dots");
        assert_eq!(diagnostics[0].trial, 1);
    }

    #[test]
    fn test_invalid_delay_resets_to_short() {
        let (events, diagnostics) = parse(
            r#"<events><event dots="1" delay="3"/><event dots="2" delay="0.5"/></events>"#,
        );

        assert_eq!(events[1].delay, 0.1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].field, "delay");
        assert_eq!(diagnostics[0].trial, 2);
    }

    #[test]
    fn test_names_are_case_insensitive_and_unknowns_reported() {
        let (events, diagnostics) =
            parse(r#"<events><event DOTS="5" Delay="3" colour="red"/></events>"#);

        assert_eq!(events[0].dots, vec![5]);
        assert_eq!(events[0].delay, 3.0);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::UnknownField);
        assert_eq!(diagnostics[0].field, "colour");
    }

    #[test]
    fn test_extra_dots_and_empty_events() {
        let (events, diagnostics) = parse(
            r#"<events>
                 <event dots="1;2;3;4"/>
                 <event dots="0;12"/>
                 <note/>
                 <event dots="7"/>
               </events>"#,
        );

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].dots, vec![1, 2, 3]);
        assert_eq!(events[1].dots, vec![7]);

        let dropped: Vec<_> = diagnostics
            .iter()
            .filter(|d| d.kind == DiagnosticKind::EventDropped)
            .map(|d| d.trial)
            .collect();
        assert_eq!(dropped, vec![2]);
        assert!(diagnostics
            .iter()
            .any(|d| d.trial == 1 && d.message.contains("at most 3 dots")));
    }
}
