use super::diagnostics::{Diagnostics, Position};
use super::{numbered_events, StarTypePolicy};
use crate::config::constants::star::{NO_TYPE_CODE, X_MAX, X_MIN, Y_MAX, Y_MIN};
use crate::document::Element;
use crate::log_debug;
use crate::types::{StarEvent, StarObject, StarObjectKind};
use crate::values;

/// Every child of `events` is one trial; its `event` children are the objects
pub fn parse_star_trials(
    events: &Element,
    policy: StarTypePolicy,
    diagnostics: &mut Diagnostics,
) -> Vec<StarEvent> {
    events
        .children
        .iter()
        .enumerate()
        .map(|(i, trial)| parse_star_trial(trial, i + 1, policy, diagnostics))
        .collect()
}

pub fn parse_star_trial(
    trial: &Element,
    trial_number: usize,
    policy: StarTypePolicy,
    diagnostics: &mut Diagnostics,
) -> StarEvent {
    let mut event = StarEvent::default();

    for (object_number, element) in numbered_events(trial) {
        let at = Position::object(trial_number, object_number);
        if let Some(object) = parse_star_object(element, at, policy, diagnostics) {
            event.add_object(object);
        }
    }

    event
}

/// `None` unless both the kind and the position are valid
pub fn parse_star_object(
    element: &Element,
    at: Position,
    policy: StarTypePolicy,
    diagnostics: &mut Diagnostics,
) -> Option<StarObject> {
    let mut kind: Option<StarObjectKind> = None;
    let mut x: Option<f32> = None;
    let mut y: Option<f32> = None;
    let mut rotation = 0.0;

    for (key, value) in &element.attributes {
        match key.to_lowercase().as_str() {
            "type" => kind = parse_kind(value, key, at, policy, diagnostics),
            "position" => {
                let (px, py) = parse_position(value, key, at, diagnostics);
                x = px;
                y = py;
            }
            "rotation" => match values::float(value) {
                Ok(parsed) => rotation = parsed,
                Err(error) => {
                    rotation = 0.0;
                    diagnostics.field_validation(at, key, &error, "a number", Some("0"));
                }
            },
            _ => diagnostics.unknown_field(at, key),
        }
    }

    match (kind, x, y) {
        (Some(kind), Some(x), Some(y)) => Some(StarObject {
            kind,
            position: (x, y),
            rotation,
        }),
        (None, _, _) => {
            diagnostics.object_dropped(at, "object has no valid type");
            None
        }
        _ => {
            diagnostics.object_dropped(at, "object has no valid position");
            None
        }
    }
}

fn parse_kind(
    raw: &str,
    field: &str,
    at: Position,
    policy: StarTypePolicy,
    diagnostics: &mut Diagnostics,
) -> Option<StarObjectKind> {
    let code = match values::int(raw) {
        Ok(code) => code,
        Err(error) => {
            diagnostics.field_validation(at, field, &error, "an integer object type", None);
            return None;
        }
    };

    if code == NO_TYPE_CODE {
        diagnostics.constraint(at, field, "type -1 marks an object with no type");
        return None;
    }

    let kind = StarObjectKind::from_code(code);
    if kind.is_recognized() {
        return Some(kind);
    }

    match policy {
        StarTypePolicy::Permissive => {
            log_debug!("Keeping star object with unrecognized type",
                "trial" => at.trial,
                "type" => code
            );
            Some(kind)
        }
        StarTypePolicy::Strict => {
            let error = values::int_in_range(raw, 0, 3)
                .err()
                .unwrap_or(values::ValueError::NotANumber {
                    raw: raw.to_string(),
                });
            diagnostics.field_validation(at, field, &error, "an object type in [0, 3]", None);
            None
        }
    }
}

/// `x,y`, each coordinate checked against its own bound
fn parse_position(
    raw: &str,
    field: &str,
    at: Position,
    diagnostics: &mut Diagnostics,
) -> (Option<f32>, Option<f32>) {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 2 {
        diagnostics.constraint(
            at,
            field,
            &format!("'{}' is not an 'x,y' pair", raw.trim()),
        );
        return (None, None);
    }

    let x = match values::float_in_range(parts[0], X_MIN, X_MAX) {
        Ok(x) => Some(x),
        Err(error) => {
            diagnostics.field_validation(at, field, &error, "x in [-170, 170]", None);
            None
        }
    };
    let y = match values::float_in_range(parts[1], Y_MIN, Y_MAX) {
        Ok(y) => Some(y),
        Err(error) => {
            diagnostics.field_validation(at, field, &error, "y in [-75, 90]", None);
            None
        }
    };

    (x, y)
}
