use super::format;
use super::layout::ScreenGeometry;
use crate::document::Element;
use crate::types::{DotColor, InhibitionEvent, Side};

pub fn layout(geometry: &ScreenGeometry) -> Element {
    Element::new("dots")
        .with_child(
            Element::new("Left")
                .with_attribute("Center", format::point(geometry.inhibition_left_center())),
        )
        .with_child(
            Element::new("Right")
                .with_attribute("Center", format::point(geometry.inhibition_right_center())),
        )
}

/// Slot 1 is the right dot, anything else counts as left
pub fn pressed_side(slot_pressed: i32) -> Side {
    if slot_pressed == 1 {
        Side::Right
    } else {
        Side::Left
    }
}

/// A response exists and landed on the side the dot color asks for
pub fn responded_correctly(event: &InhibitionEvent) -> bool {
    event.player_response.as_ref().is_some_and(|response| {
        pressed_side(response.slot_pressed) == event.dot_color.target_side(event.side)
    })
}

pub fn trial(event: &InhibitionEvent) -> Element {
    let target = match event.dot_color {
        DotColor::Yellow => "same",
        DotColor::Purple => "opposite",
    };

    let mut trial = Element::new("trial")
        .with_attribute("TargetSide", target)
        .with_attribute("TimedOut", format::boolean(event.timed_out));

    if let Some(response) = &event.player_response {
        trial = trial
            .with_attribute("ResponseTime", format::float(response.response_time))
            .with_attribute("TouchPosition", format::point(response.touch_location))
            .with_attribute(
                "DistanceFromCenter",
                format::float(response.distance_from_center),
            )
            .with_attribute("PressedSide", pressed_side(response.slot_pressed).as_str());
    }

    let correct = if responded_correctly(event) { "1" } else { "0" };
    trial.with_attribute("Correct", correct)
}
