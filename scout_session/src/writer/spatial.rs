use super::format;
use super::layout::ScreenGeometry;
use crate::config::constants::spatial::MAX_DOTS_PER_EVENT;
use crate::document::Element;
use crate::types::{Response, SpatialEvent};

pub fn layout(geometry: &ScreenGeometry) -> Element {
    Element::new("dots").with_children(geometry.spatial_dot_centers().iter().enumerate().map(
        |(i, center)| {
            Element::new("Dot")
                .with_attribute("Number", (i + 1).to_string())
                .with_attribute("Center", format::point(*center))
        },
    ))
}

/// `Dot1` is always present, `Dot2` and `Dot3` only when the event has them
pub fn trial(event: &SpatialEvent) -> Element {
    let first = event.dots.first().map(|d| d.to_string()).unwrap_or_default();
    let mut trial = Element::new("trial").with_attribute("Dot1", first);
    for (i, dot) in event.dots.iter().enumerate().take(MAX_DOTS_PER_EVENT).skip(1) {
        trial = trial.with_attribute(&format!("Dot{}", i + 1), dot.to_string());
    }

    trial
        .with_attribute("Delay", format::float(event.delay))
        .with_attribute("TimedOut", format::boolean(event.timed_out))
        .with_children(event.bad_responses.iter().map(|r| response("falseresponse", r)))
        .with_children(event.responses.iter().map(|r| response("response", r)))
}

fn response(name: &str, response: &Response) -> Element {
    Element::new(name)
        .with_attribute("DotPressed", response.slot_pressed.to_string())
        .with_attribute("ResponseTime", format::float(response.response_time))
        .with_attribute("TouchPosition", format::point(response.touch_location))
        .with_attribute(
            "DistanceFromCenter",
            format::float(response.distance_from_center),
        )
}
