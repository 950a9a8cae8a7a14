use super::format;
use crate::aggregation::{StarAggregate, StarTrialMetrics};
use crate::document::Element;
use crate::types::{Response, StarEvent};

pub fn trial(event: &StarEvent) -> Element {
    let metrics = StarTrialMetrics::from_event(event);

    Element::new("trial")
        .with_attribute("EndCondition", event.end_condition.as_str())
        .with_attribute("Duration", format::float(event.duration))
        .with_attribute("NumGoodTouches", event.num_good_touches.to_string())
        .with_attribute("NumBadTouches", event.num_bad_touches.to_string())
        .with_attribute("NumRepeats", event.repeat_touches.to_string())
        .with_attribute("AvgTimePerTarget", format::float(metrics.avg_time_per_target))
        .with_attribute("StandardDeviation", format::float(metrics.std_dev))
        .with_attribute("AvgTimePerAction", format::float(metrics.avg_time_per_action))
        .with_attribute("TargetsPerArea", format::area_list(&metrics.targets_per_area))
        .with_attribute("AvgLocation", format::float(metrics.avg_location))
        .with_attribute("AvgFirstTen", format::float(metrics.avg_first_ten))
        .with_attribute("AvgLastTen", format::float(metrics.avg_last_ten))
        .with_attribute("AvgDistancePerTarget", format::float(metrics.avg_distance))
        .with_children(event.responses.iter().map(response))
}

fn response(response: &Response) -> Element {
    let mut element = Element::new("response");
    if let Some(kind) = response.kind {
        element = element.with_attribute("ResponseType", kind.as_str());
    }
    element
        .with_attribute("ResponseTime", format::float(response.response_time))
        .with_attribute("TouchPosition", format::point(response.touch_location))
}

/// Session means go on the `trials` element itself
pub fn with_aggregate(trials: Element, aggregate: &StarAggregate) -> Element {
    trials
        .with_attribute("AvgGoodTouches", format::float(aggregate.avg_good_touches))
        .with_attribute("AvgBadTouches", format::float(aggregate.avg_bad_touches))
        .with_attribute("AvgRepeats", format::float(aggregate.avg_repeats))
        .with_attribute("AvgTimePerTarget", format::float(aggregate.avg_time_per_target))
        .with_attribute("AvgStandardDeviation", format::float(aggregate.avg_std_dev))
        .with_attribute("AvgTimePerAction", format::float(aggregate.avg_time_per_action))
        .with_attribute(
            "AvgTargetsPerArea",
            format::area_list(&aggregate.avg_targets_per_area),
        )
        .with_attribute("AvgLocation", format::float(aggregate.avg_location))
        .with_attribute("AvgFirstTen", format::float(aggregate.avg_first_ten))
        .with_attribute("AvgLastTen", format::float(aggregate.avg_last_ten))
        .with_attribute("AvgDistancePerTarget", format::float(aggregate.avg_distance))
}
