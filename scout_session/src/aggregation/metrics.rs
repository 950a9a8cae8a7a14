use crate::config::constants::star::{
    AREA_COLUMNS, AREA_COUNT, AREA_ROWS, RESPONSE_WINDOW, X_MAX, X_MIN, Y_MAX, Y_MIN,
};
use crate::types::{Response, StarEvent};
use serde::Serialize;

/// Derived statistics for one star trial
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StarTrialMetrics {
    pub avg_time_per_target: f32,
    /// Population standard deviation of the gaps between touches
    pub std_dev: f32,
    pub avg_time_per_action: f32,
    /// Good touches per field area, row-major with the top row first
    pub targets_per_area: [u32; AREA_COUNT],
    /// Mean distance of the trial's targets from the screen centre
    pub avg_location: f32,
    pub avg_first_ten: f32,
    pub avg_last_ten: f32,
    /// Mean `distance_from_center` of good touches
    pub avg_distance: f32,
}

impl StarTrialMetrics {
    pub fn from_event(event: &StarEvent) -> Self {
        let good: Vec<&Response> = event.responses.iter().filter(|r| r.is_good()).collect();

        let mut targets_per_area = [0u32; AREA_COUNT];
        for response in &good {
            targets_per_area[area_index(response.touch_location)] += 1;
        }

        let window = RESPONSE_WINDOW.min(event.responses.len());
        let first = &event.responses[..window];
        let last = &event.responses[event.responses.len() - window..];

        Self {
            avg_time_per_target: ratio(event.duration, u64::from(event.num_good_touches)),
            std_dev: interval_std_dev(&event.responses),
            avg_time_per_action: ratio(event.duration, event.total_touches()),
            targets_per_area,
            avg_location: mean(
                event
                    .targets()
                    .map(|o| o.position.0.hypot(o.position.1)),
            ),
            avg_first_ten: mean(first.iter().map(|r| r.response_time)),
            avg_last_ten: mean(last.iter().map(|r| r.response_time)),
            avg_distance: mean(good.iter().map(|r| r.distance_from_center)),
        }
    }
}

/// Area bucket for a touch. Touches outside the field clamp to the nearest area.
pub fn area_index(location: (f32, f32)) -> usize {
    let (x, y) = location;
    let column = ((x - X_MIN) / (X_MAX - X_MIN) * AREA_COLUMNS as f32)
        .floor()
        .clamp(0.0, (AREA_COLUMNS - 1) as f32) as usize;
    let row = ((Y_MAX - y) / (Y_MAX - Y_MIN) * AREA_ROWS as f32)
        .floor()
        .clamp(0.0, (AREA_ROWS - 1) as f32) as usize;
    row * AREA_COLUMNS + column
}

fn ratio(total: f32, count: u64) -> f32 {
    if count == 0 {
        0.0
    } else {
        total / count as f32
    }
}

fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let (count, sum) = values.fold((0u64, 0.0f32), |(n, s), v| (n + 1, s + v));
    ratio(sum, count)
}

/// Gaps between touches in time order, the first measured from trial start
fn interval_std_dev(responses: &[Response]) -> f32 {
    let mut times: Vec<f32> = responses.iter().map(|r| r.response_time).collect();
    times.sort_by(|a, b| a.total_cmp(b));

    let intervals: Vec<f32> = times
        .iter()
        .scan(0.0f32, |previous, &t| {
            let gap = t - *previous;
            *previous = t;
            Some(gap)
        })
        .collect();

    if intervals.is_empty() {
        return 0.0;
    }

    let average = mean(intervals.iter().copied());
    mean(intervals.iter().map(|gap| (gap - average).powi(2))).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ResponseKind, StarObject, StarObjectKind};

    fn touch(time: f32, location: (f32, f32), kind: ResponseKind) -> Response {
        Response::new(-1, time, location, 1.0).with_kind(kind)
    }

    #[test]
    fn test_empty_trial_is_all_zero() {
        assert_eq!(
            StarTrialMetrics::from_event(&StarEvent::default()),
            StarTrialMetrics::default()
        );
    }

    #[test]
    fn test_time_ratios() {
        let event = StarEvent {
            duration: 12.0,
            num_good_touches: 3,
            num_bad_touches: 2,
            repeat_touches: 1,
            ..Default::default()
        };
        let metrics = StarTrialMetrics::from_event(&event);

        assert_eq!(metrics.avg_time_per_target, 4.0);
        assert_eq!(metrics.avg_time_per_action, 2.0);
    }

    #[test]
    fn test_std_dev_sorts_and_starts_at_zero() {
        // gaps 1, 3 after sorting: mean 2, population deviation 1
        let event = StarEvent {
            responses: vec![
                touch(4.0, (0.0, 0.0), ResponseKind::Bad),
                touch(1.0, (0.0, 0.0), ResponseKind::Good),
            ],
            ..Default::default()
        };
        assert!((StarTrialMetrics::from_event(&event).std_dev - 1.0).abs() < 1e-6);

        let even = StarEvent {
            responses: vec![
                touch(2.0, (0.0, 0.0), ResponseKind::Good),
                touch(4.0, (0.0, 0.0), ResponseKind::Good),
            ],
            ..Default::default()
        };
        assert_eq!(StarTrialMetrics::from_event(&even).std_dev, 0.0);
    }

    #[test]
    fn test_area_index_corners_and_clamping() {
        assert_eq!(area_index((-170.0, 90.0)), 0);
        assert_eq!(area_index((170.0, 90.0)), 3);
        assert_eq!(area_index((-170.0, -75.0)), 4);
        assert_eq!(area_index((170.0, -75.0)), 7);
        assert_eq!(area_index((-10.0, 50.0)), 1);
        assert_eq!(area_index((10.0, -20.0)), 6);
        assert_eq!(area_index((-900.0, 500.0)), 0);
        assert_eq!(area_index((900.0, -500.0)), 7);
    }

    #[test]
    fn test_only_good_touches_fill_areas() {
        let event = StarEvent {
            responses: vec![
                touch(1.0, (-160.0, 80.0), ResponseKind::Good),
                touch(2.0, (160.0, -70.0), ResponseKind::Good),
                touch(3.0, (160.0, -70.0), ResponseKind::Bad),
                touch(4.0, (160.0, -70.0), ResponseKind::Repeat),
            ],
            ..Default::default()
        };
        let metrics = StarTrialMetrics::from_event(&event);

        assert_eq!(metrics.targets_per_area, [1, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(metrics.avg_distance, 1.0);
    }

    #[test]
    fn test_first_and_last_ten_windows() {
        let responses: Vec<Response> = (1..=12)
            .map(|i| touch(i as f32, (0.0, 0.0), ResponseKind::Good))
            .collect();
        let event = StarEvent {
            responses,
            ..Default::default()
        };
        let metrics = StarTrialMetrics::from_event(&event);

        // 1..=10 and 3..=12
        assert_eq!(metrics.avg_first_ten, 5.5);
        assert_eq!(metrics.avg_last_ten, 7.5);

        let short = StarEvent {
            responses: vec![touch(2.0, (0.0, 0.0), ResponseKind::Good)],
            ..Default::default()
        };
        let metrics = StarTrialMetrics::from_event(&short);
        assert_eq!(metrics.avg_first_ten, 2.0);
        assert_eq!(metrics.avg_last_ten, 2.0);
    }

    #[test]
    fn test_avg_location_uses_little_stars() {
        let mut event = StarEvent::default();
        event.add_object(StarObject {
            kind: StarObjectKind::LittleStar,
            position: (3.0, 4.0),
            rotation: 0.0,
        });
        event.add_object(StarObject {
            kind: StarObjectKind::LittleStar,
            position: (-6.0, 8.0),
            rotation: 0.0,
        });
        event.add_object(StarObject {
            kind: StarObjectKind::BigStar,
            position: (100.0, 0.0),
            rotation: 0.0,
        });

        assert_eq!(StarTrialMetrics::from_event(&event).avg_location, 7.5);
    }
}
