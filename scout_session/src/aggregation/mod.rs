//! Star-mode statistics
//!
//! `StarTrialMetrics` is computed per trial from its recorded responses.
//! `StarAggregate` is the mean of those metrics over the main trials of a
//! session, built as a single fold.

pub mod metrics;

pub use metrics::{area_index, StarTrialMetrics};

use crate::config::constants::star::AREA_COUNT;
use crate::types::StarEvent;
use serde::Serialize;

/// Session-level means over main trials. All zero when there are none.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct StarAggregate {
    pub avg_good_touches: f32,
    pub avg_bad_touches: f32,
    pub avg_repeats: f32,
    pub avg_time_per_target: f32,
    pub avg_std_dev: f32,
    pub avg_time_per_action: f32,
    pub avg_targets_per_area: [f32; AREA_COUNT],
    pub avg_location: f32,
    pub avg_first_ten: f32,
    pub avg_last_ten: f32,
    pub avg_distance: f32,
}

impl StarAggregate {
    pub fn from_trials<'a>(trials: impl IntoIterator<Item = &'a StarEvent>) -> Self {
        let (count, sum) = trials
            .into_iter()
            .fold((0usize, Self::default()), |(count, sum), trial| {
                (count + 1, sum.accumulate(trial, &StarTrialMetrics::from_event(trial)))
            });

        if count == 0 {
            return Self::default();
        }
        sum.scaled(1.0 / count as f32)
    }

    fn accumulate(mut self, trial: &StarEvent, metrics: &StarTrialMetrics) -> Self {
        self.avg_good_touches += trial.num_good_touches as f32;
        self.avg_bad_touches += trial.num_bad_touches as f32;
        self.avg_repeats += trial.repeat_touches as f32;
        self.avg_time_per_target += metrics.avg_time_per_target;
        self.avg_std_dev += metrics.std_dev;
        self.avg_time_per_action += metrics.avg_time_per_action;
        for (total, count) in self
            .avg_targets_per_area
            .iter_mut()
            .zip(metrics.targets_per_area.iter())
        {
            *total += *count as f32;
        }
        self.avg_location += metrics.avg_location;
        self.avg_first_ten += metrics.avg_first_ten;
        self.avg_last_ten += metrics.avg_last_ten;
        self.avg_distance += metrics.avg_distance;
        self
    }

    fn scaled(mut self, factor: f32) -> Self {
        self.avg_good_touches *= factor;
        self.avg_bad_touches *= factor;
        self.avg_repeats *= factor;
        self.avg_time_per_target *= factor;
        self.avg_std_dev *= factor;
        self.avg_time_per_action *= factor;
        for value in self.avg_targets_per_area.iter_mut() {
            *value *= factor;
        }
        self.avg_location *= factor;
        self.avg_first_ten *= factor;
        self.avg_last_ten *= factor;
        self.avg_distance *= factor;
        self
    }
}
