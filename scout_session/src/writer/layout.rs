//! Reference dot positions written ahead of the trials

use crate::config::runtime::ExchangePreferences;
use serde::{Deserialize, Serialize};

/// Display size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    pub width: f32,
    pub height: f32,
}

impl ScreenGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_preferences(preferences: &ExchangePreferences) -> Self {
        Self::new(preferences.screen_width, preferences.screen_height)
    }

    /// Centers of spatial dots 1..=9. Dot 1 is bottom left, numbering runs
    /// left to right then upward, on a 3x3 grid at 1/6, 3/6 and 5/6.
    pub fn spatial_dot_centers(&self) -> [(f32, f32); 9] {
        let mut centers = [(0.0, 0.0); 9];
        for (i, center) in centers.iter_mut().enumerate() {
            let column = (i % 3) as f32;
            let row = (i / 3) as f32;
            *center = (
                self.width * (2.0 * column + 1.0) / 6.0,
                self.height * (2.0 * row + 1.0) / 6.0,
            );
        }
        centers
    }

    pub fn inhibition_left_center(&self) -> (f32, f32) {
        (self.width / 4.0, self.height / 2.0)
    }

    pub fn inhibition_right_center(&self) -> (f32, f32) {
        (self.width * 0.75, self.height / 2.0)
    }
}

impl Default for ScreenGeometry {
    fn default() -> Self {
        Self::from_preferences(&ExchangePreferences::default())
    }
}
