use super::mode::SessionMode;
use super::response::Response;
use crate::config::constants::spatial::SHORT_DELAY;
use crate::config::constants::star::{MAX_TYPE_CODE, MIN_TYPE_CODE};
use serde::{Deserialize, Serialize};

/// One trial of any mode. A session holds these in trial order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum TrialEvent {
    Spatial(SpatialEvent),
    Inhibition(InhibitionEvent),
    Star(StarEvent),
}

impl TrialEvent {
    pub fn mode(&self) -> SessionMode {
        match self {
            TrialEvent::Spatial(_) => SessionMode::Spatial,
            TrialEvent::Inhibition(_) => SessionMode::Inhibition,
            TrialEvent::Star(_) => SessionMode::Star,
        }
    }
}

// ============================================================================
// SPATIAL
// ============================================================================

/// Dots lit in sequence on the 3x3 grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialEvent {
    /// 1 to 3 dot numbers, each in 1..=9
    pub dots: Vec<u8>,
    /// Seconds between dots, 0.1 or 3
    pub delay: f32,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub responses: Vec<Response>,
    /// Touches that did not hit the expected dot
    #[serde(default)]
    pub bad_responses: Vec<Response>,
}

impl SpatialEvent {
    pub fn new(dots: Vec<u8>, delay: f32) -> Self {
        Self {
            dots,
            delay,
            timed_out: false,
            responses: Vec::new(),
            bad_responses: Vec::new(),
        }
    }
}

impl Default for SpatialEvent {
    fn default() -> Self {
        Self::new(Vec::new(), SHORT_DELAY)
    }
}

// ============================================================================
// INHIBITION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'l' => Some(Side::Left),
            'r' => Some(Side::Right),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Yellow asks for a touch on the dot's side, purple on the opposite side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DotColor {
    #[default]
    Yellow,
    Purple,
}

impl DotColor {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "yellow" => Some(DotColor::Yellow),
            "purple" => Some(DotColor::Purple),
            _ => None,
        }
    }

    pub fn target_side(&self, dot_side: Side) -> Side {
        match self {
            DotColor::Yellow => dot_side,
            DotColor::Purple => dot_side.opposite(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InhibitionEvent {
    pub side: Side,
    pub dot_color: DotColor,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub player_response: Option<Response>,
}

impl InhibitionEvent {
    pub fn new(side: Side, dot_color: DotColor) -> Self {
        Self {
            side,
            dot_color,
            timed_out: false,
            player_response: None,
        }
    }
}

// ============================================================================
// STAR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarObjectKind {
    LittleStar,
    BigStar,
    Dot,
    Triangle,
    /// Integer code outside 0..=3, kept only under the permissive type policy
    Unrecognized(i32),
}

impl StarObjectKind {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => StarObjectKind::LittleStar,
            1 => StarObjectKind::BigStar,
            2 => StarObjectKind::Dot,
            3 => StarObjectKind::Triangle,
            other => StarObjectKind::Unrecognized(other),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            StarObjectKind::LittleStar => 0,
            StarObjectKind::BigStar => 1,
            StarObjectKind::Dot => 2,
            StarObjectKind::Triangle => 3,
            StarObjectKind::Unrecognized(code) => *code,
        }
    }

    pub fn is_recognized(&self) -> bool {
        (MIN_TYPE_CODE..=MAX_TYPE_CODE).contains(&self.code())
    }

    /// Little stars are the objects the player has to find
    pub fn is_target(&self) -> bool {
        matches!(self, StarObjectKind::LittleStar)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarObject {
    pub kind: StarObjectKind,
    pub position: (f32, f32),
    #[serde(default)]
    pub rotation: f32,
}

/// One visual-search trial and its outcome
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StarEvent {
    pub objects: Vec<StarObject>,
    pub num_little_stars: u32,
    pub num_big_stars: u32,
    pub num_dots: u32,
    pub num_triangles: u32,
    pub end_condition: String,
    /// Seconds
    pub duration: f32,
    pub num_good_touches: u32,
    pub num_bad_touches: u32,
    pub repeat_touches: u32,
    pub responses: Vec<Response>,
}

impl StarEvent {
    /// Store an object and bump the count of its kind
    pub fn add_object(&mut self, object: StarObject) {
        match object.kind {
            StarObjectKind::LittleStar => self.num_little_stars += 1,
            StarObjectKind::BigStar => self.num_big_stars += 1,
            StarObjectKind::Dot => self.num_dots += 1,
            StarObjectKind::Triangle => self.num_triangles += 1,
            StarObjectKind::Unrecognized(_) => {}
        }
        self.objects.push(object);
    }

    pub fn targets(&self) -> impl Iterator<Item = &StarObject> {
        self.objects.iter().filter(|o| o.kind.is_target())
    }

    /// Widened so counts taken from untrusted records cannot overflow
    pub fn total_touches(&self) -> u64 {
        u64::from(self.num_good_touches)
            + u64::from(self.num_bad_touches)
            + u64::from(self.repeat_touches)
    }
}

// ============================================================================
// SESSION RECORD
// ============================================================================

/// Everything the writer needs after a session has run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub mode: SessionMode,
    #[serde(default)]
    pub practice: Vec<TrialEvent>,
    #[serde(default)]
    pub trials: Vec<TrialEvent>,
}

impl SessionRecord {
    pub fn new(mode: SessionMode) -> Self {
        Self {
            mode,
            practice: Vec::new(),
            trials: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_counts_follow_kind() {
        let mut event = StarEvent::default();
        for code in [0, 0, 1, 2, 3, 9] {
            event.add_object(StarObject {
                kind: StarObjectKind::from_code(code),
                position: (0.0, 0.0),
                rotation: 0.0,
            });
        }

        assert_eq!(event.objects.len(), 6);
        assert_eq!(event.num_little_stars, 2);
        assert_eq!(event.num_big_stars, 1);
        assert_eq!(event.num_dots, 1);
        assert_eq!(event.num_triangles, 1);
        assert_eq!(event.targets().count(), 2);
    }

    #[test]
    fn test_total_touches_is_widened() {
        let event = StarEvent {
            num_good_touches: u32::MAX,
            num_bad_touches: 1,
            repeat_touches: 2,
            ..Default::default()
        };
        assert_eq!(event.total_touches(), u64::from(u32::MAX) + 3);
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(StarObjectKind::from_code(3), StarObjectKind::Triangle);
        assert!(!StarObjectKind::from_code(-4).is_recognized());
        assert_eq!(StarObjectKind::Unrecognized(7).code(), 7);
    }

    #[test]
    fn test_target_side() {
        assert_eq!(DotColor::Yellow.target_side(Side::Left), Side::Left);
        assert_eq!(DotColor::Purple.target_side(Side::Left), Side::Right);
        assert_eq!(Side::from_char('R'), Some(Side::Right));
        assert_eq!(Side::from_char('x'), None);
        assert_eq!(DotColor::from_name("PURPLE"), Some(DotColor::Purple));
    }

    #[test]
    fn test_trial_event_json_is_tagged_by_mode() {
        let event = TrialEvent::Spatial(SpatialEvent::new(vec![1, 5], 3.0));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["mode"], "spatial");
        assert_eq!(json["dots"], serde_json::json!([1, 5]));

        let back: TrialEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back.mode(), SessionMode::Spatial);
    }
}
