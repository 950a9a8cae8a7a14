use serde::{Deserialize, Serialize};

/// Classification of a star-mode touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Good,
    Bad,
    Repeat,
}

impl ResponseKind {
    /// Value of the `ResponseType` attribute in result documents
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Good => "GOOD",
            ResponseKind::Bad => "BAD",
            ResponseKind::Repeat => "REPEAT",
        }
    }
}

/// One recorded touch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Dot or side slot that was pressed (-1 when the touch hit nothing)
    pub slot_pressed: i32,
    /// Seconds since the trial started
    pub response_time: f32,
    pub touch_location: (f32, f32),
    pub distance_from_center: f32,
    /// Only set in star mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResponseKind>,
}

impl Response {
    pub fn new(
        slot_pressed: i32,
        response_time: f32,
        touch_location: (f32, f32),
        distance_from_center: f32,
    ) -> Self {
        Self {
            slot_pressed,
            response_time,
            touch_location,
            distance_from_center,
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: ResponseKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn is_good(&self) -> bool {
        self.kind == Some(ResponseKind::Good)
    }
}
