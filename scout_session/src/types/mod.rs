//! In-memory session model shared by the reader and the writer

pub mod event;
pub mod mode;
pub mod response;

pub use event::{
    DotColor, InhibitionEvent, SessionRecord, Side, SpatialEvent, StarEvent, StarObject,
    StarObjectKind, TrialEvent,
};
pub use mode::{SessionId, SessionMode};
pub use response::{Response, ResponseKind};
