// Internal modules
#[macro_use]
pub mod logging;
pub mod aggregation;
pub mod config;
pub mod document;
pub mod exchange;
pub mod grammar;
pub mod output;
pub mod paths;
pub mod reader;
pub mod types;
pub mod values;
pub mod writer;

// Re-export key types for library consumers
pub use exchange::SessionExchange;
pub use reader::{read_session, ReadError, SessionRead};
pub use types::{
    DotColor, InhibitionEvent, Response, ResponseKind, SessionId, SessionMode, SessionRecord,
    Side, SpatialEvent, StarEvent, StarObject, StarObjectKind, TrialEvent,
};
pub use writer::{write_session, WriteError};
