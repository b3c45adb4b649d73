//! Strivex app layer: storage, clock and notification collaborators around
//! the `strivex-algo` progression engine.

pub mod clock;
pub mod config;
pub mod logging;
pub mod notify;
pub mod session;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use notify::{ChannelSink, NotificationSink, TracingSink};
pub use session::{QuestSession, SessionError, SessionResult};
pub use storage::{
    RecordChange, RecordKey, RecordStore, SqliteStore, StorageError, StorageResult,
};
