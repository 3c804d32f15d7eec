pub mod connect;
pub mod postgres_events;
pub mod sqlite_events;

pub use connect::*;
pub use postgres_events::*;
pub use sqlite_events::*;
