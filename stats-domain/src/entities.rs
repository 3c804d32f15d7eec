// Domain entities

pub mod game_event;
pub mod player;
pub mod runtime_config;
pub mod schema;

pub use game_event::*;
pub use player::*;
pub use runtime_config::*;
pub use schema::*;
