pub mod config;
pub mod repositories;
pub mod schema;

pub use config::*;
pub use repositories::*;
pub use schema::*;
