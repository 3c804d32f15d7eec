pub mod generate_commands;
pub mod schema_commands;

pub use generate_commands::*;
pub use schema_commands::*;
