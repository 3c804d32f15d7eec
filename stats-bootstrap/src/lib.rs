pub mod context;
pub mod lifecycle;

pub use lifecycle::{run_generate, run_migrate, GenerateRequest};
