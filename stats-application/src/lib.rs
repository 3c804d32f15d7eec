// Game Stats Application Layer

pub mod commands;
pub mod error;
pub mod metrics;
pub mod session;
pub mod state;

pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;

#[cfg(test)]
mod test_support;
