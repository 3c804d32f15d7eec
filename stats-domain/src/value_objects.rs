// Domain value objects
pub mod action_type;
pub mod identifiers;

pub use action_type::*;
pub use identifiers::*;
