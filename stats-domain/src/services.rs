// Domain services

pub mod catalog;
pub mod generator;

pub use catalog::*;
pub use generator::*;
