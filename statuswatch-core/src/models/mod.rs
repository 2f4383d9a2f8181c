//! Data models for statuswatch

pub mod configuration;
pub mod homework;

pub use configuration::*;
pub use homework::*;
