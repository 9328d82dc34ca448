//! Fixture file configuration.

pub mod error;
pub mod parser;
