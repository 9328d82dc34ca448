//! Core domain types for fixtures, requests, responses, and log entries.

pub mod fixture;
pub mod log_entry;
pub mod request;
pub mod response;
