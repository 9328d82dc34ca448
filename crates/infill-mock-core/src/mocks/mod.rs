//! Mock responses module.
//!
//! This module provides functionality for answering infill requests:
//! - [`resolver`]: Maps a test identifier to canned completion text
//! - [`responder::MockResponder`]: Parses requests, resolves fixtures and logs each exchange

pub mod resolver;
pub mod responder;
