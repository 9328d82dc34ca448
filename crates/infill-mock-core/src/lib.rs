//! Core library for the mock infill server.
//!
//! Holds the fixture table, the test identifier resolver, the wire types of
//! the `/infill` endpoint and the request log sinks. Transport lives in
//! `infill-mock-server`.

pub mod config;
pub mod mocks;
pub mod sink;
pub mod types;

pub use mocks::resolver::{resolve, resolve_content, Resolution, ResolutionSource, TestKey};
pub use mocks::responder::{HandleError, MockResponder, INFILL_PATH};
pub use sink::{FileSink, LogSink, MemorySink, SinkError};
pub use types::fixture::{Fixture, FixtureTable, ScenarioGroup};
pub use types::log_entry::{LogEntry, LoggedRequest};
pub use types::request::InfillRequest;
pub use types::response::InfillResponse;
