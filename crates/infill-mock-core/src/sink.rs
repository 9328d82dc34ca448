//! Request log sinks.
//!
//! The responder records every served request through a [`LogSink`].
//! [`FileSink`] appends JSON lines to a file; [`MemorySink`] keeps entries
//! in memory so callers can inspect them.

use crate::types::log_entry::LogEntry;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Error appending a log entry
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to write request log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for request log entries.
pub trait LogSink {
    fn append(&self, entry: &LogEntry) -> Result<(), SinkError>;
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn append(&self, entry: &LogEntry) -> Result<(), SinkError> {
        (**self).append(entry)
    }
}

/// Appends one JSON object per line to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SinkError {
        SinkError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl LogSink for FileSink {
    fn append(&self, entry: &LogEntry) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;
        file.write_all(&line).map_err(|e| self.io_error(e))?;
        Ok(())
    }
}

/// Keeps log entries in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the entries appended so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LogSink for MemorySink {
    fn append(&self, entry: &LogEntry) -> Result<(), SinkError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        Ok(())
    }
}
