//! HTTP front end for the mock infill server.

pub mod logging;
pub mod server;
pub mod service;
pub mod settings;

pub use server::serve;
pub use settings::{Settings, SettingsError};
