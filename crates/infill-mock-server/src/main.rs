//! Mock infill server.
//!
//! Answers `POST /infill` with canned completions selected by the test
//! identifier in `extra_input`, appending every exchange to a JSON-lines log.

use infill_mock_core::config::parser::load_fixtures;
use infill_mock_core::{FileSink, FixtureTable, MockResponder};
use infill_mock_server::{logging, serve, Settings};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    logging::init();

    let settings = Settings::from_env()?;
    let fixtures = match &settings.fixtures {
        Some(pattern) => load_fixtures(pattern)?,
        None => FixtureTable::builtin(),
    };
    info!(groups = ?fixtures.group_names(), "Fixtures ready");

    let responder = MockResponder::new(fixtures, FileSink::new(&settings.log_file));
    let listener = TcpListener::bind(settings.addr).await?;
    let addr = listener.local_addr()?;

    info!("Mock infill server listening on http://{addr}/infill");
    info!("Logging requests to {}", settings.log_file.display());

    serve(listener, &responder, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for interrupt");
        std::future::pending::<()>().await;
    }
}
