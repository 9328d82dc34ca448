//! Accept loop.
//!
//! Connections are served one at a time: a connection is read, answered and
//! closed before the next one is accepted, so request log lines are written
//! strictly in arrival order.

use crate::service::handle_request;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::TokioIo;
use infill_mock_core::{LogSink, MockResponder};
use std::future::Future;
use tokio::net::TcpListener;
use tracing::{debug, info, warn};

/// Serve requests until `shutdown` completes.
///
/// Completion of `shutdown` also abandons a connection that is still being
/// served. The listener is dropped on return.
pub async fn serve<S, F>(
    listener: TcpListener,
    responder: &MockResponder<S>,
    shutdown: F,
) -> std::io::Result<()>
where
    S: LogSink,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let (stream, peer) = tokio::select! {
            _ = &mut shutdown => break,
            accepted = listener.accept() => accepted?,
        };
        debug!(%peer, "Accepted connection");

        let service = service_fn(|request: Request<Incoming>| handle_request(responder, request));
        let connection = http1::Builder::new()
            .keep_alive(false)
            .serve_connection(TokioIo::new(stream), service);

        tokio::select! {
            _ = &mut shutdown => break,
            served = connection => {
                if let Err(err) = served {
                    warn!(%peer, error = %err, "Error serving connection");
                }
            }
        }
    }

    info!("Server stopped");
    Ok(())
}
