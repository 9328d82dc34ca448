//! HTTP adapter over [`MockResponder`].

use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Request, Response, StatusCode};
use infill_mock_core::{HandleError, InfillResponse, LogSink, MockResponder};
use tracing::error;

const APPLICATION_JSON: &str = "application/json";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Handle one HTTP request.
///
/// Only a failure to read the request body is returned as an error; every
/// other outcome is rendered as a response.
pub async fn handle_request<S, B>(
    responder: &MockResponder<S>,
    request: Request<B>,
) -> Result<Response<Full<Bytes>>, B::Error>
where
    S: LogSink,
    B: Body,
{
    let (parts, body) = request.into_parts();
    let body = body.collect().await?.to_bytes();

    let result = responder.handle(parts.method.as_str(), parts.uri.path(), &body);
    Ok(render(result))
}

/// Turn a handling result into an HTTP response.
pub fn render(result: Result<InfillResponse, HandleError>) -> Response<Full<Bytes>> {
    match result {
        Ok(payload) => match serde_json::to_vec(&payload) {
            Ok(json) => response(StatusCode::OK, Some(APPLICATION_JSON), json),
            Err(e) => {
                error!(error = %e, "Failed to serialize response");
                response(StatusCode::INTERNAL_SERVER_ERROR, None, Vec::new())
            }
        },
        Err(err) => {
            let status =
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            match err {
                HandleError::NotFound { .. } => response(status, None, Vec::new()),
                HandleError::Log(e) => {
                    error!(error = %e, "Failed to record request");
                    response(status, None, Vec::new())
                }
                other => response(status, Some(TEXT_PLAIN), other.to_string().into_bytes()),
            }
        }
    }
}

fn response(
    status: StatusCode,
    content_type: Option<&'static str>,
    body: Vec<u8>,
) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    response
}
