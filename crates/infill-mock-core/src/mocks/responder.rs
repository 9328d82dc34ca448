//! Request handling for the infill endpoint.
//!
//! [`MockResponder`] parses a request body, resolves the canned completion,
//! records the exchange in its [`LogSink`], and returns the response payload.
//! It knows nothing about the transport; callers pass the method, path and
//! raw body.

use crate::mocks::resolver::resolve;
use crate::sink::{LogSink, SinkError};
use crate::types::fixture::FixtureTable;
use crate::types::log_entry::LogEntry;
use crate::types::request::InfillRequest;
use crate::types::response::InfillResponse;
use thiserror::Error;
use tracing::{debug, warn};

/// Path of the only served endpoint
pub const INFILL_PATH: &str = "/infill";

/// Reason a request was not answered with a fixture
#[derive(Debug, Error)]
pub enum HandleError {
    #[error("Unsupported method ({method})")]
    MethodNotAllowed { method: String },
    #[error("Not found: {path}")]
    NotFound { path: String },
    #[error("Invalid JSON")]
    InvalidJson(#[source] serde_json::Error),
    #[error(transparent)]
    Log(#[from] SinkError),
}

impl HandleError {
    /// HTTP status code reported to the client
    pub fn status_code(&self) -> u16 {
        match self {
            HandleError::MethodNotAllowed { .. } => 501,
            HandleError::NotFound { .. } => 404,
            HandleError::InvalidJson(_) => 400,
            HandleError::Log(_) => 500,
        }
    }
}

/// Answers infill requests from a fixed fixture table.
#[derive(Debug)]
pub struct MockResponder<S> {
    fixtures: FixtureTable,
    sink: S,
}

impl<S: LogSink> MockResponder<S> {
    /// Create a responder over a fixture table.
    ///
    /// The table is owned by the responder and never changes afterwards.
    pub fn new(fixtures: FixtureTable, sink: S) -> Self {
        Self { fixtures, sink }
    }

    pub fn fixtures(&self) -> &FixtureTable {
        &self.fixtures
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Handle one request.
    ///
    /// Only a body that is not JSON at all counts as malformed. Rejected
    /// requests (wrong method, unknown path, malformed body) leave
    /// no log entry. Accepted requests are logged before the response is
    /// returned.
    pub fn handle(
        &self,
        method: &str,
        path: &str,
        body: &[u8],
    ) -> Result<InfillResponse, HandleError> {
        if method != "POST" {
            warn!(method, path, "Rejected request with unsupported method");
            return Err(HandleError::MethodNotAllowed {
                method: method.to_string(),
            });
        }

        if path != INFILL_PATH {
            warn!(path, "Rejected request for unknown path");
            return Err(HandleError::NotFound {
                path: path.to_string(),
            });
        }

        let request: InfillRequest = serde_json::from_slice(body).map_err(|e| {
            warn!(error = %e, "Rejected request with invalid JSON body");
            HandleError::InvalidJson(e)
        })?;

        let test_id = request.test_id();
        let resolution = resolve(&self.fixtures, test_id);
        debug!(
            test_id,
            source = ?resolution.source,
            hit = resolution.source.is_hit(),
            "Resolved fixture"
        );

        let response = InfillResponse::from_content(resolution.content);
        self.sink.append(&LogEntry::new(&request, &response))?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use rstest::rstest;
    use serde_json::json;

    fn responder() -> MockResponder<MemorySink> {
        MockResponder::new(FixtureTable::builtin(), MemorySink::new())
    }

    fn body(test_id: &str) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "extra_input": [test_id],
            "input_prefix": "prefix",
            "prompt": "",
            "input_suffix": "suffix"
        }))
        .expect("Should serialize")
    }

    struct FailingSink;

    impl LogSink for FailingSink {
        fn append(&self, _entry: &LogEntry) -> Result<(), SinkError> {
            Err(SinkError::Io {
                path: "unwritable.log".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    #[rstest]
    #[case("large.ts::line_1_col_10", "greeting")]
    #[case("large.ts::nonexistent_case", "// TODO: complete this\n")]
    #[case("empty.ts", "")]
    #[case("empty.ts::line_1_col_10", "")]
    #[case("totally_unknown_group", "")]
    #[case("fim_render_dedup::normal_multiline", "const result = {\n    value: 42,\n    valid: true\n};")]
    fn test_handle_resolves_content(#[case] test_id: &str, #[case] expected: &str) {
        let responder = responder();
        let response = responder
            .handle("POST", "/infill", &body(test_id))
            .expect("Should handle");

        assert_eq!(response.content, expected);
        assert_eq!(response.result, response.content);
    }

    #[rstest]
    #[case(r#"{"extra_input": ["large.ts::line_1_col_10", {"filename": "a.ts"}]}"#, "greeting")]
    #[case(r#"{"extra_input": ["large.ts::line_1_col_10"], "prompt": null}"#, "greeting")]
    #[case(r#"{"extra_input": ["large.ts::line_1_col_10"], "input_prefix": 3}"#, "greeting")]
    #[case(r#"{"extra_input": [{"filename": "large.ts"}]}"#, "")]
    #[case(r#"{"extra_input": "large.ts"}"#, "")]
    #[case(r#"[1, 2]"#, "")]
    fn test_handle_tolerates_unexpected_field_types(#[case] payload: &str, #[case] expected: &str) {
        let responder = responder();
        let response = responder
            .handle("POST", "/infill", payload.as_bytes())
            .expect("Should handle");

        assert_eq!(response.content, expected);
        assert_eq!(responder.sink().len(), 1);
    }

    #[rstest]
    fn test_handle_logs_non_string_text_fields() {
        let responder = responder();
        responder
            .handle(
                "POST",
                "/infill",
                br#"{"extra_input": ["empty.ts"], "input_prefix": 3, "prompt": null}"#,
            )
            .expect("Should handle");

        let entries = responder.sink().entries();
        assert_eq!(entries[0].test_id, "empty.ts");
        assert_eq!(entries[0].request.input_prefix, "3");
        assert_eq!(entries[0].request.prompt, "");
        assert_eq!(entries[0].request.input_suffix, "");
    }

    #[rstest]
    fn test_handle_logs_request_and_response() {
        let responder = responder();
        let response = responder
            .handle("POST", "/infill", &body("large.ts::line_1_col_10"))
            .expect("Should handle");

        let entries = responder.sink().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].test_id, "large.ts::line_1_col_10");
        assert_eq!(entries[0].request.input_prefix, "prefix");
        assert_eq!(entries[0].request.prompt, "");
        assert_eq!(entries[0].request.input_suffix, "suffix");
        assert_eq!(entries[0].response, response);
    }

    #[rstest]
    fn test_handle_without_extra_input_uses_unknown() {
        let responder = responder();
        let response = responder
            .handle("POST", "/infill", br#"{"prompt": "x"}"#)
            .expect("Should handle");

        assert_eq!(response.content, "");
        assert_eq!(responder.sink().entries()[0].test_id, "unknown");
    }

    #[rstest]
    fn test_handle_is_idempotent() {
        let responder = responder();
        let first = responder
            .handle("POST", "/infill", &body("large.ts::line_10_col_5"))
            .expect("Should handle");
        let second = responder
            .handle("POST", "/infill", &body("large.ts::line_10_col_5"))
            .expect("Should handle");

        assert_eq!(
            serde_json::to_vec(&first).expect("Should serialize"),
            serde_json::to_vec(&second).expect("Should serialize")
        );
        assert_eq!(responder.sink().len(), 2);
    }

    #[rstest]
    #[case("/")]
    #[case("/completion")]
    #[case("/infill/")]
    #[case("/INFILL")]
    fn test_handle_unknown_path(#[case] path: &str) {
        let responder = responder();
        let error = responder
            .handle("POST", path, &body("large.ts"))
            .unwrap_err();

        assert!(matches!(error, HandleError::NotFound { .. }));
        assert_eq!(error.status_code(), 404);
        assert!(responder.sink().is_empty());
    }

    #[rstest]
    #[case(b"not json".as_slice())]
    #[case(b"".as_slice())]
    #[case(b"{\"extra_input\": [".as_slice())]
    fn test_handle_invalid_json(#[case] payload: &[u8]) {
        let responder = responder();
        let error = responder.handle("POST", "/infill", payload).unwrap_err();

        assert!(matches!(error, HandleError::InvalidJson(_)));
        assert_eq!(error.status_code(), 400);
        assert_eq!(error.to_string(), "Invalid JSON");
        assert!(responder.sink().is_empty());
    }

    #[rstest]
    #[case("GET")]
    #[case("PUT")]
    #[case("DELETE")]
    #[case("post")]
    #[case("Post")]
    fn test_handle_unsupported_method(#[case] method: &str) {
        let responder = responder();
        let error = responder
            .handle(method, "/infill", &body("large.ts"))
            .unwrap_err();

        assert_eq!(error.status_code(), 501);
        assert!(responder.sink().is_empty());
    }

    #[rstest]
    fn test_handle_sink_failure() {
        let responder = MockResponder::new(FixtureTable::builtin(), FailingSink);
        let error = responder
            .handle("POST", "/infill", &body("large.ts"))
            .unwrap_err();

        assert!(matches!(error, HandleError::Log(_)));
        assert_eq!(error.status_code(), 500);
    }
}
