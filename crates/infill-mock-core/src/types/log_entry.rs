//! Request log record.

use crate::types::request::InfillRequest;
use crate::types::response::InfillResponse;
use serde::{Deserialize, Serialize};

/// Request fields kept in the log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedRequest {
    pub input_prefix: String,
    pub prompt: String,
    pub input_suffix: String,
}

impl From<&InfillRequest> for LoggedRequest {
    fn from(request: &InfillRequest) -> Self {
        Self {
            input_prefix: request.input_prefix.clone(),
            prompt: request.prompt.clone(),
            input_suffix: request.input_suffix.clone(),
        }
    }
}

/// One line of the request log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub test_id: String,
    pub request: LoggedRequest,
    pub response: InfillResponse,
}

impl LogEntry {
    pub fn new(request: &InfillRequest, response: &InfillResponse) -> Self {
        Self {
            test_id: request.test_id().to_string(),
            request: LoggedRequest::from(request),
            response: response.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_log_entry_shape() {
        let request = InfillRequest {
            extra_input: vec!["large.ts::line_1_col_10".into()],
            input_prefix: "const ".to_string(),
            prompt: String::new(),
            input_suffix: "\n".to_string(),
        };
        let response = InfillResponse::from_content("greeting");

        let value = serde_json::to_value(LogEntry::new(&request, &response)).expect("Should serialize");

        assert_eq!(value["test_id"], "large.ts::line_1_col_10");
        assert_eq!(
            value["request"],
            json!({"input_prefix": "const ", "prompt": "", "input_suffix": "\n"})
        );
        assert_eq!(value["response"]["content"], "greeting");
        assert_eq!(value["response"]["result"], "greeting");
    }

    #[rstest]
    fn test_log_entry_without_extra_input() {
        let request = InfillRequest::default();
        let entry = LogEntry::new(&request, &InfillResponse::from_content(""));
        assert_eq!(entry.test_id, "unknown");
    }

    #[rstest]
    fn test_log_entry_is_single_line() {
        let request = InfillRequest {
            extra_input: Vec::new(),
            input_prefix: "line1\nline2".to_string(),
            prompt: String::new(),
            input_suffix: String::new(),
        };
        let entry = LogEntry::new(&request, &InfillResponse::from_content("a\nb"));
        let line = serde_json::to_string(&entry).expect("Should serialize");
        assert!(!line.contains('\n'));
    }
}
