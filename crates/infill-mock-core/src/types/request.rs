//! Incoming infill request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Test identifier used when the request carries none
pub const UNKNOWN_TEST_ID: &str = "unknown";

/// Body of a `POST /infill` request.
///
/// Any JSON document decodes: only `extra_input` takes part in fixture
/// selection and the text fields are kept for the request log, so fields of
/// an unexpected type are tolerated rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct InfillRequest {
    /// Extra context; the first element is the test identifier
    pub extra_input: Vec<Value>,
    pub input_prefix: String,
    pub prompt: String,
    pub input_suffix: String,
}

impl InfillRequest {
    /// First `extra_input` element if it is a string, or [`UNKNOWN_TEST_ID`].
    pub fn test_id(&self) -> &str {
        self.extra_input
            .first()
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_TEST_ID)
    }
}

impl From<Value> for InfillRequest {
    fn from(mut value: Value) -> Self {
        let extra_input = match value.get_mut("extra_input").map(Value::take) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        };

        Self {
            extra_input,
            input_prefix: text_field(&value, "input_prefix"),
            prompt: text_field(&value, "prompt"),
            input_suffix: text_field(&value, "input_suffix"),
        }
    }
}

/// Missing and `null` fields are empty; non-string values keep their JSON text.
fn text_field(value: &Value, name: &str) -> String {
    match value.get(name) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
