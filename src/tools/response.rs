//! Response codec — wrap a handler outcome into a tool response.
//!
//! Success payloads are pretty-printed JSON in a single text content block;
//! the key order is deterministic (struct field order for typed responses,
//! sorted keys for label maps). A failure response carries exactly the
//! error's display message.

use crate::mcp::protocol::CallToolResult;
use crate::types::{Error, Result};
use serde_json::Value;

/// Encode a handler result. Handler errors become failure responses and
/// are never retried here; serialization defects are logged at error level
/// so they stand out from ordinary remote failures.
pub fn encode(tool: &str, result: Result<Value>) -> CallToolResult {
    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(text) => CallToolResult::success(text),
            Err(e) => {
                let err = Error::from(e);
                tracing::error!(tool, error = %err, "result not representable as JSON");
                CallToolResult::failure(err.to_string())
            }
        },
        Err(err) => {
            if err.is_defect() {
                tracing::error!(tool, error = %err, "handler defect");
            } else {
                tracing::debug!(tool, error = %err, "tool call failed");
            }
            CallToolResult::failure(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn payload(result: &CallToolResult) -> &str {
        result.content[0].as_text().unwrap_or_default()
    }

    #[test]
    fn success_payload_round_trips() {
        for value in [json!([]), json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}])] {
            let result = encode("t", Ok(value.clone()));
            assert_ne!(result.is_error, Some(true));
            let decoded: Value = serde_json::from_str(payload(&result)).unwrap();
            assert_eq!(decoded, value);
        }
    }

    #[test]
    fn null_result_is_a_success() {
        // A read tool that finds nothing returns null, not a failure.
        let result = encode("t", Ok(Value::Null));
        assert_ne!(result.is_error, Some(true));
        assert_eq!(payload(&result), "null");
    }

    #[test]
    fn failure_message_equals_error_display() {
        let err = Error::remote("rate_limit_exceeded", "slow down");
        let expected = err.to_string();
        let result = encode("t", Err(err));
        assert_eq!(result.is_error, Some(true));
        assert_eq!(payload(&result), expected);
    }

    #[test]
    fn serialization_defect_is_a_failure_response() {
        let err = Error::from(serde_json::from_str::<u8>("{}").unwrap_err());
        assert!(err.is_defect());
        let result = encode("t", Err(err));
        assert_eq!(result.is_error, Some(true));
        assert!(
            payload(&result).starts_with("response serialization failed"),
            "got: {}",
            payload(&result)
        );
    }

    #[test]
    fn success_uses_two_space_indentation() {
        let result = encode("t", Ok(json!({"name": "web-1"})));
        assert_eq!(payload(&result), "{\n  \"name\": \"web-1\"\n}");
    }
}
