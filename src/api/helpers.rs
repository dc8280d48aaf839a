//! Response builders shared by the boundary handler.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

/// Generic message for any pipeline failure; internal detail is only logged.
pub const GENERATION_FAILURE_MESSAGE: &str = "Failed to generate summary.";

/// Message for a request without a transcript or prompt.
pub const MISSING_INPUT_MESSAGE: &str = "Transcript and prompt are required.";

/// Returns a 200 OK response with `payload` serialized as the JSON body.
#[must_use]
pub fn ok_json<T: Serialize>(payload: &T) -> Value {
    match serde_json::to_string(payload) {
        Ok(body) => json!({ "statusCode": 200, "body": body }),
        Err(e) => {
            error!("Failed to serialize response body: {}", e);
            err_response(500, GENERATION_FAILURE_MESSAGE)
        }
    }
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
