//! Boundary handler: turns a proxy-style JSON event into a pipeline call and
//! maps the outcome to a `{ statusCode, body }` response.

use serde_json::Value;
use tracing::{error, info, warn};

use super::helpers::{self, GENERATION_FAILURE_MESSAGE, MISSING_INPUT_MESSAGE};
use crate::core::models::{SummarizeRequest, SummarizeResponse};
use crate::pipeline::{CancelToken, Pipeline};

/// Handle a summarize request with no external cancellation.
pub async fn handle_summarize(pipeline: &Pipeline, payload: &Value) -> Value {
    handle_summarize_with_cancel(pipeline, payload, &CancelToken::new()).await
}

/// Handle a summarize request.
///
/// Accepts either an event with a JSON string `body`, an event whose `body`
/// is already an object, or the request object itself. Never exposes model
/// or transport error detail to the caller.
#[tracing::instrument(level = "info", skip_all)]
pub async fn handle_summarize_with_cancel(
    pipeline: &Pipeline,
    payload: &Value,
    cancel: &CancelToken,
) -> Value {
    let request = match parse_request(payload) {
        Ok(r) => r,
        Err(response) => return response,
    };

    let (Some(transcript), Some(prompt)) = (request.transcript, request.prompt) else {
        warn!("Request missing transcript or prompt");
        return helpers::err_response(400, MISSING_INPUT_MESSAGE);
    };

    info!(
        transcript_chars = transcript.chars().count(),
        prompt_chars = prompt.chars().count(),
        "Received summarize request"
    );

    match pipeline
        .summarize_document_with_cancel(&transcript, &prompt, cancel)
        .await
    {
        Ok(summary) => helpers::ok_json(&SummarizeResponse { summary }),
        Err(e) if e.is_input_error() => helpers::err_response(400, MISSING_INPUT_MESSAGE),
        Err(e) => {
            error!("Failed to generate summary: {}", e);
            helpers::err_response(500, GENERATION_FAILURE_MESSAGE)
        }
    }
}

fn parse_request(payload: &Value) -> Result<SummarizeRequest, Value> {
    let parsed = match payload.get("body") {
        Some(Value::String(body_str)) => serde_json::from_str::<SummarizeRequest>(body_str),
        Some(body @ Value::Object(_)) => serde_json::from_value::<SummarizeRequest>(body.clone()),
        Some(_) => {
            error!("Request body is not a string or object");
            return Err(helpers::err_response(400, MISSING_INPUT_MESSAGE));
        }
        None => serde_json::from_value::<SummarizeRequest>(payload.clone()),
    };

    parsed.map_err(|e: serde_json::Error| {
        error!("Failed to parse request body: {}", e);
        helpers::err_response(400, MISSING_INPUT_MESSAGE)
    })
}
