//! Uniform response envelopes returned by every handler.

use serde_json::{Value, json};

pub const APPLICATION_JSON: &str = "application/json";

fn default_headers() -> Value {
    json!({ "Content-Type": APPLICATION_JSON })
}

/// Returns a 200 OK response carrying `data`.
#[must_use]
pub fn ok_data(data: Value) -> Value {
    json!({
        "statusCode": 200,
        "headers": default_headers(),
        "data": data
    })
}

/// Returns a 202 Accepted response for a completed write or delete.
#[must_use]
pub fn accepted() -> Value {
    json!({
        "statusCode": 202,
        "headers": default_headers()
    })
}

/// Returns a 500 response with the failure message as `data`.
#[must_use]
pub fn err_response(message: &str) -> Value {
    json!({
        "statusCode": 500,
        "headers": default_headers(),
        "data": message
    })
}
