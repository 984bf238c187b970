//! Uniform response envelope: `{success, data|error, count?}`
//!
//! Every endpoint reports failures through [`ApiError`] so clients see
//! the same envelope for validation errors, unavailable dimensions, and
//! anything else; only the status code differs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

/// A request-level failure carried to the client as a `success: false`
/// envelope. Never crashes the process.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Missing or malformed request parameter
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A dimension the loaded dataset does not have; distinct from an
    /// empty result
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({"success": false, "error": self.message}));
        (self.status, body).into_response()
    }
}

/// `{success: true, data}` for single-payload endpoints
pub fn success(data: impl Serialize) -> Json<Value> {
    Json(json!({"success": true, "data": data}))
}

/// `{success: true, count, data}` for list endpoints
pub fn success_list(count: usize, data: impl Serialize) -> Json<Value> {
    Json(json!({"success": true, "count": count, "data": data}))
}
