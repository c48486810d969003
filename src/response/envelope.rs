//! Wire-level response envelope.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CONTENT_TYPE_APP_JSON: &str = "application/json";

/// One localized error entry in a failure response body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub code: String,
    pub status: u16,
    pub message: String,
}

/// Pagination metadata forwarded on successful list reads.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Per-request response envelope: created by the mapper, handed to the
/// transport layer, then discarded.
#[derive(Debug)]
pub struct ResponseEnvelope {
    pub status: StatusCode,
    pub headers: HashMap<String, String>,
    /// JSON-encoded success payload. Empty on failure responses.
    pub content: Option<String>,
    pub errors: Vec<ApiError>,
    pub pagination: Option<Pagination>,
}

impl ResponseEnvelope {
    /// Fresh success-status envelope with the JSON content type set.
    pub fn new() -> Self {
        let mut headers = HashMap::new();
        headers.insert(
            header::CONTENT_TYPE.to_string(),
            CONTENT_TYPE_APP_JSON.to_string(),
        );
        Self {
            status: StatusCode::OK,
            headers,
            content: None,
            errors: Vec::new(),
            pagination: None,
        }
    }
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoResponse for ResponseEnvelope {
    fn into_response(self) -> Response {
        let body = if self.errors.is_empty() {
            self.content.unwrap_or_default()
        } else {
            serde_json::to_string(&serde_json::json!({ "errors": self.errors }))
                .unwrap_or_default()
        };
        let mut response = (self.status, body).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(CONTENT_TYPE_APP_JSON),
        );
        response
    }
}
