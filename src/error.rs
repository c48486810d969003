//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Configuration and graph faults. These indicate a broken configuration
/// load and must abort the documentation build or request instead of
/// degrading into an empty schema or a half-rendered response.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing reference: {kind} id '{id}'")]
    MissingReference { kind: &'static str, id: String },
    #[error("empty table alias: configuration id {0}")]
    EmptyTableAlias(i64),
    #[error("duplicate configuration id: {0}")]
    DuplicateConfigurationId(i64),
    #[error("duplicate table alias: {0}")]
    DuplicateTableAlias(String),
    #[error("duplicate relation name '{name}' on configuration id {parent_id}")]
    DuplicateRelationName { parent_id: i64, name: String },
    #[error("unknown error glossary key: {0}")]
    UnknownErrorKey(String),
    #[error("config load: {0}")]
    Load(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("encode: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "config_error"),
            AppError::Encode(_) => (StatusCode::INTERNAL_SERVER_ERROR, "encode_error"),
            AppError::Db(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
            },
        };
        (status, Json(body)).into_response()
    }
}
