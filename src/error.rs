use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP {status} with body {body:?}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("Unexpected content-type {0:?}")]
    UnexpectedContentType(Option<String>),

    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<Value>,
    },

    #[error("Response has neither result nor error")]
    MissingResult,
}

pub type Result<T> = std::result::Result<T, AppError>;
