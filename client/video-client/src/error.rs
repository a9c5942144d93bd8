use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("video {0} not found")]
    NotFound(i32),

    #[error("server answered {status}: {message}")]
    UnexpectedStatus { status: StatusCode, message: String },
}
