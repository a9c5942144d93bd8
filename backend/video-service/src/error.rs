use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::{Outcome, OutcomeBody};

pub type Result<T> = std::result::Result<T, AppError>;

pub const INVALID_ID_MESSAGE: &str = "BAD REQUEST: Invalid input type";
pub const MISSING_FIELDS_MESSAGE: &str =
    "BAD REQUEST: Video could not be saved, title and url fields cannot be empty";
pub const EMPTY_LIST_MESSAGE: &str = "BAD REQUEST: Unable to retrieve video list";
const DATABASE_MESSAGE: &str = "BAD REQUEST: Database query failed";
const DELETE_FAILED_MESSAGE: &str = "INTERNAL SERVER ERROR: Video could not be deleted";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    /// Listing found no rows while the empty list policy is `Reject`
    #[error("{}", EMPTY_LIST_MESSAGE)]
    EmptyList,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Delete failed: {0}")]
    DeleteFailed(#[source] sqlx::Error),
}

impl AppError {
    pub fn invalid_id() -> Self {
        AppError::BadRequest(INVALID_ID_MESSAGE.to_string())
    }

    pub fn video_not_found(id: i32) -> Self {
        AppError::NotFound(format!("NOT FOUND: No Video with id:{id} in list"))
    }

    /// Message sent to the client. Storage errors never leak driver detail.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::EmptyList => EMPTY_LIST_MESSAGE.to_string(),
            AppError::Database(_) => DATABASE_MESSAGE.to_string(),
            AppError::DeleteFailed(_) => DELETE_FAILED_MESSAGE.to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::EmptyList | AppError::Database(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DeleteFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Database(e) | AppError::DeleteFailed(e) => {
                tracing::error!(error = ?e, "Database error");
            }
            _ => tracing::debug!(error = %self, "Request rejected"),
        }

        HttpResponse::build(self.status_code()).json(OutcomeBody {
            result: Outcome::Failure,
            message: self.public_message(),
        })
    }
}
