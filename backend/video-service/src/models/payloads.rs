//! Request and response bodies for the `/api` endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::video::{deserialize_upload_date, NewVideo};
use crate::error::{AppError, MISSING_FIELDS_MESSAGE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Success,
    Failure,
}

/// `{result, message}`: update confirmation and every error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeBody {
    pub result: Outcome,
    pub message: String,
}

/// `{result, message, id}` returned by create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedBody {
    pub result: Outcome,
    pub message: String,
    pub id: i32,
}

/// Body of `POST /api`, as JSON or form fields. Unknown fields (including
/// `rating`) are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,

    #[validate(required, length(min = 1))]
    pub url: Option<String>,

    #[serde(default, deserialize_with = "deserialize_upload_date")]
    pub uploaded: Option<DateTime<Utc>>,
}

impl CreateVideoRequest {
    pub fn into_new_video(self) -> Result<NewVideo, AppError> {
        self.validate()
            .map_err(|_| AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()))?;

        let (Some(title), Some(url)) = (self.title, self.url) else {
            return Err(AppError::BadRequest(MISSING_FIELDS_MESSAGE.to_string()));
        };

        Ok(NewVideo {
            title,
            url,
            uploaded: self.uploaded,
        })
    }
}

/// Body of `PUT /api/{id}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateRatingRequest {
    pub rating: i32,
}
