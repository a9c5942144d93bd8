//! Data models for the video catalog
//!
//! - `video`: the persisted row and insert payload
//! - `payloads`: typed request/response bodies for the HTTP layer

pub mod payloads;
pub mod video;

pub use payloads::{
    CreateVideoRequest, CreatedBody, Outcome, OutcomeBody, UpdateRatingRequest,
};
pub use video::{parse_upload_date, NewVideo, SortOrder, Video};
