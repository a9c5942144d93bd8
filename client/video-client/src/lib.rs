//! Client side of the video catalog
//!
//! [`VideoApiClient`] talks to the `/api` endpoints. [`VideoListView`] holds
//! the locally loaded collection and applies the live search filter, and
//! [`render`] draws it as a grid of cards for a terminal.

pub mod api;
pub mod error;
pub mod models;
pub mod render;
pub mod view;

pub use api::VideoApiClient;
pub use error::{ClientError, Result};
pub use models::{NewVideo, SortOrder, Video};
pub use view::{Collection, VideoListView};
