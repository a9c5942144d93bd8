pub mod schema;
pub mod video_repo;

pub use schema::ensure_videos_table;
pub use video_repo::{PgVideoRepository, VideoRepository};
