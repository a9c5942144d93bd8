use std::sync::Arc;

use tracing::{debug, info};

use crate::config::EmptyListPolicy;
use crate::db::VideoRepository;
use crate::error::{AppError, Result};
use crate::models::{CreateVideoRequest, SortOrder, Video};

/// Catalog operations shared by the HTTP handlers
#[derive(Clone)]
pub struct VideoService {
    repo: Arc<dyn VideoRepository>,
    empty_list_policy: EmptyListPolicy,
}

impl VideoService {
    pub fn new(repo: Arc<dyn VideoRepository>, empty_list_policy: EmptyListPolicy) -> Self {
        Self {
            repo,
            empty_list_policy,
        }
    }

    pub async fn list(&self, order: SortOrder) -> Result<Vec<Video>> {
        let videos = self.repo.list_by_rating(order).await?;

        if videos.is_empty() && self.empty_list_policy == EmptyListPolicy::Reject {
            return Err(AppError::EmptyList);
        }

        Ok(videos)
    }

    pub async fn get(&self, id: i32) -> Result<Video> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::video_not_found(id))
    }

    /// Validates the payload and inserts it; the stored rating is always 0.
    /// Returns the new id together with the saved title.
    pub async fn create(&self, request: CreateVideoRequest) -> Result<(i32, String)> {
        let new_video = request.into_new_video()?;
        let id = self.repo.insert(&new_video).await?;

        info!(video_id = id, title = %new_video.title, "Video created");
        Ok((id, new_video.title))
    }

    /// Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let removed = self
            .repo
            .delete(id)
            .await
            .map_err(AppError::DeleteFailed)?;

        if removed == 0 {
            debug!(video_id = id, "Delete matched no rows");
        } else {
            info!(video_id = id, "Video deleted");
        }
        Ok(())
    }

    /// Any `i32` is accepted. Updating an unknown id touches no rows and
    /// still succeeds.
    pub async fn update_rating(&self, id: i32, rating: i32) -> Result<()> {
        let updated = self.repo.update_rating(id, rating).await?;

        if updated == 0 {
            debug!(video_id = id, "Rating update matched no rows");
        } else {
            info!(video_id = id, rating, "Video rating updated");
        }
        Ok(())
    }

    pub async fn ping(&self) -> Result<()> {
        self.repo.ping().await.map_err(AppError::from)
    }
}
