use tracing::{info, warn};

use crate::api::VideoApiClient;
use crate::error::Result;
use crate::models::{SortOrder, Video};

pub const DELETE_FAILED_MESSAGE: &str = "Unable to delete video, please try again";

/// Local copy of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Collection {
    /// Nothing fetched yet
    #[default]
    Loading,
    /// Fetched; may be empty
    Loaded(Vec<Video>),
}

/// State behind the list screen: the fetched collection plus the live
/// search term. The filter is applied on every read and never stored.
#[derive(Debug, Clone, Default)]
pub struct VideoListView {
    collection: Collection,
    search_term: String,
}

impl VideoListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.collection, Collection::Loading)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_videos(&mut self, videos: Vec<Video>) {
        self.collection = Collection::Loaded(videos);
    }

    /// Fetch the catalog once and replace the local collection
    pub async fn load(&mut self, api: &VideoApiClient, order: SortOrder) -> Result<()> {
        let videos = api.list(order).await?;
        info!(count = videos.len(), "Loaded videos");
        self.set_videos(videos);
        Ok(())
    }

    /// Videos matching the search term, or `None` while still loading
    pub fn visible(&self) -> Option<Vec<&Video>> {
        match &self.collection {
            Collection::Loading => None,
            Collection::Loaded(videos) => Some(
                videos
                    .iter()
                    .filter(|video| video.matches(&self.search_term))
                    .collect(),
            ),
        }
    }

    /// Ask the server to delete `id`. Local state only changes after the
    /// server confirms with 200; on any failure it is left untouched.
    pub async fn delete(&mut self, api: &VideoApiClient, id: i32) -> Result<()> {
        if let Err(e) = api.delete(id).await {
            warn!(video_id = id, error = %e, "{}", DELETE_FAILED_MESSAGE);
            return Err(e);
        }

        self.remove_local(id);
        Ok(())
    }

    /// Record a confirmed rating change locally
    pub async fn rate(&mut self, api: &VideoApiClient, id: i32, rating: i32) -> Result<()> {
        api.update_rating(id, rating).await?;

        if let Collection::Loaded(videos) = &mut self.collection {
            if let Some(video) = videos.iter_mut().find(|v| v.id == id) {
                video.rating = rating;
            }
        }
        Ok(())
    }

    fn remove_local(&mut self, id: i32) {
        if let Collection::Loaded(videos) = &mut self.collection {
            videos.retain(|video| video.id != id);
        }
    }
}
