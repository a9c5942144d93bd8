//! Shared fixtures for the HTTP tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use actix_web::{test, web, App};
use async_trait::async_trait;
use video_service::config::EmptyListPolicy;
use video_service::db::VideoRepository;
use video_service::handlers::{configure_routes, SpaShell};
use video_service::models::{NewVideo, SortOrder, Video};
use video_service::services::VideoService;

pub const SHELL_HTML: &str = "<!DOCTYPE html><html><body>catalog shell</body></html>";

/// In-memory stand-in for `youtube_videos`
#[derive(Default)]
pub struct InMemoryVideoRepository {
    rows: Mutex<BTreeMap<i32, Video>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    failing: AtomicBool,
}

impl InMemoryVideoRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Number of storage calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every subsequent call fail with a pool timeout
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn seed(&self, title: &str, url: &str, rating: i32) -> i32 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        self.rows.lock().unwrap().insert(
            id,
            Video {
                id,
                title: title.to_string(),
                url: url.to_string(),
                rating,
                uploaded: None,
            },
        );
        id
    }

    fn enter(&self) -> Result<(), sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn list_by_rating(&self, order: SortOrder) -> Result<Vec<Video>, sqlx::Error> {
        self.enter()?;
        let mut videos: Vec<Video> = self.rows.lock().unwrap().values().cloned().collect();
        match order {
            SortOrder::Asc => videos.sort_by_key(|v| v.rating),
            SortOrder::Desc => videos.sort_by_key(|v| std::cmp::Reverse(v.rating)),
        }
        Ok(videos)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Video>, sqlx::Error> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, video: &NewVideo) -> Result<i32, sqlx::Error> {
        self.enter()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        self.rows.lock().unwrap().insert(
            id,
            Video {
                id,
                title: video.title.clone(),
                url: video.url.clone(),
                rating: 0,
                uploaded: video.uploaded,
            },
        );
        Ok(id)
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        self.enter()?;
        Ok(self.rows.lock().unwrap().remove(&id).map_or(0, |_| 1))
    }

    async fn update_rating(&self, id: i32, rating: i32) -> Result<u64, sqlx::Error> {
        self.enter()?;
        match self.rows.lock().unwrap().get_mut(&id) {
            Some(video) => {
                video.rating = rating;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        self.enter()
    }
}

pub async fn setup_test_app(
    repo: Arc<InMemoryVideoRepository>,
    policy: EmptyListPolicy,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let service = VideoService::new(repo, policy);

    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(web::Data::new(SpaShell::from_html(SHELL_HTML)))
            .configure(configure_routes),
    )
    .await
}
