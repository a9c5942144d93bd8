use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{NewVideo, SortOrder, Video};

/// Storage operations behind the `/api` endpoints.
///
/// Each method is a single statement; nothing spans a transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// All videos ordered by rating
    async fn list_by_rating(&self, order: SortOrder) -> Result<Vec<Video>, sqlx::Error>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Video>, sqlx::Error>;

    /// Insert a video with rating 0 and return its generated id
    async fn insert(&self, video: &NewVideo) -> Result<i32, sqlx::Error>;

    /// Returns the number of rows removed (0 when the id is unknown)
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;

    /// Returns the number of rows updated (0 when the id is unknown)
    async fn update_rating(&self, id: i32, rating: i32) -> Result<u64, sqlx::Error>;

    /// Cheap round trip used by the health endpoint
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed repository over an injected pool
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    async fn list_by_rating(&self, order: SortOrder) -> Result<Vec<Video>, sqlx::Error> {
        let query = match order {
            SortOrder::Asc => {
                "SELECT id, title, url, rating, uploaded FROM youtube_videos ORDER BY rating ASC"
            }
            SortOrder::Desc => {
                "SELECT id, title, url, rating, uploaded FROM youtube_videos ORDER BY rating DESC"
            }
        };

        sqlx::query_as::<_, Video>(query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Video>, sqlx::Error> {
        sqlx::query_as::<_, Video>(
            "SELECT id, title, url, rating, uploaded FROM youtube_videos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert(&self, video: &NewVideo) -> Result<i32, sqlx::Error> {
        sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO youtube_videos (title, url, rating, uploaded)
            VALUES ($1, $2, 0, $3)
            RETURNING id
            "#,
        )
        .bind(&video.title)
        .bind(&video.url)
        .bind(video.uploaded)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM youtube_videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update_rating(&self, id: i32, rating: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE youtube_videos SET rating = $1 WHERE id = $2")
            .bind(rating)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await.map(|_| ())
    }
}
