use sqlx::PgPool;
use tracing::info;

/// Ensure the `youtube_videos` table exists. Never alters an existing table.
pub async fn ensure_videos_table(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring youtube_videos table exists");

    sqlx::query(YOUTUBE_VIDEOS_TABLE).execute(pool).await?;

    Ok(())
}

const YOUTUBE_VIDEOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS youtube_videos (
    id       SERIAL PRIMARY KEY,
    title    TEXT NOT NULL,
    url      TEXT NOT NULL,
    rating   INTEGER NOT NULL DEFAULT 0,
    uploaded TIMESTAMPTZ
)
"#;
