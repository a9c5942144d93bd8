use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use db_pool::create_pool;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use video_service::config::{Config, LogFormat};
use video_service::db::{ensure_videos_table, PgVideoRepository, VideoRepository};
use video_service::handlers::{self, SpaShell};
use video_service::services::VideoService;

fn init_tracing(format: LogFormat) {
    let json = format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    init_tracing(config.app.log_format);

    tracing::info!("Starting video-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Empty list policy: {}", config.catalog.empty_list_policy);

    config.database.log_config();
    let pool = create_pool(config.database.clone())
        .await
        .context("Failed to create database pool")?;
    ensure_videos_table(&pool)
        .await
        .context("Failed to ensure youtube_videos table")?;

    let shell = SpaShell::load(&config.app.static_dir).context("Failed to load SPA shell")?;

    let repo: Arc<dyn VideoRepository> = Arc::new(PgVideoRepository::new(pool.clone()));
    let service = web::Data::new(VideoService::new(repo, config.catalog.empty_list_policy));
    let shell = web::Data::new(shell);

    let bind_address = config.bind_address();
    tracing::info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(service.clone())
            .app_data(shell.clone())
            .configure(handlers::configure_routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    tracing::info!("Server stopped, closing database pool");
    pool.close().await;

    Ok(())
}
