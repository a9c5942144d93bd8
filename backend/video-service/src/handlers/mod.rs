//! HTTP handlers for the video catalog
//!
//! - `/api` and `/api/{id}`: list, fetch, create, delete and rate videos
//! - `/health`, `/metrics`: operational endpoints
//! - everything else: the single-page application shell

use actix_web::error::{JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{web, HttpRequest};

use crate::error::AppError;

pub mod health;
pub mod spa;
pub mod videos;

pub use spa::SpaShell;

/// Configure routes for the video service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .route("/health", web::get().to(health::health_check))
        .route("/metrics", web::get().to(health::metrics))
        .service(
            web::scope("/api")
                .route("", web::get().to(videos::list_videos))
                .route("", web::post().to(videos::create_video))
                .route("/{id}", web::get().to(videos::get_video))
                .route("/{id}", web::delete().to(videos::delete_video))
                .route("/{id}", web::put().to(videos::update_rating)),
        )
        .default_service(web::route().to(spa::spa_fallback));
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("BAD REQUEST: {err}")).into()
}

fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("BAD REQUEST: {err}")).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::BadRequest(format!("BAD REQUEST: {err}")).into()
}
