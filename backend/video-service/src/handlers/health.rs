use actix_web::{web, HttpResponse};

use crate::services::VideoService;

pub async fn health_check(service: web::Data<VideoService>) -> HttpResponse {
    match service.ping().await {
        Ok(()) => HttpResponse::Ok().body("OK"),
        Err(e) => {
            tracing::warn!(error = ?e, "Health check failed");
            HttpResponse::ServiceUnavailable().json(serde_json::json!({
                "status": "unhealthy",
                "service": crate::config::SERVICE_NAME,
            }))
        }
    }
}

pub async fn metrics() -> HttpResponse {
    match db_pool::render_metrics() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(body),
        Err(e) => {
            tracing::error!("Metrics rendering failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
