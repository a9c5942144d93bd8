/// Video handlers - HTTP endpoints for the `/api` catalog
use actix_web::{web, Either, HttpResponse};

use crate::error::{AppError, Result};
use crate::models::{
    CreateVideoRequest, CreatedBody, Outcome, OutcomeBody, SortOrder, UpdateRatingRequest,
};
use crate::services::VideoService;

/// Request body sent either as JSON or as an urlencoded form
pub type JsonOrForm<T> = Either<web::Json<T>, web::Form<T>>;

fn into_body<T>(body: JsonOrForm<T>) -> T {
    match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    }
}

/// Parse a path id. Runs before any storage access.
pub fn parse_video_id(raw: &str) -> Result<i32> {
    raw.trim().parse::<i32>().map_err(|_| AppError::invalid_id())
}

/// `GET /api?order=asc|desc`
pub async fn list_videos(
    service: web::Data<VideoService>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse> {
    let order = SortOrder::from_query_pairs(&query);
    let videos = service.list(order).await?;

    Ok(HttpResponse::Ok().json(videos))
}

/// `GET /api/{id}`: answers with a one-element array
pub async fn get_video(
    service: web::Data<VideoService>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_video_id(&id)?;
    let video = service.get(id).await?;

    Ok(HttpResponse::Ok().json([video]))
}

/// `POST /api`
pub async fn create_video(
    service: web::Data<VideoService>,
    body: JsonOrForm<CreateVideoRequest>,
) -> Result<HttpResponse> {
    let (id, title) = service.create(into_body(body)).await?;

    Ok(HttpResponse::Created().json(CreatedBody {
        result: Outcome::Success,
        message: format!("CREATED: Video \"{title}\" was saved with id:{id}"),
        id,
    }))
}

/// `DELETE /api/{id}`
pub async fn delete_video(
    service: web::Data<VideoService>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_video_id(&id)?;
    service.delete(id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}

/// `PUT /api/{id}` with `{rating}`. The id is checked before the body.
pub async fn update_rating(
    service: web::Data<VideoService>,
    id: web::Path<String>,
    body: std::result::Result<JsonOrForm<UpdateRatingRequest>, actix_web::Error>,
) -> actix_web::Result<HttpResponse> {
    let id = parse_video_id(&id)?;
    let req = into_body(body?);
    service.update_rating(id, req.rating).await?;

    Ok(HttpResponse::Ok().json(OutcomeBody {
        result: Outcome::Success,
        message: format!("OK: Video with id:{id} updated!"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_video_id() {
        assert_eq!(parse_video_id("42").unwrap(), 42);
        assert_eq!(parse_video_id(" 7 ").unwrap(), 7);
        assert_eq!(parse_video_id("-3").unwrap(), -3);

        for raw in ["abc", "1.5", "1.0", "1e2", "", "12abc", "99999999999"] {
            assert!(
                matches!(parse_video_id(raw), Err(AppError::BadRequest(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
