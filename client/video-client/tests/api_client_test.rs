use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use video_client::{ClientError, Collection, NewVideo, SortOrder, VideoApiClient, VideoListView};

fn catalog() -> serde_json::Value {
    json!([
        {"id": 2, "title": "Never Gonna Give You Up", "url": "https://youtu.be/dQw4w9WgXcQ", "rating": 23, "uploaded": null},
        {"id": 1, "title": "Cat compilation", "url": "https://youtu.be/cats", "rating": 5, "uploaded": "2019-05-04T00:00:00Z"}
    ])
}

async fn client_for(server: &MockServer) -> VideoApiClient {
    VideoApiClient::new(&server.uri()).expect("mock server uri is valid")
}

#[tokio::test]
async fn test_list_passes_order_and_parses_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .and(query_param("order", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog()))
        .expect(1)
        .mount(&server)
        .await;

    let videos = client_for(&server).await.list(SortOrder::Asc).await.unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].rating, 23);
    assert!(videos[1].uploaded.is_some());
}

#[tokio::test]
async fn test_list_treats_rejected_empty_catalog_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "result": "failure",
            "message": "BAD REQUEST: Unable to retrieve video list"
        })))
        .mount(&server)
        .await;

    let videos = client_for(&server).await.list(SortOrder::Desc).await.unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "result": "failure",
            "message": "NOT FOUND: No Video with id:99 in list"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).await.get(99).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(99)));
}

#[tokio::test]
async fn test_create_returns_assigned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .and(body_json(json!({"title": "New", "url": "https://youtu.be/new"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "result": "success",
            "message": "CREATED: Video \"New\" was saved with id:7",
            "id": 7
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = client_for(&server)
        .await
        .create(&NewVideo {
            title: "New".to_string(),
            url: "https://youtu.be/new".to_string(),
            uploaded: None,
        })
        .await
        .unwrap();

    assert_eq!(id, 7);
}

#[tokio::test]
async fn test_create_failure_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "result": "failure",
            "message": "BAD REQUEST: Video could not be saved, title and url fields cannot be empty"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .create(&NewVideo {
            title: String::new(),
            url: String::new(),
            uploaded: None,
        })
        .await
        .unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, message } => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "BAD REQUEST: Video could not be saved, title and url fields cannot be empty");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_view_delete_removes_video_after_confirmation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let mut view = VideoListView::new();
    view.load(&api, SortOrder::Desc).await.unwrap();

    view.delete(&api, 2).await.unwrap();

    let ids: Vec<i32> = view.visible().unwrap().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn test_view_delete_failure_leaves_collection_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog()))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "result": "failure",
            "message": "INTERNAL SERVER ERROR: Video could not be deleted"
        })))
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let mut view = VideoListView::new();
    view.load(&api, SortOrder::Desc).await.unwrap();
    let before = view.collection().clone();

    assert!(view.delete(&api, 2).await.is_err());
    assert_eq!(view.collection(), &before);
}

#[tokio::test]
async fn test_view_rate_updates_local_copy() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog()))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/1"))
        .and(body_json(json!({"rating": 6})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": "success",
            "message": "OK: Video with id:1 updated!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = client_for(&server).await;
    let mut view = VideoListView::new();
    view.load(&api, SortOrder::Desc).await.unwrap();

    view.rate(&api, 1, 6).await.unwrap();

    let Collection::Loaded(videos) = view.collection() else {
        panic!("view should be loaded");
    };
    assert_eq!(videos.iter().find(|v| v.id == 1).unwrap().rating, 6);
}
