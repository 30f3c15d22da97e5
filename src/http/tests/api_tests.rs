use super::*;
use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn service(base_url: impl Into<String>, request_timeout_secs: u64) -> ApiService {
    ApiService::new(&ApiConfig {
        base_url: base_url.into(),
        list_id: "2".to_string(),
        request_timeout_secs,
    })
    .unwrap()
}

async fn detail_handler(Path(song_id): Path<String>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "data": {
            "name": format!("Song {song_id}"),
            "author": "X",
            "letter": "first verse",
        }
    }))
}

#[test]
fn endpoints_follow_api_layout() {
    let api = service("https://binteapi.com:4011", 10);
    assert_eq!(
        api.catalog_url().as_str(),
        "https://binteapi.com:4011/api/songs/examen/2"
    );
    assert_eq!(
        api.detail_url("17").as_str(),
        "https://binteapi.com:4011/api/songs/examen/detail/17"
    );
}

#[test]
fn endpoints_keep_base_path_and_escape_ids() {
    let api = service("http://localhost:8080/proxy/", 10);
    assert_eq!(
        api.catalog_url().as_str(),
        "http://localhost:8080/proxy/api/songs/examen/2"
    );
    assert_eq!(
        api.detail_url("a b/c").as_str(),
        "http://localhost:8080/proxy/api/songs/examen/detail/a%20b%2Fc"
    );
}

#[test]
fn rejects_unusable_base_url() {
    let config = ApiConfig {
        base_url: "mailto:someone@example.com".to_string(),
        ..ApiConfig::default()
    };
    assert!(ApiService::new(&config).is_err());

    let config = ApiConfig {
        base_url: "not a url".to_string(),
        ..ApiConfig::default()
    };
    assert!(ApiService::new(&config).is_err());
}

#[tokio::test]
async fn fetches_catalog_from_server() {
    let router = Router::new().route(
        "/api/songs/examen/2",
        get(|| async {
            Json(json!({
                "ok": true,
                "data": [
                    {"id": 1, "name": "Song1", "author": "X"},
                    {"id": 2, "name": "Song2"},
                    {"id": "3", "name": "Song3", "author": "Y", "music_note": "C"},
                ]
            }))
        }),
    );
    let api = service(serve(router).await, 5);

    let songs = api.fetch_catalog().await.unwrap();
    assert_eq!(
        songs,
        vec![
            SongSummary::new("1", "Song1", "X"),
            SongSummary::new("3", "Song3", "Y"),
        ]
    );
}

#[tokio::test]
async fn unsuccessful_envelope_is_a_shape_error() {
    let router = Router::new().route(
        "/api/songs/examen/2",
        get(|| async { Json(json!({"ok": false, "message": "no such list"})) }),
    );
    let api = service(serve(router).await, 5);

    assert!(matches!(
        api.fetch_catalog().await,
        Err(FetchError::InvalidResponseShape(_))
    ));
}

#[tokio::test]
async fn error_status_is_a_network_error() {
    let router = Router::new().route(
        "/api/songs/examen/2",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"ok": true, "data": []}))) }),
    );
    let api = service(serve(router).await, 5);

    assert!(matches!(
        api.fetch_catalog().await,
        Err(FetchError::Network(_))
    ));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = service(format!("http://{addr}"), 5);
    assert!(matches!(
        api.fetch_detail("1").await,
        Err(FetchError::Network(_))
    ));
}

#[tokio::test]
async fn slow_server_times_out() {
    let router = Router::new().route(
        "/api/songs/examen/2",
        get(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Json(json!({"ok": true, "data": []}))
        }),
    );
    let api = service(serve(router).await, 1);

    assert!(matches!(
        api.fetch_catalog().await,
        Err(FetchError::Network(_))
    ));
}

#[tokio::test]
async fn fetches_detail_for_requested_song() {
    let router = Router::new().route("/api/songs/examen/detail/:song_id", get(detail_handler));
    let api = service(serve(router).await, 5);

    let detail = api.fetch_detail("42").await.unwrap();
    assert_eq!(detail.display("name"), "Song 42");
    assert_eq!(detail.display("letter"), "first verse");
    assert_eq!(detail.display("path_song"), crate::model::NOT_AVAILABLE);
}

#[tokio::test]
async fn each_detail_call_hits_the_server() {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let router = Router::new().route(
        "/api/songs/examen/detail/:song_id",
        get(move |path: Path<String>| {
            counter.fetch_add(1, Ordering::SeqCst);
            detail_handler(path)
        }),
    );
    let api = service(serve(router).await, 5);

    api.fetch_detail("7").await.unwrap();
    api.fetch_detail("7").await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
