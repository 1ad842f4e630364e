use super::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const BODY: &str = r##"{"data":[
    {"id":1,"name":"Colors","artist":"William King","url":"https://example.invalid/colors.mp3","cover":"4f718272-6b0e-42ee-92d0-805b783cb471","accent":"#331E00","top_track":true},
    {"id":2,"name":"Septembers","artist":"Gone","url":"https://example.invalid/sept.mp3","cover":"a1b2","accent":"#1A1A2E"}
]}"##;

const SPARSE_BODY: &str = r##"{"data":[
    {"name":"Colors","artist":"William King","url":"https://example.invalid/colors.mp3","cover":null,"accent":null,"top_track":null},
    {"name":"Septembers","artist":"Gone","url":"https://example.invalid/sept.mp3"}
]}"##;

/// Serves a single canned HTTP response and returns the base URL.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    });

    format!("http://{addr}/items/songs")
}

fn service(endpoint: String) -> ApiService {
    ApiService::new(&ApiConfig {
        endpoint,
        timeout_secs: 5,
        ..ApiConfig::default()
    })
    .unwrap()
}

#[tokio::test]
async fn parses_catalog_records() {
    let api = service(serve_once("HTTP/1.1 200 OK", BODY).await);
    let songs = api.try_fetch_songs().await.unwrap();

    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].name, "Colors");
    assert_eq!(songs[0].artist, "William King");
    assert_eq!(songs[0].accent, "#331E00");
    assert!(songs[0].top_track);
    assert!(!songs[1].top_track);
}

#[tokio::test]
async fn null_or_missing_cosmetic_fields_keep_the_record() {
    let api = service(serve_once("HTTP/1.1 200 OK", SPARSE_BODY).await);
    let songs = api.fetch_songs().await;

    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].name, "Colors");
    assert_eq!(songs[0].cover, "");
    assert_eq!(songs[0].accent, "");
    assert!(!songs[0].top_track);
    assert_eq!(songs[1].accent, "");
    assert!(!songs[1].top_track);
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let api = service(serve_once("HTTP/1.1 503 Service Unavailable", "{}").await);
    assert!(matches!(
        api.try_fetch_songs().await,
        Err(ApiError::Status(503))
    ));
}

#[tokio::test]
async fn malformed_body_collapses_to_empty_catalog() {
    let api = service(serve_once("HTTP/1.1 200 OK", "<html>oops</html>").await);
    assert!(api.fetch_songs().await.is_empty());
}

#[tokio::test]
async fn network_failure_collapses_to_empty_catalog() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = service(format!("http://{addr}/items/songs"));
    assert!(api.fetch_songs().await.is_empty());
}
