// SPDX-License-Identifier: MPL-2.0
//! Search client tests against a throwaway local HTTP responder.

use iced_gallery::domain::search::{Page, SearchQuery, TotalCount};
use iced_gallery::infrastructure::{ApiSettings, SearchClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

const BODY: &str = r#"{
    "total": 8000,
    "totalHits": 40,
    "hits": [
        {"id": 1, "tags": "cat, pet", "webformatURL": "https://cdn.example/1_640.jpg", "largeImageURL": "https://cdn.example/1_1280.jpg"},
        {"id": 2, "tags": "cat", "webformatURL": "https://cdn.example/2_640.jpg", "largeImageURL": "https://cdn.example/2_1280.jpg"}
    ]
}"#;

/// Serves one canned response and reports the request line it received.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0_u8; 8192];
        let read = socket.read(&mut buf).await.expect("read request");
        let request = String::from_utf8_lossy(&buf[..read]).into_owned();
        let request_line = request.lines().next().unwrap_or_default().to_string();

        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write response");
        socket.shutdown().await.ok();
        let _ = tx.send(request_line);
    });

    (format!("http://{addr}/api/"), rx)
}

fn client(base_url: String) -> SearchClient {
    SearchClient::new(ApiSettings {
        base_url,
        api_key: "test-key".to_string(),
        per_page: 12,
    })
}

fn cats() -> SearchQuery {
    SearchQuery::parse("cats").expect("query")
}

#[tokio::test]
async fn fetches_and_decodes_a_page() {
    let (base_url, request) = serve_once("200 OK", BODY).await;

    let page = client(base_url)
        .fetch_images(&cats(), Page::new(2).expect("page"))
        .await
        .expect("page should decode");

    assert_eq!(page.total, TotalCount::new(40));
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].id, 1);
    assert_eq!(page.results[1].full_size_url, "https://cdn.example/2_1280.jpg");

    let request_line = request.await.expect("request line");
    assert!(request_line.starts_with("GET /api/?"));
    assert!(request_line.contains("q=cats"));
    assert!(request_line.contains("page=2"));
    assert!(request_line.contains("per_page=12"));
}

#[tokio::test]
async fn server_error_maps_to_status_message() {
    let (base_url, _request) = serve_once("500 Internal Server Error", "{}").await;

    let err = client(base_url)
        .fetch_images(&cats(), Page::FIRST)
        .await
        .expect_err("500 should fail");

    assert_eq!(err.message(), "Request failed with status code 500");
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let (base_url, _request) = serve_once("200 OK", "{\"hits\": 3}").await;

    let err = client(base_url)
        .fetch_images(&cats(), Page::FIRST)
        .await
        .expect_err("body should not decode");

    assert!(err.message().starts_with("Malformed response"));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error_without_key() {
    // Bind then drop to get a port nothing listens on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        listener.local_addr().expect("addr")
    };

    let err = client(format!("http://{addr}/api/"))
        .fetch_images(&cats(), Page::FIRST)
        .await
        .expect_err("nothing is listening");

    assert!(!err.message().is_empty());
    assert!(!err.message().contains("test-key"));
}

#[tokio::test]
async fn image_bytes_are_returned_verbatim() {
    let (base_url, _request) = serve_once("200 OK", "not really a jpeg").await;

    let bytes = client(base_url.clone())
        .fetch_image_bytes(&format!("{base_url}1_640.jpg"))
        .await
        .expect("bytes");

    assert_eq!(bytes, b"not really a jpeg");
}
