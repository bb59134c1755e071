use std::time::Duration;

use fetch_styles::{FetchError, FetchOptions, HttpClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-served-by", "mock")
                .set_body_raw("<p>hi</p>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(FetchOptions::default());

    let response = client.get(&format!("{}/page", server.uri())).await.unwrap();

    assert_eq!(200, response.status_code);
    assert_eq!(Some("mock"), response.headers.get("x-served-by").map(String::as_str));
    assert_eq!(Some(mime::TEXT_HTML_UTF_8), response.content_type);
    assert_eq!(9, response.len());
}

#[tokio::test]
async fn test_error_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = HttpClient::new(FetchOptions::default());

    let response = client.get(&server.uri()).await.unwrap();

    assert_eq!(500, response.status_code);
    assert!(!response.is_empty());
    assert_eq!(b"boom".to_vec(), response.body);
}

#[tokio::test]
async fn test_too_large() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 4096]))
        .mount(&server)
        .await;

    let client = HttpClient::new(FetchOptions {
        max_response_body_size: 1024,
        ..FetchOptions::default()
    });

    assert!(matches!(client.get_body(&server.uri()).await, Err(FetchError::TooLarge)));

    let client = HttpClient::new(FetchOptions {
        max_response_body_size: 4096,
        ..FetchOptions::default()
    });

    assert_eq!(4096, client.get_body(&server.uri()).await.unwrap().len());
}

#[tokio::test]
async fn test_time_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = HttpClient::new(FetchOptions {
        max_connection_time: 100,
        ..FetchOptions::default()
    });

    assert!(matches!(client.get(&server.uri()).await, Err(FetchError::TimeOut)));
}

#[tokio::test]
async fn test_repeated_header_keeps_last_value() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("set-cookie", "a=1")
                .append_header("set-cookie", "b=2"),
        )
        .mount(&server)
        .await;

    let client = HttpClient::new(FetchOptions::default());

    let response = client.get(&server.uri()).await.unwrap();

    assert_eq!(Some("b=2"), response.headers.get("set-cookie").map(String::as_str));
    assert!(response.is_empty());
}
