//! The request log line is written for every outcome, before the handler runs.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use posts_api::{AppState, PostStore, app};
use std::{
    io,
    sync::{Arc, Mutex},
};
use tower::ServiceExt;

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    fn request_lines(&self) -> Vec<String> {
        String::from_utf8(self.0.lock().unwrap().clone())
            .unwrap()
            .lines()
            .filter(|line| line.contains("request"))
            .map(str::to_string)
            .collect()
    }
}

async fn status_of(app: &Router, method: Method, uri: &str, body: &'static str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

fn find<'a>(lines: &'a [String], uri: &str) -> &'a str {
    let needle = format!("uri={uri} ");
    lines
        .iter()
        .find(|line| line.contains(&needle))
        .unwrap_or_else(|| panic!("no log line for {uri} in {lines:#?}"))
}

#[tokio::test]
async fn logs_route_method_uri_and_length_for_every_outcome() {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = app(AppState::new(PostStore::new(), 1024));

    assert_eq!(
        status_of(&app, Method::PUT, "/posts", "").await,
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        status_of(&app, Method::GET, "/post/abc", "").await,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        status_of(&app, Method::POST, "/post/9", "{}").await,
        StatusCode::NOT_FOUND
    );

    let lines = logs.request_lines();

    let not_allowed = find(&lines, "/posts");
    assert!(not_allowed.contains("route=/posts "), "{not_allowed}");
    assert!(not_allowed.contains("method=PUT"), "{not_allowed}");
    assert!(not_allowed.contains("content_length=0"), "{not_allowed}");

    let bad_id = find(&lines, "/post/abc");
    assert!(bad_id.contains("route=/post/ "), "{bad_id}");
    assert!(bad_id.contains("method=GET"), "{bad_id}");
    assert!(bad_id.contains("content_length=0"), "{bad_id}");

    let missing = find(&lines, "/post/9");
    assert!(missing.contains("route=/post/ "), "{missing}");
    assert!(missing.contains("method=POST"), "{missing}");
    assert!(missing.contains("content_length=2"), "{missing}");
}
