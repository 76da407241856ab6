use axum::{
    body::HttpBody,
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Logs every request before it reaches a handler.
///
/// The state is the route name reported in the log line (`/posts`, `/post/`).
pub async fn log_request(
    State(route): State<&'static str>,
    request: Request,
    next: Next,
) -> Response {
    info!(
        route = %route,
        method = %request.method(),
        uri = %request.uri(),
        content_length = content_length(&request),
        "request"
    );

    next.run(request).await
}

/// `Content-Length` if sent, else the body's exact size if known, else -1.
fn content_length(request: &Request) -> i64 {
    request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .or_else(|| request.body().size_hint().exact())
        .map_or(-1, |len| i64::try_from(len).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(body: Body) -> Request {
        Request::builder().uri("/post/0").body(body).unwrap()
    }

    #[test]
    fn prefers_the_header() {
        let req = Request::builder()
            .uri("/post/0")
            .header(header::CONTENT_LENGTH, "12")
            .body(Body::from("abc"))
            .unwrap();
        assert_eq!(content_length(&req), 12);
    }

    #[test]
    fn falls_back_to_the_body_size() {
        assert_eq!(content_length(&request(Body::empty())), 0);
        assert_eq!(content_length(&request(Body::from("hello"))), 5);
    }

    #[test]
    fn unknown_length_is_negative() {
        let stream = futures_util::stream::iter(vec![Ok::<_, std::io::Error>("chunk")]);
        assert_eq!(content_length(&request(Body::from_stream(stream))), -1);
    }
}
