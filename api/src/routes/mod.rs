mod health;
mod post;

pub use health::health_check;
pub use post::{
    delete_post, get_post, get_posts, post_method_not_allowed, posts_method_not_allowed,
    upsert_post,
};

use crate::{AppState, middleware::log_request};
use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{MethodRouter, get},
};
use tower_http::trace::TraceLayer;

/// `/post/` and `/post/{*id}` share one handler set so that an empty or
/// multi-segment id reaches the id parser and gets a 400.
///
/// HEAD is routed explicitly; `get` would otherwise answer it.
fn single_post_routes() -> MethodRouter<AppState> {
    get(get_post)
        .head(post_method_not_allowed)
        .post(upsert_post)
        .delete(delete_post)
        .fallback(post_method_not_allowed)
        .layer(middleware::from_fn_with_state("/post/", log_request))
}

/// Build the router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/posts",
            get(get_posts)
                .head(posts_method_not_allowed)
                .fallback(posts_method_not_allowed)
                .layer(middleware::from_fn_with_state("/posts", log_request)),
        )
        .route("/post/", single_post_routes())
        .route("/post/{*id}", single_post_routes())
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 page not found") })
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
