use crate::{AppState, dto::PostPayload, errors::ApiError, models::Post};
use axum::{
    Json,
    body::{Body, to_bytes},
    extract::State,
    http::{StatusCode, Uri},
};
use percent_encoding::percent_decode_str;
use tracing::{debug, info};

const POST_PREFIX: &str = "/post/";

/// Everything after `/post/` must be a base-10 integer, slashes included.
/// The segment is percent-decoded first.
fn post_id(uri: &Uri) -> Result<i64, ApiError> {
    let segment = uri
        .path()
        .strip_prefix(POST_PREFIX)
        .ok_or(ApiError::InvalidPostId)?;
    let segment = percent_decode_str(segment)
        .decode_utf8()
        .map_err(|_| ApiError::InvalidPostId)?;

    segment.parse().map_err(|_| ApiError::InvalidPostId)
}

/// GET /posts
pub async fn get_posts(State(state): State<AppState>) -> Json<Vec<Post>> {
    Json(state.store.list())
}

/// Any other method on /posts
pub async fn posts_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// GET /post/{id}
pub async fn get_post(State(state): State<AppState>, uri: Uri) -> Result<Json<Post>, ApiError> {
    let id = post_id(&uri)?;
    let post = state.store.get(id).ok_or(ApiError::NotFound)?;

    Ok(Json(post))
}

/// POST /post/0       creates a post
/// POST /post/{id}    looks up an existing post and returns it unchanged
/// Body: { "body": "..." }
pub async fn upsert_post(
    State(state): State<AppState>,
    uri: Uri,
    body: Body,
) -> Result<(StatusCode, Json<Post>), ApiError> {
    let id = post_id(&uri)?;

    let bytes = to_bytes(body, state.max_body_bytes)
        .await
        .map_err(|e| ApiError::BodyRead(e.to_string()))?;
    let payload = PostPayload::from_slice(&bytes).map_err(|e| {
        debug!("Rejected post body: {}", e);
        ApiError::MalformedBody
    })?;

    if let Some(payload_id) = payload.id.filter(|&payload_id| payload_id != id) {
        debug!("Ignoring body id {} in favour of path id {}", payload_id, id);
    }

    if id == 0 {
        let post = state.store.create(payload.into_body());
        info!("Post created: {}", post.id);
        return Ok((StatusCode::CREATED, Json(post)));
    }

    // The submitted body is not applied; see `PostStore::replace`.
    let post = state
        .store
        .replace(id, payload.into_body())
        .ok_or(ApiError::NotFound)?;

    Ok((StatusCode::OK, Json(post)))
}

/// DELETE /post/{id}
pub async fn delete_post(State(state): State<AppState>, uri: Uri) -> Result<StatusCode, ApiError> {
    let id = post_id(&uri)?;
    state.store.delete(id).ok_or(ApiError::NotFound)?;

    info!("Post deleted: {}", id);

    Ok(StatusCode::OK)
}

/// Any other method on /post/{id}. A malformed id still wins over the method.
pub async fn post_method_not_allowed(uri: Uri) -> ApiError {
    match post_id(&uri) {
        Ok(_) => ApiError::MethodNotAllowed,
        Err(err) => err,
    }
}
