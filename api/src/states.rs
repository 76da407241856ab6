use crate::store::PostStore;
use std::sync::Arc;

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Cloned into every handler by axum; the clone only bumps the `Arc`.
///
/// Build one per server (or per test) so stores never leak between them.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostStore>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: PostStore, max_body_bytes: usize) -> Self {
        Self {
            store: Arc::new(store),
            max_body_bytes,
        }
    }
}
