//! In-memory posts service: a lock-guarded store of `(id, body)` posts behind
//! a small axum router.

pub mod config;
pub mod dto;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod states;
pub mod store;

pub use config::Config;
pub use errors::ApiError;
pub use models::Post;
pub use routes::app;
pub use states::AppState;
pub use store::PostStore;
