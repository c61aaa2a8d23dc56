pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

/// Room for multipart framing on top of the largest accepted PDF, so that
/// oversized files reach the handler's own size check.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/analyze",
            post(handlers::handle_analyze).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/v1/resumes/history", get(handlers::handle_history))
        .route(
            "/api/v1/resumes/analyses/:id",
            get(handlers::handle_get_analysis),
        )
        .with_state(state)
}
