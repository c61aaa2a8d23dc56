use std::sync::Arc;

use crate::analysis::pipeline::ResumePipeline;
use crate::analysis::store::AnalysisStore;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup around the process-wide LLM client.
    pub pipeline: Arc<ResumePipeline>,
    /// Pluggable persistence. Postgres when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn AnalysisStore>,
    pub config: Config,
}
