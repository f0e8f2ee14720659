use std::sync::Arc;

use crate::config::Config;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable record store. Default: `JsonFileStore` over `config.db_path`.
    pub store: Arc<dyn CandidateStore>,
    /// Runtime settings; consumed at startup.
    #[allow(dead_code)]
    pub config: Config,
}
