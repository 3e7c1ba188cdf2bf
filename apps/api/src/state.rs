use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable for the life of the process; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable text extractor. Default: TempFileExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
