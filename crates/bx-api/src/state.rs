//! Shared application state.

use std::sync::Arc;

use bx_catalog::{CatalogStore, InMemoryCatalog};

use crate::extract::{DisabledOracle, ExtractionOracle};

/// State shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub oracle: Arc<dyn ExtractionOracle>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, oracle: Arc<dyn ExtractionOracle>) -> Self {
        Self { store, oracle }
    }

    /// In-memory state with sample stock and no oracle, for tests and
    /// for running without a database.
    pub fn with_sample_data() -> Self {
        Self {
            store: Arc::new(InMemoryCatalog::with_sample_data()),
            oracle: Arc::new(DisabledOracle),
        }
    }
}
