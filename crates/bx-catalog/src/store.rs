//! The catalog store capability.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::item::CatalogItem;
use crate::spec::SearchSpec;

/// A source of catalog rows that can execute a [`SearchSpec`].
///
/// An empty result is a valid outcome ("understood, nothing in stock"),
/// not an error — callers must keep it distinct from parse failures.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Execute a search and return rows in the `SearchSpec` rank order.
    async fn search(&self, spec: &SearchSpec) -> CatalogResult<Vec<CatalogItem>>;
}
