//! Catalog access for belt search.
//!
//! [`SearchSpec`] turns a parsed query into warehouse, tolerance, and
//! ordering decisions; [`CatalogStore`] executes it. Two implementations:
//! `PgCatalog` (production, parameterized SQL) and `InMemoryCatalog`
//! (tests and development), applying identical semantics.

pub mod error;
pub mod item;
pub mod mock;
pub mod pg;
pub mod rank;
pub mod spec;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use item::CatalogItem;
pub use mock::InMemoryCatalog;
pub use pg::PgCatalog;
pub use spec::{LengthFilter, RankMode, SearchSpec, SYNC_TOLERANCE_MM, VBELT_TOLERANCE_FRACTION};
pub use store::CatalogStore;
