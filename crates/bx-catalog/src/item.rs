//! Catalog row type.

use serde::{Deserialize, Serialize};

/// One product row from the catalog. Read-only to this workspace — the
/// search path only filters and orders, never mutates.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CatalogItem {
    pub name: String,
    pub profile: Option<String>,
    /// Belt length, millimeters.
    pub length: Option<f64>,
    /// Belt width, millimeters.
    pub width: Option<f64>,
    /// Free stock; fractional for cut-to-length belting.
    pub quantity_free: f64,
    pub price_per_unit: Option<f64>,
    pub price_per_mm: Option<f64>,
    pub warehouse: String,
}
