//! In-memory catalog store for tests and development.
//!
//! Applies the same filter and ordering semantics as the SQL path, so
//! pipeline tests exercise real search behavior without PostgreSQL.

use async_trait::async_trait;

use crate::error::CatalogResult;
use crate::item::CatalogItem;
use crate::rank;
use crate::spec::{LengthFilter, SearchSpec};
use crate::store::CatalogStore;

/// Catalog held in a plain `Vec`; fixed at construction.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<CatalogItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// A small catalog spanning both warehouses and the brand tables,
    /// for development mode and integration tests.
    pub fn with_sample_data() -> Self {
        let row = |name: &str,
                   profile: &str,
                   length: f64,
                   width: Option<f64>,
                   qty: f64,
                   price: Option<f64>,
                   warehouse: &str| CatalogItem {
            name: name.into(),
            profile: Some(profile.into()),
            length: Some(length),
            width,
            quantity_free: qty,
            price_per_unit: price,
            price_per_mm: None,
            warehouse: warehouse.into(),
        };

        Self::new(vec![
            // Synchronous, Moscow
            row("Ремень зубчатый 8008M CONTITECH", "8M", 800.0, Some(30.0), 12.0, Some(1450.0), "Москва"),
            row("Ремень зубчатый 8008M CFNR", "8M", 800.0, Some(30.0), 4.0, Some(1800.0), "Москва"),
            row("Ремень зубчатый 8008M MEGADYNE", "8M", 800.0, Some(50.0), 7.0, Some(1200.0), "Москва"),
            row("Ремень зубчатый 177814M CXP CONTITECH", "14M", 1778.0, Some(55.0), 2.0, Some(9800.0), "Москва"),
            row("Ремень зубчатый 240L BANDO", "L", 240.0, Some(25.4), 30.0, Some(320.0), "Москва"),
            // V-belts, Strunino
            row("Ремень клиновой B85 FNR", "B", 2159.0, None, 25.0, Some(410.0), "Струнино"),
            row("Ремень клиновой B85 PIX XSET", "B", 2160.0, None, 14.0, Some(380.0), "Струнино"),
            row("Ремень клиновой B85 MEGADYNE EXTRA", "B", 2158.0, None, 8.0, Some(350.0), "Струнино"),
            row("Ремень клиновой SPA2000 PIX MUSCLE XS3", "SPA", 2000.0, None, 10.0, Some(520.0), "Струнино"),
            row("Ремень клиновой SPA2000 OPTIBELT", "SPA", 2002.0, None, 18.0, Some(480.0), "Струнино"),
            row("Ремень клиновой 3V850 GATES", "3V", 850.0, None, 6.0, Some(650.0), "Струнино"),
            // Out of stock — must never surface
            row("Ремень клиновой B85 CONTITECH", "B", 2159.0, None, 0.0, Some(300.0), "Струнино"),
        ])
    }
}

fn matches(item: &CatalogItem, spec: &SearchSpec) -> bool {
    if item.warehouse.trim() != spec.warehouse.as_str() || item.quantity_free <= 0.0 {
        return false;
    }

    if let Some(profile) = &spec.profile {
        // NULL profile never matches, same as SQL.
        match &item.profile {
            Some(p) if p.trim().to_uppercase() == *profile => {}
            _ => return false,
        }
    }

    if let Some(filter) = &spec.length {
        let Some(length) = item.length else {
            return false;
        };
        let ok = match filter {
            LengthFilter::Band { low, high } => length >= *low && length <= *high,
            LengthFilter::Near { target, tolerance } => (length - target).abs() < *tolerance,
        };
        if !ok {
            return false;
        }
    }

    if let Some(width) = spec.width {
        if item.width != Some(width) {
            return false;
        }
    }

    true
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn search(&self, spec: &SearchSpec) -> CatalogResult<Vec<CatalogItem>> {
        let mut rows: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|item| matches(item, spec))
            .cloned()
            .collect();
        rows.sort_by(|a, b| rank::compare(&spec.rank, a, b));
        Ok(rows)
    }
}
