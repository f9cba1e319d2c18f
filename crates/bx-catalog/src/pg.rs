//! PostgreSQL catalog store.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::error::{CatalogError, CatalogResult};
use crate::item::CatalogItem;
use crate::rank::{SYNC_BRAND_RULES, VBELT_BRAND_RULES, brand_case_sql};
use crate::spec::{LengthFilter, RankMode, SearchSpec};
use crate::store::CatalogStore;

/// Catalog store backed by the `products` relation.
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    /// Connect to PostgreSQL and apply migrations.
    pub async fn connect(database_url: &str) -> Result<Self, CatalogError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        tracing::info!("running database migrations");
        sqlx::raw_sql(include_str!("../migrations/001_products.sql"))
            .execute(&pool)
            .await?;
        tracing::info!("migrations complete");

        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, shared pools).
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Render a spec into a parameterized query.
fn build_search<'a>(spec: &'a SearchSpec) -> QueryBuilder<'a, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT name, profile, length, width, quantity_free, price_per_unit, price_per_mm, warehouse \
         FROM products WHERE TRIM(warehouse) = ",
    );
    qb.push_bind(spec.warehouse.as_str());
    qb.push(" AND quantity_free > 0");

    if let Some(profile) = &spec.profile {
        qb.push(" AND UPPER(TRIM(profile)) = ");
        qb.push_bind(profile.as_str());
    }

    match &spec.length {
        Some(LengthFilter::Band { low, high }) => {
            qb.push(" AND length BETWEEN ");
            qb.push_bind(*low);
            qb.push(" AND ");
            qb.push_bind(*high);
        }
        Some(LengthFilter::Near { target, tolerance }) => {
            qb.push(" AND ABS(length - ");
            qb.push_bind(*target);
            qb.push(") < ");
            qb.push_bind(*tolerance);
        }
        None => {}
    }

    if let Some(width) = spec.width {
        qb.push(" AND width = ");
        qb.push_bind(width);
    }

    match &spec.rank {
        RankMode::VBeltDistance { target } => {
            qb.push(" ORDER BY ABS(length - ");
            qb.push_bind(*target);
            qb.push(") NULLS LAST, ");
            qb.push(brand_case_sql(&VBELT_BRAND_RULES));
            qb.push(", price_per_unit NULLS LAST, name");
        }
        RankMode::BrandOnly => {
            qb.push(" ORDER BY ");
            qb.push(brand_case_sql(&SYNC_BRAND_RULES));
            qb.push(", price_per_unit NULLS LAST, name");
        }
    }

    qb
}

#[async_trait]
impl CatalogStore for PgCatalog {
    async fn search(&self, spec: &SearchSpec) -> CatalogResult<Vec<CatalogItem>> {
        let mut query = build_search(spec);
        let items = query
            .build_query_as::<CatalogItem>()
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!(rows = items.len(), warehouse = %spec.warehouse, "catalog search");
        Ok(items)
    }
}
