//! Belt search endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use bx_catalog::CatalogItem;
use bx_query::BeltKind;

use crate::error::{ApiError, ApiResult};
use crate::pipeline::{self, SearchOutcome, Tier};
use crate::state::AppState;

/// Longest result list returned to the client; the catalog query is
/// unbounded, the cap applies to presentation only.
const MAX_ITEMS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub tier: Tier,
    pub kind: BeltKind,
    pub warehouse: String,
    /// Total number of matching rows, before the presentation cap.
    pub total: usize,
    pub items: Vec<CatalogItem>,
}

/// POST /api/v1/search — resolve a free-text belt query against stock.
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<Json<SearchResponse>> {
    let text = request.query.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("query must not be empty".into()));
    }

    let outcome = pipeline::run(text, state.store.as_ref(), state.oracle.as_ref()).await?;

    match outcome {
        SearchOutcome::Matched { resolved, items } => {
            let total = items.len();
            tracing::info!(
                tier = ?resolved.tier,
                warehouse = %resolved.warehouse,
                total,
                "search matched"
            );
            Ok(Json(SearchResponse {
                status: "matched",
                tier: resolved.tier,
                kind: resolved.query.kind,
                warehouse: resolved.warehouse.to_string(),
                total,
                items: items.into_iter().take(MAX_ITEMS).collect(),
            }))
        }
        SearchOutcome::NoMatch { resolved } => {
            tracing::info!(tier = ?resolved.tier, warehouse = %resolved.warehouse, "no stock");
            Ok(Json(SearchResponse {
                status: "no_match",
                tier: resolved.tier,
                kind: resolved.query.kind,
                warehouse: resolved.warehouse.to_string(),
                total: 0,
                items: Vec::new(),
            }))
        }
        SearchOutcome::Unrecognized => Err(ApiError::Unrecognized),
    }
}
