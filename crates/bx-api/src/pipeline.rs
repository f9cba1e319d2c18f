//! Three-tier search pipeline.
//!
//! Tiers are cost/precision ordered: free deterministic parsing first, a
//! cheap token-scan rescue second, the expensive and untrusted extraction
//! oracle last. Each tier's acceptance gate keeps a weak low-tier guess
//! from short-circuiting ahead of a better answer from a later tier.

use serde::Serialize;

use bx_catalog::{CatalogItem, CatalogResult, CatalogStore, SearchSpec};
use bx_query::{ParsedQuery, Warehouse, parse, scan_code_token};

use crate::extract::ExtractionOracle;

/// Which tier produced the accepted query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Grammar,
    TokenScan,
    Oracle,
}

/// An accepted structured query, with provenance.
#[derive(Debug, Clone)]
pub struct ResolvedQuery {
    pub query: ParsedQuery,
    pub warehouse: Warehouse,
    pub tier: Tier,
}

/// Terminal outcome of one search request.
///
/// `NoMatch` (the code was understood but nothing is in stock) and
/// `Unrecognized` (no tier produced an acceptable query) are distinct
/// failure cases and must not be conflated in user-facing behavior.
#[derive(Debug)]
pub enum SearchOutcome {
    Matched {
        resolved: ResolvedQuery,
        items: Vec<CatalogItem>,
    },
    NoMatch {
        resolved: ResolvedQuery,
    },
    Unrecognized,
}

/// Run one user message through the tiers, terminal on first acceptance.
pub async fn run(
    text: &str,
    store: &dyn CatalogStore,
    oracle: &dyn ExtractionOracle,
) -> CatalogResult<SearchOutcome> {
    // Tier 1: deterministic grammar parse of the raw text.
    let parsed = parse(text);
    if !parsed.is_unknown() {
        let spec = SearchSpec::from_code(&parsed, text);
        return finish(store, spec, parsed, Tier::Grammar).await;
    }

    // Tier 2: rescue a code-shaped token buried in free text.
    if let Some(token) = scan_code_token(text) {
        let rescued = parse(&token);
        if !rescued.is_unknown() && trustworthy(&rescued, &token) {
            tracing::debug!(token = %token, "grammar miss rescued by token scan");
            let spec = SearchSpec::from_code(&rescued, &token);
            return finish(store, spec, rescued, Tier::TokenScan).await;
        }
    }

    // Tier 3: the extraction oracle, validated before acceptance.
    tracing::debug!("deterministic tiers missed, consulting oracle");
    let Some(fields) = oracle.extract(text).await else {
        return Ok(SearchOutcome::Unrecognized);
    };
    let extracted = fields.validate();
    if extracted.is_unknown() || (extracted.profile.is_none() && extracted.length_mm.is_none()) {
        tracing::debug!("oracle output failed validation, reporting unrecognized");
        return Ok(SearchOutcome::Unrecognized);
    }
    let spec = SearchSpec::from_structured(&extracted, text);
    finish(store, spec, extracted, Tier::Oracle).await
}

/// Tier-2 acceptance gate: a bare numeric "profile" is not trustworthy
/// evidence of a real code; an explicit width separator is.
fn trustworthy(rescued: &ParsedQuery, token: &str) -> bool {
    let credible_profile = rescued
        .profile
        .as_deref()
        .is_some_and(|p| !p.is_empty() && !p.bytes().all(|b| b.is_ascii_digit()));
    credible_profile || token.contains('=')
}

async fn finish(
    store: &dyn CatalogStore,
    spec: SearchSpec,
    query: ParsedQuery,
    tier: Tier,
) -> CatalogResult<SearchOutcome> {
    let warehouse = spec.warehouse;
    let items = store.search(&spec).await?;
    let resolved = ResolvedQuery {
        query,
        warehouse,
        tier,
    };
    if items.is_empty() {
        Ok(SearchOutcome::NoMatch { resolved })
    } else {
        Ok(SearchOutcome::Matched { resolved, items })
    }
}
