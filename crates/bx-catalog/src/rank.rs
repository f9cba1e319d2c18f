//! Brand-priority ranking.
//!
//! Two distinct priority tables encode different commercial agreements
//! per belt family — one for V-belt searches with a target length, one
//! for everything else. They are intentionally separate; do not merge.
//! Each table is the single authority for both the SQL `CASE` fragment
//! and the in-memory comparator.

use std::cmp::Ordering;

use crate::item::CatalogItem;
use crate::spec::RankMode;

/// One row of a brand-priority table. `like` is a substring matched
/// against the uppercased product name (leading spaces are significant —
/// they anchor the brand to a word boundary in catalog names);
/// `not_like` is an optional excluding substring.
#[derive(Debug, Clone, Copy)]
pub struct BrandRule {
    pub like: &'static str,
    pub not_like: Option<&'static str>,
}

/// Priority for V-belt searches with a supplied length. Index order is
/// rank order; unlisted brands rank after the table.
pub const VBELT_BRAND_RULES: [BrandRule; 4] = [
    BrandRule { like: " FNR", not_like: None },
    BrandRule { like: " PIX MUSCLE XS3", not_like: None },
    BrandRule { like: " PIX XSET", not_like: None },
    BrandRule { like: " MEGADYNE EXTRA", not_like: None },
];

/// Priority for synchronous searches (and V-belt with no length).
pub const SYNC_BRAND_RULES: [BrandRule; 4] = [
    BrandRule { like: " CFNR", not_like: None },
    BrandRule { like: " CONTITECH", not_like: Some("CXP") },
    BrandRule { like: "CXP CONTITECH", not_like: None },
    BrandRule { like: " MEGADYNE", not_like: None },
];

/// Rank a product name against a priority table: 1-based position of the
/// first matching rule, or table length + 1 for unlisted brands.
fn rank_against(rules: &[BrandRule], name: &str) -> u8 {
    let upper = name.to_uppercase();
    for (i, rule) in rules.iter().enumerate() {
        if upper.contains(rule.like) && rule.not_like.is_none_or(|n| !upper.contains(n)) {
            return (i + 1) as u8;
        }
    }
    (rules.len() + 1) as u8
}

pub fn vbelt_brand_rank(name: &str) -> u8 {
    rank_against(&VBELT_BRAND_RULES, name)
}

pub fn sync_brand_rank(name: &str) -> u8 {
    rank_against(&SYNC_BRAND_RULES, name)
}

/// Render a priority table as a SQL `CASE` expression over `name`.
pub fn brand_case_sql(rules: &[BrandRule]) -> String {
    let mut sql = String::from("CASE");
    for (i, rule) in rules.iter().enumerate() {
        sql.push_str(&format!(" WHEN UPPER(name) LIKE '%{}%'", rule.like));
        if let Some(excl) = rule.not_like {
            sql.push_str(&format!(" AND UPPER(name) NOT LIKE '%{excl}%'"));
        }
        sql.push_str(&format!(" THEN {}", i + 1));
    }
    sql.push_str(&format!(" ELSE {} END", rules.len() + 1));
    sql
}

/// Full tie-break ordering for catalog items, mirroring the SQL `ORDER BY`.
pub fn compare(mode: &RankMode, a: &CatalogItem, b: &CatalogItem) -> Ordering {
    match mode {
        RankMode::VBeltDistance { target } => {
            let dist = |item: &CatalogItem| item.length.map(|l| (l - target).abs());
            cmp_nulls_last(dist(a), dist(b))
                .then_with(|| vbelt_brand_rank(&a.name).cmp(&vbelt_brand_rank(&b.name)))
                .then_with(|| cmp_nulls_last(a.price_per_unit, b.price_per_unit))
                .then_with(|| a.name.cmp(&b.name))
        }
        RankMode::BrandOnly => sync_brand_rank(&a.name)
            .cmp(&sync_brand_rank(&b.name))
            .then_with(|| cmp_nulls_last(a.price_per_unit, b.price_per_unit))
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// Ascending order with `None` sorting after every value (`NULLS LAST`).
fn cmp_nulls_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
