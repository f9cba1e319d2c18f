//! Search specification builder.
//!
//! Composes the parser's output with unit normalization and warehouse
//! routing into the filter and ordering decisions a store executes.
//! Inch conversion happens here, exactly once — stores receive lengths
//! already on the catalog's millimeter scale.

use bx_query::{BeltKind, ParsedQuery, Warehouse, normalize_length, route_structured, route_text};

/// Symmetric tolerance for V-belt lengths: catalogs vary by manufacturing
/// rounding, so a percentage band is required.
pub const VBELT_TOLERANCE_FRACTION: f64 = 0.015;

/// Absolute tolerance for synchronous lengths — these are manufactured to
/// tight metric spec.
pub const SYNC_TOLERANCE_MM: f64 = 0.5;

/// Length predicate over the catalog's `length` column.
#[derive(Debug, Clone, PartialEq)]
pub enum LengthFilter {
    /// `length BETWEEN low AND high`.
    Band { low: f64, high: f64 },
    /// `ABS(length - target) < tolerance`.
    Near { target: f64, tolerance: f64 },
}

/// Which tie-break ordering applies (see [`crate::rank`]).
#[derive(Debug, Clone, PartialEq)]
pub enum RankMode {
    /// V-belt with a target length: distance first, then brand priority.
    VBeltDistance { target: f64 },
    /// Everything else: brand priority, then price.
    BrandOnly,
}

/// A fully resolved search: warehouse, filters, and ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSpec {
    pub warehouse: Warehouse,
    /// Uppercase profile for exact (trim/case-insensitive) matching.
    pub profile: Option<String>,
    pub length: Option<LengthFilter>,
    /// Exact width match — width is a discrete manufactured dimension.
    pub width: Option<f64>,
    pub rank: RankMode,
}

impl SearchSpec {
    /// Build from a grammar-parsed code; warehouse comes from the raw
    /// text's lexical shape.
    pub fn from_code(parsed: &ParsedQuery, original_text: &str) -> Self {
        Self::build(parsed, route_text(original_text))
    }

    /// Build from oracle-extracted structure; warehouse comes from the
    /// structured kind/profile, falling back to the text rule only when
    /// the structure is silent.
    pub fn from_structured(parsed: &ParsedQuery, original_text: &str) -> Self {
        let warehouse = route_structured(parsed.kind, parsed.profile.as_deref(), original_text);
        Self::build(parsed, warehouse)
    }

    fn build(parsed: &ParsedQuery, warehouse: Warehouse) -> Self {
        let effective = normalize_length(parsed.kind, parsed.profile.as_deref(), parsed.length_mm);

        let length = effective.map(|l| match parsed.kind {
            BeltKind::VBelt => LengthFilter::Band {
                low: l - l * VBELT_TOLERANCE_FRACTION,
                high: l + l * VBELT_TOLERANCE_FRACTION,
            },
            _ => LengthFilter::Near {
                target: l,
                tolerance: SYNC_TOLERANCE_MM,
            },
        });

        let rank = match (parsed.kind, effective) {
            (BeltKind::VBelt, Some(target)) => RankMode::VBeltDistance { target },
            _ => RankMode::BrandOnly,
        };

        Self {
            warehouse,
            profile: parsed.profile.as_ref().map(|p| p.trim().to_uppercase()),
            length,
            width: parsed.width_mm,
            rank,
        }
    }
}
