//! Warehouse routing.
//!
//! Warehouse assignment is a business fact about the product family,
//! approximated cheaply from lexical shape: synchronous codes (leading
//! digit) ship from Moscow, V-belts from Strunino. The 3V/5V/8V families
//! are stocked at Strunino regardless of their digit-first appearance,
//! hence the exception list.

use crate::types::{BeltKind, Warehouse};

/// Profile prefixes stocked at Strunino despite starting with a digit.
pub const STRUNINO_PREFIXES: [&str; 5] = ["3V", "5V", "8V", "3VX", "5VX"];

/// Route from the raw code text.
pub fn route_text(raw: &str) -> Warehouse {
    let t: String = raw
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if STRUNINO_PREFIXES.iter().any(|p| t.starts_with(p)) {
        return Warehouse::Strunino;
    }
    if t.starts_with(|c: char| c.is_ascii_digit()) {
        return Warehouse::Moscow;
    }
    Warehouse::Strunino
}

/// Route from a structured query.
///
/// Used after oracle extraction, where the original text may not follow
/// the grammar; falls back to [`route_text`] only when the structure says
/// nothing. Agrees with [`route_text`] wherever both apply.
pub fn route_structured(kind: BeltKind, profile: Option<&str>, raw_text: &str) -> Warehouse {
    if let Some(p) = profile
        && STRUNINO_PREFIXES.contains(&p.to_uppercase().as_str())
    {
        return Warehouse::Strunino;
    }
    match kind {
        BeltKind::Synchronous => Warehouse::Moscow,
        BeltKind::VBelt => Warehouse::Strunino,
        BeltKind::Unknown => route_text(raw_text),
    }
}
