//! Deterministic belt code parser.
//!
//! The grammar covers two incompatible code families:
//!
//! - **Synchronous** (toothed): length first, then profile — `8008M` is an
//!   8M belt of 800 mm, `240L=30` a 240 L belt cut to 30 mm width.
//! - **V-belt** (wedge): profile first, then length — `B85`, `SPA2000`.
//!
//! Codes are whitespace-free by grammar; anything containing whitespace is
//! rejected outright. `parse` never fails — ambiguity collapses to
//! [`BeltKind::Unknown`].

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{BeltKind, ParsedQuery};

/// Known synchronous profile suffixes, most specific first.
///
/// The order is a disambiguation policy inherited from historical catalog
/// data, not alphabetical or length-sorted — `14M` must be tried before any
/// shorter suffix could claim its tail. Do not reorder.
pub const KNOWN_SYNC_PROFILES: [&str; 6] = ["14M", "T10", "T5", "8M", "L", "H"];

// 3V/5V/8V families are metric by convention despite the letter-digit shape
// of the inch-based classics, so they get their own rule ahead of both
// grammars.
static RE_VBELT_METRIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(3VX|5VX|3V|5V|8V)(\d+)$").unwrap());

// Generic synchronous split when no known suffix matches: digit run then a
// trailing alphanumeric run (at least one character).
static RE_SYNC_GENERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)([A-Z0-9]+)$").unwrap());

// V-belt: letters-only profile followed by the length.
static RE_VBELT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([A-Z]+)(\d+)$").unwrap());

// Candidate code embedded in free text: digit run + alphanumeric run, or
// letter run + digit run, optionally with an explicit `=NN` width. The
// digit-first arm deliberately admits pure-digit tokens ("500", "500=30");
// the caller's trust gate decides whether such a token is credible.
static RE_CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+[A-Z0-9]+|[A-Z]+\d+)(=\d+)?").unwrap());

/// Parse a belt code into a structured query.
///
/// Never fails; inputs outside the grammar yield [`ParsedQuery::unknown`].
pub fn parse(code: &str) -> ParsedQuery {
    let text = code.trim().to_uppercase();
    if text.chars().any(char::is_whitespace) {
        return ParsedQuery::unknown();
    }

    // Explicit width suffix: `=` is an unambiguous intent marker, so a
    // non-numeric width part invalidates the whole parse.
    let mut width = None;
    let mut base = text.as_str();
    if let Some((head, width_part)) = text.split_once('=') {
        if width_part.is_empty() || !width_part.bytes().all(|b| b.is_ascii_digit()) {
            return ParsedQuery::unknown();
        }
        match width_part.parse::<f64>() {
            Ok(w) => width = Some(w),
            Err(_) => return ParsedQuery::unknown(),
        }
        base = head;
    }

    // Metric V-belt exceptions: profile in the prefix, never inch-converted.
    if let Some(caps) = RE_VBELT_METRIC.captures(base) {
        return ParsedQuery {
            kind: BeltKind::VBelt,
            length_mm: caps[2].parse().ok(),
            profile: Some(caps[1].to_string()),
            width_mm: width,
        };
    }

    // Leading digit → synchronous, length-then-profile.
    if base.starts_with(|c: char| c.is_ascii_digit()) {
        for suffix in KNOWN_SYNC_PROFILES {
            if let Some(prefix) = base.strip_suffix(suffix) {
                return ParsedQuery {
                    kind: BeltKind::Synchronous,
                    // An unparseable prefix degrades the length, not the parse.
                    length_mm: prefix.parse().ok(),
                    profile: Some(suffix.to_string()),
                    width_mm: width,
                };
            }
        }
        if let Some(caps) = RE_SYNC_GENERIC.captures(base) {
            return ParsedQuery {
                kind: BeltKind::Synchronous,
                length_mm: caps[1].parse().ok(),
                profile: Some(caps[2].to_string()),
                width_mm: width,
            };
        }
        return ParsedQuery::unknown();
    }

    // Leading letters → V-belt, profile-then-length.
    if let Some(caps) = RE_VBELT.captures(base) {
        return ParsedQuery {
            kind: BeltKind::VBelt,
            length_mm: caps[2].parse().ok(),
            profile: Some(caps[1].to_string()),
            width_mm: width,
        };
    }

    ParsedQuery::unknown()
}

/// Find the first belt-code-shaped substring in free text.
///
/// Whitespace is stripped before scanning so codes survive stray spaces
/// ("800 8M") and surrounding words. Returns the matched token for a
/// re-parse; the caller decides whether the result is trustworthy.
pub fn scan_code_token(text: &str) -> Option<String> {
    let compact: String = text
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    RE_CODE_TOKEN.find(&compact).map(|m| m.as_str().to_string())
}
