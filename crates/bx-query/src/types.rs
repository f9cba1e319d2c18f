//! Core query types shared across parsing, search, and the API surface.

use serde::{Deserialize, Serialize};

// ── Belt Kind ─────────────────────────────────────────────────

/// Belt code family. Determines which grammar the code follows:
/// synchronous belts are length-then-profile, V-belts profile-then-length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BeltKind {
    /// Wedge cross-section belt ("B85", "SPA2000", "3V850").
    VBelt,
    /// Toothed/timing belt ("8008M", "240L", "630T5").
    Synchronous,
    /// Input did not match either grammar.
    #[default]
    Unknown,
}

impl BeltKind {
    /// Parse the wire token used by the extraction oracle ("vbelt",
    /// "synchronous"). Anything else is `Unknown`.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "vbelt" => Self::VBelt,
            "synchronous" => Self::Synchronous,
            _ => Self::Unknown,
        }
    }
}

// ── Parsed Query ──────────────────────────────────────────────

/// A belt code normalized into structured form.
///
/// Invariant: `kind == Unknown` implies length, profile, and width are all
/// `None` — downstream stages never look at fields of an unknown query.
/// `length_mm` is the length as written in the code; inch conversion for
/// classic V-belt profiles happens later, in [`crate::units`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub kind: BeltKind,
    pub length_mm: Option<f64>,
    /// Uppercase cross-section / tooth profile token ("14M", "A", "SPA").
    pub profile: Option<String>,
    /// Explicit width from a `=NN` suffix, millimeters.
    pub width_mm: Option<f64>,
}

impl ParsedQuery {
    /// The failure value: nothing recognized.
    pub fn unknown() -> Self {
        Self {
            kind: BeltKind::Unknown,
            length_mm: None,
            profile: None,
            width_mm: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == BeltKind::Unknown
    }
}

// ── Warehouse ─────────────────────────────────────────────────

/// Fulfillment location, derived from code shape (never persisted on its
/// own). The catalog stores the literal Russian location names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Warehouse {
    Moscow,
    Strunino,
}

impl Warehouse {
    /// The literal value stored in the catalog's `warehouse` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moscow => "Москва",
            Self::Strunino => "Струнино",
        }
    }
}

impl std::fmt::Display for Warehouse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Extraction Fields ─────────────────────────────────────────

/// Raw output of the extraction oracle. Every field is independently
/// nullable and untrusted — numbers may arrive as strings, `kind` may be
/// garbage. [`ExtractionFields::validate`] coerces this into a
/// [`ParsedQuery`], downgrading anything that does not check out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionFields {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub length_mm: Option<serde_json::Value>,
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub width_mm: Option<serde_json::Value>,
}

impl ExtractionFields {
    /// Coerce untrusted oracle output into a structured query.
    ///
    /// `kind` outside the known set becomes `Unknown` (and per the
    /// invariant, the other fields are dropped). Numeric fields that fail
    /// coercion or are non-positive become `None` rather than failing the
    /// whole extraction.
    pub fn validate(&self) -> ParsedQuery {
        let kind = self
            .kind
            .as_deref()
            .map(BeltKind::from_wire)
            .unwrap_or(BeltKind::Unknown);

        if kind == BeltKind::Unknown {
            return ParsedQuery::unknown();
        }

        let profile = self
            .profile
            .as_deref()
            .map(|p| p.trim().to_uppercase())
            .filter(|p| !p.is_empty());

        ParsedQuery {
            kind,
            length_mm: self.length_mm.as_ref().and_then(coerce_positive),
            profile,
            width_mm: self.width_mm.as_ref().and_then(coerce_positive),
        }
    }
}

/// Coerce a JSON number or numeric string to a positive finite f64.
fn coerce_positive(value: &serde_json::Value) -> Option<f64> {
    let n = match value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n > 0.0).then_some(n)
}
