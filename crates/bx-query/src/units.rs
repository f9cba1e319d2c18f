//! Length unit normalization.
//!
//! Classic V-belt profiles A–E are inch-denominated in trade codes ("B85"
//! is 85 inches), while the catalog stores millimeters. The 3V/5V/8V
//! families look similar but are metric by convention and must pass
//! through untouched.

use crate::types::BeltKind;

/// V-belt profiles whose code length is inches.
pub const INCH_PROFILES: [&str; 5] = ["A", "B", "C", "D", "E"];

const MM_PER_INCH: f64 = 25.4;

/// Convert a parsed length to the catalog's millimeter scale.
///
/// Applies inch→mm conversion only for V-belts with a classic profile;
/// every other kind/profile combination is already metric. Must run
/// exactly once per request, after parsing and before building length
/// filters — running it twice double-converts.
pub fn normalize_length(kind: BeltKind, profile: Option<&str>, length_mm: Option<f64>) -> Option<f64> {
    match (kind, profile, length_mm) {
        (BeltKind::VBelt, Some(p), Some(l))
            if INCH_PROFILES.iter().any(|ip| ip.eq_ignore_ascii_case(p)) =>
        {
            Some(l * MM_PER_INCH)
        }
        _ => length_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_vbelt_converts_inches() {
        assert_eq!(
            normalize_length(BeltKind::VBelt, Some("B"), Some(85.0)),
            Some(2159.0)
        );
        assert_eq!(
            normalize_length(BeltKind::VBelt, Some("A"), Some(79.0)),
            Some(2006.6)
        );
    }

    #[test]
    fn metric_exception_profiles_untouched() {
        assert_eq!(
            normalize_length(BeltKind::VBelt, Some("3V"), Some(85.0)),
            Some(85.0)
        );
        assert_eq!(
            normalize_length(BeltKind::VBelt, Some("5VX"), Some(600.0)),
            Some(600.0)
        );
    }

    #[test]
    fn narrow_profiles_untouched() {
        assert_eq!(
            normalize_length(BeltKind::VBelt, Some("SPA"), Some(2000.0)),
            Some(2000.0)
        );
    }

    #[test]
    fn synchronous_never_converts() {
        assert_eq!(
            normalize_length(BeltKind::Synchronous, Some("8M"), Some(800.0)),
            Some(800.0)
        );
        // Even a profile that shadows a classic letter.
        assert_eq!(
            normalize_length(BeltKind::Synchronous, Some("L"), Some(240.0)),
            Some(240.0)
        );
    }

    #[test]
    fn missing_pieces_pass_through() {
        assert_eq!(normalize_length(BeltKind::VBelt, None, Some(85.0)), Some(85.0));
        assert_eq!(normalize_length(BeltKind::VBelt, Some("B"), None), None);
        assert_eq!(normalize_length(BeltKind::Unknown, Some("B"), Some(85.0)), Some(85.0));
    }

    #[test]
    fn lowercase_profile_still_converts() {
        assert_eq!(
            normalize_length(BeltKind::VBelt, Some("b"), Some(100.0)),
            Some(2540.0)
        );
    }
}
