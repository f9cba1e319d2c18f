//! Belt code grammar for the Beltimpex catalog.
//!
//! Turns free-form product codes ("8008M", "SPA2000", "B85", "240L=30")
//! into a structured [`ParsedQuery`], converts inch-denominated classic
//! V-belt lengths to millimeters, and routes codes to the warehouse that
//! stocks the family. Everything in this crate is pure and synchronous.

pub mod parser;
pub mod route;
pub mod types;
pub mod units;

pub use parser::{KNOWN_SYNC_PROFILES, parse, scan_code_token};
pub use route::{STRUNINO_PREFIXES, route_structured, route_text};
pub use types::{BeltKind, ExtractionFields, ParsedQuery, Warehouse};
pub use units::{INCH_PROFILES, normalize_length};
