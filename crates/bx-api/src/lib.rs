//! Beltimpex search API — library crate for the belt catalog server.
//!
//! Re-exports all modules so the binary (`main.rs`) and the e2e test
//! crate can access internal types like `AppState`, `build_router`, and
//! `ExtractionOracle`.

pub mod config;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod routes;
pub mod state;
