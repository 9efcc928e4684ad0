//! Terminal raster graphics (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `term_raster::{core, term, types}` and hosts the demo
//! binaries.

pub use term_raster_core as core;
pub use term_raster_term as term;
pub use term_raster_types as types;

pub mod cli;
