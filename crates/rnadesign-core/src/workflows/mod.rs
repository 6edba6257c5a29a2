//! # Workflows Module
//!
//! Top-level entry points of the library. Each workflow validates caller input,
//! runs the engine, and returns owned results; none keeps state between calls.
//!
//! - **Validation** ([`validate`]) - `parse_and_validate` and non-failing structure diagnostics
//! - **Design** ([`design`]) - `design_structure` for one sequence and [`design::run`] for seeded batches
//! - **Analysis** ([`analyze`]) - `get_structure_info` for any sequence/structure pair

pub mod analyze;
pub mod design;
pub mod validate;

pub use analyze::get_structure_info;
pub use design::design_structure;
pub use validate::parse_and_validate;
