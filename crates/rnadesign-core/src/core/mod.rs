//! # Core Module
//!
//! Stateless building blocks for RNA secondary-structure design.
//!
//! ## Architecture
//!
//! - **Models** ([`models`]) - Nucleotides, base pairs, pairing maps, and designed sequences
//! - **Parsing** ([`parser`]) - Dot-bracket validation and conversion into a [`models::structure::PairingMap`]
//! - **Analysis** ([`analysis`]) - Composition statistics for a finished sequence/structure pair
//! - **Loops** ([`loops`]) - Stem, hairpin, bulge, interior, and multiloop counts for a set of pairs
//!
//! Nothing in this module holds state across calls or draws random numbers; randomness
//! lives entirely in [`crate::engine`].

pub mod analysis;
pub mod loops;
pub mod models;
pub mod parser;
