//! # Core Models Module
//!
//! Data structures describing RNA sequences and their secondary structure.
//!
//! ## Key Components
//!
//! - [`nucleotide`] - The four-letter RNA alphabet, base pairs, and pair families
//! - [`structure`] - Structure requests, pairing maps, and designed sequences
//!
//! ## Usage
//!
//! ```
//! use rnadesign::core::models::nucleotide::Nucleotide;
//! use rnadesign::core::parser::parse;
//!
//! let pairing = parse("((..))").unwrap();
//! assert_eq!(pairing.partner(0), Some(5));
//! assert_eq!(Nucleotide::G.complement(), Nucleotide::C);
//! ```

pub mod nucleotide;
pub mod structure;
