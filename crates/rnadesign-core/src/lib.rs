//! # rnadesign Core Library
//!
//! Designs RNA nucleotide sequences that satisfy a secondary-structure constraint written
//! in dot-bracket notation, favouring the more stable G–C pairs over A–U pairs.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Nucleotide`, `PairingMap`,
//!   `DesignedSequence`), the dot-bracket parser, and the sequence/structure analyzer.
//!
//! - **[`engine`]: The Logic Core.** Design configuration, the weighted pair sampler, the
//!   `Designer` that turns a pairing relation into a sequence, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Entry points that validate caller input and run
//!   complete procedures: parsing, single and batch design, and structure analysis.

pub mod core;
pub mod engine;
pub mod workflows;
