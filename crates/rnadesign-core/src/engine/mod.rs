//! # Engine Module
//!
//! The generative half of the library: everything that draws random numbers or
//! carries design settings lives here.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Pair preference (GC:AU ratio or Boltzmann factor), seed, batch size
//! - **Sampling** ([`sampling`]) - Weighted pair-family sampler and uniform unpaired draws
//! - **Designer** ([`designer`]) - Single-pass assignment of bases to a pairing map
//! - **State** ([`state`]) - Scored designs and batch results
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for batch runs
//! - **Error Handling** ([`error`]) - The unified [`error::EngineError`]
//!
//! Nothing here keeps state between calls. Reproducibility comes from the caller
//! supplying a seed; see [`crate::workflows::design`].

pub mod config;
pub mod designer;
pub mod error;
pub mod progress;
pub mod sampling;
pub mod state;
