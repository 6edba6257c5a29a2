use thiserror::Error;

use super::config::ConfigError;
use super::sampling::SamplingError;
use crate::core::analysis::AnalysisError;
use crate::core::parser::{LengthError, StructureError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed structure: {0}")]
    MalformedStructure(#[from] StructureError),

    #[error("Invalid length: {0}")]
    InvalidLength(#[from] LengthError),

    #[error("Length mismatch: sequence has {sequence} bases but structure has {structure} positions")]
    LengthMismatch { sequence: usize, structure: usize },

    #[error("Invalid base '{symbol}' at position {position}")]
    InvalidBase { symbol: char, position: usize },

    #[error("Invalid design configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Pair sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },
}

impl From<AnalysisError> for EngineError {
    fn from(err: AnalysisError) -> Self {
        match err {
            AnalysisError::EmptySequence => EngineError::InvalidLength(LengthError::Empty),
            AnalysisError::LengthMismatch {
                sequence,
                structure,
            } => EngineError::LengthMismatch {
                sequence,
                structure,
            },
            AnalysisError::InvalidBase { symbol, position } => {
                EngineError::InvalidBase { symbol, position }
            }
            AnalysisError::Structure(e) => EngineError::MalformedStructure(e),
        }
    }
}
