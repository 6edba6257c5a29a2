use super::models::nucleotide::{BasePair, Nucleotide};
use super::models::structure::PairingMap;
use super::parser::{self, StructureError};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AnalysisError {
    #[error("sequence is empty")]
    EmptySequence,

    #[error("sequence has {sequence} bases but the structure has {structure} positions")]
    LengthMismatch { sequence: usize, structure: usize },

    #[error("invalid base '{symbol}' at position {position}; expected one of A, C, G, U")]
    InvalidBase { symbol: char, position: usize },

    #[error(transparent)]
    Structure(#[from] StructureError),
}

/// Composition report for a sequence folded onto a dot-bracket structure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructureInfo {
    pub sequence: String,
    pub structure: String,
    pub length: usize,
    pub gc_content: f64,
    pub pair_count: usize,
    /// Sum of nominal pair energies (kcal/mol) over the canonical pairs.
    pub pair_energy: f64,
    /// Pairs whose bases are not Watson–Crick complements.
    pub noncanonical_pairs: Vec<(usize, usize)>,
    pub pairing: PairingMap,
}

impl StructureInfo {
    pub fn is_fully_complementary(&self) -> bool {
        self.noncanonical_pairs.is_empty()
    }
}

/// Computes composition statistics for an externally supplied sequence/structure pair.
///
/// The structure is re-parsed here so this can be used independently of the designer.
/// Checks run in order: lengths, bases, then the structure itself.
#[instrument(level = "debug", skip_all, fields(len = sequence.len()))]
pub fn analyze(sequence: &str, structure_pattern: &str) -> Result<StructureInfo, AnalysisError> {
    let sequence_len = sequence.chars().count();
    let structure_len = structure_pattern.chars().count();
    if sequence_len != structure_len {
        return Err(AnalysisError::LengthMismatch {
            sequence: sequence_len,
            structure: structure_len,
        });
    }
    if sequence_len == 0 {
        return Err(AnalysisError::EmptySequence);
    }

    let bases = sequence
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            Nucleotide::try_from(symbol)
                .map_err(|e| AnalysisError::InvalidBase { symbol: e.symbol, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pairing = parser::parse(structure_pattern)?;

    let gc = bases.iter().filter(|b| b.is_gc()).count();
    let gc_content = gc as f64 / bases.len() as f64;

    let mut pair_energy = 0.0;
    let mut noncanonical_pairs = Vec::new();
    for (i, j) in pairing.pairs() {
        match BasePair::new(bases[i], bases[j]).energy() {
            Some(energy) => pair_energy += energy,
            None => noncanonical_pairs.push((i, j)),
        }
    }

    Ok(StructureInfo {
        sequence: sequence.to_string(),
        structure: structure_pattern.to_string(),
        length: bases.len(),
        gc_content,
        pair_count: pairing.pair_count(),
        pair_energy,
        noncanonical_pairs,
        pairing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::nucleotide::{AU_PAIR_ENERGY, GC_PAIR_ENERGY};

    #[test]
    fn reports_composition_of_a_hairpin() {
        let info = analyze("GAAAAUC", "((...))").unwrap();
        assert_eq!(info.length, 7);
        assert_eq!(info.structure, "((...))");
        assert_eq!(info.sequence, "GAAAAUC");
        assert_eq!(info.pair_count, 2);
        assert!((info.gc_content - 2.0 / 7.0).abs() < 1e-12);
        assert_eq!(info.pair_energy, GC_PAIR_ENERGY + AU_PAIR_ENERGY);
        assert!(info.is_fully_complementary());
        assert_eq!(info.pairing.partner(1), Some(5));
    }

    #[test]
    fn gc_content_spans_the_unit_interval() {
        assert_eq!(analyze("AUAU", "....").unwrap().gc_content, 0.0);
        assert_eq!(analyze("GCGC", "....").unwrap().gc_content, 1.0);
    }

    #[test]
    fn noncanonical_pairs_are_reported_not_rejected() {
        let info = analyze("GAAAAAG", "((...))").unwrap();
        assert_eq!(info.noncanonical_pairs, vec![(0, 6), (1, 5)]);
        assert_eq!(info.pair_energy, 0.0);
        assert!(!info.is_fully_complementary());
    }

    #[test]
    fn length_mismatch_is_checked_first() {
        assert_eq!(
            analyze("GXC", "(("),
            Err(AnalysisError::LengthMismatch {
                sequence: 3,
                structure: 2
            })
        );
    }

    #[test]
    fn invalid_bases_report_their_position() {
        assert_eq!(
            analyze("GCTA", "...."),
            Err(AnalysisError::InvalidBase {
                symbol: 'T',
                position: 2
            })
        );
        assert!(matches!(
            analyze("gc", ".."),
            Err(AnalysisError::InvalidBase { position: 0, .. })
        ));
    }

    #[test]
    fn malformed_structures_are_rejected() {
        assert_eq!(
            analyze("GC", ")("),
            Err(AnalysisError::Structure(StructureError::UnmatchedClosing {
                position: 0
            }))
        );
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(analyze("", ""), Err(AnalysisError::EmptySequence));
    }
}
