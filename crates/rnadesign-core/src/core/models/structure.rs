use super::nucleotide::{BasePair, Nucleotide};
use serde::Serialize;
use std::fmt;

/// A design request: the declared sequence length and the dot-bracket constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructureSpec {
    pub sequence_length: usize,
    pub structure_pattern: String,
}

impl StructureSpec {
    pub fn new(sequence_length: usize, structure_pattern: impl Into<String>) -> Self {
        Self {
            sequence_length,
            structure_pattern: structure_pattern.into(),
        }
    }

    /// A request whose declared length is taken from the pattern itself.
    pub fn from_pattern(structure_pattern: impl Into<String>) -> Self {
        let structure_pattern = structure_pattern.into();
        Self {
            sequence_length: structure_pattern.chars().count(),
            structure_pattern,
        }
    }
}

/// Pair table over positions `0..len`.
///
/// `partner(i) == Some(j)` iff `partner(j) == Some(i)`, and no two pairs interleave.
/// Only the parser builds these, so both properties hold for every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PairingMap {
    partners: Vec<Option<usize>>,
}

impl PairingMap {
    pub(crate) fn from_partners(partners: Vec<Option<usize>>) -> Self {
        Self { partners }
    }

    pub fn len(&self) -> usize {
        self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partners.is_empty()
    }

    pub fn partner(&self, position: usize) -> Option<usize> {
        self.partners.get(position).copied().flatten()
    }

    pub fn is_paired(&self, position: usize) -> bool {
        self.partner(position).is_some()
    }

    pub fn partners(&self) -> &[Option<usize>] {
        &self.partners
    }

    /// Base pairs `(i, j)` with `i < j`, in increasing order of `i`.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partners
            .iter()
            .enumerate()
            .filter_map(|(i, partner)| partner.filter(|&j| j > i).map(|j| (i, j)))
    }

    pub fn pair_count(&self) -> usize {
        self.pairs().count()
    }

    pub fn unpaired_count(&self) -> usize {
        self.partners.iter().filter(|p| p.is_none()).count()
    }

    pub fn to_dot_bracket(&self) -> String {
        self.partners
            .iter()
            .enumerate()
            .map(|(i, partner)| match partner {
                None => '.',
                Some(j) if *j > i => '(',
                Some(_) => ')',
            })
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        self.partners.iter().enumerate().all(|(i, partner)| match partner {
            None => true,
            Some(j) => *j != i && self.partner(*j) == Some(i),
        })
    }

    pub fn is_non_crossing(&self) -> bool {
        self.pairs().all(|(i, j)| {
            (i + 1..j).all(|k| match self.partner(k) {
                None => true,
                Some(p) => i < p && p < j,
            })
        })
    }
}

/// A designed RNA sequence, one base per structure position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct DesignedSequence {
    bases: Vec<Nucleotide>,
}

impl DesignedSequence {
    pub(crate) fn new(bases: Vec<Nucleotide>) -> Self {
        Self { bases }
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    pub fn base_pair(&self, i: usize, j: usize) -> Option<BasePair> {
        Some(BasePair::new(*self.bases.get(i)?, *self.bases.get(j)?))
    }

    pub fn gc_content(&self) -> f64 {
        if self.bases.is_empty() {
            return 0.0;
        }
        let gc = self.bases.iter().filter(|b| b.is_gc()).count();
        gc as f64 / self.bases.len() as f64
    }

    /// Every pair of `pairing` carries a Watson–Crick complement.
    pub fn satisfies(&self, pairing: &PairingMap) -> bool {
        self.len() == pairing.len()
            && pairing.pairs().all(|(i, j)| {
                self.base_pair(i, j)
                    .is_some_and(|pair| pair.is_canonical())
            })
    }
}

impl fmt::Display for DesignedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in &self.bases {
            write!(f, "{}", base)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Nucleotide::*;

    fn hairpin() -> PairingMap {
        // "((..))"
        PairingMap::from_partners(vec![Some(5), Some(4), None, None, Some(1), Some(0)])
    }

    #[test]
    fn spec_from_pattern_uses_pattern_length() {
        let spec = StructureSpec::from_pattern("((...))");
        assert_eq!(spec.sequence_length, 7);
        assert_eq!(spec.structure_pattern, "((...))");
    }

    #[test]
    fn pairs_are_listed_outer_to_inner() {
        let map = hairpin();
        assert_eq!(map.pairs().collect::<Vec<_>>(), vec![(0, 5), (1, 4)]);
        assert_eq!(map.pair_count(), 2);
        assert_eq!(map.unpaired_count(), 2);
    }

    #[test]
    fn partner_lookup_handles_out_of_range_positions() {
        let map = hairpin();
        assert_eq!(map.partner(4), Some(1));
        assert_eq!(map.partner(2), None);
        assert_eq!(map.partner(99), None);
        assert!(!map.is_paired(99));
    }

    #[test]
    fn dot_bracket_rendering_matches_pairs() {
        assert_eq!(hairpin().to_dot_bracket(), "((..))");
    }

    #[test]
    fn symmetry_and_nesting_checks_reject_broken_tables() {
        assert!(hairpin().is_symmetric());
        assert!(hairpin().is_non_crossing());

        let asymmetric = PairingMap::from_partners(vec![Some(2), None, None]);
        assert!(!asymmetric.is_symmetric());

        // pairs (0,2) and (1,3) interleave
        let crossing = PairingMap::from_partners(vec![Some(2), Some(3), Some(0), Some(1)]);
        assert!(crossing.is_symmetric());
        assert!(!crossing.is_non_crossing());
    }

    #[test]
    fn designed_sequence_renders_and_reports_gc_content() {
        let seq = DesignedSequence::new(vec![G, C, A, U]);
        assert_eq!(seq.to_string(), "GCAU");
        assert_eq!(seq.gc_content(), 0.5);
        assert_eq!(DesignedSequence::new(vec![]).gc_content(), 0.0);
    }

    #[test]
    fn satisfies_checks_every_pair_for_complementarity() {
        let map = hairpin();
        let good = DesignedSequence::new(vec![G, A, C, C, U, C]);
        let bad = DesignedSequence::new(vec![G, A, C, C, U, A]);
        assert!(good.satisfies(&map));
        assert!(!bad.satisfies(&map));
        assert!(!DesignedSequence::new(vec![G, C]).satisfies(&map));
    }
}
