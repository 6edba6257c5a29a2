use crate::core::models::structure::DesignedSequence;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDesign {
    pub index: usize,
    pub sequence: DesignedSequence,
    pub gc_content: f64,
    pub pair_energy: f64,
}

impl ScoredDesign {
    // Lower pair energy ranks first; ties fall back to batch order.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.pair_energy
            .total_cmp(&other.pair_energy)
            .then_with(|| self.index.cmp(&other.index))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub designs: Vec<ScoredDesign>,
}

impl BatchResult {
    pub fn ranked(&self) -> Vec<&ScoredDesign> {
        let mut ranked: Vec<_> = self.designs.iter().collect();
        ranked.sort_by(|a, b| a.rank_cmp(b));
        ranked
    }

    pub fn best(&self) -> Option<&ScoredDesign> {
        self.designs.iter().min_by(|a, b| a.rank_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::nucleotide::Nucleotide;

    fn scored(index: usize, pair_energy: f64) -> ScoredDesign {
        scored_with(index, pair_energy, vec![Nucleotide::A])
    }

    fn scored_with(index: usize, pair_energy: f64, bases: Vec<Nucleotide>) -> ScoredDesign {
        ScoredDesign {
            index,
            sequence: DesignedSequence::new(bases),
            gc_content: 0.0,
            pair_energy,
        }
    }

    #[test]
    fn ranking_orders_by_energy_then_index() {
        let batch = BatchResult {
            designs: vec![scored(0, -5.0), scored(1, -7.0), scored(2, -5.0)],
        };
        let order: Vec<_> = batch.ranked().iter().map(|d| d.index).collect();
        assert_eq!(order, vec![1, 0, 2]);
        assert_eq!(batch.best().map(|d| d.index), Some(1));
    }

    #[test]
    fn empty_batch_has_no_best_design() {
        assert!(BatchResult::default().best().is_none());
    }

    #[test]
    fn equality_compares_the_sequence_too() {
        let gc = scored_with(0, -3.0, vec![Nucleotide::G, Nucleotide::C]);
        let cg = scored_with(0, -3.0, vec![Nucleotide::C, Nucleotide::G]);
        assert_ne!(gc, cg);
        assert_eq!(gc, gc.clone());

        let batch = BatchResult {
            designs: vec![cg.clone(), gc.clone()],
        };
        assert_eq!(batch.ranked(), vec![&cg, &gc]);
    }
}
