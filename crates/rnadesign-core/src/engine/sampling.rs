//! Random draws for the designer: a weighted choice between the GC and AU pair families
//! followed by a fair coin for orientation, and uniform draws for unpaired bases.

use crate::core::models::nucleotide::{BasePair, Nucleotide, PairFamily};
use rand::{
    distributions::{Distribution, WeightedIndex},
    prelude::*,
};
use thiserror::Error;
use tracing::instrument;

const FAMILIES: [PairFamily; 2] = [PairFamily::GC, PairFamily::AU];

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("Input energies list is empty, cannot derive sampling weights")]
    EmptyEnergies,
    #[error("Invalid beta value: {0}. Beta must be positive and finite for Boltzmann weighting")]
    InvalidBeta(f64),
    #[error("Failed to create weighted distribution: {source}")]
    DistributionError {
        #[from]
        source: rand::distributions::WeightedError,
    },
}

#[instrument(level = "trace", skip_all, fields(beta = beta))]
pub fn boltzmann_weights(energies: &[f64], beta: f64) -> Result<Vec<f64>, SamplingError> {
    if energies.is_empty() {
        return Err(SamplingError::EmptyEnergies);
    }
    if !(beta > 0.0 && beta.is_finite()) {
        return Err(SamplingError::InvalidBeta(beta));
    }

    let min_energy = energies.iter().copied().fold(f64::INFINITY, f64::min);

    Ok(energies
        .iter()
        .map(|&e| (-(e - min_energy) * beta).exp())
        .collect())
}

#[derive(Debug, Clone)]
pub struct PairSampler {
    families: WeightedIndex<f64>,
}

impl PairSampler {
    pub fn new(gc_weight: f64, au_weight: f64) -> Result<Self, SamplingError> {
        let families = WeightedIndex::new([gc_weight, au_weight])?;
        Ok(Self { families })
    }

    pub fn sample_family<R: Rng + ?Sized>(&self, rng: &mut R) -> PairFamily {
        FAMILIES[self.families.sample(rng)]
    }

    pub fn sample_pair<R: Rng + ?Sized>(&self, rng: &mut R) -> BasePair {
        let [forward, reverse] = self.sample_family(rng).orientations();
        if rng.gen_bool(0.5) { forward } else { reverse }
    }
}

pub fn sample_unpaired<R: Rng + ?Sized>(rng: &mut R) -> Nucleotide {
    Nucleotide::ALL[rng.gen_range(0..Nucleotide::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn boltzmann_weights_normalize_to_the_lowest_energy() {
        let weights = boltzmann_weights(&[-3.0, -2.0], 1.0).unwrap();
        assert!((weights[0] - 1.0).abs() < 1e-12);
        assert!((weights[1] - (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn boltzmann_weights_reject_bad_input() {
        assert!(matches!(
            boltzmann_weights(&[], 1.0),
            Err(SamplingError::EmptyEnergies)
        ));
        assert!(matches!(
            boltzmann_weights(&[-1.0], 0.0),
            Err(SamplingError::InvalidBeta(_))
        ));
        assert!(matches!(
            boltzmann_weights(&[-1.0], f64::NAN),
            Err(SamplingError::InvalidBeta(_))
        ));
    }

    #[test]
    fn sampler_rejects_degenerate_weights() {
        assert!(PairSampler::new(0.0, 0.0).is_err());
        assert!(PairSampler::new(-1.0, 1.0).is_err());
    }

    #[test]
    fn sampled_pairs_are_always_watson_crick() {
        let sampler = PairSampler::new(2.0, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(sampler.sample_pair(&mut rng).is_canonical());
        }
    }

    #[test]
    fn gc_family_fraction_converges_to_weight_ratio() {
        let ratio = 3.0;
        let sampler = PairSampler::new(ratio, 1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 20_000;
        let gc = (0..draws)
            .filter(|_| sampler.sample_family(&mut rng) == PairFamily::GC)
            .count();
        let observed = gc as f64 / draws as f64;
        let expected = ratio / (ratio + 1.0);
        assert!(
            (observed - expected).abs() < 0.02,
            "observed {observed}, expected {expected}"
        );
    }

    #[test]
    fn both_orientations_are_drawn_within_a_family() {
        let sampler = PairSampler::new(1.0, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let pairs: Vec<_> = (0..200).map(|_| sampler.sample_pair(&mut rng)).collect();
        assert!(pairs.iter().all(|p| p.family() == Some(PairFamily::GC)));
        assert!(pairs.iter().any(|p| p.five_prime == Nucleotide::G));
        assert!(pairs.iter().any(|p| p.five_prime == Nucleotide::C));
    }

    #[test]
    fn unpaired_draws_cover_the_alphabet() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let base = sample_unpaired(&mut rng);
            let idx = Nucleotide::ALL.iter().position(|&b| b == base).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
