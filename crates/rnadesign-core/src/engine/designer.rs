use super::config::PairPreference;
use super::error::EngineError;
use super::sampling::{PairSampler, sample_unpaired};
use crate::core::models::structure::{DesignedSequence, PairingMap};
use rand::Rng;
use tracing::{instrument, trace};

/// Turns a validated pairing map into a sequence.
///
/// Holds only the pair sampler; each call to [`Designer::design`] draws from the
/// generator it is handed, so a designer can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct Designer {
    sampler: PairSampler,
}

impl Designer {
    pub fn new(preference: &PairPreference) -> Result<Self, EngineError> {
        preference.validate()?;
        let (gc, au) = preference.family_weights()?;
        Ok(Self {
            sampler: PairSampler::new(gc, au)?,
        })
    }

    /// Fills the sequence in a single left-to-right pass.
    ///
    /// An opening position draws its whole pair and writes both ends; a closing
    /// position was already written by its partner; an unpaired position draws a
    /// uniform base.
    #[instrument(level = "debug", skip_all, fields(len = pairing.len()))]
    pub fn design<R: Rng + ?Sized>(&self, pairing: &PairingMap, rng: &mut R) -> DesignedSequence {
        let mut bases = vec![None; pairing.len()];

        for i in 0..pairing.len() {
            match pairing.partner(i) {
                Some(j) if j > i => {
                    let pair = self.sampler.sample_pair(rng);
                    trace!(i, j, %pair, "Assigned base pair.");
                    bases[i] = Some(pair.five_prime);
                    bases[j] = Some(pair.three_prime);
                }
                Some(_) => debug_assert!(bases[i].is_some()),
                None => bases[i] = Some(sample_unpaired(rng)),
            }
        }

        DesignedSequence::new(bases.into_iter().flatten().collect())
    }
}
