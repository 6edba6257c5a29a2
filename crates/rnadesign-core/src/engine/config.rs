//! Pair preference and batch settings.
//!
//! A [`PairPreference::Ratio`] weighs the GC family `gc_to_au : 1` against AU; the default
//! 7:3 draws GC pairs 70% of the time. [`PairPreference::Boltzmann`] derives the same two
//! weights from the nominal pair energies, with `beta` in mol/kcal.

use super::sampling::{SamplingError, boltzmann_weights};
use crate::core::models::nucleotide::PairFamily;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GC_TO_AU_RATIO: f64 = 7.0 / 3.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Invalid GC:AU preference ratio {0}; it must be positive and finite")]
    InvalidRatio(f64),

    #[error("Invalid beta {0}; it must be positive and finite")]
    InvalidBeta(f64),

    #[error("Number of designs must be at least 1")]
    ZeroDesigns,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum PairPreference {
    Ratio {
        #[serde(rename = "gc-to-au")]
        gc_to_au: f64,
    },
    Boltzmann { beta: f64 },
}

impl Default for PairPreference {
    fn default() -> Self {
        PairPreference::Ratio {
            gc_to_au: DEFAULT_GC_TO_AU_RATIO,
        }
    }
}

impl PairPreference {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            PairPreference::Ratio { gc_to_au } if !(gc_to_au > 0.0 && gc_to_au.is_finite()) => {
                Err(ConfigError::InvalidRatio(gc_to_au))
            }
            PairPreference::Boltzmann { beta } if !(beta > 0.0 && beta.is_finite()) => {
                Err(ConfigError::InvalidBeta(beta))
            }
            _ => Ok(()),
        }
    }

    pub fn family_weights(&self) -> Result<(f64, f64), SamplingError> {
        match *self {
            PairPreference::Ratio { gc_to_au } => Ok((gc_to_au, 1.0)),
            PairPreference::Boltzmann { beta } => {
                let weights =
                    boltzmann_weights(&[PairFamily::GC.energy(), PairFamily::AU.energy()], beta)?;
                Ok((weights[0], weights[1]))
            }
        }
    }

    pub fn expected_gc_fraction(&self) -> Result<f64, SamplingError> {
        let (gc, au) = self.family_weights()?;
        Ok(gc / (gc + au))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesignConfig {
    pub preference: PairPreference,
    pub seed: Option<u64>,
    pub num_designs: usize,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            preference: PairPreference::default(),
            seed: None,
            num_designs: 1,
        }
    }
}

#[derive(Default)]
pub struct DesignConfigBuilder {
    preference: Option<PairPreference>,
    seed: Option<u64>,
    num_designs: Option<usize>,
}

impl DesignConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preference(mut self, preference: PairPreference) -> Self {
        self.preference = Some(preference);
        self
    }
    pub fn gc_to_au_ratio(mut self, ratio: f64) -> Self {
        self.preference = Some(PairPreference::Ratio { gc_to_au: ratio });
        self
    }
    pub fn boltzmann_beta(mut self, beta: f64) -> Self {
        self.preference = Some(PairPreference::Boltzmann { beta });
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
    pub fn num_designs(mut self, n: usize) -> Self {
        self.num_designs = Some(n);
        self
    }

    pub fn build(self) -> Result<DesignConfig, ConfigError> {
        let preference = self.preference.unwrap_or_default();
        preference.validate()?;

        let num_designs = self.num_designs.unwrap_or(1);
        if num_designs == 0 {
            return Err(ConfigError::ZeroDesigns);
        }

        Ok(DesignConfig {
            preference,
            seed: self.seed,
            num_designs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_to_a_single_unseeded_design() {
        let config = DesignConfigBuilder::new().build().unwrap();
        assert_eq!(config, DesignConfig::default());
        assert_eq!(config.num_designs, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn default_preference_favours_gc_seventy_percent() {
        let fraction = PairPreference::default().expected_gc_fraction().unwrap();
        assert!((fraction - 0.7).abs() < 1e-12);
    }

    #[test]
    fn builder_rejects_invalid_ratio_and_beta() {
        assert_eq!(
            DesignConfigBuilder::new().gc_to_au_ratio(0.0).build(),
            Err(ConfigError::InvalidRatio(0.0))
        );
        assert!(matches!(
            DesignConfigBuilder::new().gc_to_au_ratio(f64::INFINITY).build(),
            Err(ConfigError::InvalidRatio(_))
        ));
        assert_eq!(
            DesignConfigBuilder::new().boltzmann_beta(-1.0).build(),
            Err(ConfigError::InvalidBeta(-1.0))
        );
    }

    #[test]
    fn builder_rejects_zero_designs() {
        assert_eq!(
            DesignConfigBuilder::new().num_designs(0).build(),
            Err(ConfigError::ZeroDesigns)
        );
    }

    #[test]
    fn ratio_below_one_favours_au() {
        let preference = PairPreference::Ratio { gc_to_au: 0.5 };
        assert!(preference.validate().is_ok());
        let fraction = preference.expected_gc_fraction().unwrap();
        assert!((fraction - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn boltzmann_preference_uses_the_pair_energy_gap() {
        let preference = PairPreference::Boltzmann { beta: 2.0 };
        let (gc, au) = preference.family_weights().unwrap();
        // GC is 1 kcal/mol more stable than AU
        assert!((gc / au - 2.0f64.exp()).abs() < 1e-9);
    }
}
