//! Single and batch sequence design.
//!
//! Design `k` of a batch draws from a generator seeded with `seed + k`, so a seeded
//! batch is identical whatever the thread count and its first design equals [`design`].

use super::validate::validate_structure;
use crate::core::models::structure::{DesignedSequence, PairingMap, StructureSpec};
use crate::engine::config::{DesignConfig, DesignConfigBuilder};
use crate::engine::designer::Designer;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{BatchResult, ScoredDesign};
use rand::{SeedableRng, rngs::StdRng};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

pub fn design_structure(
    sequence_length: usize,
    structure_pattern: &str,
    preference_weight: Option<f64>,
    random_seed: Option<u64>,
) -> Result<DesignedSequence, EngineError> {
    let mut builder = DesignConfigBuilder::new().seed(random_seed);
    if let Some(ratio) = preference_weight {
        builder = builder.gc_to_au_ratio(ratio);
    }
    let config = builder.build()?;
    design(&StructureSpec::new(sequence_length, structure_pattern), &config)
}

#[instrument(skip_all, fields(len = spec.sequence_length))]
pub fn design(spec: &StructureSpec, config: &DesignConfig) -> Result<DesignedSequence, EngineError> {
    let pairing = validate_structure(spec)?;
    let designer = Designer::new(&config.preference)?;
    let sequence = designer.design(&pairing, &mut rng_for(config.seed, 0));
    debug_assert!(sequence.satisfies(&pairing));
    debug!(%sequence, "Sequence designed.");
    Ok(sequence)
}

#[instrument(skip_all, name = "design_workflow")]
pub fn run(
    spec: &StructureSpec,
    config: &DesignConfig,
    reporter: &ProgressReporter,
) -> Result<BatchResult, EngineError> {
    let pairing = validate_structure(spec)?;
    let designer = Designer::new(&config.preference)?;

    if let Ok(fraction) = config.preference.expected_gc_fraction() {
        debug!(expected_gc_pairs = fraction, "Pair sampler ready.");
    }
    info!(
        designs = config.num_designs,
        pairs = pairing.pair_count(),
        seeded = config.seed.is_some(),
        "Starting batch design."
    );
    reporter.report(Progress::BatchStart {
        total_designs: config.num_designs as u64,
    });

    let designs: Vec<ScoredDesign> = (0..config.num_designs)
        .into_par_iter()
        .map(|index| {
            let sequence = designer.design(&pairing, &mut rng_for(config.seed, index));
            let scored = score(index, sequence, &pairing);
            reporter.report(Progress::DesignComplete {
                index,
                pair_energy: scored.pair_energy,
            });
            scored
        })
        .collect();

    reporter.report(Progress::BatchFinish);
    info!("Batch complete. Returning {} design(s).", designs.len());
    Ok(BatchResult { designs })
}

fn rng_for(seed: Option<u64>, index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    }
}

fn score(index: usize, sequence: DesignedSequence, pairing: &PairingMap) -> ScoredDesign {
    let pair_energy: f64 = pairing
        .pairs()
        .filter_map(|(i, j)| sequence.base_pair(i, j).and_then(|p| p.energy()))
        .sum();
    ScoredDesign {
        index,
        gc_content: sequence.gc_content(),
        sequence,
        pair_energy,
    }
}
