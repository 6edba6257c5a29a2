use crate::core::models::structure::{PairingMap, StructureSpec};
use crate::core::parser::{self, StructureDiagnostics};
use crate::engine::error::EngineError;
use tracing::{debug, instrument, warn};

pub fn parse_and_validate(
    sequence_length: usize,
    structure_pattern: &str,
) -> Result<PairingMap, EngineError> {
    validate_structure(&StructureSpec::new(sequence_length, structure_pattern))
}

#[instrument(level = "debug", skip_all, fields(len = spec.sequence_length))]
pub fn validate_structure(spec: &StructureSpec) -> Result<PairingMap, EngineError> {
    parser::validate_spec(spec)?;
    let pairing = parser::parse(&spec.structure_pattern)?;
    debug!(
        pairs = pairing.pair_count(),
        unpaired = pairing.unpaired_count(),
        "Structure validated."
    );
    Ok(pairing)
}

pub fn diagnose_structure(structure_pattern: &str) -> StructureDiagnostics {
    let report = parser::diagnose(structure_pattern);
    if !report.is_valid() {
        warn!(issues = report.issues.len(), "Structure has issues.");
    }
    report
}
