use crate::core::analysis::{self, StructureInfo};
use crate::engine::error::EngineError;
use tracing::{info, instrument};

#[instrument(skip_all, name = "analysis_workflow")]
pub fn get_structure_info(
    sequence: &str,
    structure_pattern: &str,
) -> Result<StructureInfo, EngineError> {
    let info = analysis::analyze(sequence, structure_pattern)?;
    info!(
        length = info.length,
        gc_content = info.gc_content,
        pairs = info.pair_count,
        "Structure analysed."
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::{LengthError, StructureError};

    #[test]
    fn gc_content_matches_base_counts() {
        let sequence = "GGCAUACGCC";
        let info = get_structure_info(sequence, "(((....)))").unwrap();
        let gc = sequence.chars().filter(|c| matches!(c, 'G' | 'C')).count();
        assert_eq!(info.gc_content, gc as f64 / sequence.len() as f64);
        assert!((0.0..=1.0).contains(&info.gc_content));
    }

    #[test]
    fn analyzer_errors_map_to_engine_errors() {
        assert!(matches!(
            get_structure_info("GC", "..."),
            Err(EngineError::LengthMismatch {
                sequence: 2,
                structure: 3
            })
        ));
        assert!(matches!(
            get_structure_info("GTC", "..."),
            Err(EngineError::InvalidBase {
                symbol: 'T',
                position: 1
            })
        ));
        assert!(matches!(
            get_structure_info("GC", "(("),
            Err(EngineError::MalformedStructure(
                StructureError::UnmatchedOpening { .. }
            ))
        ));
        assert!(matches!(
            get_structure_info("", ""),
            Err(EngineError::InvalidLength(LengthError::Empty))
        ));
    }
}
