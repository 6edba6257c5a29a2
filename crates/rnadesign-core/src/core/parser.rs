use super::loops::{self, LoopSummary};
use super::models::structure::{PairingMap, StructureSpec};
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StructureError {
    #[error("invalid character '{symbol}' at position {position}; expected '.', '(' or ')'")]
    InvalidCharacter { symbol: char, position: usize },

    #[error("unmatched closing bracket at position {position}")]
    UnmatchedClosing { position: usize },

    #[error("unclosed opening bracket(s) at position(s) {positions:?}")]
    UnmatchedOpening { positions: Vec<usize> },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum LengthError {
    #[error("sequence length must be positive")]
    Empty,

    #[error("structure pattern has {actual} positions but the declared sequence length is {declared}")]
    Mismatch { declared: usize, actual: usize },
}

/// Parses a dot-bracket pattern into a pairing map with a single stack scan.
#[instrument(level = "trace", skip_all, fields(len = structure_pattern.len()))]
pub fn parse(structure_pattern: &str) -> Result<PairingMap, StructureError> {
    let mut partners = Vec::with_capacity(structure_pattern.len());
    let mut open = Vec::new();

    for (position, symbol) in structure_pattern.chars().enumerate() {
        partners.push(None);
        match symbol {
            '(' => open.push(position),
            ')' => {
                let opening = open
                    .pop()
                    .ok_or(StructureError::UnmatchedClosing { position })?;
                partners[opening] = Some(position);
                partners[position] = Some(opening);
            }
            '.' => {}
            _ => return Err(StructureError::InvalidCharacter { symbol, position }),
        }
    }

    if !open.is_empty() {
        return Err(StructureError::UnmatchedOpening { positions: open });
    }

    Ok(PairingMap::from_partners(partners))
}

pub fn validate_spec(spec: &StructureSpec) -> Result<(), LengthError> {
    if spec.sequence_length == 0 {
        return Err(LengthError::Empty);
    }
    let actual = spec.structure_pattern.chars().count();
    if actual != spec.sequence_length {
        return Err(LengthError::Mismatch {
            declared: spec.sequence_length,
            actual,
        });
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum StructureIssue {
    InvalidCharacter { symbol: char, position: usize },
    UnmatchedClosing { position: usize },
    UnmatchedOpening { positions: Vec<usize> },
}

impl From<StructureIssue> for StructureError {
    fn from(issue: StructureIssue) -> Self {
        match issue {
            StructureIssue::InvalidCharacter { symbol, position } => {
                StructureError::InvalidCharacter { symbol, position }
            }
            StructureIssue::UnmatchedClosing { position } => {
                StructureError::UnmatchedClosing { position }
            }
            StructureIssue::UnmatchedOpening { positions } => {
                StructureError::UnmatchedOpening { positions }
            }
        }
    }
}

/// Element counts and every problem found in a dot-bracket pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StructureDiagnostics {
    pub length: usize,
    pub unpaired: usize,
    pub opening: usize,
    pub closing: usize,
    pub base_pairs: Vec<(usize, usize)>,
    pub loops: LoopSummary,
    pub issues: Vec<StructureIssue>,
}

impl StructureDiagnostics {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Share of positions taking part in a matched pair.
    pub fn paired_fraction(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        (2 * self.base_pairs.len()) as f64 / self.length as f64
    }
}

/// Scans the whole pattern, recording every issue instead of stopping at the first.
///
/// Unlike [`parse`], this never fails. Base pairs are listed in the order their
/// closing bracket appears; an unmatched `)` is reported and skipped so the scan
/// can carry on with the remaining brackets. Loops are counted over the pairs that
/// did match.
pub fn diagnose(structure_pattern: &str) -> StructureDiagnostics {
    let mut report = StructureDiagnostics::default();
    let mut open = Vec::new();

    for (position, symbol) in structure_pattern.chars().enumerate() {
        report.length += 1;
        match symbol {
            '.' => report.unpaired += 1,
            '(' => {
                report.opening += 1;
                open.push(position);
            }
            ')' => {
                report.closing += 1;
                match open.pop() {
                    Some(opening) => report.base_pairs.push((opening, position)),
                    None => report
                        .issues
                        .push(StructureIssue::UnmatchedClosing { position }),
                }
            }
            _ => report
                .issues
                .push(StructureIssue::InvalidCharacter { symbol, position }),
        }
    }

    if !open.is_empty() {
        report
            .issues
            .push(StructureIssue::UnmatchedOpening { positions: open });
    }

    report.loops = loops::summarize(report.length, &report.base_pairs);
    report
}
