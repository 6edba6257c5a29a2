//! Stem and loop decomposition of a nested set of base pairs.
//!
//! Every pair `(i, j)` closes exactly one loop, classified by the pairs directly inside it:
//! none makes a hairpin, one makes a stack, bulge, or interior loop depending on the
//! unpaired bases on each side, and two or more make a multiloop. A stem is a maximal run
//! of stacked pairs `(i, j), (i + 1, j - 1), ...`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoopSummary {
    pub stems: usize,
    pub hairpin_loops: usize,
    pub bulges: usize,
    pub internal_loops: usize,
    pub multiloops: usize,
    /// 1 when any position outside every pair is unpaired, else 0.
    pub external_loops: usize,
}

/// `pairs` must be nested, as produced by the dot-bracket scan; entries outside
/// `0..length` are ignored.
pub fn summarize(length: usize, pairs: &[(usize, usize)]) -> LoopSummary {
    let mut partners: Vec<Option<usize>> = vec![None; length];
    for &(i, j) in pairs {
        if i < j && j < length {
            partners[i] = Some(j);
            partners[j] = Some(i);
        }
    }

    let mut summary = LoopSummary::default();

    for i in 0..length {
        let Some(j) = partners[i].filter(|&j| j > i) else {
            continue;
        };

        let stacked_on_outer = i > 0 && j + 1 < length && partners[i - 1] == Some(j + 1);
        if !stacked_on_outer {
            summary.stems += 1;
        }

        let branches = enclosed_branches(&partners, i + 1, j);
        match branches.as_slice() {
            [] => summary.hairpin_loops += 1,
            [(p, q)] => match (p - i - 1, j - q - 1) {
                (0, 0) => {}
                (0, _) | (_, 0) => summary.bulges += 1,
                _ => summary.internal_loops += 1,
            },
            _ => summary.multiloops += 1,
        }
    }

    let exterior_covered: usize = enclosed_branches(&partners, 0, length)
        .iter()
        .map(|(p, q)| q - p + 1)
        .sum();
    if exterior_covered < length {
        summary.external_loops = 1;
    }

    summary
}

// Pairs directly inside `start..end`, skipping over everything they enclose.
fn enclosed_branches(partners: &[Option<usize>], start: usize, end: usize) -> Vec<(usize, usize)> {
    let mut branches = Vec::new();
    let mut k = start;
    while k < end {
        match partners[k] {
            Some(q) if q > k => {
                branches.push((k, q));
                k = q + 1;
            }
            _ => k += 1,
        }
    }
    branches
}
