//! Self-calibrating threshold estimation.
//!
//! A fixed gap cutoff does not transfer between fonts and scan resolutions,
//! so both thresholds are inferred from the statistical distribution of the
//! document's own word positions. Estimation runs once per document; the
//! result is a plain value the caller threads through the grouping passes.

use itertools::Itertools;

use crate::layout::cluster::cluster_centers;
use crate::layout::params::{DEFAULT_LINE_THRESHOLD, DEFAULT_PARAGRAPH_THRESHOLD, Thresholds};
use crate::ocr::{OcrToken, non_blank};

/// Cluster count for word-to-word vertical gaps.
const LINE_GAP_CLUSTERS: usize = 5;

/// Cluster count for line-to-line vertical gaps.
const PARAGRAPH_GAP_CLUSTERS: usize = 3;

/// Vertical jump that opens a new line during the coarse pre-grouping scan.
const LINE_SCAN_EPSILON: u32 = 5;

/// Estimates both thresholds from the geometry of the recognized words.
///
/// For the line threshold, the adjacent vertical gaps between words in
/// stream order are clustered; the smallest cluster is intra-line jitter and
/// the second-smallest center is the typical single-line-break distance.
/// For the paragraph threshold, a coarse line reconstruction produces one
/// representative top coordinate per line and the gaps between those are
/// clustered the same way. Degenerate documents with fewer than two usable
/// gap samples fall back to fixed defaults; estimation never fails.
pub fn estimate_thresholds(tokens: &[OcrToken]) -> Thresholds {
    let tops: Vec<u32> = non_blank(tokens).map(|t| t.top).collect();

    let word_gaps: Vec<f64> = tops
        .iter()
        .tuple_windows()
        .map(|(a, b)| a.abs_diff(*b))
        .filter(|gap| *gap != 0)
        .map(f64::from)
        .collect();

    let line_threshold = second_smallest_center(&word_gaps, LINE_GAP_CLUSTERS)
        .map_or(DEFAULT_LINE_THRESHOLD, |center| center as u32);

    let line_gaps: Vec<f64> = coarse_line_tops(&tops)
        .iter()
        .tuple_windows()
        .map(|(a, b)| f64::from(a.abs_diff(*b)))
        .collect();

    let paragraph_threshold = second_smallest_center(&line_gaps, PARAGRAPH_GAP_CLUSTERS)
        .map_or(DEFAULT_PARAGRAPH_THRESHOLD, |center| center as u32);

    Thresholds {
        line_threshold,
        paragraph_threshold,
    }
}

/// Second-smallest cluster center, falling back to the smallest when the
/// clusters collapse to one. `None` when the sample is too small to cluster.
fn second_smallest_center(gaps: &[f64], k: usize) -> Option<f64> {
    if gaps.len() < 2 {
        return None;
    }
    let centers = cluster_centers(gaps, k);
    centers.get(1).or_else(|| centers.first()).copied()
}

/// Representative top coordinate of each coarsely reconstructed line.
///
/// The scan declares a new line whenever the top coordinate jumps by more
/// than a small fixed epsilon from the current line's start. The epsilon is
/// independent of the final line threshold: this pass only needs a rough
/// per-line sample for the paragraph-gap distribution.
fn coarse_line_tops(tops: &[u32]) -> Vec<u32> {
    let mut line_tops = Vec::new();
    let mut current_line_top: Option<u32> = None;

    for &top in tops {
        if current_line_top.is_none_or(|line_top| top.abs_diff(line_top) > LINE_SCAN_EPSILON) {
            line_tops.push(top);
            current_line_top = Some(top);
        }
    }

    line_tops
}
