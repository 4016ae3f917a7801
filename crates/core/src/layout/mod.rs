//! Layout reconstruction for OCR token streams.
//!
//! This module contains:
//! - Layout elements (Word, Line, Paragraph, BoundingBox)
//! - Grouping thresholds (Thresholds)
//! - Threshold self-calibration via 1-D gap clustering
//! - The word-to-line and line-to-paragraph grouping passes

pub mod cluster;
pub mod elements;
pub mod estimate;
pub mod group;
pub mod params;

pub use cluster::cluster_centers;
pub use elements::{BoundingBox, Line, Paragraph, Word};
pub use estimate::estimate_thresholds;
pub use group::{build_layout, group_lines_into_paragraphs, group_words_into_lines};
pub use params::{DEFAULT_LINE_THRESHOLD, DEFAULT_PARAGRAPH_THRESHOLD, Thresholds};
