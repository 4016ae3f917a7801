//! OCR token model and ingestion.
//!
//! This module contains:
//! - The raw token record emitted by the OCR engine (`OcrToken`)
//! - The blank-token filter every layout stage consumes tokens through
//! - A parser for the Tesseract `image_to_data` TSV table

pub mod token;
pub mod tsv;

pub use token::{OcrToken, non_blank};
pub use tsv::parse_tsv;
