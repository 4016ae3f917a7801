//! Parser for the Tesseract `image_to_data` TSV table.
//!
//! The table starts with a header row naming the columns; every following
//! row is one token. Structural rows (page/block/paragraph/line markers)
//! have a negative `conf` and either an empty text cell or none at all, and
//! are kept as blank tokens so the caller sees the engine's full stream.

use crate::error::{OcrError, Result};
use crate::ocr::token::OcrToken;

/// Parses a Tesseract TSV dump into the raw token stream.
///
/// The header must name the `left`, `top`, `width`, `height`, `conf` and
/// `text` columns (extra columns are ignored). A row with a missing or
/// non-numeric geometry cell is a contract violation and is reported with
/// the zero-based token index and the offending field.
pub fn parse_tsv(data: &str) -> Result<Vec<OcrToken>> {
    let mut rows = data.lines();
    let header = rows
        .next()
        .ok_or_else(|| OcrError::SyntaxError("empty token table".to_string()))?;
    let columns: Vec<&str> = header.split('\t').collect();

    let column = |name: &'static str| -> Result<usize> {
        columns
            .iter()
            .position(|c| c.trim() == name)
            .ok_or_else(|| OcrError::SyntaxError(format!("header is missing column {name}")))
    };

    let left_col = column("left")?;
    let top_col = column("top")?;
    let width_col = column("width")?;
    let height_col = column("height")?;
    let conf_col = column("conf")?;
    let text_col = column("text")?;

    let mut tokens = Vec::new();
    for (index, row) in rows.enumerate() {
        if row.is_empty() {
            continue;
        }
        let cells: Vec<&str> = row.split('\t').collect();

        let cell = |col: usize, field: &'static str| -> Result<&str> {
            cells
                .get(col)
                .copied()
                .ok_or(OcrError::MissingField { index, field })
        };

        let geometry = |col: usize, field: &'static str| -> Result<u32> {
            let raw = cell(col, field)?;
            raw.trim()
                .parse()
                .map_err(|_| OcrError::InvalidField {
                    index,
                    field,
                    value: raw.to_string(),
                })
        };

        let left = geometry(left_col, "left")?;
        let top = geometry(top_col, "top")?;
        let width = geometry(width_col, "width")?;
        let height = geometry(height_col, "height")?;

        let conf_raw = cell(conf_col, "conf")?;
        let conf: f32 = conf_raw
            .trim()
            .parse()
            .map_err(|_| OcrError::InvalidField {
                index,
                field: "conf",
                value: conf_raw.to_string(),
            })?;

        // Structural rows legitimately omit the trailing text cell.
        let text = cells.get(text_col).copied().unwrap_or("").to_string();

        tokens.push(OcrToken {
            text,
            left,
            top,
            width,
            height,
            conf,
        });
    }

    Ok(tokens)
}
