//! Raw OCR token record.

/// A single recognized token as emitted by the OCR engine.
///
/// Field names follow the Tesseract `image_to_data` table: `left`/`top` are
/// the top-left corner of the token's box in image coordinates, `conf` is
/// the engine's confidence (negative on structural rows, which carry no
/// text). The engine emits tokens in its internal scan order, approximately
/// raster order; nothing here re-sorts them.
#[derive(Debug, Clone, PartialEq)]
pub struct OcrToken {
    pub text: String,
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
    pub conf: f32,
}

impl OcrToken {
    pub fn new(text: impl Into<String>, left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            text: text.into(),
            left,
            top,
            width,
            height,
            conf: 0.0,
        }
    }

    /// True when the recognized text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Iterates over the tokens that actually carry text.
///
/// The OCR contract allows blank and whitespace-only recognitions (Tesseract
/// emits structural rows with empty text); every layout stage consumes
/// tokens through this filter.
pub fn non_blank(tokens: &[OcrToken]) -> impl Iterator<Item = &OcrToken> {
    tokens.iter().filter(|t| !t.is_blank())
}
