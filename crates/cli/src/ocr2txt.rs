//! ocr2txt - Reconstruct document text from OCR token dumps
//!
//! A command line tool that reads the word boxes an OCR engine emitted
//! (Tesseract `image_to_data` TSV or a JSON token array), rebuilds the
//! line/paragraph structure, and writes the document text.

use blackout_core::high_level::{AnalyzeOptions, analyze_tokens};
use blackout_core::layout::Thresholds;
use blackout_core::ocr::{OcrToken, parse_tsv};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Input format for token dumps.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum InputFormat {
    /// Infer from the file extension (default)
    #[default]
    Auto,
    /// Tesseract image_to_data TSV table
    Tsv,
    /// JSON array of token objects
    Json,
}

/// A command line tool for reconstructing document text from the word
/// bounding boxes an OCR engine emitted.
#[derive(Parser, Debug)]
#[command(name = "ocr2txt")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more paths to OCR token dumps
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Print the thresholds in effect to stderr
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Input format of the token dumps
    #[arg(short = 'f', long, value_enum, default_value = "auto")]
    format: InputFormat,

    /// Line-break distance cutoff; requires --paragraph-threshold
    #[arg(short = 'L', long = "line-threshold", requires = "paragraph_threshold")]
    line_threshold: Option<u32>,

    /// Paragraph-break distance cutoff; requires --line-threshold
    #[arg(short = 'P', long = "paragraph-threshold", requires = "line_threshold")]
    paragraph_threshold: Option<u32>,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,
}

/// Token object shape accepted in JSON dumps.
#[derive(Debug, Deserialize)]
struct TokenRecord {
    text: String,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
    #[serde(default)]
    conf: f32,
}

impl From<TokenRecord> for OcrToken {
    fn from(record: TokenRecord) -> Self {
        Self {
            text: record.text,
            left: record.left,
            top: record.top,
            width: record.width,
            height: record.height,
            conf: record.conf,
        }
    }
}

/// Infer input format from the file extension.
fn infer_format(path: &Path) -> InputFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
        _ => InputFormat::Tsv,
    }
}

/// Read a token dump in the given (or inferred) format.
fn read_tokens(
    path: &Path,
    format: InputFormat,
) -> std::result::Result<Vec<OcrToken>, Box<dyn std::error::Error>> {
    let data = std::fs::read_to_string(path)?;

    let format = match format {
        InputFormat::Auto => infer_format(path),
        other => other,
    };

    match format {
        InputFormat::Json => {
            let records: Vec<TokenRecord> = serde_json::from_str(&data)?;
            Ok(records.into_iter().map(OcrToken::from).collect())
        }
        _ => Ok(parse_tsv(&data)?),
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let thresholds = match (args.line_threshold, args.paragraph_threshold) {
        (Some(line), Some(paragraph)) => Some(Thresholds::new(line, paragraph)),
        _ => None,
    };
    let options = AnalyzeOptions { thresholds };

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        let tokens = match read_tokens(path, args.format) {
            Ok(tokens) => tokens,
            Err(e) => {
                eprintln!("Error processing {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };

        let document = analyze_tokens(&tokens, Some(options.clone()));

        if args.debug {
            let thresholds = document.thresholds();
            eprintln!(
                "{}: line threshold {}, paragraph threshold {}",
                path.display(),
                thresholds.line_threshold,
                thresholds.paragraph_threshold
            );
        }

        writeln!(output, "{}", document.text())?;
    }

    output.flush()?;
    Ok(())
}
