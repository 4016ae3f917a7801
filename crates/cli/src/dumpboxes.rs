//! dumpboxes - Locate sensitive text fragments in an OCR token dump
//!
//! A command line tool that reads a token dump and a fragment list (one
//! fragment per line), rebuilds the document layout, and writes the
//! bounding box of every word realizing a fragment as a JSON array of
//! `[x, y, width, height]` arrays, ready for a redaction pass.

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

/// A command line tool for mapping sensitive text fragments back to the
/// word bounding boxes that realize them.
#[derive(Parser, Debug)]
#[command(name = "dumpboxes")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// Path to an OCR token dump
    file: PathBuf,

    /// Path to the fragment list, one fragment per line
    #[arg(short = 'F', long = "fragments")]
    fragments: PathBuf,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Print the thresholds in effect and the match count to stderr
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Input format of the token dump
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

/// Read the fragment list: one fragment per line, blank lines skipped.
fn read_fragments(path: &Path) -> io::Result<Vec<String>> {
    let data = std::fs::read_to_string(path)?;
    Ok(data
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let thresholds = match (args.line_threshold, args.paragraph_threshold) {
        (Some(line), Some(paragraph)) => Some(Thresholds::new(line, paragraph)),
        _ => None,
    };
    let options = AnalyzeOptions { thresholds };

    let tokens = match read_tokens(&args.file, args.format) {
        Ok(tokens) => tokens,
        Err(e) => {
            eprintln!("Error processing {}: {}", args.file.display(), e);
            std::process::exit(1);
        }
    };

    let fragments = match read_fragments(&args.fragments) {
        Ok(fragments) => fragments,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.fragments.display(), e);
            std::process::exit(1);
        }
    };

    let document = analyze_tokens(&tokens, Some(options));
    let boxes = document.locate(&fragments);

    if args.debug {
        let thresholds = document.thresholds();
        eprintln!(
            "{}: line threshold {}, paragraph threshold {}, {} box(es)",
            args.file.display(),
            thresholds.line_threshold,
            thresholds.paragraph_threshold,
            boxes.len()
        );
    }

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .map_err(|e| format!("Failed to create output file {}: {}", args.outfile, e))?;
        Box::new(BufWriter::new(file))
    };

    let rows: Vec<[u32; 4]> = boxes
        .iter()
        .map(|b| [b.x, b.y, b.width, b.height])
        .collect();
    serde_json::to_writer(&mut output, &rows)?;
    writeln!(output)?;

    output.flush()?;
    Ok(())
}
