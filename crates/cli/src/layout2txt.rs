//! layout2txt - Reconstruct reading-order text from analysed page layouts
//!
//! Reads layout dumps, walks every page with the selected strategy, writes
//! the text to stdout or a file, and exports embedded images to a folder.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use layoutscan_core::high_level::{LayoutScanner, ScanOptions};
use layoutscan_core::layout::LAParams;
use tracing::debug;

/// Reconstruct reading-order text (with inline image markers) from the
/// layout trees of one or more documents.
#[derive(Parser, Debug)]
#[command(name = "layout2txt")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
struct Args {
    /// One or more paths to layout dump files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: (),

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Shape of the text: one_column or two_columns
    #[arg(short = 's', long, default_value = "one_column")]
    strategy: String,

    /// The password to use for opening protected documents
    #[arg(short = 'P', long, default_value = "")]
    password: String,

    /// Directory to extract images to (default: the system temp directory)
    #[arg(short = 'O', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// A comma- or space-separated list of page numbers to parse (1-indexed)
    #[arg(short = 'p', long = "page-numbers")]
    page_numbers: Option<String>,

    /// The maximum number of pages to parse (0 = no limit)
    #[arg(short = 'm', long, default_value = "0")]
    maxpages: usize,

    /// Print the table of contents instead of the page text
    #[arg(long, action = ArgAction::SetTrue)]
    toc: bool,

    // === Layout analysis options ===
    /// Line overlap ratio (relative to character height)
    #[arg(long = "line-overlap", default_value = "0.5")]
    line_overlap: f64,

    /// Character margin (relative to character width)
    #[arg(short = 'M', long = "char-margin", default_value = "2.0")]
    char_margin: f64,

    /// Word margin (relative to character width)
    #[arg(short = 'W', long = "word-margin", default_value = "0.1")]
    word_margin: f64,

    /// Line margin (relative to line height)
    #[arg(short = 'L', long = "line-margin", default_value = "0.5")]
    line_margin: f64,

    /// Boxes flow direction (-1.0 to 1.0, or "disabled"). Default: 0.5
    #[arg(short = 'F', long = "boxes-flow")]
    boxes_flow: Option<String>,

    /// Consider vertical text during layout analysis
    #[arg(short = 'V', long = "detect-vertical", action = ArgAction::SetTrue)]
    detect_vertical: bool,

    /// Perform layout analysis on text in figures
    #[arg(short = 'A', long = "all-texts", action = ArgAction::SetTrue)]
    all_texts: bool,
}

/// Parse boxes_flow value - either a float or "disabled".
fn parse_boxes_flow(s: &str) -> Result<Option<f64>> {
    let s = s.trim().to_lowercase();
    if s == "disabled" {
        return Ok(None);
    }
    let v = s
        .parse::<f64>()
        .with_context(|| format!("invalid float value: {}", s))?;
    Ok(Some(v))
}

/// Build LAParams from command line arguments.
fn build_laparams(args: &Args) -> Result<LAParams> {
    let boxes_flow = match args.boxes_flow.as_deref() {
        None => Some(0.5),
        Some(s) => parse_boxes_flow(s)?,
    };

    Ok(LAParams::new(
        args.line_overlap,
        args.char_margin,
        args.line_margin,
        args.word_margin,
        boxes_flow,
        args.detect_vertical,
        args.all_texts,
    )?)
}

/// Parse 1-indexed page numbers into zero-indexed ones.
fn parse_page_numbers(list: Option<&str>) -> Option<Vec<usize>> {
    let nums: Vec<usize> = list?
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .map(|n| n - 1)
        .collect();
    if nums.is_empty() { None } else { Some(nums) }
}

fn build_options(args: &Args) -> Result<ScanOptions> {
    Ok(ScanOptions {
        password: args.password.clone(),
        images_folder: args
            .output_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir),
        page_numbers: parse_page_numbers(args.page_numbers.as_deref()),
        maxpages: args.maxpages,
        laparams: build_laparams(args)?,
    })
}

/// Process a single layout file.
fn process_file<W: Write>(
    scanner: &LayoutScanner,
    path: &PathBuf,
    writer: &mut W,
    args: &Args,
    options: &ScanOptions,
) -> Result<()> {
    debug!(file = %path.display(), strategy = %scanner.strategy(), "processing");

    if args.toc {
        for (level, title) in scanner.get_toc(path, &options.password)? {
            writeln!(writer, "{}\t{}", level, title)?;
        }
        return Ok(());
    }

    let text = scanner.get_pages(path, options)?;
    writer.write_all(text.as_bytes())?;
    writeln!(writer)?;
    Ok(())
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let scanner = LayoutScanner::new(&args.strategy)?;
    let options = build_options(&args)?;

    if let Some(ref dir) = args.output_dir
        && !dir.is_dir()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    for path in &args.files {
        process_file(&scanner, path, &mut output, &args, &options)
            .with_context(|| format!("error processing {}", path.display()))?;
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_numbers() {
        assert_eq!(parse_page_numbers(Some("1,3 5")), Some(vec![0, 2, 4]));
        assert_eq!(parse_page_numbers(Some("0, x")), None);
        assert_eq!(parse_page_numbers(None), None);
    }

    #[test]
    fn test_parse_boxes_flow() {
        assert_eq!(parse_boxes_flow("disabled").unwrap(), None);
        assert_eq!(parse_boxes_flow(" -0.5 ").unwrap(), Some(-0.5));
        assert!(parse_boxes_flow("sideways").is_err());
    }

    #[test]
    fn test_out_of_range_boxes_flow_rejected() {
        let args = Args::parse_from(["layout2txt", "-F", "2.0", "in.json"]);
        assert!(build_laparams(&args).is_err());
    }
}
