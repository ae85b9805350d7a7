mod error;
mod manifest;
mod svg_scanner;

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Catalog file written to the current working directory
const OUTPUT_FILE: &str = "result.json";

#[derive(Parser)]
#[command(name = "iconlist")]
#[command(version)]
#[command(about = "Generate an icon catalog from the SVG files in a directory")]
struct Cli {
    /// Directory containing SVG files
    #[arg(default_value = ".")]
    input: PathBuf,

    /// Print scan diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    build_catalog(&cli.input, Path::new(OUTPUT_FILE), cli.verbose)
}

fn build_catalog(input: &Path, output: &Path, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("Scanning SVG files in: {}", input.display());
    }

    let records = svg_scanner::scan_svg_directory(input, verbose)?;
    manifest::generate_manifest(&records, output)?;

    if verbose {
        eprintln!("Wrote {} icons to {}", records.len(), output.display());
    }

    Ok(())
}
