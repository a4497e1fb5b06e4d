//! dcm: The decomment command-line tool.
//!
//! Usage:
//!   dcm [options] [file...]
//!
//! Strips comments from HTML, CSS, and JavaScript files while preserving
//! line numbers. Reads stdin when no files are given. Set RUST_LOG for
//! debug output (e.g. RUST_LOG=decomment_engine=debug).

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use decomment_engine::{strip_with, Mode};

#[derive(Parser, Debug)]
#[command(
    name = "dcm",
    version,
    about = "decomment - strip comments from HTML, CSS, and JavaScript"
)]
struct Cli {
    /// Files to strip. Reads stdin when none are given.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Grammar to strip with: html, css, javascript (alias: js), or auto.
    #[arg(short, long, default_value = "auto")]
    mode: String,

    /// Rewrite the files in place instead of printing to stdout.
    #[arg(short = 'i', long = "in-place")]
    in_place: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mode: Mode = cli.mode.parse()?;

    if cli.files.is_empty() {
        anyhow::ensure!(!cli.in_place, "--in-place requires at least one file");
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        print!("{}", strip_with(&source, mode));
        return Ok(());
    }

    for file in &cli.files {
        let source = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read '{}'", file.display()))?;
        let cleaned = strip_with(&source, mode);
        if cli.in_place {
            std::fs::write(file, cleaned)
                .with_context(|| format!("failed to write '{}'", file.display()))?;
        } else {
            print!("{cleaned}");
        }
    }

    Ok(())
}
