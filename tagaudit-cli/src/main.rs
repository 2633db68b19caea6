// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
// - struct_excessive_bools: CLI flags are independent boolean switches.
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::exit,
    clippy::struct_excessive_bools
)]

mod logging;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tagaudit::{ReportFormat, ScanOptions, output, scan};
use tracing::info;

#[derive(Parser)]
#[command(name = "tagaudit", version)]
#[command(about = "Validate metadata in music library files (MP3, MP4, M4A)")]
struct Cli {
    /// Directory to scan for music files
    directory: PathBuf,

    /// Only scan the top level of the directory
    #[arg(long)]
    no_recursive: bool,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Only list files missing album artwork, one per line
    #[arg(short, long)]
    condensed: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    quiet: bool,

    /// Glob patterns for paths to skip (repeatable)
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// Follow symbolic links while scanning
    #[arg(long)]
    follow_links: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let mut options = ScanOptions::new(cli.directory);
    options.recursive = !cli.no_recursive;
    options.exclude = cli.exclude;
    options.follow_links = cli.follow_links;

    info!("scanning directory: {}", options.root.display());
    info!("recursive: {}", options.recursive);

    let report = scan(&options)?;
    info!("scanned {} files", report.total_files());

    let rendered = output::render(&report, cli.format.into(), cli.condensed)?;

    if let Some(path) = cli.output {
        fs::write(&path, &rendered)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        info!("report saved to: {}", path.display());
        if cli.condensed {
            info!(
                "files missing album artwork: {}",
                report.missing_art_count()
            );
        }
    } else {
        print!("{rendered}");
    }

    Ok(())
}
