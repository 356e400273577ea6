//! Command-line interface for the converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_section_code, DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR, SECTION_CODES};
use crate::converter::{convert_batch, BatchReport, BatchRequest, ExportMode};
use crate::error::{ConverterError, Result};

/// CPC Converter - Convert CPC classification schemes from XML to JSON.
#[derive(Parser)]
#[command(name = "cpc-converter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert CPC sections to JSON.
    Convert {
        /// Section codes to convert (default: A-H and Y)
        sections: Vec<String>,

        /// Directory holding the cpc-scheme-*.xml files
        #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
        data_dir: PathBuf,

        /// Output directory, created if missing
        #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Write all sections into a single all.json
        #[arg(long)]
        combined: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            sections,
            data_dir,
            output,
            combined,
        } => convert_command(sections, data_dir, output, combined),
    }
}

/// Execute the convert command.
fn convert_command(
    sections: Vec<String>,
    data_dir: PathBuf,
    output: PathBuf,
    combined: bool,
) -> Result<()> {
    let sections = if sections.is_empty() {
        SECTION_CODES.iter().map(|code| code.to_string()).collect()
    } else {
        sections
            .into_iter()
            .map(|code| code.to_uppercase())
            .collect::<Vec<_>>()
    };

    // Validate inputs before touching the filesystem
    for code in &sections {
        validate_section_code(code)?;
    }
    if !data_dir.is_dir() {
        return Err(ConverterError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Data directory does not exist: {}", data_dir.display()),
        )));
    }

    println!(
        "{} {} from {}",
        style("Converting").bold(),
        style(sections.join(", ")).cyan(),
        style(data_dir.display()).green()
    );
    println!();

    let request = BatchRequest {
        data_dir,
        output_dir: output,
        sections,
        mode: if combined {
            ExportMode::Combined
        } else {
            ExportMode::PerSection
        },
    };

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let report = match convert_batch(&request, |code| {
        pb.set_message(format!("Parsing section {code}..."));
    }) {
        Ok(report) => report,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();
    print_report(&report);

    if report.is_success() {
        Ok(())
    } else {
        Err(ConverterError::SectionsFailed(
            report.failed.iter().map(|f| f.code.clone()).collect(),
        ))
    }
}

/// Print converted files and failures.
fn print_report(report: &BatchReport) {
    for path in &report.written {
        println!("{} {}", style("Saved to:").green().bold(), path.display());
    }
    for failure in &report.failed {
        println!(
            "{} {}: {}",
            style("Failed:").red().bold(),
            style(&failure.code).cyan(),
            failure.error
        );
    }
    println!();
    println!(
        "  Converted: {}  Failed: {}",
        style(report.converted.len()).green(),
        style(report.failed.len()).yellow().bold()
    );
}
