//! Section conversion and the batch driver that ties all components together.

use std::path::{Path, PathBuf};

use crate::config::{scheme_file_name, validate_section_code};
use crate::error::{ConverterError, Result};
use crate::output::{save_combined_json, save_section_json};
use crate::scheme::SchemeParser;
use crate::types::ClassificationNode;

/// Convert one CPC section.
///
/// # Arguments
/// * `data_dir` - Directory holding `cpc-scheme-{code}.xml` and its link files
/// * `code` - Section code (A-H or Y)
///
/// # Returns
/// The fully nested section tree
pub fn convert_section(data_dir: &Path, code: &str) -> Result<ClassificationNode> {
    validate_section_code(code)?;
    SchemeParser::new(data_dir.join(scheme_file_name(code))).parse()
}

/// Convert one CPC section and save it as `{code}.json` in `output_dir`.
///
/// Nothing is written unless the whole section converted successfully.
pub fn export_section(data_dir: &Path, code: &str, output_dir: &Path) -> Result<PathBuf> {
    let section = convert_section(data_dir, code)?;
    save_section_json(&section, output_dir)
}

/// How converted sections are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportMode {
    /// One `{code}.json` file per section.
    #[default]
    PerSection,
    /// A single `all.json` holding every converted section.
    Combined,
}

/// Sections to convert and where to put them.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sections: Vec<String>,
    pub mode: ExportMode,
}

/// A section whose conversion failed.
#[derive(Debug)]
pub struct SectionFailure {
    pub code: String,
    pub error: ConverterError,
}

/// Outcome of a batch conversion.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Codes of the sections converted successfully, in request order.
    pub converted: Vec<String>,
    /// Files written.
    pub written: Vec<PathBuf>,
    /// Sections that failed, in request order.
    pub failed: Vec<SectionFailure>,
}

impl BatchReport {
    /// Whether every requested section was converted.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Convert a batch of sections.
///
/// A failing section is recorded in the report and the batch moves on to the
/// next one. `on_section` is called with each code before it is converted.
///
/// Only a failure to write the combined file aborts the batch.
pub fn convert_batch(
    request: &BatchRequest,
    mut on_section: impl FnMut(&str),
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut combined: Vec<ClassificationNode> = Vec::new();

    for code in &request.sections {
        on_section(code);

        let result = convert_section(&request.data_dir, code).and_then(|section| {
            tracing::debug!(section = %code, nodes = section.count(), "Section parsed");
            match request.mode {
                ExportMode::PerSection => {
                    report
                        .written
                        .push(save_section_json(&section, &request.output_dir)?);
                }
                ExportMode::Combined => combined.push(section),
            }
            Ok(())
        });

        match result {
            Ok(()) => {
                tracing::info!(section = %code, "Section converted");
                report.converted.push(code.clone());
            }
            Err(error) => {
                tracing::warn!(section = %code, error = %error, "Section failed");
                report.failed.push(SectionFailure {
                    code: code.clone(),
                    error,
                });
            }
        }
    }

    if request.mode == ExportMode::Combined && !combined.is_empty() {
        report
            .written
            .push(save_combined_json(&combined, &request.output_dir)?);
    }

    Ok(report)
}
