//! JSON writer for converted sections.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use super::record::to_record;
use crate::config::{
    section_file_name, validate_section_code, COMBINED_FILE_NAME, TAG_CLASSIFICATION_SYMBOL,
};
use crate::error::{ConverterError, Result};
use crate::types::ClassificationNode;

/// Combined document holding several sections.
#[derive(Debug, Serialize)]
struct CombinedExport {
    #[serde(rename = "cpcSections")]
    sections: Vec<Value>,
}

/// Generate pretty-printed JSON for one section.
pub fn generate_json(section: &ClassificationNode) -> Result<String> {
    let mut content = serde_json::to_string_pretty(&to_record(section))?;
    content.push('\n');
    Ok(content)
}

/// Generate pretty-printed JSON holding several sections under `cpcSections`.
pub fn generate_combined_json(sections: &[ClassificationNode]) -> Result<String> {
    let export = CombinedExport {
        sections: sections.iter().map(to_record).collect(),
    };
    let mut content = serde_json::to_string_pretty(&export)?;
    content.push('\n');
    Ok(content)
}

/// Save a section as `{code}.json` in `output_dir`.
///
/// The code comes from the XML, so it must be a valid section code before it
/// becomes a file name.
///
/// # Arguments
/// * `section` - Converted section tree
/// * `output_dir` - Directory to write to, created if missing
///
/// # Returns
/// Path to the saved file
pub fn save_section_json(section: &ClassificationNode, output_dir: &Path) -> Result<PathBuf> {
    let code = section
        .code
        .as_deref()
        .ok_or_else(|| ConverterError::MissingElement {
            element: TAG_CLASSIFICATION_SYMBOL.to_string(),
            context: "section record".to_string(),
        })?;
    validate_section_code(code)?;
    let content = generate_json(section)?;
    write_atomic(&output_dir.join(section_file_name(code)), &content)
}

/// Save several sections into one combined file in `output_dir`.
pub fn save_combined_json(sections: &[ClassificationNode], output_dir: &Path) -> Result<PathBuf> {
    let content = generate_combined_json(sections)?;
    write_atomic(&output_dir.join(COMBINED_FILE_NAME), &content)
}

/// Write `content` to `path` via a temporary file in the same directory.
///
/// The data is synced before the rename so a crash never leaves a truncated file behind.
fn write_atomic(path: &Path, content: &str) -> Result<PathBuf> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let temp_file = dir.join(format!(".{file_name}.tmp"));

    let written = write_and_rename(&temp_file, path, content);
    if written.is_err() {
        // Best effort: the write error is what gets reported
        let _ = fs::remove_file(&temp_file);
    }
    written?;

    Ok(path.to_path_buf())
}

fn write_and_rename(temp_file: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    {
        let mut file = File::create(temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if path.exists() {
        fs::remove_file(path)?;
    }

    fs::rename(temp_file, path)
}
