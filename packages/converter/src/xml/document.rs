//! Loading scheme and link documents from disk.
//!
//! `roxmltree` documents borrow their source text, so loading is split in two:
//! [`read_document`] owns the text and [`parse_document`] builds the tree over it.
//! Callers keep both alive only for the duration of one document's descent.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use roxmltree::{Document, ParsingOptions};

use crate::error::{ConverterError, Result};

/// Read an XML document into memory.
///
/// # Arguments
/// * `path` - Path of the scheme or link file
///
/// # Returns
/// The document text
///
/// A missing file is reported as [`ConverterError::FileNotFound`], any other
/// failure as [`ConverterError::Read`]. Both name the path.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            ConverterError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConverterError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Parse XML text read from `path`.
///
/// DTDs are accepted since the published scheme files may declare one.
pub fn parse_document<'input>(text: &'input str, path: &Path) -> Result<Document<'input>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(text, options).map_err(|source| ConverterError::XmlParse {
        path: path.to_path_buf(),
        source,
    })
}
