//! Error types for the converter.
//!
//! Every failure aborts the conversion of the section being processed.
//! Structural absence (a missing title) is not an error and never shows up here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Unknown CPC section code.
    #[error("Invalid CPC section code: '{0}'. Expected one of A-H or Y")]
    InvalidSection(String),

    /// A scheme or link file does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// A scheme or link file exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing failed.
    #[error("XML parsing failed for {}: {source}", .path.display())]
    XmlParse {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Missing required XML attribute.
    #[error("Missing required attribute '{attribute}' on {context}")]
    MissingAttribute { attribute: String, context: String },

    /// More than one nested item could supply the title of an untitled item.
    #[error("Ambiguous title for '{symbol}': {count} nested items share its symbol, expected exactly one")]
    AmbiguousTitle { symbol: String, count: usize },

    /// One or more sections of a batch failed.
    #[error("{} section(s) failed: {}", .0.len(), .0.join(", "))]
    SectionsFailed(Vec<String>),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

impl ConverterError {
    /// Whether this error was caused by a file that could not be found, read or parsed.
    #[must_use]
    pub fn is_resource_failure(&self) -> bool {
        matches!(
            self,
            Self::FileNotFound { .. } | Self::Read { .. } | Self::XmlParse { .. } | Self::Io(_)
        )
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConverterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConverterError::InvalidSection("Z".to_string());
        assert!(err.to_string().contains("'Z'"));
        assert!(err.to_string().contains("A-H or Y"));
    }

    #[test]
    fn test_file_not_found_names_path() {
        let err = ConverterError::FileNotFound {
            path: PathBuf::from("data/cpc-scheme-A01B.xml"),
        };
        assert_eq!(err.to_string(), "File not found: data/cpc-scheme-A01B.xml");
        assert!(err.is_resource_failure());
    }

    #[test]
    fn test_ambiguous_title_display() {
        let err = ConverterError::AmbiguousTitle {
            symbol: "A99".to_string(),
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Ambiguous title for 'A99': 2 nested items share its symbol, expected exactly one"
        );
        assert!(!err.is_resource_failure());
    }

    #[test]
    fn test_sections_failed_display() {
        let err = ConverterError::SectionsFailed(vec!["B".to_string(), "Y".to_string()]);
        assert_eq!(err.to_string(), "2 section(s) failed: B, Y");
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = ConverterError::MissingAttribute {
            attribute: "link-file".to_string(),
            context: "subclass A01B".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required attribute 'link-file' on subclass A01B"
        );
    }
}
