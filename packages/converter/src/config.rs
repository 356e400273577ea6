//! Configuration constants and validation functions for the converter.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{ConverterError, Result};

/// All CPC sections, in publication order.
pub const SECTION_CODES: [&str; 9] = ["A", "B", "C", "D", "E", "F", "G", "H", "Y"];

/// Default directory holding the `cpc-scheme-*.xml` files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default directory for the generated JSON files.
pub const DEFAULT_OUTPUT_DIR: &str = "json";

/// File name used when all sections are exported into a single document.
pub const COMBINED_FILE_NAME: &str = "all.json";

/// Repeating structural unit at every taxonomy level.
pub const TAG_CLASSIFICATION_ITEM: &str = "classification-item";

/// Leaf element holding the classification symbol.
pub const TAG_CLASSIFICATION_SYMBOL: &str = "classification-symbol";

/// Container of one or more title parts.
pub const TAG_CLASS_TITLE: &str = "class-title";

/// Leaf holding the text of a title part.
pub const TAG_TEXT: &str = "text";

/// Attribute on a subclass item naming the document that continues the hierarchy.
pub const ATTR_LINK_FILE: &str = "link-file";

/// Section code pattern: one of A-H or Y.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-HY]$").expect("valid regex"));

/// Validate a CPC section code.
///
/// # Examples
/// ```
/// use cpc_converter::config::validate_section_code;
///
/// assert!(validate_section_code("A").is_ok());
/// assert!(validate_section_code("Y").is_ok());
/// assert!(validate_section_code("Z").is_err());
/// ```
pub fn validate_section_code(code: &str) -> Result<()> {
    if SECTION_CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(ConverterError::InvalidSection(code.to_string()))
    }
}

/// Name of the main scheme document for a section.
///
/// # Examples
/// ```
/// use cpc_converter::config::scheme_file_name;
///
/// assert_eq!(scheme_file_name("A"), "cpc-scheme-A.xml");
/// ```
pub fn scheme_file_name(code: &str) -> String {
    format!("cpc-scheme-{code}.xml")
}

/// Name of the JSON document written for a section.
pub fn section_file_name(code: &str) -> String {
    format!("{code}.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_section_code_accepts_all_sections() {
        for code in SECTION_CODES {
            assert!(validate_section_code(code).is_ok(), "{code} should be valid");
        }
    }

    #[test]
    fn test_validate_section_code_rejects_others() {
        for code in ["", "I", "Z", "a", "AB", "A01"] {
            assert!(
                matches!(
                    validate_section_code(code),
                    Err(ConverterError::InvalidSection(_))
                ),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(scheme_file_name("Y"), "cpc-scheme-Y.xml");
        assert_eq!(section_file_name("Y"), "Y.json");
    }
}
