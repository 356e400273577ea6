//! CPC Converter - Convert Cooperative Patent Classification schemes to JSON.
//!
//! The CPC scheme is published as one XML document per section plus one
//! "link file" per subclass holding its groups. This crate walks both,
//! resolves titles and relative group codes, and produces one nested JSON
//! document per section.
//!
//! # Example
//!
//! ```
//! use cpc_converter::config;
//!
//! assert!(config::validate_section_code("A").is_ok());
//! assert_eq!(config::scheme_file_name("A"), "cpc-scheme-A.xml");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (Level, ClassificationNode, PrefixContext)
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML navigation and document loading
//! - [`title`]: Title resolution strategies
//! - [`scheme`]: Recursive descent over scheme and link files
//! - [`output`]: Record normalization and JSON output
//! - [`converter`]: Section conversion and batch driver
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod output;
pub mod scheme;
pub mod title;
pub mod types;
pub mod xml;

// Re-export main functions
pub use converter::{convert_batch, convert_section, export_section};

// Re-export commonly used items
pub use config::validate_section_code;
pub use error::{ConverterError, Result};
pub use scheme::SchemeParser;
pub use types::{ClassificationNode, Level, LinkReference, PrefixContext};
