//! Main scheme documents: sections down to subclasses.

use std::path::PathBuf;

use roxmltree::Node;

use super::items::{describe, first_item, required_symbol, select_items};
use super::link::parse_link_file;
use crate::config::{ATTR_LINK_FILE, TAG_CLASSIFICATION_ITEM};
use crate::error::{ConverterError, Result};
use crate::title::TitleResolver;
use crate::types::{ClassificationNode, Level, LinkReference};
use crate::xml::{get_attribute, parse_document, read_document};

/// Parser for one main scheme document (one CPC section).
///
/// Link files named by subclass items are resolved relative to the
/// directory of the scheme document.
///
/// # Examples
/// ```no_run
/// use cpc_converter::scheme::SchemeParser;
///
/// let section = SchemeParser::new("data/cpc-scheme-A.xml").parse()?;
/// assert_eq!(section.code.as_deref(), Some("A"));
/// # Ok::<(), cpc_converter::ConverterError>(())
/// ```
pub struct SchemeParser {
    scheme_path: PathBuf,
    titles: TitleResolver,
}

impl SchemeParser {
    /// Create a parser for the scheme document at `scheme_path`.
    pub fn new(scheme_path: impl Into<PathBuf>) -> Self {
        Self {
            scheme_path: scheme_path.into(),
            titles: TitleResolver::default(),
        }
    }

    /// Read the scheme document and convert its section.
    pub fn parse(&self) -> Result<ClassificationNode> {
        tracing::info!(path = %self.scheme_path.display(), "Parsing scheme");
        let text = read_document(&self.scheme_path)?;
        self.parse_text(&text)
    }

    /// Convert a scheme document that is already in memory.
    ///
    /// Link files are still read from the scheme path's directory.
    pub fn parse_text(&self, text: &str) -> Result<ClassificationNode> {
        let doc = parse_document(text, &self.scheme_path)?;
        let item =
            first_item(doc.root_element()).ok_or_else(|| ConverterError::MissingElement {
                element: TAG_CLASSIFICATION_ITEM.to_string(),
                context: format!("scheme {}", self.scheme_path.display()),
            })?;

        self.parse_section(item)
    }

    /// Level 2.
    fn parse_section(&self, item: Node<'_, '_>) -> Result<ClassificationNode> {
        let code = required_symbol(item, Level::Section)?;
        let name = self.titles.resolve(item)?;
        let children = select_items(item)
            .map(|child| self.parse_subsection(child))
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassificationNode::new(
            Level::Section,
            Some(code),
            name,
            children,
        ))
    }

    /// Level 3. Subsections only carry a title.
    fn parse_subsection(&self, item: Node<'_, '_>) -> Result<ClassificationNode> {
        let name = self.titles.resolve(item)?;
        let children = select_items(item)
            .map(|child| self.parse_class(child))
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassificationNode::new(
            Level::Subsection,
            None,
            name,
            children,
        ))
    }

    /// Level 4.
    fn parse_class(&self, item: Node<'_, '_>) -> Result<ClassificationNode> {
        let code = required_symbol(item, Level::Class)?;
        let name = self.titles.resolve(item)?;
        let children = select_items(item)
            .map(|child| self.parse_subclass(child))
            .collect::<Result<Vec<_>>>()?;

        Ok(ClassificationNode::new(Level::Class, Some(code), name, children))
    }

    /// Level 5. Groups come from the linked document, not from nested items.
    fn parse_subclass(&self, item: Node<'_, '_>) -> Result<ClassificationNode> {
        let code = required_symbol(item, Level::Subclass)?;
        let name = self.titles.resolve(item)?;

        let link_file =
            get_attribute(item, ATTR_LINK_FILE).ok_or_else(|| ConverterError::MissingAttribute {
                attribute: ATTR_LINK_FILE.to_string(),
                context: describe(item, &format!("subclass {code}")),
            })?;
        let link = LinkReference::resolve(&self.scheme_path, link_file);
        let groups = parse_link_file(&link, &self.titles)?;

        tracing::debug!(
            subclass = %code,
            groups = groups.len(),
            "Parsed subclass"
        );

        Ok(ClassificationNode::new(
            Level::Subclass,
            Some(code),
            name,
            groups,
        ))
    }
}
