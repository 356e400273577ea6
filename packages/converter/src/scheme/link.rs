//! Link files: the per-subclass documents that hold groups and subgroups.
//!
//! A link file repeats the subclass as its root entry. Below that entry sits
//! one grouping level (level 6) whose children are the actual groups. Level 6
//! produces no output; its children are lifted straight into the group list.

use roxmltree::{Document, Node};

use super::descent::parse_nested_item;
use super::items::{first_item, required_symbol, select_items};
use crate::config::TAG_CLASSIFICATION_ITEM;
use crate::error::{ConverterError, Result};
use crate::title::TitleResolver;
use crate::types::{ClassificationNode, Level, LinkReference, PrefixContext};
use crate::xml::{parse_document, read_document};

/// Read and parse a link file, returning the groups it defines.
///
/// A missing or unreadable link file is fatal for the section being converted.
///
/// # Arguments
/// * `link` - Resolved link file reference
/// * `titles` - Title resolver shared with the main scheme walk
///
/// # Returns
/// Group nodes (level 7) with the subclass prefix stripped from their codes
pub fn parse_link_file(
    link: &LinkReference,
    titles: &TitleResolver,
) -> Result<Vec<ClassificationNode>> {
    tracing::debug!(path = %link.path.display(), "Parsing link file");

    let text = read_document(&link.path)?;
    let doc = parse_document(&text, &link.path)?;
    let (entry, prefix) = link_entry(&doc, link)?;

    parse_groups(entry, &prefix, titles)
}

/// Locate the entry item of a link document and the prefix it establishes.
pub fn link_entry<'a, 'input>(
    doc: &'a Document<'input>,
    link: &LinkReference,
) -> Result<(Node<'a, 'input>, PrefixContext)> {
    let entry =
        first_item(doc.root_element()).ok_or_else(|| ConverterError::MissingElement {
            element: TAG_CLASSIFICATION_ITEM.to_string(),
            context: format!("link file {}", link.path.display()),
        })?;
    let prefix = PrefixContext::new(required_symbol(entry, Level::Subclass)?);

    Ok((entry, prefix))
}

/// Collect the groups below a link file's entry item, flattening level 6 away.
pub fn parse_groups(
    entry: Node<'_, '_>,
    prefix: &PrefixContext,
    titles: &TitleResolver,
) -> Result<Vec<ClassificationNode>> {
    select_items(entry)
        .flat_map(select_items)
        .map(|group| parse_nested_item(group, Level::Group, Some(prefix), titles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    const LINK_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<class-scheme>
  <classification-item level="5">
    <classification-symbol>A01B</classification-symbol>
    <classification-item level="6">
      <classification-symbol>A01B</classification-symbol>
      <class-title><title-part><text>Hand tools</text></title-part></class-title>
      <classification-item level="7">
        <classification-symbol>A01B1/00</classification-symbol>
        <class-title><title-part><text>Hand tools</text></title-part></class-title>
      </classification-item>
      <classification-item level="7">
        <classification-symbol>A01B3/00</classification-symbol>
        <class-title><title-part><text>Ploughs with fixed plough-shares</text></title-part></class-title>
      </classification-item>
    </classification-item>
    <classification-item level="6">
      <classification-symbol>A01B</classification-symbol>
      <classification-item level="7">
        <classification-symbol>A01B5/00</classification-symbol>
        <class-title><title-part><text>Ploughs with rolling non-driven tools</text></title-part></class-title>
      </classification-item>
    </classification-item>
  </classification-item>
</class-scheme>"#;

    #[test]
    fn test_level_six_is_flattened() {
        let doc = Document::parse(LINK_XML).unwrap();
        let link = LinkReference {
            path: Path::new("cpc-scheme-A01B.xml").to_path_buf(),
        };

        let (entry, prefix) = link_entry(&doc, &link).unwrap();
        assert_eq!(prefix.symbol(), "A01B");

        let groups = parse_groups(entry, &prefix, &TitleResolver::default()).unwrap();
        let codes: Vec<_> = groups.iter().filter_map(|g| g.code.as_deref()).collect();
        assert_eq!(codes, vec!["1/00", "3/00", "5/00"]);
        assert!(groups.iter().all(|g| g.level == Level::Group));
    }

    #[test]
    fn test_parse_link_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cpc-scheme-A01B.xml");
        fs::write(&path, LINK_XML).unwrap();

        let groups =
            parse_link_file(&LinkReference { path }, &TitleResolver::default()).unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups[1].name.as_deref(),
            Some("Ploughs with fixed plough-shares")
        );
    }

    #[test]
    fn test_missing_link_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.xml");

        let err = parse_link_file(
            &LinkReference { path: path.clone() },
            &TitleResolver::default(),
        )
        .unwrap_err();

        assert!(matches!(err, ConverterError::FileNotFound { path: ref p } if *p == path));
    }

    #[test]
    fn test_link_file_without_entry() {
        let doc = Document::parse("<class-scheme/>").unwrap();
        let link = LinkReference {
            path: Path::new("empty.xml").to_path_buf(),
        };

        let err = link_entry(&doc, &link).unwrap_err();
        assert!(err.to_string().contains("empty.xml"));
    }
}
