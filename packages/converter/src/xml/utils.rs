//! XML utility functions for navigating and extracting data from DOM trees.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;

/// Regex matching runs of whitespace, including newlines inside titles.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Get the tag name without namespace prefix.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Tag name without namespace (e.g., "class-title" not "{ns}class-title")
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cpc_converter::xml::get_tag_name;
///
/// let xml = r#"<class-scheme><classification-item/></class-scheme>"#;
/// let doc = Document::parse(xml).unwrap();
/// let item = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(item), "classification-item");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Find the first child element with the given tag name.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// First matching child element, or `None` if not found
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cpc_converter::xml::find_child;
///
/// let xml = r#"<classification-item><classification-symbol>A</classification-symbol></classification-item>"#;
/// let doc = Document::parse(xml).unwrap();
/// let item = doc.root_element();
///
/// assert!(find_child(item, "classification-symbol").is_some());
/// assert!(find_child(item, "class-title").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Find all child elements with the given tag name, in document order.
///
/// # Arguments
/// * `node` - Parent node to search in
/// * `tag` - Tag name to search for
///
/// # Returns
/// Iterator over matching child elements
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cpc_converter::xml::find_children;
///
/// let xml = r#"<root><item>1</item><other/><item>2</item></root>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let items: Vec<_> = find_children(doc.root_element(), "item").collect();
/// assert_eq!(items.len(), 2);
/// ```
pub fn find_children<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get all element children of a node.
///
/// Excludes text nodes, comments and processing instructions.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the direct text content of a node, trimmed.
///
/// # Arguments
/// * `node` - XML node
///
/// # Returns
/// Trimmed text of the first text child, or an empty string if there is none
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Get the text of a node and all its descendants, in document order, with
/// whitespace runs collapsed to single spaces and the ends trimmed.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use cpc_converter::xml::get_normalized_text;
///
/// let xml = "<text>Soil\n   working <i>in</i>  general</text>";
/// let doc = Document::parse(xml).unwrap();
/// assert_eq!(get_normalized_text(doc.root_element()), "Soil working in general");
/// ```
pub fn get_normalized_text(node: Node<'_, '_>) -> String {
    let raw: String = node
        .descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect();
    collapse_whitespace(&raw)
}

/// Collapse whitespace runs to a single space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Get an attribute value from a node.
///
/// # Arguments
/// * `node` - XML node
/// * `name` - Attribute name
///
/// # Returns
/// Attribute value, or `None` if not present
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}
