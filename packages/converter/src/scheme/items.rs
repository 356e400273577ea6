//! Shared lookups on `classification-item` elements.

use roxmltree::Node;

use crate::config::{TAG_CLASSIFICATION_ITEM, TAG_CLASSIFICATION_SYMBOL};
use crate::error::{ConverterError, Result};
use crate::types::Level;
use crate::xml::{find_child, find_children, get_text};

/// Immediate `classification-item` children, in document order.
pub fn select_items<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    find_children(node, TAG_CLASSIFICATION_ITEM)
}

/// The first `classification-item` child, if any.
pub fn first_item<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    select_items(node).next()
}

/// The classification symbol of an item, if it has a non-empty one.
pub fn find_symbol(item: Node<'_, '_>) -> Option<String> {
    find_child(item, TAG_CLASSIFICATION_SYMBOL)
        .map(get_text)
        .filter(|symbol| !symbol.is_empty())
}

/// The classification symbol of an item at a level that requires one.
pub fn required_symbol(item: Node<'_, '_>, level: Level) -> Result<String> {
    find_symbol(item).ok_or_else(|| ConverterError::MissingElement {
        element: TAG_CLASSIFICATION_SYMBOL.to_string(),
        context: describe(item, &format!("{} (level {})", level.label(), level.depth())),
    })
}

/// Describe an item for error messages, e.g. "group (level 7) item at line 12".
pub fn describe(item: Node<'_, '_>, what: &str) -> String {
    let pos = item.document().text_pos_at(item.range().start);
    format!("{what} item at line {}", pos.row)
}
