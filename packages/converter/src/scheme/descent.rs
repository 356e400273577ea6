//! Recursive descent below the subclass level.
//!
//! Groups, subgroups and every deeper subgroup level share one shape, so a
//! single function walks them all. Only the group level strips the link
//! file's prefix from its codes.

use roxmltree::Node;

use super::items::{required_symbol, select_items};
use crate::error::Result;
use crate::title::TitleResolver;
use crate::types::{ClassificationNode, Level, PrefixContext};

/// Parse an item at `level` (group or deeper) and everything below it.
///
/// When `prefix` is given it is stripped from this item's code; descendants
/// always keep their codes verbatim.
///
/// # Arguments
/// * `item` - The `classification-item` element
/// * `level` - Level of `item`; children are parsed at `level.next()`
/// * `prefix` - Subclass symbol to strip, only for groups read from a link file
/// * `titles` - Title resolver
pub fn parse_nested_item(
    item: Node<'_, '_>,
    level: Level,
    prefix: Option<&PrefixContext>,
    titles: &TitleResolver,
) -> Result<ClassificationNode> {
    let symbol = required_symbol(item, level)?;
    let code = match prefix {
        Some(prefix) => prefix.strip(&symbol),
        None => symbol,
    };
    let name = titles.resolve(item)?;

    let children = select_items(item)
        .map(|child| parse_nested_item(child, level.next(), None, titles))
        .collect::<Result<Vec<_>>>()?;

    Ok(ClassificationNode::new(level, Some(code), name, children))
}
