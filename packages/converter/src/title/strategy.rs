//! Title resolution strategies.

use roxmltree::Node;

use crate::config::{
    TAG_CLASSIFICATION_ITEM, TAG_CLASSIFICATION_SYMBOL, TAG_CLASS_TITLE, TAG_TEXT,
};
use crate::error::{ConverterError, Result};
use crate::xml::{element_children, find_child, find_children, get_normalized_text, get_text};

/// Outcome of a single strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The strategy applies and produced this title (possibly empty).
    Found(String),
    /// The strategy does not apply to this node; try the next one.
    NotApplicable,
}

/// Trait for title resolution strategies.
///
/// Strategies are tried in a fixed order by the [`TitleResolver`](super::TitleResolver);
/// the first one returning [`Resolution::Found`] wins.
pub trait TitleStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Try to resolve the title of a `classification-item`.
    fn resolve(&self, node: Node<'_, '_>) -> Result<Resolution>;
}

/// Title stored in a direct `class-title` child.
pub struct DirectTitle;

impl TitleStrategy for DirectTitle {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn resolve(&self, node: Node<'_, '_>) -> Result<Resolution> {
        Ok(find_child(node, TAG_CLASS_TITLE)
            .map(|title| Resolution::Found(class_title_text(title)))
            .unwrap_or(Resolution::NotApplicable))
    }
}

/// Title borrowed from a nested item that repeats the parent's symbol.
///
/// Applies only when that nested item is the sole `classification-item`
/// child. Several children repeating the symbol is an error.
///
/// Some entries (section "Y", the "99" classes) nest themselves one level
/// deeper and only the nested copy carries a title.
pub struct SelfReferentialTitle;

impl TitleStrategy for SelfReferentialTitle {
    fn name(&self) -> &'static str {
        "self-referential"
    }

    fn resolve(&self, node: Node<'_, '_>) -> Result<Resolution> {
        let Some(symbol) = find_child(node, TAG_CLASSIFICATION_SYMBOL).map(get_text) else {
            return Ok(Resolution::NotApplicable);
        };

        let children: Vec<Node<'_, '_>> = find_children(node, TAG_CLASSIFICATION_ITEM).collect();
        let repeats = |child: &Node<'_, '_>| {
            find_child(*child, TAG_CLASSIFICATION_SYMBOL).map(get_text).as_deref()
                == Some(symbol.as_str())
        };

        match children.as_slice() {
            [nested] if repeats(nested) => DirectTitle.resolve(*nested),
            _ => match children.iter().filter(|child| repeats(*child)).count() {
                0 | 1 => Ok(Resolution::NotApplicable),
                count => Err(ConverterError::AmbiguousTitle { symbol, count }),
            },
        }
    }
}

/// Extract the text of a `class-title` element.
///
/// Each element child (a `title-part`) contributes the text of its `text`
/// leaves as one fragment; fragments are joined with `"; "` and empty ones
/// are skipped. A title without element children is read as plain text.
pub fn class_title_text(title: Node<'_, '_>) -> String {
    let parts: Vec<Node<'_, '_>> = element_children(title).collect();
    if parts.is_empty() {
        return get_normalized_text(title);
    }

    parts
        .into_iter()
        .map(fragment_text)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Text of one title part.
fn fragment_text(part: Node<'_, '_>) -> String {
    find_children(part, TAG_TEXT)
        .map(get_normalized_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
