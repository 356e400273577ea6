//! Ordered title resolution.

use roxmltree::Node;

use super::strategy::{DirectTitle, Resolution, SelfReferentialTitle, TitleStrategy};
use crate::error::Result;

/// Resolves item titles by trying strategies in a fixed order.
pub struct TitleResolver {
    strategies: Vec<Box<dyn TitleStrategy>>,
}

impl TitleResolver {
    /// Create a resolver with the given strategies, tried in order.
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn TitleStrategy>>) -> Self {
        Self { strategies }
    }

    /// Resolve the title of an item.
    ///
    /// Returns `Ok(None)` when no strategy applies or the resolved title is
    /// empty. Errors from a strategy abort resolution.
    pub fn resolve(&self, node: Node<'_, '_>) -> Result<Option<String>> {
        for (index, strategy) in self.strategies.iter().enumerate() {
            if let Resolution::Found(title) = strategy.resolve(node)? {
                if index > 0 {
                    tracing::debug!(strategy = strategy.name(), title = %title, "Title resolved by fallback");
                }
                return Ok(Some(title).filter(|t| !t.is_empty()));
            }
        }
        Ok(None)
    }
}

impl Default for TitleResolver {
    fn default() -> Self {
        Self::with_strategies(vec![Box::new(DirectTitle), Box::new(SelfReferentialTitle)])
    }
}
