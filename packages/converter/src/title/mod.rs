//! Title resolution for classification items.
//!
//! Titles live in different places depending on the level and the entry:
//! usually in a direct `class-title` child, sometimes only in a nested copy of
//! the item that repeats its symbol. Each location is a [`TitleStrategy`];
//! the [`TitleResolver`] tries them in order and the first that applies wins.

mod resolver;
mod strategy;

pub use resolver::TitleResolver;
pub use strategy::{class_title_text, DirectTitle, Resolution, SelfReferentialTitle, TitleStrategy};
