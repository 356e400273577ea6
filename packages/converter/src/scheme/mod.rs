//! Classification tree walker.
//!
//! The walk starts at the section item of a main scheme document and descends
//! level by level. At the subclass level it continues in the subclass's link
//! file, where the subclass symbol becomes the prefix stripped from group codes.

mod descent;
mod items;
mod link;
mod parser;

pub use descent::parse_nested_item;
pub use link::{link_entry, parse_groups, parse_link_file};
pub use parser::SchemeParser;
