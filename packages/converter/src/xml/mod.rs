//! XML utilities: element navigation and document loading.

mod document;
mod utils;

pub use document::{parse_document, read_document};
pub use utils::{
    collapse_whitespace, element_children, find_child, find_children, get_attribute,
    get_normalized_text, get_tag_name, get_text,
};
