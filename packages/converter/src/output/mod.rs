//! JSON output generation for converted sections.

mod record;
mod writer;

pub use record::{children_key, code_key, name_key, prune_record, to_record};
pub use writer::{generate_combined_json, generate_json, save_combined_json, save_section_json};
