//! Conversion of classification trees into JSON records.
//!
//! Every level uses its own key names, e.g. `cpcClassCode` / `cpcClassName` /
//! `cpcSubClasses`. Keys holding null or an empty string are pruned at every
//! level; an empty children list is kept since it marks a leaf.

use serde_json::{Map, Value};

use crate::types::{ClassificationNode, Level};

/// Key stem of a level, e.g. "cpcSubClass".
fn field_stem(level: Level) -> String {
    match level {
        Level::Section => "cpcSection".to_string(),
        Level::Subsection => "cpcSubsection".to_string(),
        Level::Class => "cpcClass".to_string(),
        Level::Subclass => "cpcSubClass".to_string(),
        Level::Group => "cpcGroup".to_string(),
        Level::SubGroup => "cpcSubGroup".to_string(),
        Level::NestedSubGroup(n) => format!("cpcLevel{n}SubGroup"),
    }
}

/// Key holding the code of an item at `level`.
pub fn code_key(level: Level) -> String {
    format!("{}Code", field_stem(level))
}

/// Key holding the name of an item at `level`.
pub fn name_key(level: Level) -> String {
    format!("{}Name", field_stem(level))
}

/// Key holding the children of an item at `level`.
///
/// # Examples
/// ```
/// use cpc_converter::output::children_key;
/// use cpc_converter::types::Level;
///
/// assert_eq!(children_key(Level::Class), "cpcSubClasses");
/// assert_eq!(children_key(Level::Section), "cpcSubsections");
/// assert_eq!(children_key(Level::SubGroup), "cpcLevel1SubGroups");
/// ```
pub fn children_key(level: Level) -> String {
    let next = field_stem(level.next());
    if next.ends_with("ss") {
        format!("{next}es")
    } else {
        format!("{next}s")
    }
}

/// Build the pruned record of a node and, recursively, of its children.
pub fn to_record(node: &ClassificationNode) -> Value {
    let mut record = Map::new();

    if node.level.defines_code() {
        record.insert(code_key(node.level), optional_string(node.code.as_deref()));
    }
    record.insert(name_key(node.level), optional_string(node.name.as_deref()));
    record.insert(
        children_key(node.level),
        Value::Array(node.children.iter().map(to_record).collect()),
    );

    Value::Object(prune_record(record))
}

/// Remove keys whose value is null or an empty string.
///
/// Empty arrays and objects are kept.
pub fn prune_record(mut record: Map<String, Value>) -> Map<String, Value> {
    record.retain(|_, value| match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    });
    record
}

fn optional_string(value: Option<&str>) -> Value {
    value.map_or(Value::Null, |s| Value::String(s.to_string()))
}
