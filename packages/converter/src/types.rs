//! Core data types for the converter.
//!
//! A converted section is a tree of [`ClassificationNode`]s. Nodes are built
//! once during descent and owned by their parent; nothing mutates them afterwards.

use std::path::{Path, PathBuf};

/// Taxonomy level of a classification node.
///
/// Level 6 of the CPC scheme only groups the entries of a link file and never
/// appears in the converted tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Level 2, e.g. "A".
    Section,
    /// Level 3, a titled grouping of classes without a symbol of its own.
    Subsection,
    /// Level 4, e.g. "A01".
    Class,
    /// Level 5, e.g. "A01B". Carries the link to the group document.
    Subclass,
    /// Level 7, e.g. "A01B1/00".
    Group,
    /// Level 8.
    SubGroup,
    /// Level 8 + n, for n >= 1.
    NestedSubGroup(u32),
}

impl Level {
    /// Depth in the CPC scheme (the `level` attribute of the source items).
    #[must_use]
    pub fn depth(&self) -> u32 {
        match self {
            Self::Section => 2,
            Self::Subsection => 3,
            Self::Class => 4,
            Self::Subclass => 5,
            Self::Group => 7,
            Self::SubGroup => 8,
            Self::NestedSubGroup(n) => 8 + n,
        }
    }

    /// The level of this level's children.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Self::Section => Self::Subsection,
            Self::Subsection => Self::Class,
            Self::Class => Self::Subclass,
            Self::Subclass => Self::Group,
            Self::Group => Self::SubGroup,
            Self::SubGroup => Self::NestedSubGroup(1),
            Self::NestedSubGroup(n) => Self::NestedSubGroup(n + 1),
        }
    }

    /// Whether items at this level carry a classification symbol.
    #[must_use]
    pub fn defines_code(&self) -> bool {
        !matches!(self, Self::Subsection)
    }

    /// Human readable level name, used in error contexts and logs.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Section => "section".to_string(),
            Self::Subsection => "subsection".to_string(),
            Self::Class => "class".to_string(),
            Self::Subclass => "subclass".to_string(),
            Self::Group => "group".to_string(),
            Self::SubGroup => "subgroup".to_string(),
            Self::NestedSubGroup(n) => format!("level {n} subgroup"),
        }
    }
}

/// One entry of the classification tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationNode {
    /// Taxonomy level of this entry.
    pub level: Level,

    /// Classification symbol. Always present when the level defines one.
    /// Group codes are relative to their subclass.
    pub code: Option<String>,

    /// Whitespace-normalized title, absent when the source has none.
    pub name: Option<String>,

    /// Entries of the next level, in document order.
    pub children: Vec<ClassificationNode>,
}

impl ClassificationNode {
    /// Create a new node.
    pub fn new(
        level: Level,
        code: Option<String>,
        name: Option<String>,
        children: Vec<ClassificationNode>,
    ) -> Self {
        Self {
            level,
            code,
            name,
            children,
        }
    }

    /// Whether this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including this one.
    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Self::count).sum::<usize>()
    }

    /// Depth-first search for the first node at `level` with the given code.
    pub fn find(&self, level: Level, code: &str) -> Option<&ClassificationNode> {
        if self.level == level && self.code.as_deref() == Some(code) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(level, code))
    }
}

/// Reference from a subclass item to the document holding its groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
    /// Resolved path of the link file.
    pub path: PathBuf,
}

impl LinkReference {
    /// Resolve a `link-file` attribute against the directory of the main scheme document.
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use cpc_converter::types::LinkReference;
    ///
    /// let link = LinkReference::resolve(Path::new("data/cpc-scheme-A.xml"), "cpc-scheme-A01B.xml");
    /// assert_eq!(link.path, Path::new("data/cpc-scheme-A01B.xml"));
    /// ```
    pub fn resolve(scheme_path: &Path, link_file: &str) -> Self {
        let dir = scheme_path.parent().unwrap_or_else(|| Path::new(""));
        Self {
            path: dir.join(link_file),
        }
    }
}

/// Symbol of a link file's root entry, stripped from the group codes below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixContext {
    symbol: String,
}

impl PrefixContext {
    /// Create a prefix context from the root symbol of a link file.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// The prefix symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Remove the prefix from the start of `code`; codes that do not start with it
    /// are returned unchanged.
    ///
    /// # Examples
    /// ```
    /// use cpc_converter::types::PrefixContext;
    ///
    /// let prefix = PrefixContext::new("A01B");
    /// assert_eq!(prefix.strip("A01B3/00"), "3/00");
    /// assert_eq!(prefix.strip("A01C1/00"), "A01C1/00");
    /// ```
    #[must_use]
    pub fn strip(&self, code: &str) -> String {
        code.strip_prefix(self.symbol.as_str())
            .unwrap_or(code)
            .to_string()
    }
}
