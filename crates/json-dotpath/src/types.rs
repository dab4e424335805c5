//! Type definitions for dot-notation paths.

use indexmap::IndexMap;
use serde_json::Value;

/// One `.`-separated step of a dot-path.
///
/// The raw text always addresses an object key. When the text is a plain
/// base-10 integer it can also address an array element; which meaning
/// applies is decided by the node the step lands on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    key: String,
    index: Option<usize>,
}

impl PathSegment {
    pub fn new(raw: &str) -> Self {
        let index = if crate::util::is_integer(raw) {
            raw.parse().ok()
        } else {
            None
        };
        PathSegment {
            key: raw.to_string(),
            index,
        }
    }

    /// The segment as an object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The segment as an array index, when it is one.
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

/// A parsed dot-path.
pub type Path = Vec<PathSegment>;

/// Ordered `path -> value` writes for [`crate::upsert_many`].
pub type Updates = IndexMap<String, Value>;
