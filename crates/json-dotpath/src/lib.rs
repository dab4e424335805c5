//! Dot-notation access to `serde_json` trees.
//!
//! Paths are `.`-separated segments such as `"user.address.city"` or
//! `"items.1.name"`. A segment made only of ASCII digits indexes an array
//! when it lands on one; on an object it is an ordinary key.
//!
//! Readers borrow the tree. Writers never touch their input: they clone it
//! and return the new tree. An absent (`null`) tree behaves as `{}`.
//!
//! # Example
//!
//! ```
//! use json_dotpath::{get, merge, upsert};
//! use serde_json::json;
//!
//! let doc = json!({"items": [{"n": 1}, {"n": 2}]});
//! assert_eq!(get(&doc, "items.1.n", 0), 2);
//! assert_eq!(get(&doc, "items.5.n", -1), -1);
//!
//! let updated = upsert(&doc, "owner.name", json!("ada")).unwrap();
//! assert_eq!(get(&updated, "owner.name", String::new()), "ada");
//!
//! let merged = merge(&updated, &json!({"owner": {"id": 7}}), false);
//! assert_eq!(merged["owner"], json!({"name": "ada", "id": 7}));
//! ```

use thiserror::Error;

pub mod convert;
pub use convert::FromJsonValue;

pub mod types;
pub use types::{Path, PathSegment, Updates};

pub mod util;
pub use util::{format_path, is_integer, parse_path};

mod get;
pub use get::{get, get_as, get_required, get_value};

mod upsert;
pub use upsert::{upsert, upsert_many};

mod remove;
pub use remove::{remove, remove_at};

mod merge;
pub use merge::merge;

mod project;
pub use project::{clone_path, project};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DotPathError {
    /// A required path did not resolve; carries the caller's message.
    #[error("{0}")]
    NotFound(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
