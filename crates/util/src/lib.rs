//! json-dotpath-util - value helpers shared by the dot-path accessor.
//!
//! Everything here operates on `serde_json::Value` and never fails.

pub mod json_clone;
pub mod json_equal;

pub use json_clone::{clone, clone_or_empty};
pub use json_equal::{contains_deep, deep_equal};
