//! Structural deep copies of JSON trees.
//!
//! Writers in the accessor always copy before they mutate, so the caller's
//! tree is never aliased by the result.

mod clone;

pub use clone::{clone, clone_or_empty};
