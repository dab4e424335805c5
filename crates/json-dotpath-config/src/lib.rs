//! Configuration documents backed by JSON or JSONC files.
//!
//! [`ConfigStore`] loads a document, answers dot-path reads through
//! [`json_dotpath`], and persists every successful edit straight away.
//!
//! # Example
//!
//! ```
//! use json_dotpath_config::ConfigStore;
//! use serde_json::json;
//!
//! let mut store = ConfigStore::parse(r#"{
//!     // defaults
//!     "server": {"port": 8080},
//! }"#).unwrap();
//!
//! assert_eq!(store.get("server.port", 0u16), 8080);
//! store.upsert("server.host", json!("127.0.0.1")).unwrap();
//! assert_eq!(store.get("server.host", String::new()), "127.0.0.1");
//! ```

pub mod cli;
pub mod error;
pub mod jsonc;
pub mod store;

pub use error::{ConfigError, Result};
pub use jsonc::strip_jsonc;
pub use store::ConfigStore;
