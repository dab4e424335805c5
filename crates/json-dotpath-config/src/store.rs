//! File-backed configuration document.
//!
//! A [`ConfigStore`] owns one JSON tree. Reads go straight to the
//! dot-path accessor. Every mutation computes a new tree, writes it to the
//! backing file, and only then replaces the held tree, so a failed write
//! leaves both memory and disk as they were.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use json_dotpath::FromJsonValue;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{ConfigError, Result};
use crate::jsonc::strip_jsonc;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    document: Value,
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Load a store bound to `path`.
    ///
    /// A missing or blank file yields an empty document; the file is created
    /// on the first write. JSONC comments and trailing commas are accepted.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let document = match fs::read_to_string(path) {
            Ok(text) => {
                debug!(path = %path.display(), bytes = text.len(), "Loading configuration");
                parse_document(&text)?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "Configuration file not found, starting empty");
                empty_document()
            }
            Err(e) => return Err(ConfigError::io(path, e)),
        };
        Ok(ConfigStore {
            document,
            path: Some(path.to_path_buf()),
        })
    }

    /// Parse an in-memory store with no backing file.
    pub fn parse(text: &str) -> Result<Self> {
        Ok(ConfigStore {
            document: parse_document(text)?,
            path: None,
        })
    }

    /// Wrap an existing tree with no backing file.
    pub fn from_value(document: Value) -> Self {
        ConfigStore {
            document: null_as_empty(document),
            path: None,
        }
    }

    /// The backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn into_document(self) -> Value {
        self.document
    }

    pub fn get<T: FromJsonValue>(&self, path: &str, default: T) -> T {
        match json_dotpath::get_value(&self.document, path).and_then(T::from_json_value) {
            Some(found) => found,
            None => {
                debug!(path, "Configuration value missing, using default");
                default
            }
        }
    }

    pub fn get_value(&self, path: &str) -> Option<&Value> {
        json_dotpath::get_value(&self.document, path)
    }

    /// See [`json_dotpath::get_required`]; `{path}` in `message` is
    /// replaced with the requested path.
    pub fn get_required<T: FromJsonValue>(&self, path: &str, message: &str) -> Result<T> {
        Ok(json_dotpath::get_required(&self.document, path, message)?)
    }

    /// Deserialize a whole section into a typed value.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        json_dotpath::get_as(&self.document, path)
    }

    pub fn upsert(&mut self, path: &str, value: Value) -> Result<()> {
        let next = json_dotpath::upsert(&self.document, path, value)?;
        self.commit(next)
    }

    pub fn upsert_many<'a, I, K>(&mut self, updates: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, &'a Value)>,
        K: AsRef<str>,
    {
        let next = json_dotpath::upsert_many(&self.document, updates)?;
        self.commit(next)
    }

    pub fn remove<F>(&mut self, predicate: F, recursive: bool) -> Result<()>
    where
        F: FnMut(&str, &Value) -> bool,
    {
        let next = json_dotpath::remove(&self.document, predicate, recursive);
        self.commit(next)
    }

    pub fn remove_at(&mut self, path: &str) -> Result<()> {
        let next = json_dotpath::remove_at(&self.document, path);
        self.commit(next)
    }

    pub fn merge(&mut self, other: &Value, merge_arrays: bool) -> Result<()> {
        let next = json_dotpath::merge(&self.document, other, merge_arrays);
        self.commit(next)
    }

    pub fn clone_path(&mut self, from: &str, to: &str) -> Result<()> {
        let next = json_dotpath::clone_path(&self.document, from, to)?;
        self.commit(next)
    }

    /// Write the current document to the backing file.
    ///
    /// A store without a backing file has nothing to do.
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => write_document(path, &self.document),
            None => Ok(()),
        }
    }

    fn commit(&mut self, next: Value) -> Result<()> {
        if let Some(path) = &self.path {
            write_document(path, &next)?;
        }
        self.document = next;
        Ok(())
    }
}

fn empty_document() -> Value {
    Value::Object(Map::new())
}

fn null_as_empty(document: Value) -> Value {
    if document.is_null() {
        empty_document()
    } else {
        document
    }
}

fn parse_document(text: &str) -> Result<Value> {
    let stripped = strip_jsonc(text);
    if stripped.trim().is_empty() {
        return Ok(empty_document());
    }
    let value: Value = serde_json::from_str(&stripped)?;
    Ok(null_as_empty(value))
}

/// Pretty-print to a sibling temp file, then rename over the target.
///
/// The temp file is deleted when any step before the rename fails.
fn write_document(path: &Path, document: &Value) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
            parent
        }
        None => Path::new("."),
    };
    let text = serde_json::to_string_pretty(document)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
    tmp.write_all(text.as_bytes())
        .map_err(|e| ConfigError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| ConfigError::io(path, e.error))?;
    debug!(path = %path.display(), bytes = text.len(), "Saved configuration");
    Ok(())
}
