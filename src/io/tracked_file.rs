//! A file handle that carries caller-defined attributes.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UtilError;

use super::files;

/// A path plus a string attribute map, so metadata discovered about a file
/// (a checksum, an upload target, a source system) travels with it.
#[derive(Debug, Clone)]
pub struct TrackedFile {
    path: PathBuf,
    attributes: HashMap<String, String>,
}

impl TrackedFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// The extension after the last dot of the file name. Empty when there
    /// is none, or for dot-files like `.gitignore`.
    pub fn extension(&self) -> String {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        match name.rfind('.') {
            Some(dot) if dot > 0 => name[dot + 1..].to_string(),
            _ => String::new(),
        }
    }

    /// The content of this file, or `None` when missing or unreadable.
    pub fn read(&self) -> Option<String> {
        files::read_from_file(&self.path)
    }

    /// Writes `data` to this file, creating it when missing.
    pub fn write(&self, data: &str) -> Result<(), UtilError> {
        files::write_to_file(&self.path, data)
    }

    /// Appends `data` to this file, creating it when missing.
    pub fn append(&self, data: &str, append_new_line: bool) -> Result<(), UtilError> {
        files::append_to_file(&self.path, data, append_new_line)
    }

    /// Renames this file within its directory and returns a handle to the
    /// renamed file. Attributes do not travel to the new handle.
    pub fn rename(&self, name: &str) -> Result<TrackedFile, UtilError> {
        let target = match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        };
        fs::rename(&self.path, &target).map_err(|source| UtilError::Rename {
            from: self.path.display().to_string(),
            to: target.display().to_string(),
            source,
        })?;
        Ok(TrackedFile::new(target))
    }

    /// Creates this file when missing; see [`files::create_new_file`].
    pub fn create(&self) -> bool {
        files::create_new_file(&self.path)
    }

    /// Deletes this file when present, then creates it fresh.
    pub fn delete_and_create(&self) -> bool {
        files::delete_and_create(&self.path)
    }

    pub fn put_attribute(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    /// Merges the given attributes into this file's map.
    pub fn put_attributes(&mut self, attributes: HashMap<String, String>) {
        self.attributes.extend(attributes);
    }

    /// The attribute under `key`, or `default`.
    pub fn opt_attribute<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.attributes.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }
}
