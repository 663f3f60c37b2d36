//! Path-based file helpers.
//!
//! Creation helpers build missing parent directories and report success as
//! a boolean, logging failures through the `log` facade. Write helpers
//! return a [`UtilError`] carrying the offending path.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::error;

use crate::error::UtilError;

/// Creates a new, empty file, building the folder structure when missing.
///
/// Returns `true` only when the file did not exist and was created.
/// Failures are logged, not returned.
pub fn create_new_file(path: &Path) -> bool {
    if path.exists() {
        return false;
    }
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            error!("create {}: {e}", parent.display());
            return false;
        }
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => true,
        Err(e) => {
            error!("create {}: {e}", path.display());
            false
        }
    }
}

/// Deletes the file when present, then creates it fresh.
pub fn delete_and_create(path: &Path) -> bool {
    if path.exists() {
        if let Err(e) = fs::remove_file(path) {
            error!("delete {}: {e}", path.display());
        }
    }
    create_new_file(path)
}

/// Writes `data` to the file, creating it (and its parents) when missing.
pub fn write_to_file(path: &Path, data: &str) -> Result<(), UtilError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| UtilError::FileWrite {
            path: path.display().to_string(),
            source,
        })?;
    }
    fs::write(path, data).map_err(|source| UtilError::FileWrite {
        path: path.display().to_string(),
        source,
    })
}

/// Appends `data` to the file, creating it when missing. With
/// `append_new_line` a line break is added after the data.
pub fn append_to_file(path: &Path, data: &str, append_new_line: bool) -> Result<(), UtilError> {
    let wrap = |source| UtilError::FileWrite {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(wrap)?;
    file.write_all(data.as_bytes()).map_err(wrap)?;
    if append_new_line {
        file.write_all(b"\n").map_err(wrap)?;
    }
    Ok(())
}

/// The content of the file, or `None` when it is missing or unreadable.
/// Read failures are logged, not returned.
pub fn read_from_file(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            error!("read {}: {e}", path.display());
            None
        }
    }
}

/// The system temporary directory.
pub fn temp_dir() -> PathBuf {
    std::env::temp_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_builds_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c/data.txt");

        assert!(create_new_file(&nested));
        assert!(nested.exists());
        // Second creation reports false for an existing file.
        assert!(!create_new_file(&nested));
    }

    #[test]
    fn delete_and_create_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");

        write_to_file(&path, "old content").unwrap();
        assert!(delete_and_create(&path));
        assert_eq!(read_from_file(&path).as_deref(), Some(""));
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes/today.txt");

        write_to_file(&path, "line one").unwrap();
        assert_eq!(read_from_file(&path).as_deref(), Some("line one"));
    }

    #[test]
    fn append_honors_the_newline_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");

        append_to_file(&path, "first", true).unwrap();
        append_to_file(&path, "second", false).unwrap();
        assert_eq!(read_from_file(&path).as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn missing_files_read_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_from_file(&dir.path().join("absent.txt")), None);
    }

    #[test]
    fn temp_dir_exists() {
        assert!(temp_dir().exists());
    }
}
