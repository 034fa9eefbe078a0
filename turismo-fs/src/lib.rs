//! Capability-based filesystem helpers shared by the Turismo crates.
//!
//! Paths are UTF-8 (`camino`) and every access goes through `cap-std`
//! directories opened with ambient authority.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};

/// What a path points at, as seen by [`inspect_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file.
    File,
    /// Something other than a regular file, such as a directory.
    NotFile,
    /// Nothing exists at the path.
    Missing,
}

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates I/O failures from `cap-std`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read a whole UTF-8 file into memory.
///
/// # Errors
/// Propagates I/O failures, including invalid UTF-8 content.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Classify `path` without following it into the file contents.
///
/// A missing parent directory counts as [`PathKind::Missing`].
///
/// # Errors
/// Returns I/O errors other than "not found", such as permission failures.
pub fn inspect_path(path: &Utf8Path) -> io::Result<PathKind> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let Some(name) = path.file_name() else {
        return Ok(PathKind::NotFile);
    };
    let dir = match fs_utf8::Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(PathKind::Missing),
        Err(err) => return Err(err),
    };
    match dir.metadata(name) {
        Ok(meta) if meta.is_file() => Ok(PathKind::File),
        Ok(_) => Ok(PathKind::NotFile),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(PathKind::Missing),
        Err(err) => Err(err),
    }
}
