use crate::error::CatalogError;
use std::ffi::OsStr;
use std::io;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

const SVG_SUFFIX: &str = ".svg";

/// One catalog entry derived from a qualifying SVG filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Full filename including the extension (e.g. "battery_low.svg")
    pub id: String,
    /// English label derived from the filename (e.g. "Battery low")
    pub label: String,
}

impl IconRecord {
    pub fn from_filename(filename: &str) -> Self {
        Self {
            id: filename.to_string(),
            label: filename_to_label(filename),
        }
    }
}

/// Scan a directory (non-recursively) for SVG files, sorted by name
pub fn scan_svg_directory(dir: &Path, verbose: bool) -> Result<Vec<IconRecord>, CatalogError> {
    let mut names = Vec::new();

    let meta = std::fs::metadata(dir).map_err(|source| CatalogError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(CatalogError::ReadDir {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::Other, "not a directory"),
        });
    }

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| CatalogError::ReadDir {
            path: e.path().unwrap_or(dir).to_path_buf(),
            source: e.into(),
        })?;

        if !has_svg_suffix(entry.file_name()) || !is_regular_file(&entry) {
            continue;
        }

        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| CatalogError::NonUtf8Name {
                path: entry.path().to_path_buf(),
            })?;
        names.push(name.to_string());
    }

    // Byte order, so "A.svg" sorts before "a.svg"
    names.sort();

    if verbose {
        eprintln!("  Found {} SVG files in {}", names.len(), dir.display());
    }

    Ok(names
        .iter()
        .map(|name| IconRecord::from_filename(name))
        .collect())
}

/// Case-sensitive `.svg` check on the raw name, so non UTF-8 names are judged too
#[cfg(unix)]
fn has_svg_suffix(name: &OsStr) -> bool {
    use std::os::unix::ffi::OsStrExt;
    name.as_bytes().ends_with(SVG_SUFFIX.as_bytes())
}

#[cfg(not(unix))]
fn has_svg_suffix(name: &OsStr) -> bool {
    name.to_string_lossy().ends_with(SVG_SUFFIX)
}

/// Regular files, plus symlinks whose target is a regular file
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return std::fs::metadata(entry.path())
            .map(|meta| meta.is_file())
            .unwrap_or(false);
    }
    file_type.is_file()
}

/// Convert a filename to its display label.
///
/// Strips the `.svg` suffix, turns underscores into spaces and upper-cases
/// the first character only: "battery_low.svg" becomes "Battery low".
pub fn filename_to_label(filename: &str) -> String {
    let stem = filename.strip_suffix(SVG_SUFFIX).unwrap_or(filename);
    let spaced = stem.replace('_', " ");

    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
