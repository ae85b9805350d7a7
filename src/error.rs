use std::path::PathBuf;

use thiserror::Error;

/// Failures at the directory-read and output-write boundaries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read directory {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("filename is not valid UTF-8: {}", path.display())]
    NonUtf8Name { path: PathBuf },

    #[error("failed to create {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to stdout")]
    WriteConsole(#[source] std::io::Error),
}
