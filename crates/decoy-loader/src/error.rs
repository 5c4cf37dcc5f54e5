/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for file-backed content resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The file container's name does not resolve to a path string.
    #[error("file reference does not resolve to a path")]
    UnresolvedName,

    /// The named file does not exist under the loader root.
    #[error("resource not found: {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file's bytes are not valid in the declared (or default) encoding.
    #[error("failed to decode {path} as {encoding}")]
    Decode { path: PathBuf, encoding: &'static str },

    /// Any other I/O failure while reading.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
