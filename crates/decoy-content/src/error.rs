/*
 * error.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Error types for content-specification construction.

use thiserror::Error;

/// Errors raised while building containers from configuration values.
///
/// A bad charset label is deliberately *not* represented here: an
/// unsupported label degrades to "no charset override" so that a typo in
/// an encoding name cannot abort configuration load.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContentError {
    /// A verbose `file` declaration had no `name` entry.
    #[error("file content declaration is missing a name")]
    MissingFileName,

    /// A configuration node had a shape no content form accepts.
    #[error("unexpected {found} in content declaration, expected {expected}")]
    UnexpectedForm {
        expected: &'static str,
        found: &'static str,
    },

    /// A verbose `file` declaration carried a key other than `name`/`charset`.
    #[error("unknown key {key:?} in file declaration")]
    UnknownFileKey { key: String },

    /// A template directive payload carried a key other than `with`/`vars`.
    #[error("unknown key {key:?} in template declaration")]
    UnknownTemplateKey { key: String },
}
