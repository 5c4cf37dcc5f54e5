//! Error types for stub-document parsing and validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StubError {
    /// The document was not valid JSON or did not match the stub schema.
    #[error("failed to parse stub document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document parsed but declares no stubs.
    #[error("stub document declares no stubs")]
    EmptyDocument,

    /// A request or response declares more than one content-bearing key.
    #[error("stub #{index} {section} declares conflicting content keys: {}", keys.join(", "))]
    ConflictingContent {
        index: usize,
        section: &'static str,
        keys: Vec<&'static str>,
    },
}
