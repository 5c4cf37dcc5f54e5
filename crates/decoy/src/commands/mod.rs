//! CLI subcommands.

pub mod check;
pub mod resolve;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use decoy_config::StubDocument;

/// Parse and validate a stub document from disk.
pub fn load_document(path: &Path) -> Result<StubDocument> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read stub file {}", path.display()))?;
    let doc = StubDocument::from_json_str(&input)
        .with_context(|| format!("failed to parse stub file {}", path.display()))?;
    doc.validate()
        .with_context(|| format!("invalid stub file {}", path.display()))?;
    Ok(doc)
}

/// Store key for one stub's response content: its URI when declared,
/// otherwise its position.
pub fn stub_key(index: usize, uri: Option<&str>) -> String {
    match uri {
        Some(uri) => uri.to_owned(),
        None => format!("stub #{index}"),
    }
}
