/*
 * charset.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Charset label resolution for file-backed content.

use encoding_rs::Encoding;

/// Resolve a configured charset label to a concrete encoding.
///
/// Resolution is best-effort: an empty or unrecognized label yields `None`,
/// which downstream code treats as "use default decoding". The rest of the
/// configuration keeps loading; the unrecognized label is reported through
/// a warning rather than an error.
pub fn resolve_charset(label: &str) -> Option<&'static Encoding> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let encoding = Encoding::for_label(label.as_bytes());
    if encoding.is_none() {
        tracing::warn!(label, "unsupported charset label ignored, using default decoding");
    }

    encoding
}
