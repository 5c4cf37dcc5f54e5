//! Stub-document parser model for decoy.
//!
//! This crate provides the typed model of a stub configuration file: a JSON
//! array of stubs, each pairing an optional request matcher with a response
//! specification. Content-bearing keys (`text`, `file`) deserialize into the
//! container model from `decoy-content`, so both the compact and the verbose
//! content forms are accepted anywhere content can be declared.
//!
//! Deserialization is strict about structure (unknown keys are rejected) but
//! deliberately lenient about charset labels, mirroring the container
//! model's graceful-degradation policy.
//!
//! # Example
//!
//! ```
//! use decoy_config::StubDocument;
//!
//! let doc = StubDocument::from_json_str(
//!     r#"[{ "response": { "file": { "name": "hello.json", "charset": "UTF-8" } } }]"#,
//! ).unwrap();
//! doc.validate().unwrap();
//! assert_eq!(doc.stubs.len(), 1);
//! ```

mod error;
mod stub;

pub use error::StubError;
pub use stub::{ContentSpec, RequestSpec, ResponseSpec, Stub, StubDocument};
