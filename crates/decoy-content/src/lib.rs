/*
 * lib.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Content-specification model for decoy stub configurations.
//!
//! A stub configuration can declare response or request content four ways:
//!
//! - inline literal text,
//! - a template directive with named substitution properties,
//! - a group of named sub-properties,
//! - a reference to an external file, optionally with a declared charset.
//!
//! This crate represents all four uniformly as a [`TextContainer`], so that
//! every consumer of "content" calls the same small operation set without
//! knowing which form was used. File-backed content is represented by
//! [`FileContainer`], which defers the actual read to an external loader.
//!
//! # Architecture
//!
//! The model is a plain tagged sum type rather than a trait hierarchy: each
//! variant answers the shared operation set and returns a neutral value
//! (`None` / `false`) for operations that do not apply to it. No operation
//! ever fails merely because it was asked of the wrong variant.
//!
//! All values are immutable once constructed. Construction happens during
//! the single-threaded configuration-load phase; afterwards containers are
//! read concurrently by request handlers without synchronization.
//!
//! # Example
//!
//! ```
//! use decoy_content::{FileContainer, TextContainer};
//!
//! // Compact form: the bare value doubles as path and content.
//! let compact = FileContainer::linked(TextContainer::raw("hello.json"));
//! assert!(compact.is_raw_text());
//!
//! // Verbose form: content awaits an external load keyed by name and charset.
//! let verbose = FileContainer::builder()
//!     .with_name(TextContainer::raw("hello.json"))
//!     .with_charset("UTF-8")
//!     .build()
//!     .unwrap();
//! assert!(!verbose.is_raw_text());
//! assert_eq!(verbose.charset(), Some(encoding_rs::UTF_8));
//! ```

mod charset;
mod container;
mod de;
mod error;
mod resource;

pub use charset::resolve_charset;
pub use container::{FileContainer, FileContainerBuilder, TextContainer, TEMPLATE_OPERATION};
pub use error::ContentError;
pub use resource::ContentResource;
