/*
 * resource.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Resolved content resources.
//!
//! A [`ContentResource`] is the already-resolved form of a content
//! specification: the thing the serving layer hands to a response writer or
//! to the template engine. Resources are produced by container resolution
//! ([`crate::TextContainer::as_resource`]) and by the external file loader;
//! this crate never interprets their payload beyond carrying it.

use indexmap::IndexMap;

/// An already-resolved piece of servable content.
///
/// The payload is either plain text or template source awaiting expansion.
/// A resource may carry a logical name, used for diagnostics and as a cache
/// key by the loader's store.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentResource {
    name: Option<String>,
    payload: Payload,
}

#[derive(Debug, Clone, PartialEq)]
enum Payload {
    Text(String),
    Template {
        source: String,
        vars: IndexMap<String, ContentResource>,
    },
}

impl ContentResource {
    /// Literal text, servable as-is.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            name: None,
            payload: Payload::Text(text.into()),
        }
    }

    /// Text loaded from an external source, tagged with its origin name.
    pub fn loaded(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            payload: Payload::Text(text.into()),
        }
    }

    /// Template source plus named substitution values, awaiting expansion
    /// by the template engine.
    pub fn template(source: impl Into<String>, vars: IndexMap<String, ContentResource>) -> Self {
        Self {
            name: None,
            payload: Payload::Template {
                source: source.into(),
                vars,
            },
        }
    }

    /// Attach a logical name for diagnostics and caching.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The logical name, if one was supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The textual payload: literal text, or template source for a
    /// template resource.
    pub fn body(&self) -> &str {
        match &self.payload {
            Payload::Text(text) => text,
            Payload::Template { source, .. } => source,
        }
    }

    /// Whether the payload is template source awaiting expansion.
    pub fn is_template(&self) -> bool {
        matches!(self.payload, Payload::Template { .. })
    }

    /// Named substitution values of a template resource.
    pub fn vars(&self) -> Option<&IndexMap<String, ContentResource>> {
        match &self.payload {
            Payload::Template { vars, .. } => Some(vars),
            Payload::Text(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_resource_carries_body() {
        let resource = ContentResource::text("hello");
        assert_eq!(resource.body(), "hello");
        assert_eq!(resource.name(), None);
        assert!(!resource.is_template());
        assert!(resource.vars().is_none());
    }

    #[test]
    fn loaded_resource_carries_origin_name() {
        let resource = ContentResource::loaded("hello.json", "{}");
        assert_eq!(resource.name(), Some("hello.json"));
        assert_eq!(resource.body(), "{}");
    }

    #[test]
    fn template_resource_exposes_vars() {
        let mut vars = IndexMap::new();
        vars.insert("who".to_string(), ContentResource::text("world"));
        let resource = ContentResource::template("hello ${who}", vars);

        assert!(resource.is_template());
        assert_eq!(resource.body(), "hello ${who}");
        assert_eq!(resource.vars().unwrap()["who"].body(), "world");
    }

    #[test]
    fn with_name_overrides_name() {
        let resource = ContentResource::text("x").with_name("inline");
        assert_eq!(resource.name(), Some("inline"));
    }
}
