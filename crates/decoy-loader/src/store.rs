/*
 * store.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Resolved-resource store.

use std::collections::HashMap;

use decoy_content::{ContentResource, FileContainer};

use crate::error::LoadError;
use crate::loader::FileLoader;

/// Associates loaded resources with their configuration entries.
///
/// The container model is immutable, so resolution results live here,
/// keyed by a caller-chosen entry name. The store is built during
/// configuration load and read afterwards; a key is loaded at most once.
#[derive(Debug, Default)]
pub struct ResourceStore {
    resources: HashMap<String, ContentResource>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A previously resolved resource, if any.
    pub fn get(&self, key: &str) -> Option<&ContentResource> {
        self.resources.get(key)
    }

    /// Record an externally produced resource.
    pub fn insert(&mut self, key: impl Into<String>, resource: ContentResource) {
        self.resources.insert(key.into(), resource);
    }

    /// The resource for `key`, loading it through `loader` on first use.
    pub fn resolve(
        &mut self,
        key: &str,
        file: &FileContainer,
        loader: &FileLoader,
    ) -> Result<&ContentResource, LoadError> {
        if !self.resources.contains_key(key) {
            let resource = loader.load(file)?;
            tracing::debug!(key, "resolved file-backed content");
            self.resources.insert(key.to_owned(), resource);
        }
        Ok(&self.resources[key])
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoy_content::TextContainer;
    use std::fs;
    use tempfile::TempDir;

    fn file_ref(name: &str) -> FileContainer {
        FileContainer::builder()
            .with_name(TextContainer::raw(name))
            .build()
            .unwrap()
    }

    #[test]
    fn resolve_loads_once_and_caches() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cached.txt");
        fs::write(&path, "first read").unwrap();

        let loader = FileLoader::new(dir.path());
        let mut store = ResourceStore::new();
        let file = file_ref("cached.txt");

        let body = store.resolve("entry", &file, &loader).unwrap().body().to_owned();
        assert_eq!(body, "first read");

        // The second resolve must come from the store, not the filesystem
        fs::remove_file(&path).unwrap();
        let resource = store.resolve("entry", &file, &loader).unwrap();
        assert_eq!(resource.body(), "first read");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resolve_propagates_load_failures() {
        let dir = TempDir::new().unwrap();
        let loader = FileLoader::new(dir.path());
        let mut store = ResourceStore::new();

        let result = store.resolve("entry", &file_ref("absent.txt"), &loader);
        assert!(result.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn inserted_resources_are_visible() {
        let mut store = ResourceStore::new();
        store.insert("inline", ContentResource::text("x"));
        assert_eq!(store.get("inline").unwrap().body(), "x");
    }
}
