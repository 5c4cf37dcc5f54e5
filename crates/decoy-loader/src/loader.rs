/*
 * loader.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Reading and decoding file-backed content.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use decoy_content::{ContentResource, FileContainer, TextContainer};
use encoding_rs::{Encoding, UTF_8};

use crate::error::LoadError;

/// Resolves file containers against a root directory.
///
/// The loader owns the Deferred-to-resolved step of the container model:
/// it turns a declared name and charset into a loaded [`ContentResource`].
/// Compact-form (Linked) containers are read the same way; the alias to
/// inline content only stands in until the file has actually been read.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory file references are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read and decode the container's named file.
    ///
    /// The declared charset drives decoding; with no charset the bytes must
    /// be valid UTF-8. Malformed content in the selected encoding is a
    /// [`LoadError::Decode`], never replacement characters.
    pub fn load(&self, file: &FileContainer) -> Result<ContentResource, LoadError> {
        let name = resolve_name(file.name())?;
        let path = self.root.join(&name);

        tracing::debug!(
            name = %name,
            charset = ?file.charset().map(Encoding::name),
            "loading file-backed content"
        );

        let bytes = fs::read(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path: path.clone(), source },
            _ => LoadError::Io(source),
        })?;
        let text = decode(&bytes, file.charset(), &path)?;

        Ok(ContentResource::loaded(name, text))
    }
}

/// Resolve the name container to a path string: its literal text, or the
/// body of its own resolution for templated names.
fn resolve_name(name: &TextContainer) -> Result<String, LoadError> {
    if let Some(text) = name.text() {
        return Ok(text.to_owned());
    }

    name.as_resource()
        .map(|resource| resource.body().to_owned())
        .ok_or(LoadError::UnresolvedName)
}

fn decode(
    bytes: &[u8],
    charset: Option<&'static Encoding>,
    path: &Path,
) -> Result<String, LoadError> {
    let encoding = charset.unwrap_or(UTF_8);
    // No BOM sniffing: the declared encoding is authoritative
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(LoadError::Decode {
            path: path.to_owned(),
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, bytes: &[u8]) {
        fs::write(dir.path().join(name), bytes).unwrap();
    }

    fn deferred(name: &str, charset: Option<&str>) -> FileContainer {
        let mut builder = FileContainer::builder().with_name(TextContainer::raw(name));
        if let Some(label) = charset {
            builder = builder.with_charset(label);
        }
        builder.build().unwrap()
    }

    #[test]
    fn loads_deferred_file_as_utf8_by_default() {
        let dir = TempDir::new().unwrap();
        write(&dir, "hello.json", b"{\"greeting\": \"hello\"}");
        let loader = FileLoader::new(dir.path());

        let resource = loader.load(&deferred("hello.json", None)).unwrap();
        assert_eq!(resource.body(), "{\"greeting\": \"hello\"}");
        assert_eq!(resource.name(), Some("hello.json"));
        assert!(!resource.is_template());
    }

    #[test]
    fn loads_with_declared_charset() {
        let dir = TempDir::new().unwrap();
        // 0xE9 is "é" in the windows-1252 encoding, invalid on its own in UTF-8
        write(&dir, "latin.txt", &[0x63, 0x61, 0x66, 0xE9]);
        let loader = FileLoader::new(dir.path());

        let resource = loader.load(&deferred("latin.txt", Some("latin1"))).unwrap();
        assert_eq!(resource.body(), "café");
    }

    #[test]
    fn loads_compact_form_by_its_name() {
        let dir = TempDir::new().unwrap();
        write(&dir, "hello.json", b"from disk");
        let loader = FileLoader::new(dir.path());

        let file = FileContainer::linked(TextContainer::raw("hello.json"));
        let resource = loader.load(&file).unwrap();
        assert_eq!(resource.body(), "from disk");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let loader = FileLoader::new(dir.path());

        let err = loader.load(&deferred("absent.json", None)).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { path, .. } if path.ends_with("absent.json")));
    }

    #[test]
    fn malformed_bytes_are_a_decode_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.txt", &[0x68, 0x69, 0xFF]);
        let loader = FileLoader::new(dir.path());

        let err = loader.load(&deferred("broken.txt", None)).unwrap_err();
        assert!(matches!(err, LoadError::Decode { encoding: "UTF-8", .. }));
    }

    #[test]
    fn property_group_name_does_not_resolve() {
        let dir = TempDir::new().unwrap();
        let loader = FileLoader::new(dir.path());

        let name = TextContainer::Properties(Default::default());
        let file = FileContainer::builder()
            .with_name(name)
            .build()
            .unwrap();
        assert!(matches!(
            loader.load(&file).unwrap_err(),
            LoadError::UnresolvedName
        ));
    }
}
