//! Typed model of a stub configuration document.

use std::io;

use decoy_content::{FileContainer, TextContainer};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::StubError;

/// A parsed stub configuration file: an ordered list of stubs, matched
/// first-to-last at serve time.
#[derive(Debug, Clone, PartialEq)]
pub struct StubDocument {
    pub stubs: Vec<Stub>,
}

impl StubDocument {
    /// Parse a stub document from JSON text.
    pub fn from_json_str(input: &str) -> Result<Self, StubError> {
        let stubs = serde_json::from_str(input)?;
        Ok(Self { stubs })
    }

    /// Parse a stub document from a reader.
    pub fn from_reader(reader: impl io::Read) -> Result<Self, StubError> {
        let stubs = serde_json::from_reader(reader)?;
        Ok(Self { stubs })
    }

    /// Structural checks that go beyond the serde schema: the document must
    /// declare at least one stub, and no request or response may carry more
    /// than one content-bearing key.
    pub fn validate(&self) -> Result<(), StubError> {
        if self.stubs.is_empty() {
            return Err(StubError::EmptyDocument);
        }

        for (index, stub) in self.stubs.iter().enumerate() {
            if let Some(request) = &stub.request {
                let keys = request.content_keys();
                if keys.len() > 1 {
                    return Err(StubError::ConflictingContent {
                        index,
                        section: "request",
                        keys,
                    });
                }
            }

            let keys = stub.response.content_keys();
            if keys.len() > 1 {
                return Err(StubError::ConflictingContent {
                    index,
                    section: "response",
                    keys,
                });
            }
        }

        Ok(())
    }
}

/// One request/response pairing. A stub without a request matches every
/// request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stub {
    #[serde(default)]
    pub request: Option<RequestSpec>,
    pub response: ResponseSpec,
}

/// What an incoming request must look like for the stub to apply. Request
/// bodies are content specifications too.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RequestSpec {
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub text: Option<TextContainer>,
    #[serde(default)]
    pub file: Option<FileContainer>,
}

impl RequestSpec {
    /// The declared body content, if any.
    pub fn content(&self) -> Option<ContentSpec<'_>> {
        if let Some(text) = &self.text {
            return Some(ContentSpec::Inline(text));
        }
        self.file.as_ref().map(ContentSpec::File)
    }

    fn content_keys(&self) -> Vec<&'static str> {
        content_keys(&self.text, &self.file, &None)
    }
}

/// What the stub serves back.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResponseSpec {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    #[serde(default)]
    pub text: Option<TextContainer>,
    #[serde(default)]
    pub file: Option<FileContainer>,
    #[serde(default)]
    pub json: Option<serde_json::Value>,
}

impl ResponseSpec {
    /// The declared body content, if any. When a document passes
    /// [`StubDocument::validate`], at most one key contributes.
    pub fn content(&self) -> Option<ContentSpec<'_>> {
        if let Some(text) = &self.text {
            return Some(ContentSpec::Inline(text));
        }
        if let Some(file) = &self.file {
            return Some(ContentSpec::File(file));
        }
        self.json.as_ref().map(ContentSpec::Json)
    }

    fn content_keys(&self) -> Vec<&'static str> {
        content_keys(&self.text, &self.file, &self.json)
    }
}

/// A borrowed view of the one content-bearing key of a request or response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentSpec<'a> {
    /// Inline content under `text`: raw text, a template directive, or a
    /// property group.
    Inline(&'a TextContainer),
    /// File-backed content under `file`, compact or verbose form.
    File(&'a FileContainer),
    /// A literal JSON body under `json`, served re-serialized.
    Json(&'a serde_json::Value),
}

fn content_keys(
    text: &Option<TextContainer>,
    file: &Option<FileContainer>,
    json: &Option<serde_json::Value>,
) -> Vec<&'static str> {
    let mut keys = Vec::new();
    if text.is_some() {
        keys.push("text");
    }
    if file.is_some() {
        keys.push("file");
    }
    if json.is_some() {
        keys.push("json");
    }
    keys
}
