/*
 * container.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Content containers.
//!
//! [`TextContainer`] is the uniform representation of a declared content
//! source. Every variant answers the same operation set; operations that do
//! not apply to a variant return their neutral value instead of failing.
//!
//! [`FileContainer`] layers a file-path indirection and an optional charset
//! over the container model. It has exactly two states, fixed at
//! construction:
//!
//! - **Linked**: built from the compact configuration form, where a bare
//!   value is simultaneously the declared path and, until the loader proves
//!   otherwise, the content itself. Operations proxy to the linked value.
//! - **Deferred**: built via [`FileContainer::builder`] from the verbose
//!   form. Content has not been loaded yet, so every delegated operation
//!   answers with its neutral value until the external loader resolves the
//!   name and charset into a resource.
//!
//! The Deferred-to-resolved transition belongs to the loader, which keeps
//! resolved resources in its own store; a container is never mutated.

use std::fmt;

use encoding_rs::Encoding;
use indexmap::IndexMap;

use crate::charset::resolve_charset;
use crate::error::ContentError;
use crate::resource::ContentResource;

/// Operation name marking a directive as template expansion.
pub const TEMPLATE_OPERATION: &str = "template";

/// A declared content source.
#[derive(Debug, Clone, PartialEq)]
pub enum TextContainer {
    /// Inline literal text.
    RawText(String),

    /// A template/property-expansion directive: operation name, the text it
    /// operates on, and named substitution properties.
    Directive {
        operation: String,
        text: String,
        props: IndexMap<String, TextContainer>,
    },

    /// A group of named sub-properties, not itself servable content.
    Properties(IndexMap<String, TextContainer>),

    /// A reference to an external file.
    File(FileContainer),
}

impl TextContainer {
    /// Inline literal text.
    pub fn raw(text: impl Into<String>) -> Self {
        TextContainer::RawText(text.into())
    }

    /// A directive with the given operation name, payload text, and
    /// substitution properties.
    pub fn directive(
        operation: impl Into<String>,
        text: impl Into<String>,
        props: IndexMap<String, TextContainer>,
    ) -> Self {
        TextContainer::Directive {
            operation: operation.into(),
            text: text.into(),
            props,
        }
    }

    /// Whether this container is plain literal text.
    pub fn is_raw_text(&self) -> bool {
        match self {
            TextContainer::RawText(_) => true,
            TextContainer::File(file) => file.is_raw_text(),
            _ => false,
        }
    }

    /// The literal or directive payload text.
    pub fn text(&self) -> Option<&str> {
        match self {
            TextContainer::RawText(text) => Some(text),
            TextContainer::Directive { text, .. } => Some(text),
            TextContainer::Properties(_) => None,
            TextContainer::File(file) => file.text(),
        }
    }

    /// The directive operation name, if this container is a directive.
    pub fn operation(&self) -> Option<&str> {
        match self {
            TextContainer::Directive { operation, .. } => Some(operation),
            TextContainer::File(file) => file.operation(),
            _ => None,
        }
    }

    /// Whether this container carries named sub-properties.
    pub fn has_properties(&self) -> bool {
        match self {
            TextContainer::RawText(_) => false,
            TextContainer::Directive { props, .. } => !props.is_empty(),
            TextContainer::Properties(props) => !props.is_empty(),
            TextContainer::File(file) => file.has_properties(),
        }
    }

    /// Named sub-properties, for variants that carry them.
    pub fn props(&self) -> Option<&IndexMap<String, TextContainer>> {
        match self {
            TextContainer::RawText(_) => None,
            TextContainer::Directive { props, .. } => Some(props),
            TextContainer::Properties(props) => Some(props),
            TextContainer::File(file) => file.props(),
        }
    }

    /// Whether this container is a template-expansion directive.
    pub fn is_for_template(&self) -> bool {
        match self {
            TextContainer::Directive { operation, .. } => {
                operation.eq_ignore_ascii_case(TEMPLATE_OPERATION)
            }
            TextContainer::File(file) => file.is_for_template(),
            _ => false,
        }
    }

    /// Whether this container is a file reference.
    pub fn is_file_container(&self) -> bool {
        matches!(self, TextContainer::File(_))
    }

    /// Resolve to a servable resource, or `None` when this container is not
    /// resolvable on its own (a property group, an unknown directive, or a
    /// file reference whose content is still pending).
    pub fn as_resource(&self) -> Option<ContentResource> {
        match self {
            TextContainer::RawText(text) => Some(ContentResource::text(text.clone())),
            TextContainer::Directive { text, props, .. } => {
                if !self.is_for_template() {
                    return None;
                }
                Some(ContentResource::template(text.clone(), resolve_props(props)))
            }
            TextContainer::Properties(_) => None,
            TextContainer::File(file) => file.as_resource(),
        }
    }

    /// Resolve to a resource suitable for template evaluation. Literal text
    /// becomes template source with no substitution values.
    pub fn as_template_resource(&self) -> Option<ContentResource> {
        match self {
            TextContainer::RawText(text) => {
                Some(ContentResource::template(text.clone(), IndexMap::new()))
            }
            TextContainer::Directive { text, props, .. } => {
                Some(ContentResource::template(text.clone(), resolve_props(props)))
            }
            TextContainer::Properties(_) => None,
            TextContainer::File(file) => file.as_template_resource(),
        }
    }

    /// Like [`Self::as_template_resource`], with a caller-supplied logical
    /// name for diagnostics and caching.
    pub fn as_named_template_resource(&self, name: &str) -> Option<ContentResource> {
        self.as_template_resource()
            .map(|resource| resource.with_name(name))
    }
}

/// Resolve each property value to a resource; values that are not
/// resolvable on their own are skipped.
fn resolve_props(props: &IndexMap<String, TextContainer>) -> IndexMap<String, ContentResource> {
    props
        .iter()
        .filter_map(|(key, value)| value.as_resource().map(|r| (key.clone(), r)))
        .collect()
}

impl fmt::Display for TextContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextContainer::RawText(text) => write!(f, "{text:?}"),
            TextContainer::Directive {
                operation,
                text,
                props,
            } => {
                write!(f, "{operation}({text:?}")?;
                if !props.is_empty() {
                    write!(f, ", vars: [{}]", keys(props))?;
                }
                write!(f, ")")
            }
            TextContainer::Properties(props) => write!(f, "{{{}}}", keys(props)),
            TextContainer::File(file) => write!(f, "{file}"),
        }
    }
}

fn keys(props: &IndexMap<String, TextContainer>) -> String {
    props.keys().cloned().collect::<Vec<_>>().join(", ")
}

#[derive(Debug, Clone, PartialEq)]
enum FileState {
    Linked(Box<TextContainer>),
    Deferred {
        name: Box<TextContainer>,
        charset: Option<&'static Encoding>,
    },
}

/// A file-backed content source.
///
/// See the [module documentation](self) for the Linked/Deferred state
/// distinction. Whatever the state, `is_file_container` answers true: being
/// a file reference is a property of the container's role, not of how far
/// resolution has progressed.
#[derive(Debug, Clone, PartialEq)]
pub struct FileContainer {
    state: FileState,
}

impl FileContainer {
    /// Compact form: the bare value is both the declared path and, until
    /// the loader proves otherwise, the content itself.
    pub fn linked(container: TextContainer) -> Self {
        Self {
            state: FileState::Linked(Box::new(container)),
        }
    }

    /// Builder for the verbose `{ name, charset }` form.
    pub fn builder() -> FileContainerBuilder {
        FileContainerBuilder::default()
    }

    /// The declared file path, itself possibly templated.
    pub fn name(&self) -> &TextContainer {
        match &self.state {
            FileState::Linked(container) => container,
            FileState::Deferred { name, .. } => name,
        }
    }

    /// The declared encoding. `None` means "use default decoding".
    pub fn charset(&self) -> Option<&'static Encoding> {
        match &self.state {
            FileState::Linked(_) => None,
            FileState::Deferred { charset, .. } => *charset,
        }
    }

    /// Whether content is still pending an external load.
    pub fn is_deferred(&self) -> bool {
        matches!(self.state, FileState::Deferred { .. })
    }

    fn content(&self) -> Option<&TextContainer> {
        match &self.state {
            FileState::Linked(container) => Some(container),
            FileState::Deferred { .. } => None,
        }
    }

    /// Always true, in either state.
    pub fn is_file_container(&self) -> bool {
        true
    }

    pub fn as_resource(&self) -> Option<ContentResource> {
        self.content().and_then(TextContainer::as_resource)
    }

    pub fn as_template_resource(&self) -> Option<ContentResource> {
        self.content().and_then(TextContainer::as_template_resource)
    }

    pub fn as_named_template_resource(&self, name: &str) -> Option<ContentResource> {
        self.content()
            .and_then(|container| container.as_named_template_resource(name))
    }

    pub fn is_raw_text(&self) -> bool {
        self.content().is_some_and(TextContainer::is_raw_text)
    }

    pub fn text(&self) -> Option<&str> {
        self.content().and_then(TextContainer::text)
    }

    pub fn operation(&self) -> Option<&str> {
        self.content().and_then(TextContainer::operation)
    }

    pub fn has_properties(&self) -> bool {
        self.content().is_some_and(TextContainer::has_properties)
    }

    pub fn props(&self) -> Option<&IndexMap<String, TextContainer>> {
        self.content().and_then(TextContainer::props)
    }

    pub fn is_for_template(&self) -> bool {
        self.content().is_some_and(TextContainer::is_for_template)
    }
}

impl fmt::Display for FileContainer {
    /// Renders `name` always and `charset` only when present; an absent
    /// charset is omitted rather than printed as a null marker.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file(name: {}", self.name())?;
        if let Some(charset) = self.charset() {
            write!(f, ", charset: {}", charset.name())?;
        }
        write!(f, ")")
    }
}

/// Builder for the verbose file form.
///
/// `with_charset` accepts a textual label; `build` resolves it best-effort.
/// An unrecognized label degrades to no charset override. Only a missing
/// name fails construction.
#[derive(Debug, Default)]
pub struct FileContainerBuilder {
    name: Option<TextContainer>,
    charset: Option<String>,
}

impl FileContainerBuilder {
    pub fn with_name(mut self, name: TextContainer) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_charset(mut self, label: impl Into<String>) -> Self {
        self.charset = Some(label.into());
        self
    }

    pub fn build(self) -> Result<FileContainer, ContentError> {
        let name = self.name.ok_or(ContentError::MissingFileName)?;
        let charset = self.charset.as_deref().and_then(resolve_charset);
        Ok(FileContainer {
            state: FileState::Deferred {
                name: Box::new(name),
                charset,
            },
        })
    }
}
