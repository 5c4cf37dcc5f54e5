/*
 * de.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Deserialization of content declarations.
//!
//! The configuration surface is polymorphic, so both container types carry
//! handwritten `Deserialize` impls over a parsed [`serde_json::Value`]:
//!
//! - a JSON string / number / boolean is inline raw text;
//! - `{ "template": "..." }` or
//!   `{ "template": { "with": "...", "vars": { ... } } }` is a template
//!   directive;
//! - any other JSON object is a property group;
//! - for [`FileContainer`]: a scalar is the compact form (the value doubles
//!   as path and content), an object is the verbose
//!   `{ "name": ..., "charset": "..." }` form.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::container::{FileContainer, TextContainer, TEMPLATE_OPERATION};
use crate::error::ContentError;

impl<'de> Deserialize<'de> for TextContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        container_from_json(&value).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for FileContainer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        file_from_json(&value).map_err(D::Error::custom)
    }
}

fn container_from_json(value: &Value) -> Result<TextContainer, ContentError> {
    match value {
        Value::String(text) => Ok(TextContainer::raw(text.clone())),
        Value::Bool(flag) => Ok(TextContainer::raw(flag.to_string())),
        Value::Number(number) => Ok(TextContainer::raw(number.to_string())),
        Value::Object(fields) => {
            // `template` acts as a directive only when it is the sole key
            let mut entries = fields.iter();
            if let (Some((key, payload)), None) = (entries.next(), entries.next()) {
                if key.eq_ignore_ascii_case(TEMPLATE_OPERATION) {
                    return directive_from_json(key, payload);
                }
            }

            let mut props = IndexMap::new();
            for (key, entry) in fields {
                props.insert(key.clone(), container_from_json(entry)?);
            }
            Ok(TextContainer::Properties(props))
        }
        Value::Array(_) => Err(ContentError::UnexpectedForm {
            expected: "a scalar or object",
            found: "an array",
        }),
        Value::Null => Err(ContentError::UnexpectedForm {
            expected: "a scalar or object",
            found: "null",
        }),
    }
}

fn directive_from_json(operation: &str, payload: &Value) -> Result<TextContainer, ContentError> {
    match payload {
        Value::String(text) => Ok(TextContainer::directive(
            operation,
            text.clone(),
            IndexMap::new(),
        )),
        Value::Object(fields) => {
            let mut text = None;
            let mut props = IndexMap::new();
            for (key, entry) in fields {
                match key.as_str() {
                    "with" => match entry {
                        Value::String(source) => text = Some(source.clone()),
                        other => {
                            return Err(ContentError::UnexpectedForm {
                                expected: "template text under `with`",
                                found: json_kind(other),
                            })
                        }
                    },
                    "vars" => match entry {
                        Value::Object(vars) => {
                            for (name, var) in vars {
                                props.insert(name.clone(), container_from_json(var)?);
                            }
                        }
                        other => {
                            return Err(ContentError::UnexpectedForm {
                                expected: "an object of substitution values under `vars`",
                                found: json_kind(other),
                            })
                        }
                    },
                    other => {
                        return Err(ContentError::UnknownTemplateKey {
                            key: other.to_string(),
                        })
                    }
                }
            }

            let text = text.ok_or(ContentError::UnexpectedForm {
                expected: "template text under `with`",
                found: "nothing",
            })?;
            Ok(TextContainer::directive(operation, text, props))
        }
        other => Err(ContentError::UnexpectedForm {
            expected: "template text or a `with`/`vars` object",
            found: json_kind(other),
        }),
    }
}

fn file_from_json(value: &Value) -> Result<FileContainer, ContentError> {
    match value {
        Value::Object(fields) => {
            let mut builder = FileContainer::builder();
            for (key, entry) in fields {
                match key.as_str() {
                    "name" => builder = builder.with_name(container_from_json(entry)?),
                    "charset" => match entry {
                        Value::String(label) => builder = builder.with_charset(label.clone()),
                        other => {
                            return Err(ContentError::UnexpectedForm {
                                expected: "a charset label string",
                                found: json_kind(other),
                            })
                        }
                    },
                    other => {
                        return Err(ContentError::UnknownFileKey {
                            key: other.to_string(),
                        })
                    }
                }
            }
            builder.build()
        }
        scalar => Ok(FileContainer::linked(container_from_json(scalar)?)),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn container(value: Value) -> TextContainer {
        serde_json::from_value(value).unwrap()
    }

    fn file(value: Value) -> FileContainer {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn string_parses_as_raw_text() {
        assert_eq!(container(json!("hello")), TextContainer::raw("hello"));
    }

    #[test]
    fn scalars_parse_as_their_rendering() {
        assert_eq!(container(json!(42)), TextContainer::raw("42"));
        assert_eq!(container(json!(true)), TextContainer::raw("true"));
    }

    #[test]
    fn template_string_form() {
        let parsed = container(json!({"template": "hello ${who}"}));
        assert!(parsed.is_for_template());
        assert_eq!(parsed.text(), Some("hello ${who}"));
        assert!(!parsed.has_properties());
    }

    #[test]
    fn template_with_vars() {
        let parsed = container(json!({
            "template": {
                "with": "hello ${who}",
                "vars": { "who": "world" }
            }
        }));

        assert!(parsed.is_for_template());
        assert_eq!(parsed.text(), Some("hello ${who}"));
        assert_eq!(parsed.props().unwrap()["who"], TextContainer::raw("world"));
    }

    #[test]
    fn template_vars_may_nest_containers() {
        let parsed = container(json!({
            "template": {
                "with": "${body}",
                "vars": { "body": { "template": "inner" } }
            }
        }));
        assert!(parsed.props().unwrap()["body"].is_for_template());
    }

    #[test]
    fn plain_object_parses_as_property_group() {
        let parsed = container(json!({"status": "200", "latency": "1s"}));

        assert!(parsed.has_properties());
        assert!(!parsed.is_for_template());
        assert_eq!(
            parsed.props().unwrap()["status"],
            TextContainer::raw("200")
        );
    }

    #[test]
    fn multi_key_object_with_template_key_is_a_property_group() {
        // `template` only acts as a directive when it is the sole key
        let parsed = container(json!({"template": "x", "other": "y"}));
        assert!(!parsed.is_for_template());
        assert!(parsed.has_properties());
    }

    #[test]
    fn array_is_rejected() {
        let err = serde_json::from_value::<TextContainer>(json!(["a"])).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn unknown_template_key_is_rejected() {
        let err =
            serde_json::from_value::<TextContainer>(json!({"template": {"with": "x", "var": {}}}))
                .unwrap_err();
        assert!(err.to_string().contains("var"));
    }

    #[test]
    fn compact_file_form_is_linked() {
        let parsed = file(json!("hello.json"));

        assert!(!parsed.is_deferred());
        assert_eq!(parsed.name(), &TextContainer::raw("hello.json"));
        assert_eq!(parsed.charset(), None);
    }

    #[test]
    fn verbose_file_form_is_deferred() {
        let parsed = file(json!({"name": "hello.json", "charset": "GBK"}));

        assert!(parsed.is_deferred());
        assert_eq!(parsed.name(), &TextContainer::raw("hello.json"));
        assert_eq!(parsed.charset(), Some(encoding_rs::GBK));
    }

    #[test]
    fn verbose_file_name_may_be_templated() {
        let parsed = file(json!({"name": {"template": "${base}.json"}}));
        assert!(parsed.name().is_for_template());
    }

    #[test]
    fn verbose_file_with_unknown_charset_still_parses() {
        let parsed = file(json!({"name": "hello.json", "charset": "not-a-real-charset"}));
        assert_eq!(parsed.charset(), None);
    }

    #[test]
    fn verbose_file_without_name_is_rejected() {
        let err =
            serde_json::from_value::<FileContainer>(json!({"charset": "UTF-8"})).unwrap_err();
        assert!(err.to_string().contains("missing a name"));
    }

    #[test]
    fn verbose_file_with_unknown_key_is_rejected() {
        let err = serde_json::from_value::<FileContainer>(json!({"name": "f", "encoding": "x"}))
            .unwrap_err();
        assert!(err.to_string().contains("encoding"));
    }
}
