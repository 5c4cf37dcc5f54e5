//! `decoy check` - report each stub's declared content source.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use decoy_config::{ContentSpec, Stub};
use serde::Serialize;

use super::{load_document, stub_key};

#[derive(Debug, Serialize)]
struct ContentReport {
    stub: String,
    section: &'static str,
    kind: &'static str,
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    charset: Option<String>,
}

pub fn execute(file: &Path, json: bool) -> Result<()> {
    let doc = load_document(file)?;

    let reports: Vec<ContentReport> = doc
        .stubs
        .iter()
        .enumerate()
        .flat_map(|(index, stub)| describe_stub(index, stub))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{} {} stub(s) in {}",
        "✓".green(),
        doc.stubs.len(),
        file.display()
    );
    for report in &reports {
        let charset = report
            .charset
            .as_deref()
            .map(|name| format!(" [{name}]"))
            .unwrap_or_default();
        println!(
            "  {} {}: {} {}{}",
            report.stub.bold(),
            report.section,
            report.kind.cyan(),
            report.detail,
            charset.yellow()
        );
    }

    Ok(())
}

fn describe_stub(index: usize, stub: &Stub) -> Vec<ContentReport> {
    let key = stub_key(index, stub.request.as_ref().and_then(|r| r.uri.as_deref()));
    let mut reports = Vec::new();

    if let Some(content) = stub.request.as_ref().and_then(|r| r.content()) {
        reports.push(describe_content(&key, "request", &content));
    }
    if let Some(content) = stub.response.content() {
        reports.push(describe_content(&key, "response", &content));
    }

    reports
}

fn describe_content(key: &str, section: &'static str, content: &ContentSpec<'_>) -> ContentReport {
    let (kind, detail, charset) = match content {
        ContentSpec::Inline(container) => {
            let kind = if container.is_raw_text() {
                "text"
            } else if container.is_for_template() {
                "template"
            } else if container.has_properties() {
                "properties"
            } else {
                "directive"
            };
            (kind, container.to_string(), None)
        }
        ContentSpec::File(file) => (
            "file",
            file.to_string(),
            file.charset().map(|encoding| encoding.name().to_owned()),
        ),
        ContentSpec::Json(value) => ("json", value.to_string(), None),
    };

    ContentReport {
        stub: key.to_owned(),
        section,
        kind,
        detail,
        charset,
    }
}
