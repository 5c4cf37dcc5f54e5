//! `decoy resolve` - load file-backed content and print resolved resources.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use decoy_config::ContentSpec;
use decoy_loader::{FileLoader, ResourceStore};

use super::{load_document, stub_key};

pub fn execute(file: &Path, root: Option<&Path>) -> Result<()> {
    let doc = load_document(file)?;

    let root = root
        .or_else(|| file.parent())
        .unwrap_or_else(|| Path::new("."));
    let loader = FileLoader::new(root);
    let mut store = ResourceStore::new();

    for (index, stub) in doc.stubs.iter().enumerate() {
        let key = stub_key(index, stub.request.as_ref().and_then(|r| r.uri.as_deref()));

        let Some(content) = stub.response.content() else {
            println!("{} {}: no response content", "-".dimmed(), key.bold());
            continue;
        };

        match content {
            ContentSpec::Inline(container) => match container.as_resource() {
                Some(resource) => print_body(&key, resource.body()),
                None => println!(
                    "{} {}: not resolvable without a request context ({container})",
                    "-".dimmed(),
                    key.bold()
                ),
            },
            ContentSpec::File(file_ref) => {
                let resource = store
                    .resolve(&key, file_ref, &loader)
                    .with_context(|| format!("failed to resolve {file_ref} for {key}"))?;
                print_body(&key, resource.body());
            }
            ContentSpec::Json(value) => print_body(&key, &value.to_string()),
        }
    }

    Ok(())
}

fn print_body(key: &str, body: &str) {
    println!("{} {}:", "✓".green(), key.bold());
    for line in body.lines() {
        println!("    {line}");
    }
}
