use console_core::config::ConsoleConfig;
use console_core::placeholder::{resolve, PlaceholderContent, PlaceholderKind, PlaceholderProps};

use crate::commands::common::catalog_for;
use crate::error::CliError;

pub struct PlaceholderArgs<'a> {
    pub kind: &'a str,
    pub size: Option<&'a str>,
    pub heading: Option<String>,
    pub doc: Option<String>,
    pub permission: bool,
}

pub fn placeholder_content(
    config: &ConsoleConfig,
    args: PlaceholderArgs<'_>,
) -> Result<PlaceholderContent, CliError> {
    let kind = args.kind.parse::<PlaceholderKind>().unwrap_or_default();
    let size = match args.size {
        Some(raw) => raw.parse()?,
        None => config.placeholder_size,
    };
    let props = PlaceholderProps {
        kind,
        size,
        heading: args.heading,
        doc: args.doc,
        permission: args.permission,
        ..PlaceholderProps::default()
    };
    tracing::debug!("Resolving placeholder for kind {:?}", kind);
    Ok(resolve(props).content(&catalog_for(config)))
}

pub fn run_placeholder(
    config: &ConsoleConfig,
    args: PlaceholderArgs<'_>,
    as_json: bool,
) -> Result<(), CliError> {
    let content = placeholder_content(config, args)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        for line in format_placeholder_lines(&content) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn format_placeholder_lines(content: &PlaceholderContent) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(heading) = &content.heading {
        lines.push(heading.clone());
    }
    lines.push(content.message.clone());
    if let Some(doc) = &content.doc_link {
        lines.push(format!("{}: {}", doc.label, doc.href));
    }
    if let Some(action) = &content.action {
        lines.push(format!("[{}]", action.label));
    }
    lines
}
