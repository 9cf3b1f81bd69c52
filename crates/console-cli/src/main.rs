//! Catalog Console CLI - inspect settings menus, dbt forms and placeholders
//!
//! Drives the console core headlessly, printing what the desktop client would
//! render.

mod cli;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::load_config;
use crate::commands::completions::run_completions;
use crate::commands::form::run_form;
use crate::commands::menu::run_menu;
use crate::commands::navigate::run_navigate;
use crate::commands::placeholder::{run_placeholder, PlaceholderArgs};
use crate::commands::submit::run_submit;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("console_cli=info,console_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Menu {
            permissions,
            admin,
            route,
            json,
        } => run_menu(
            &config,
            permissions.as_deref(),
            admin,
            route.as_deref(),
            json,
        )?,
        Commands::Navigate { key, json } => run_navigate(&key, json)?,
        Commands::Form {
            source,
            data,
            mode,
            json,
        } => run_form(&config, &source, data.as_deref(), mode.into(), json)?,
        Commands::Submit {
            source,
            data,
            edits,
            json,
        } => run_submit(&config, &source, data.as_deref(), &edits, json)?,
        Commands::Placeholder {
            kind,
            size,
            heading,
            doc,
            permission,
            json,
        } => run_placeholder(
            &config,
            PlaceholderArgs {
                kind: &kind,
                size: size.as_deref(),
                heading,
                doc,
                permission,
            },
            json,
        )?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests;
