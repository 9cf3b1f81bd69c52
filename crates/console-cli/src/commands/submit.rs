use std::path::Path;

use console_core::config::ConsoleConfig;
use console_core::dbt_form::{DbtConfigForm, FormEvent, FormInput, FormMode};
use console_core::models::{ChangeTarget, DbtConfigDraft};
use console_core::Translator;

use crate::commands::common::{catalog_for, form_labels, format_value, load_form_data, parse_edit};
use crate::error::CliError;

/// Apply `edits` to the form for `source` and submit it.
pub fn assemble_submission(
    config: &ConsoleConfig,
    source: &str,
    data_path: Option<&Path>,
    edits: &[String],
) -> Result<Option<DbtConfigDraft>, CliError> {
    let data = load_form_data(data_path, source)?;
    let mut form = DbtConfigForm::new(data, FormMode::Add, form_labels(&catalog_for(config)));

    for raw in edits {
        let (key, value) = parse_edit(raw)?;
        form.handle(FormInput::Edit {
            target: ChangeTarget::Config(key),
            value,
        });
    }

    match form.handle(FormInput::Submit) {
        Some(FormEvent::Submit(submission)) => Ok(submission),
        _ => Ok(None),
    }
}

pub fn run_submit(
    config: &ConsoleConfig,
    source: &str,
    data_path: Option<&Path>,
    edits: &[String],
    as_json: bool,
) -> Result<(), CliError> {
    let submission = assemble_submission(config, source, data_path, edits)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&submission)?);
        return Ok(());
    }

    match submission {
        Some(draft) => {
            for line in format_submission_lines(&draft) {
                println!("{line}");
            }
        }
        None => println!("{}", catalog_for(config).t("message.no-selected-dbt")),
    }
    Ok(())
}

pub fn format_submission_lines(draft: &DbtConfigDraft) -> Vec<String> {
    draft
        .iter()
        .map(|(key, value)| format!("{key} = {}", format_value(value)))
        .collect()
}
