use std::path::Path;

use console_core::config::ConsoleConfig;
use console_core::dbt_form::{DbtConfigForm, FormMode, FormView, PanelView};
use console_core::models::missing_required;

use crate::commands::common::{catalog_for, form_labels, format_field_lines, load_form_data};
use crate::error::CliError;

pub fn form_view(
    config: &ConsoleConfig,
    source: &str,
    data_path: Option<&Path>,
    mode: FormMode,
) -> Result<FormView, CliError> {
    let data = load_form_data(data_path, source)?;
    let t = catalog_for(config);
    let form = DbtConfigForm::new(data, mode, form_labels(&t));
    Ok(form.view(&t))
}

pub fn run_form(
    config: &ConsoleConfig,
    source: &str,
    data_path: Option<&Path>,
    mode: FormMode,
    as_json: bool,
) -> Result<(), CliError> {
    let view = form_view(config, source, data_path, mode)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        for line in format_form_lines(&view) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn format_form_lines(view: &FormView) -> Vec<String> {
    let mut lines = format_field_lines(&view.header);
    lines.push(String::new());

    match &view.panel {
        PanelView::Source { fields, .. } => {
            lines.extend(format_field_lines(fields));
            let missing = missing_required(fields);
            if !missing.is_empty() {
                lines.push(format!("missing required: {}", missing.join(", ")));
            }
        }
        PanelView::NoSource { message, .. } => lines.push(message.clone()),
    }

    let actions = view.panel.actions();
    lines.push(format!("[{}] [{}]", actions.cancel_label, actions.ok_label));
    lines
}
