use std::path::Path;

use console_core::config::ConsoleConfig;
use console_core::models::PermissionSet;
use console_core::routing::RouteParams;
use console_core::settings_menu::{LeftPanelView, SettingsLeftPanel};
use console_core::Translator;

use crate::commands::common::catalog_for;
use crate::commands::placeholder::format_placeholder_lines;
use crate::error::CliError;

pub fn run_menu(
    config: &ConsoleConfig,
    permissions_path: Option<&Path>,
    admin: bool,
    route: Option<&str>,
    as_json: bool,
) -> Result<(), CliError> {
    let permissions = match permissions_path {
        Some(path) => PermissionSet::load_from_path(path)?,
        None => config.load_permissions()?,
    };
    let params = route.map(RouteParams::from_path).unwrap_or_default();
    let t = catalog_for(config);
    let is_admin = admin || config.is_admin;
    let view = SettingsLeftPanel::builtin().view(&permissions, is_admin, &params, &t);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        for line in format_menu_lines(&view, &t) {
            println!("{line}");
        }
    }

    Ok(())
}

pub fn format_menu_lines(view: &LeftPanelView, t: &dyn Translator) -> Vec<String> {
    match view {
        LeftPanelView::Menu {
            groups,
            selected_key,
        } => {
            let mut lines = Vec::new();
            for group in groups {
                match &group.badge {
                    Some(badge) => lines.push(format!("{} [{badge}]", group.label)),
                    None => lines.push(group.label.clone()),
                }
                for item in &group.children {
                    let marker = if &item.key == selected_key { '>' } else { ' ' };
                    lines.push(format!(" {marker} {:<32} {}", item.key, item.label));
                }
            }
            lines
        }
        LeftPanelView::Placeholder { placeholder } => {
            format_placeholder_lines(&placeholder.content(t))
        }
    }
}
