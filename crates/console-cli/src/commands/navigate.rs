use console_core::routing::{MemoryRouter, Router};
use console_core::settings_menu::SettingsLeftPanel;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResult {
    pub key: String,
    pub path: String,
    pub selected_key: String,
}

pub fn navigate(key: &str) -> NavigationResult {
    let mut router = MemoryRouter::default();
    let path = SettingsLeftPanel::builtin().select(key, &mut router);
    NavigationResult {
        key: key.to_string(),
        path,
        selected_key: router.current_params().selected_key(),
    }
}

pub fn run_navigate(key: &str, as_json: bool) -> Result<(), CliError> {
    let result = navigate(key);
    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.path);
    }
    Ok(())
}
