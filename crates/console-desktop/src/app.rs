//! Main application component

use dioxus::prelude::*;

use console_core::config::ConsoleConfig;
use console_core::dbt_form::DbtFormData;
use console_core::models::PermissionSet;
use console_core::Catalog;

use crate::state::AppState;
use crate::theme::PALETTE;
use crate::views::SettingsPage;

fn load_config() -> ConsoleConfig {
    match ConsoleConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load console config, using defaults: {}", e);
            ConsoleConfig::default()
        }
    }
}

fn load_permissions(config: &ConsoleConfig) -> PermissionSet {
    config.load_permissions().unwrap_or_else(|e| {
        tracing::warn!("Failed to load permissions: {}", e);
        PermissionSet::default()
    })
}

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_signal(load_config);
    let catalog = use_signal(|| Catalog::for_locale(config.peek().locale.as_deref()));
    let permissions = use_signal(|| load_permissions(&config.peek()));
    let history = use_signal(Vec::new);
    let form_data = use_signal(DbtFormData::default);
    let last_submission = use_signal(|| None);

    use_context_provider(|| AppState {
        config,
        catalog,
        permissions,
        history,
        form_data,
        last_submission,
    });

    let colors = PALETTE;

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 14px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",
            SettingsPage {}
        }
    }
}
