//! Settings page - navigation menu plus the selected setting

use dioxus::prelude::*;

use console_core::dbt_form::{DbtFormData, DbtFormPatch, FormMode};
use console_core::models::DbtConfigDraft;
use console_core::placeholder::{resolve, PlaceholderKind, PlaceholderProps};
use console_core::settings_menu::GlobalSettingOption;

use crate::components::{DbtConfigFormView, PlaceholderView, SettingsMenu};
use crate::state::AppState;
use crate::theme::PALETTE;

/// Settings tab that hosts the dbt ingestion form.
const DBT_FORM_TAB: GlobalSettingOption = GlobalSettingOption::Databases;

fn submission_preview(draft: &DbtConfigDraft) -> String {
    serde_json::to_string_pretty(draft).unwrap_or_else(|e| e.to_string())
}

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<AppState>();
    let colors = PALETTE;
    let params = state.route_params();
    let selected_key = params.selected_key();
    let placeholder_size = (state.config)().placeholder_size;

    let shows_dbt_form = params.tab.as_deref() == Some(DBT_FORM_TAB.as_str());

    rsx! {
        div {
            class: "settings-page",
            style: "display: flex; height: 100vh;",

            SettingsMenu {}

            main {
                style: "flex: 1; padding: 24px; overflow-y: auto;",

                h2 {
                    style: "margin-top: 0; font-size: 16px; color: {colors.text_secondary};",
                    "{selected_key}"
                }

                if shows_dbt_form {
                    DbtIngestionSection {}
                } else {
                    PlaceholderView {
                        placeholder: resolve(PlaceholderProps {
                            size: placeholder_size,
                            ..PlaceholderProps::of(PlaceholderKind::NoData)
                        }),
                    }
                }
            }
        }
    }
}

#[component]
fn DbtIngestionSection() -> Element {
    let mut state = use_context::<AppState>();
    let colors = PALETTE;
    let data: DbtFormData = (state.form_data)();
    let preview = (state.last_submission)().as_ref().map(submission_preview);

    rsx! {
        DbtConfigFormView {
            data: data,
            mode: FormMode::Add,
            on_change: move |patch: DbtFormPatch| {
                tracing::debug!("dbt form changed: {:?}", patch);
                patch.apply_to(&mut state.form_data.write());
            },
            on_submit: move |submission: Option<DbtConfigDraft>| {
                tracing::info!(
                    "dbt configuration submitted with {} keys",
                    submission.as_ref().map_or(0, DbtConfigDraft::len)
                );
                state.last_submission.set(submission);
            },
            on_cancel: move |()| {
                tracing::info!("dbt configuration cancelled");
                state.form_data.set(DbtFormData::default());
                state.last_submission.set(None);
            },
        }

        if let Some(preview) = preview {
            pre {
                "data-testid": "dbt-submission",
                style: "
                    margin-top: 16px;
                    padding: 12px;
                    background: {colors.bg_secondary};
                    border: 1px solid {colors.border};
                    border-radius: 4px;
                    font-size: 12px;
                ",
                "{preview}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use console_core::models::ConfigKey;

    use super::*;

    #[test]
    fn preview_renders_camel_case_keys() {
        let draft =
            DbtConfigDraft::new().with(ConfigKey::DbtManifestFilePath, "/dbt/manifest.json");
        let preview = submission_preview(&draft);
        assert!(preview.contains("\"dbtManifestFilePath\": \"/dbt/manifest.json\""));
    }
}
