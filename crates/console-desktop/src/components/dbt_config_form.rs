//! dbt configuration form
//!
//! Wraps the core dispatcher in a signal. Field edits stay local until the
//! dispatcher reports a change for the parent.

use dioxus::prelude::*;

use console_core::dbt_form::{
    DbtConfigForm, DbtFormData, DbtFormPatch, FormEvent as DbtFormEvent, FormInput, FormLabels,
    FormMode, PanelView,
};
use console_core::models::{ChangeTarget, DbtConfigDraft, FieldValue};
use console_core::Translator;

use crate::components::FieldInput;
use crate::state::AppState;
use crate::theme::PALETTE;

#[component]
pub fn DbtConfigFormView(
    data: DbtFormData,
    mode: FormMode,
    on_change: EventHandler<DbtFormPatch>,
    on_submit: EventHandler<Option<DbtConfigDraft>>,
    on_cancel: EventHandler<()>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = PALETTE;

    let mut form = use_signal(|| {
        let catalog = state.catalog.peek();
        let labels = FormLabels::new(catalog.t("label.submit"), catalog.t("label.back"));
        DbtConfigForm::new(data.clone(), mode, labels)
    });

    use_effect(use_reactive((&data,), move |(data,)| {
        if form.peek().data() != &data {
            form.write().receive(data);
        }
    }));

    let on_field_change = move |(target, value): (ChangeTarget, FieldValue)| {
        let event = form.write().handle(FormInput::Edit { target, value });
        if let Some(DbtFormEvent::Change(patch)) = event {
            on_change.call(patch);
        }
    };

    let view = form.read().view(&*state.catalog.read());
    let actions = view.panel.actions().clone();
    let body = match view.panel {
        PanelView::Source { fields, .. } => rsx! {
            for field in fields {
                FieldInput {
                    key: "{field.id}",
                    field: field.clone(),
                    on_change: on_field_change,
                }
            }
        },
        PanelView::NoSource { message, .. } => rsx! {
            div {
                "data-testid": "no-selected-dbt",
                style: "padding: 12px 0; color: {colors.text_secondary};",
                "{message}"
            }
        },
    };

    rsx! {
        div {
            class: "dbt-config-form",
            "data-testid": "dbt-configuration-form",
            style: "max-width: 640px;",

            for field in view.header {
                FieldInput {
                    key: "{field.id}",
                    field: field.clone(),
                    on_change: on_field_change,
                }
            }

            {body}

            div {
                style: "display: flex; justify-content: flex-end; gap: 8px; margin-top: 16px;",
                button {
                    "data-testid": "back-button",
                    style: "
                        padding: 6px 14px;
                        border: 1px solid {colors.border};
                        border-radius: 4px;
                        background: {colors.bg_primary};
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let event = form.write().handle(FormInput::Cancel);
                        if let Some(DbtFormEvent::Cancel) = event {
                            on_cancel.call(());
                        }
                    },
                    "{actions.cancel_label}"
                }
                button {
                    "data-testid": "submit-btn",
                    style: "
                        padding: 6px 14px;
                        border: none;
                        border-radius: 4px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        let event = form.write().handle(FormInput::Submit);
                        if let Some(DbtFormEvent::Submit(submission)) = event {
                            on_submit.call(submission);
                        }
                    },
                    "{actions.ok_label}"
                }
            }
        }
    }
}
