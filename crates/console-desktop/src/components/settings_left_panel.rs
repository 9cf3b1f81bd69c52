//! Settings navigation menu

use dioxus::prelude::*;

use console_core::settings_menu::{LeftPanelView, MenuGroup, MenuItem, SettingsLeftPanel};

use crate::components::PlaceholderView;
use crate::state::AppState;
use crate::theme::PALETTE;

/// Left column of the settings page
#[component]
pub fn SettingsMenu() -> Element {
    let state = use_context::<AppState>();
    let colors = PALETTE;

    let view = SettingsLeftPanel::builtin().view(
        &state.permissions.read(),
        state.is_admin(),
        &state.route_params(),
        &*state.catalog.read(),
    );

    let body = match view {
        LeftPanelView::Menu {
            groups,
            selected_key,
        } => rsx! {
            for group in groups {
                MenuGroupView {
                    key: "{group.key}",
                    group: group.clone(),
                    selected_key: selected_key.clone(),
                }
            }
        },
        LeftPanelView::Placeholder { placeholder } => rsx! {
            PlaceholderView { placeholder }
        },
    };

    rsx! {
        aside {
            class: "settings-left-panel",
            "data-testid": "settings-left-panel",
            style: "
                width: 240px;
                background: {colors.bg_secondary};
                border-right: 1px solid {colors.border};
                padding: 16px 8px;
                overflow-y: auto;
            ",

            {body}
        }
    }
}

#[component]
fn MenuGroupView(group: MenuGroup, selected_key: String) -> Element {
    let colors = PALETTE;
    let badge = group.badge.clone().unwrap_or_default();

    rsx! {
        div {
            class: "menu-group",
            style: "margin-bottom: 16px;",

            div {
                style: "
                    font-size: 12px;
                    font-weight: 600;
                    text-transform: uppercase;
                    color: {colors.text_secondary};
                    padding: 0 10px 6px;
                ",
                "{group.label}"
                if group.is_beta {
                    span {
                        style: "
                            margin-left: 6px;
                            padding: 1px 6px;
                            border-radius: 8px;
                            background: {colors.beta};
                            color: {colors.accent_text};
                            font-size: 10px;
                        ",
                        "{badge}"
                    }
                }
            }
            for item in group.children.iter() {
                MenuItemRow {
                    key: "{item.key}",
                    item: item.clone(),
                    is_active: item.key == selected_key,
                }
            }
        }
    }
}

#[component]
fn MenuItemRow(item: MenuItem, is_active: bool) -> Element {
    let state = use_context::<AppState>();
    let colors = PALETTE;

    let bg = if is_active {
        colors.accent
    } else {
        "transparent"
    };
    let text_color = if is_active {
        colors.accent_text
    } else {
        colors.text_primary
    };
    let key = item.key.clone();

    rsx! {
        div {
            "data-testid": "{item.key}",
            style: "
                padding: 6px 10px;
                border-radius: 6px;
                cursor: pointer;
                margin-bottom: 2px;
                background: {bg};
                color: {text_color};
            ",
            onclick: move |_| {
                let mut router = state.router();
                SettingsLeftPanel::builtin().select(&key, &mut router);
            },
            "{item.label}"
        }
    }
}
