use dioxus::prelude::*;

use console_core::placeholder::{Placeholder, PlaceholderImage};

use crate::state::AppState;
use crate::theme::PALETTE;

const fn illustration(image: PlaceholderImage) -> &'static str {
    match image {
        PlaceholderImage::NoData => "∅",
        PlaceholderImage::NoAccess => "🔒",
        PlaceholderImage::NoSearchResults => "🔍",
        PlaceholderImage::AddEntity => "+",
    }
}

/// Empty and error state display.
#[component]
pub fn PlaceholderView(
    placeholder: Placeholder,
    on_action: Option<EventHandler<MouseEvent>>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = PALETTE;
    let content = placeholder.content(&*state.catalog.read());

    let icon = illustration(content.image);
    let size = content.size_px;
    let class_name = content.class_name.clone().unwrap_or_default();
    let font_size = size / 3;

    rsx! {
        div {
            class: "error-placeholder {class_name}",
            "data-testid": "error-placeholder",
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 24px;
                text-align: center;
            ",

            div {
                style: "
                    width: {size}px;
                    height: {size}px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: {font_size}px;
                    color: {colors.text_muted};
                ",
                "{icon}"
            }
            if let Some(heading) = content.heading.clone() {
                h3 { style: "margin: 0;", "{heading}" }
            }
            p {
                style: "margin: 0; color: {colors.text_secondary}; max-width: 420px;",
                "{content.message}"
            }
            if let Some(doc) = content.doc_link.clone() {
                a {
                    href: "{doc.href}",
                    style: "color: {colors.accent};",
                    "{doc.label}"
                }
            }
            if let Some(action) = content.action.clone() {
                button {
                    "data-testid": "{action.test_id}",
                    style: "
                        padding: 6px 14px;
                        border: none;
                        border-radius: 4px;
                        background: {colors.accent};
                        color: {colors.accent_text};
                        cursor: pointer;
                    ",
                    onclick: move |evt| {
                        if let Some(handler) = on_action {
                            handler.call(evt);
                        }
                    },
                    "{action.label}"
                }
            }
        }
    }
}
