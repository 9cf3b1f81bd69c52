//! Colors shared by the desktop components

#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub bg_primary: &'static str,
    pub bg_secondary: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error: &'static str,
    pub beta: &'static str,
}

pub const PALETTE: ColorPalette = ColorPalette {
    bg_primary: "#ffffff",
    bg_secondary: "#f8f9fa",
    text_primary: "#1a1a1a",
    text_secondary: "#5f6368",
    text_muted: "#9aa0a6",
    border: "#dadce0",
    accent: "#0950c5",
    accent_text: "#ffffff",
    error: "#dc2626",
    beta: "#7147e8",
};
