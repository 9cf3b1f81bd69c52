//! UI Components
//!
//! Descriptor-driven components shared by the desktop views.

mod dbt_config_form;
mod field_input;
mod placeholder_view;
mod settings_left_panel;

pub use dbt_config_form::DbtConfigFormView;
pub use field_input::FieldInput;
pub use placeholder_view::PlaceholderView;
pub use settings_left_panel::SettingsMenu;
