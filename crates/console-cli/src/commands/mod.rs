pub mod common;
pub mod completions;
pub mod form;
pub mod menu;
pub mod navigate;
pub mod placeholder;
pub mod submit;
