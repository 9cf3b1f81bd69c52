//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use console_core::config::ConsoleConfig;
use console_core::dbt_form::DbtFormData;
use console_core::models::{DbtConfigDraft, PermissionSet};
use console_core::routing::{RouteParams, Router};
use console_core::Catalog;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded console configuration
    pub config: Signal<ConsoleConfig>,
    /// Message catalog for the configured locale
    pub catalog: Signal<Catalog>,
    /// Permissions of the current user
    pub permissions: Signal<PermissionSet>,
    /// Visited settings paths, most recent last
    pub history: Signal<Vec<String>>,
    /// dbt settings of the pipeline being edited
    pub form_data: Signal<DbtFormData>,
    /// Last submitted dbt configuration
    pub last_submission: Signal<Option<DbtConfigDraft>>,
}

impl AppState {
    pub fn is_admin(&self) -> bool {
        (self.config)().is_admin
    }

    pub fn route_params(&self) -> RouteParams {
        self.router().current_params()
    }

    pub const fn router(&self) -> SignalRouter {
        SignalRouter {
            history: self.history,
        }
    }
}

/// Router writing into the shared navigation history.
#[derive(Clone, Copy)]
pub struct SignalRouter {
    history: Signal<Vec<String>>,
}

impl Router for SignalRouter {
    fn navigate(&mut self, path: &str) {
        tracing::debug!("Navigating to {}", path);
        self.history.write().push(path.to_string());
    }

    fn current_params(&self) -> RouteParams {
        self.history
            .read()
            .last()
            .map(|path| RouteParams::from_path(path))
            .unwrap_or_default()
    }
}
