//! Routing contract and settings path builders.

use serde::{Deserialize, Serialize};

pub const SETTINGS_ROOT: &str = "/settings";

/// Default sub-tab opened for the search re-index settings page.
pub const REINDEX_DEFAULT_SUB_TAB: &str = "on-demand";

/// Team hierarchy levels addressable from the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamType {
    Organization,
    BusinessUnit,
    Division,
    Department,
    Group,
}

impl TeamType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::BusinessUnit => "BusinessUnit",
            Self::Division => "Division",
            Self::Department => "Department",
            Self::Group => "Group",
        }
    }
}

/// Parameters of the currently active settings route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteParams {
    #[serde(default)]
    pub setting_category: Option<String>,
    #[serde(default)]
    pub tab: Option<String>,
}

impl RouteParams {
    pub fn new(setting_category: impl Into<String>, tab: impl Into<String>) -> Self {
        Self {
            setting_category: Some(setting_category.into()),
            tab: Some(tab.into()),
        }
    }

    /// Menu key highlighted for this route, `"{category}.{tab}"`.
    ///
    /// Missing segments render as `undefined` so the key never matches a real
    /// menu item.
    pub fn selected_key(&self) -> String {
        format!(
            "{}.{}",
            self.setting_category.as_deref().unwrap_or("undefined"),
            self.tab.as_deref().unwrap_or("undefined")
        )
    }

    /// Parse `/settings/{category}/{tab}[/...]` back into route parameters.
    pub fn from_path(path: &str) -> Self {
        let mut segments = path
            .strip_prefix(SETTINGS_ROOT)
            .unwrap_or_default()
            .split('/')
            .filter(|segment| !segment.is_empty());
        Self {
            setting_category: segments.next().map(str::to_string),
            tab: segments.next().map(str::to_string),
        }
    }
}

/// Navigation history consumed by the settings panel.
pub trait Router {
    fn navigate(&mut self, path: &str);
    fn current_params(&self) -> RouteParams;
}

/// In-memory router that records the navigation history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRouter {
    history: Vec<String>,
}

impl MemoryRouter {
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
        }
    }

    pub fn current_path(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Router for MemoryRouter {
    fn navigate(&mut self, path: &str) {
        tracing::debug!("Navigating to {}", path);
        self.history.push(path.to_string());
    }

    fn current_params(&self) -> RouteParams {
        self.current_path()
            .map(RouteParams::from_path)
            .unwrap_or_default()
    }
}

/// Settings page path; an empty option opens the category root.
pub fn settings_path(category: &str, option: &str) -> String {
    if option.is_empty() {
        format!("{SETTINGS_ROOT}/{category}")
    } else {
        format!("{SETTINGS_ROOT}/{category}/{option}")
    }
}

pub fn settings_path_with_sub_tab(category: &str, option: &str, sub_tab: &str) -> String {
    format!("{SETTINGS_ROOT}/{category}/{option}/{sub_tab}")
}

pub fn teams_path(team_type: TeamType) -> String {
    format!("{SETTINGS_ROOT}/members/teams/{}", team_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_builders_join_segments() {
        assert_eq!(settings_path("access", "roles"), "/settings/access/roles");
        assert_eq!(settings_path("services", ""), "/settings/services");
        assert_eq!(
            settings_path_with_sub_tab("openMetadata", "search", REINDEX_DEFAULT_SUB_TAB),
            "/settings/openMetadata/search/on-demand"
        );
        assert_eq!(
            teams_path(TeamType::Organization),
            "/settings/members/teams/Organization"
        );
    }

    #[test]
    fn route_params_round_trip_settings_path() {
        let params = RouteParams::from_path("/settings/access/policies/on-demand");
        assert_eq!(params, RouteParams::new("access", "policies"));
        assert_eq!(params.selected_key(), "access.policies");
    }

    #[test]
    fn route_params_from_foreign_path_is_empty() {
        let params = RouteParams::from_path("/explore/tables");
        assert_eq!(params, RouteParams::default());
        assert_eq!(params.selected_key(), "undefined.undefined");
    }

    #[test]
    fn memory_router_tracks_current_params() {
        let mut router = MemoryRouter::with_path("/settings/members/users");
        router.navigate("/settings/access/roles");
        assert_eq!(router.history().len(), 2);
        assert_eq!(router.current_params(), RouteParams::new("access", "roles"));
    }
}
