//! Settings navigation panel
//!
//! Groups the permission-filtered settings categories into a menu, highlights
//! the active route, and turns a menu selection into a navigation path.

mod registry;

pub use registry::{
    GlobalSettingOption, ItemAccess, MenuList, SettingCategory, SettingItem, SettingsMenuSource,
    StaticSettingsRegistry,
};

use serde::{Deserialize, Serialize};

use crate::i18n::Translator;
use crate::models::PermissionSet;
use crate::placeholder::{resolve, Placeholder, PlaceholderKind, PlaceholderProps};
use crate::routing::{
    settings_path, settings_path_with_sub_tab, teams_path, RouteParams, Router, TeamType,
    REINDEX_DEFAULT_SUB_TAB,
};

/// Leaf entry of a menu group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub key: String,
}

/// A category rendered as a menu group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuGroup {
    pub label: String,
    pub key: String,
    pub children: Vec<MenuItem>,
    pub is_group: bool,
    pub is_beta: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Build menu groups from the permission service result.
///
/// Categories without a single visible item are dropped, so every returned
/// group has at least one child.
pub fn build_menu_groups(lists: &[MenuList], t: &dyn Translator) -> Vec<MenuGroup> {
    lists
        .iter()
        .filter(|list| !list.items.is_empty())
        .map(|list| MenuGroup {
            label: t.t(list.category.label_key()),
            key: list.category.as_str().to_string(),
            children: list
                .items
                .iter()
                .map(|item| MenuItem {
                    label: t.t(item.option.label_key()),
                    key: item.key(),
                })
                .collect(),
            is_group: true,
            is_beta: list.is_beta,
            badge: list.is_beta.then(|| t.t("label.beta")),
        })
        .collect()
}

/// Path a menu key navigates to.
///
/// The key is `"category.option"`; segments past the second are ignored.
/// Rules apply in order:
/// 1. `teams` opens the organization team page,
/// 2. `search` opens the re-index page on its default sub-tab,
/// 3. anything else opens the generic settings page.
pub fn navigation_path(key: &str) -> String {
    let mut segments = key.split('.');
    let category = segments.next().unwrap_or_default();
    let option = segments.next().unwrap_or_default();

    if option == GlobalSettingOption::Teams.as_str() {
        teams_path(TeamType::Organization)
    } else if option == GlobalSettingOption::Search.as_str() {
        settings_path_with_sub_tab(category, option, REINDEX_DEFAULT_SUB_TAB)
    } else {
        settings_path(category, option)
    }
}

/// What the left panel shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum LeftPanelView {
    Menu {
        groups: Vec<MenuGroup>,
        selected_key: String,
    },
    Placeholder {
        placeholder: Placeholder,
    },
}

/// Settings left panel bound to a permission service.
#[derive(Debug, Clone, Default)]
pub struct SettingsLeftPanel<S = StaticSettingsRegistry> {
    source: S,
}

impl SettingsLeftPanel {
    /// Panel over the built-in settings registry.
    pub const fn builtin() -> Self {
        Self {
            source: StaticSettingsRegistry,
        }
    }
}

impl<S: SettingsMenuSource> SettingsLeftPanel<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub fn menu_groups(
        &self,
        permissions: &PermissionSet,
        is_admin: bool,
        t: &dyn Translator,
    ) -> Vec<MenuGroup> {
        build_menu_groups(&self.source.menu_with_permission(permissions, is_admin), t)
    }

    /// The menu for the current user, or the permission placeholder when no
    /// item is visible.
    pub fn view(
        &self,
        permissions: &PermissionSet,
        is_admin: bool,
        params: &RouteParams,
        t: &dyn Translator,
    ) -> LeftPanelView {
        let groups = self.menu_groups(permissions, is_admin, t);
        if groups.is_empty() {
            tracing::debug!("No permitted settings, showing permission placeholder");
            return LeftPanelView::Placeholder {
                placeholder: resolve(PlaceholderProps::of(PlaceholderKind::Permission)),
            };
        }
        LeftPanelView::Menu {
            groups,
            selected_key: params.selected_key(),
        }
    }

    /// Navigate to the page of a selected menu key.
    pub fn select(&self, key: &str, router: &mut dyn Router) -> String {
        let path = navigation_path(key);
        router.navigate(&path);
        path
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::i18n::Catalog;
    use crate::models::{Operation, ResourceEntity};
    use crate::routing::MemoryRouter;

    fn panel() -> SettingsLeftPanel {
        SettingsLeftPanel::builtin()
    }

    #[test]
    fn group_renders_iff_an_item_is_permitted() {
        let catalog = Catalog::english();
        let permissions = PermissionSet::new()
            .allow(ResourceEntity::Policy, Operation::ViewBasic)
            .allow(ResourceEntity::Bot, Operation::ViewAll)
            .allow(ResourceEntity::Team, Operation::EditAll);

        let groups = panel().menu_groups(&permissions, false, &catalog);
        let keys: Vec<_> = groups.iter().map(|group| group.key.as_str()).collect();
        assert_eq!(keys, vec!["access", "integrations"]);
        assert!(groups.iter().all(|group| !group.children.is_empty()));
        assert_eq!(groups[0].children[0].key, "access.policies");
        assert_eq!(groups[0].children[0].label, "Policies");
    }

    #[test]
    fn empty_menu_renders_permission_placeholder() {
        let catalog = Catalog::english();
        let view = panel().view(
            &PermissionSet::new(),
            false,
            &RouteParams::default(),
            &catalog,
        );
        let LeftPanelView::Placeholder { placeholder } = view else {
            panic!("expected the permission placeholder");
        };
        assert_eq!(placeholder.kind(), PlaceholderKind::Permission);
    }

    #[test]
    fn selected_key_follows_route_params() {
        let catalog = Catalog::english();
        let view = panel().view(
            &PermissionSet::new(),
            true,
            &RouteParams::new("services", "databases"),
            &catalog,
        );
        let LeftPanelView::Menu { selected_key, groups } = view else {
            panic!("expected a menu");
        };
        assert_eq!(selected_key, "services.databases");
        let notifications = groups
            .iter()
            .find(|group| group.key == "notifications")
            .unwrap();
        assert!(notifications.is_beta);
        assert_eq!(notifications.badge.as_deref(), Some("Beta"));
    }

    #[test]
    fn teams_always_navigates_to_organization() {
        for key in ["members.teams", "access.teams", "anything.teams"] {
            assert_eq!(navigation_path(key), "/settings/members/teams/Organization");
        }
    }

    #[test]
    fn search_appends_default_sub_tab() {
        assert_eq!(
            navigation_path("openMetadata.search"),
            "/settings/openMetadata/search/on-demand"
        );
        assert_eq!(
            navigation_path("services.search"),
            "/settings/services/search/on-demand"
        );
    }

    #[test]
    fn other_options_use_generic_path() {
        assert_eq!(navigation_path("access.roles"), "/settings/access/roles");
        assert_eq!(
            navigation_path("customAttributes.tables"),
            "/settings/customAttributes/tables"
        );
    }

    #[test]
    fn only_the_second_segment_is_the_option() {
        assert_eq!(
            navigation_path("members.teams.extra"),
            "/settings/members/teams/Organization"
        );
        assert_eq!(
            navigation_path("access.roles.extra"),
            "/settings/access/roles"
        );
        assert_eq!(navigation_path("services"), "/settings/services");
    }

    #[test]
    fn select_pushes_path_onto_router() {
        let mut router = MemoryRouter::default();
        let path = panel().select("integrations.bots", &mut router);
        assert_eq!(path, "/settings/integrations/bots");
        assert_eq!(router.current_path(), Some("/settings/integrations/bots"));
        assert_eq!(router.current_params().selected_key(), "integrations.bots");
    }
}
