//! Static category to item registry and the default permission filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{PermissionSet, ResourceEntity};
use crate::Error;

/// Top-level settings categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingCategory {
    Members,
    Access,
    Services,
    Integrations,
    Notifications,
    CustomAttributes,
    OpenMetadata,
}

impl SettingCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Members => "members",
            Self::Access => "access",
            Self::Services => "services",
            Self::Integrations => "integrations",
            Self::Notifications => "notifications",
            Self::CustomAttributes => "customAttributes",
            Self::OpenMetadata => "openMetadata",
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Members => "label.member-plural",
            Self::Access => "label.access",
            Self::Services => "label.service-plural",
            Self::Integrations => "label.integration-plural",
            Self::Notifications => "label.notification-plural",
            Self::CustomAttributes => "label.custom-attribute-plural",
            Self::OpenMetadata => "label.open-metadata",
        }
    }
}

impl fmt::Display for SettingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings pages reachable from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GlobalSettingOption {
    Teams,
    Users,
    Admins,
    Roles,
    Policies,
    Databases,
    Messaging,
    Dashboards,
    Pipelines,
    MlModels,
    Storages,
    Metadata,
    Bots,
    Alerts,
    Tables,
    Topics,
    Containers,
    Search,
    Email,
}

impl GlobalSettingOption {
    const ALL: [Self; 19] = [
        Self::Teams,
        Self::Users,
        Self::Admins,
        Self::Roles,
        Self::Policies,
        Self::Databases,
        Self::Messaging,
        Self::Dashboards,
        Self::Pipelines,
        Self::MlModels,
        Self::Storages,
        Self::Metadata,
        Self::Bots,
        Self::Alerts,
        Self::Tables,
        Self::Topics,
        Self::Containers,
        Self::Search,
        Self::Email,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Teams => "teams",
            Self::Users => "users",
            Self::Admins => "admins",
            Self::Roles => "roles",
            Self::Policies => "policies",
            Self::Databases => "databases",
            Self::Messaging => "messaging",
            Self::Dashboards => "dashboards",
            Self::Pipelines => "pipelines",
            Self::MlModels => "mlModels",
            Self::Storages => "storages",
            Self::Metadata => "metadata",
            Self::Bots => "bots",
            Self::Alerts => "alerts",
            Self::Tables => "tables",
            Self::Topics => "topics",
            Self::Containers => "containers",
            Self::Search => "search",
            Self::Email => "email",
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Teams => "label.team-plural",
            Self::Users => "label.user-plural",
            Self::Admins => "label.admin-plural",
            Self::Roles => "label.role-plural",
            Self::Policies => "label.policy-plural",
            Self::Databases => "label.database-plural",
            Self::Messaging => "label.messaging",
            Self::Dashboards => "label.dashboard-plural",
            Self::Pipelines => "label.pipeline-plural",
            Self::MlModels => "label.ml-model-plural",
            Self::Storages => "label.storage-plural",
            Self::Metadata => "label.metadata",
            Self::Bots => "label.bot-plural",
            Self::Alerts => "label.alert-plural",
            Self::Tables => "label.table-plural",
            Self::Topics => "label.topic-plural",
            Self::Containers => "label.container-plural",
            Self::Search => "label.search",
            Self::Email => "label.email",
        }
    }
}

impl FromStr for GlobalSettingOption {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| Error::InvalidInput(format!("unknown settings option '{s}'")))
    }
}

/// Who may see a menu item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemAccess {
    /// Anyone with view access to the resource
    View(ResourceEntity),
    AdminOnly,
}

impl ItemAccess {
    fn permits(self, permissions: &PermissionSet, is_admin: bool) -> bool {
        is_admin
            || match self {
                Self::View(resource) => permissions.can_view(resource),
                Self::AdminOnly => false,
            }
    }
}

/// One permitted entry of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingItem {
    pub category: SettingCategory,
    pub option: GlobalSettingOption,
}

impl SettingItem {
    /// Menu key, `"category.option"`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.category.as_str(), self.option.as_str())
    }
}

/// A category with the items the user may access, as ranked by the
/// permission service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuList {
    pub category: SettingCategory,
    pub items: Vec<SettingItem>,
    pub is_beta: bool,
}

/// Permission service contract consumed by the settings panel.
pub trait SettingsMenuSource {
    fn menu_with_permission(&self, permissions: &PermissionSet, is_admin: bool) -> Vec<MenuList>;
}

struct CategoryEntry {
    category: SettingCategory,
    is_beta: bool,
    items: &'static [(GlobalSettingOption, ItemAccess)],
}

const REGISTRY: &[CategoryEntry] = &[
    CategoryEntry {
        category: SettingCategory::Members,
        is_beta: false,
        items: &[
            (GlobalSettingOption::Teams, ItemAccess::View(ResourceEntity::Team)),
            (GlobalSettingOption::Users, ItemAccess::View(ResourceEntity::User)),
            (GlobalSettingOption::Admins, ItemAccess::AdminOnly),
        ],
    },
    CategoryEntry {
        category: SettingCategory::Access,
        is_beta: false,
        items: &[
            (GlobalSettingOption::Roles, ItemAccess::View(ResourceEntity::Role)),
            (GlobalSettingOption::Policies, ItemAccess::View(ResourceEntity::Policy)),
        ],
    },
    CategoryEntry {
        category: SettingCategory::Services,
        is_beta: false,
        items: &[
            (
                GlobalSettingOption::Databases,
                ItemAccess::View(ResourceEntity::DatabaseService),
            ),
            (
                GlobalSettingOption::Messaging,
                ItemAccess::View(ResourceEntity::MessagingService),
            ),
            (
                GlobalSettingOption::Dashboards,
                ItemAccess::View(ResourceEntity::DashboardService),
            ),
            (
                GlobalSettingOption::Pipelines,
                ItemAccess::View(ResourceEntity::PipelineService),
            ),
            (
                GlobalSettingOption::MlModels,
                ItemAccess::View(ResourceEntity::MlmodelService),
            ),
            (
                GlobalSettingOption::Storages,
                ItemAccess::View(ResourceEntity::StorageService),
            ),
            (
                GlobalSettingOption::Metadata,
                ItemAccess::View(ResourceEntity::MetadataService),
            ),
        ],
    },
    CategoryEntry {
        category: SettingCategory::Integrations,
        is_beta: false,
        items: &[(GlobalSettingOption::Bots, ItemAccess::View(ResourceEntity::Bot))],
    },
    CategoryEntry {
        category: SettingCategory::Notifications,
        is_beta: true,
        items: &[(
            GlobalSettingOption::Alerts,
            ItemAccess::View(ResourceEntity::EventSubscription),
        )],
    },
    CategoryEntry {
        category: SettingCategory::CustomAttributes,
        is_beta: false,
        items: &[
            (GlobalSettingOption::Tables, ItemAccess::View(ResourceEntity::Type)),
            (GlobalSettingOption::Topics, ItemAccess::View(ResourceEntity::Type)),
            (GlobalSettingOption::Dashboards, ItemAccess::View(ResourceEntity::Type)),
            (GlobalSettingOption::Pipelines, ItemAccess::View(ResourceEntity::Type)),
            (GlobalSettingOption::MlModels, ItemAccess::View(ResourceEntity::Type)),
            (GlobalSettingOption::Containers, ItemAccess::View(ResourceEntity::Type)),
        ],
    },
    CategoryEntry {
        category: SettingCategory::OpenMetadata,
        is_beta: false,
        items: &[
            (GlobalSettingOption::Search, ItemAccess::AdminOnly),
            (GlobalSettingOption::Email, ItemAccess::AdminOnly),
        ],
    },
];

/// Built-in permission filter over the static registry.
///
/// Every category is returned, possibly with no items; pruning empty groups
/// is left to the menu builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticSettingsRegistry;

impl SettingsMenuSource for StaticSettingsRegistry {
    fn menu_with_permission(&self, permissions: &PermissionSet, is_admin: bool) -> Vec<MenuList> {
        REGISTRY
            .iter()
            .map(|entry| MenuList {
                category: entry.category,
                is_beta: entry.is_beta,
                items: entry
                    .items
                    .iter()
                    .filter(|(_, access)| access.permits(permissions, is_admin))
                    .map(|(option, _)| SettingItem {
                        category: entry.category,
                        option: *option,
                    })
                    .collect(),
            })
            .collect()
    }
}
