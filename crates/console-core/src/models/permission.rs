//! Resolved user permissions

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Resources guarded by the permission service
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceEntity {
    Team,
    User,
    Role,
    Policy,
    DatabaseService,
    MessagingService,
    DashboardService,
    PipelineService,
    MlmodelService,
    StorageService,
    MetadataService,
    Bot,
    EventSubscription,
    Type,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Operation {
    ViewAll,
    ViewBasic,
    Create,
    EditAll,
    Delete,
}

/// Operations the current user may perform, per resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeMap<ResourceEntity, BTreeSet<Operation>>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn allow(mut self, resource: ResourceEntity, operation: Operation) -> Self {
        self.0.entry(resource).or_default().insert(operation);
        self
    }

    pub fn allows(&self, resource: ResourceEntity, operation: Operation) -> bool {
        self.0
            .get(&resource)
            .is_some_and(|operations| operations.contains(&operation))
    }

    /// View access: either full or basic view.
    pub fn can_view(&self, resource: ResourceEntity) -> bool {
        self.allows(resource, Operation::ViewAll) || self.allows(resource, Operation::ViewBasic)
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
