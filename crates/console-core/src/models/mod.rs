//! Data models for Catalog Console

mod dbt;
mod field;
mod permission;

pub use dbt::{
    ConfigKey, DbtBucketDetails, DbtConfigDraft, DbtConfigSourceType, GcsConfigType,
    GcsCredentials, GcsCredentialsValues, SCredentials, ValueShape, DEFAULT_DBT_CLOUD_URL,
};
pub use field::{
    has_unique_ids, missing_required, ChangeTarget, CredentialShape, FieldDescriptor, FieldKind,
    FieldValue, SelectOption,
};
pub use permission::{Operation, PermissionSet, ResourceEntity};
