//! dbt ingestion configuration model

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::field::FieldValue;
use crate::Error;

pub const DEFAULT_DBT_CLOUD_URL: &str = "https://cloud.getdbt.com";

/// Where the dbt artifacts are read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbtConfigSourceType {
    /// dbt Cloud API
    Cloud,
    /// Files on the ingestion host
    Local,
    /// Files served over HTTP
    Http,
    /// Objects in an S3 bucket
    S3,
    /// Objects in a GCS bucket
    Gcs,
    /// No source selected
    #[default]
    None,
}

impl DbtConfigSourceType {
    /// Selectable sources, in display order.
    pub const SELECTABLE: [Self; 5] = [Self::Cloud, Self::Local, Self::Http, Self::S3, Self::Gcs];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Local => "local",
            Self::Http => "http",
            Self::S3 => "s3",
            Self::Gcs => "gcs",
            Self::None => "",
        }
    }

    /// Translation key of the source's option label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Cloud => "label.dbt-cloud",
            Self::Local => "label.local-config-source",
            Self::Http => "label.http-config-source",
            Self::S3 => "label.s3-config-source",
            Self::Gcs => "label.gcs-config-source",
            Self::None => "message.no-selected-dbt",
        }
    }
}

impl fmt::Display for DbtConfigSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbtConfigSourceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cloud" => Ok(Self::Cloud),
            "local" => Ok(Self::Local),
            "http" => Ok(Self::Http),
            "s3" => Ok(Self::S3),
            "gcs" => Ok(Self::Gcs),
            "" | "none" => Ok(Self::None),
            other => Err(Error::InvalidInput(format!("unknown dbt source '{other}'"))),
        }
    }
}

/// How GCS credentials are supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum GcsConfigType {
    /// Inline service-account values
    #[default]
    GcsValues,
    /// Path to a service-account file
    GcsCredentialsPath,
}

impl GcsConfigType {
    pub const ALL: [Self; 2] = [Self::GcsValues, Self::GcsCredentialsPath];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GcsValues => "gcsValues",
            Self::GcsCredentialsPath => "gcsCredentialsPath",
        }
    }

    pub const fn label_key(self) -> &'static str {
        match self {
            Self::GcsValues => "label.gcs-credential-value",
            Self::GcsCredentialsPath => "label.gcs-credential-path",
        }
    }
}

impl FromStr for GcsConfigType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidInput(format!("unknown GCS config type '{s}'")))
    }
}

/// Inline GCS service-account values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GcsCredentialsValues {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
}

/// GCS credentials, either inline values or a credentials file path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GcsCredentials {
    Path(String),
    Values(GcsCredentialsValues),
}

/// Cloud storage credentials used by the S3 and GCS sources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_access_key_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_secret_access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_session_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_point_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcs_config: Option<GcsCredentials>,
}

/// Bucket and object prefix holding the dbt artifacts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DbtBucketDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_bucket_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dbt_object_prefix: Option<String>,
}

/// Value shape a configuration key accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Text,
    Bool,
    Credentials,
    Bucket,
}

/// Keys of the dbt configuration draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfigKey {
    DbtCatalogFilePath,
    DbtManifestFilePath,
    DbtRunResultsFilePath,
    DbtCatalogHttpPath,
    DbtManifestHttpPath,
    DbtRunResultsHttpPath,
    DbtCloudAuthToken,
    DbtCloudAccountId,
    DbtCloudProjectId,
    DbtCloudJobId,
    DbtCloudUrl,
    DbtSecurityConfig,
    DbtPrefixConfig,
    DbtUpdateDescriptions,
    DbtClassificationName,
    IncludeTags,
}

impl ConfigKey {
    /// Keys every source submits alongside its own fields.
    pub const SHARED: [Self; 3] = [
        Self::DbtUpdateDescriptions,
        Self::DbtClassificationName,
        Self::IncludeTags,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DbtCatalogFilePath => "dbtCatalogFilePath",
            Self::DbtManifestFilePath => "dbtManifestFilePath",
            Self::DbtRunResultsFilePath => "dbtRunResultsFilePath",
            Self::DbtCatalogHttpPath => "dbtCatalogHttpPath",
            Self::DbtManifestHttpPath => "dbtManifestHttpPath",
            Self::DbtRunResultsHttpPath => "dbtRunResultsHttpPath",
            Self::DbtCloudAuthToken => "dbtCloudAuthToken",
            Self::DbtCloudAccountId => "dbtCloudAccountId",
            Self::DbtCloudProjectId => "dbtCloudProjectId",
            Self::DbtCloudJobId => "dbtCloudJobId",
            Self::DbtCloudUrl => "dbtCloudUrl",
            Self::DbtSecurityConfig => "dbtSecurityConfig",
            Self::DbtPrefixConfig => "dbtPrefixConfig",
            Self::DbtUpdateDescriptions => "dbtUpdateDescriptions",
            Self::DbtClassificationName => "dbtClassificationName",
            Self::IncludeTags => "includeTags",
        }
    }

    pub const fn shape(self) -> ValueShape {
        match self {
            Self::DbtSecurityConfig => ValueShape::Credentials,
            Self::DbtPrefixConfig => ValueShape::Bucket,
            Self::DbtUpdateDescriptions | Self::IncludeTags => ValueShape::Bool,
            _ => ValueShape::Text,
        }
    }

    /// Value assumed when the draft has no entry for this key.
    pub fn default_value(self) -> FieldValue {
        match self {
            Self::DbtCloudUrl => FieldValue::Text(DEFAULT_DBT_CLOUD_URL.to_string()),
            Self::IncludeTags => FieldValue::Bool(true),
            Self::DbtUpdateDescriptions => FieldValue::Bool(false),
            Self::DbtSecurityConfig => FieldValue::Credentials(SCredentials::default()),
            Self::DbtPrefixConfig => FieldValue::Bucket(DbtBucketDetails::default()),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn accepts(self, value: &FieldValue) -> bool {
        value.shape() == self.shape()
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-progress dbt configuration, one value per key.
///
/// Every update replaces exactly one key. Reads of absent keys return the
/// key's default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<ConfigKey, serde_json::Value>")]
pub struct DbtConfigDraft(BTreeMap<ConfigKey, FieldValue>);

impl DbtConfigDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`.
    ///
    /// Values of the wrong shape are rejected and the draft is left as is.
    pub fn set(&mut self, key: ConfigKey, value: FieldValue) -> bool {
        if !key.accepts(&value) {
            tracing::warn!(
                "Ignoring {:?} value for dbt config key {}",
                value.shape(),
                key
            );
            return false;
        }
        self.0.insert(key, value);
        true
    }

    /// Builder form of [`Self::set`].
    #[must_use]
    pub fn with(mut self, key: ConfigKey, value: impl Into<FieldValue>) -> Self {
        self.set(key, value.into());
        self
    }

    pub fn remove(&mut self, key: ConfigKey) -> Option<FieldValue> {
        self.0.remove(&key)
    }

    pub fn get(&self, key: ConfigKey) -> Option<&FieldValue> {
        self.0.get(&key)
    }

    pub fn contains(&self, key: ConfigKey) -> bool {
        self.0.contains_key(&key)
    }

    /// Stored value or the key's default.
    pub fn value(&self, key: ConfigKey) -> FieldValue {
        self.0.get(&key).cloned().unwrap_or_else(|| key.default_value())
    }

    pub fn text(&self, key: ConfigKey) -> String {
        match self.value(key) {
            FieldValue::Text(text) => text,
            _ => String::new(),
        }
    }

    pub fn flag(&self, key: ConfigKey) -> bool {
        matches!(self.value(key), FieldValue::Bool(true))
    }

    pub fn credentials(&self, key: ConfigKey) -> SCredentials {
        match self.value(key) {
            FieldValue::Credentials(credentials) => credentials,
            _ => SCredentials::default(),
        }
    }

    pub fn bucket(&self, key: ConfigKey) -> DbtBucketDetails {
        match self.value(key) {
            FieldValue::Bucket(bucket) => bucket,
            _ => DbtBucketDetails::default(),
        }
    }

    /// Copy of the draft holding exactly `keys`, defaults filled in.
    #[must_use]
    pub fn subset(&self, keys: &[ConfigKey]) -> Self {
        Self(keys.iter().map(|key| (*key, self.value(*key))).collect())
    }

    pub fn keys(&self) -> impl Iterator<Item = ConfigKey> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &FieldValue)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<ConfigKey, serde_json::Value>> for DbtConfigDraft {
    type Error = Error;

    fn try_from(raw: BTreeMap<ConfigKey, serde_json::Value>) -> Result<Self, Self::Error> {
        let mut draft = Self::new();
        for (key, raw_value) in raw {
            if raw_value.is_null() {
                continue;
            }
            let value = FieldValue::from_json(key.shape(), raw_value)
                .map_err(|error| Error::InvalidInput(format!("{key}: {error}")))?;
            draft.0.insert(key, value);
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn source_type_parses_case_insensitively() {
        assert_eq!("S3".parse::<DbtConfigSourceType>().unwrap(), DbtConfigSourceType::S3);
        assert_eq!("".parse::<DbtConfigSourceType>().unwrap(), DbtConfigSourceType::None);
        assert!("ftp".parse::<DbtConfigSourceType>().is_err());
    }

    #[test]
    fn draft_reads_fall_back_to_key_defaults() {
        let draft = DbtConfigDraft::new();
        assert!(draft.flag(ConfigKey::IncludeTags));
        assert!(!draft.flag(ConfigKey::DbtUpdateDescriptions));
        assert_eq!(draft.text(ConfigKey::DbtCloudUrl), DEFAULT_DBT_CLOUD_URL);
        assert_eq!(draft.text(ConfigKey::DbtManifestFilePath), "");
    }

    #[test]
    fn set_replaces_exactly_one_key() {
        let mut draft = DbtConfigDraft::new()
            .with(ConfigKey::DbtCatalogFilePath, "/data/catalog.json")
            .with(ConfigKey::IncludeTags, false);
        assert!(draft.set(ConfigKey::DbtCatalogFilePath, "/data/other.json".into()));
        assert_eq!(draft.len(), 2);
        assert_eq!(draft.text(ConfigKey::DbtCatalogFilePath), "/data/other.json");
        assert!(!draft.flag(ConfigKey::IncludeTags));
    }

    #[test]
    fn set_rejects_mismatched_shape() {
        let mut draft = DbtConfigDraft::new();
        assert!(!draft.set(ConfigKey::IncludeTags, "yes".into()));
        assert!(draft.is_empty());
    }

    #[test]
    fn subset_contains_only_requested_keys() {
        let draft = DbtConfigDraft::new()
            .with(ConfigKey::DbtCatalogHttpPath, "http://host/catalog.json")
            .with(ConfigKey::DbtManifestFilePath, "/m.json");
        let subset = draft.subset(&[ConfigKey::DbtManifestFilePath, ConfigKey::IncludeTags]);
        assert_eq!(
            subset.keys().collect::<Vec<_>>(),
            vec![ConfigKey::DbtManifestFilePath, ConfigKey::IncludeTags]
        );
        assert!(subset.flag(ConfigKey::IncludeTags));
    }

    #[test]
    fn draft_deserializes_by_key_shape() {
        let payload = r#"
        {
          "dbtManifestFilePath": "/data/manifest.json",
          "includeTags": false,
          "dbtClassificationName": null,
          "dbtSecurityConfig": { "awsRegion": "us-east-2" },
          "dbtPrefixConfig": { "dbtBucketName": "artifacts" }
        }
        "#;
        let draft: DbtConfigDraft = serde_json::from_str(payload).unwrap();
        assert_eq!(draft.len(), 4);
        assert_eq!(
            draft.credentials(ConfigKey::DbtSecurityConfig).aws_region.as_deref(),
            Some("us-east-2")
        );
        assert_eq!(
            draft.bucket(ConfigKey::DbtPrefixConfig).dbt_bucket_name.as_deref(),
            Some("artifacts")
        );
        assert!(!draft.flag(ConfigKey::IncludeTags));
    }

    #[test]
    fn draft_rejects_wrong_json_shape() {
        let error = serde_json::from_str::<DbtConfigDraft>(r#"{ "includeTags": "yes" }"#)
            .unwrap_err();
        assert!(error.to_string().contains("includeTags"));
    }

    #[test]
    fn draft_serializes_with_camel_case_keys() {
        let draft = DbtConfigDraft::new()
            .with(ConfigKey::DbtManifestFilePath, "/m.json")
            .with(ConfigKey::IncludeTags, true);
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "dbtManifestFilePath": "/m.json", "includeTags": true })
        );
    }
}
