//! Declarative form field descriptors
//!
//! Forms are described as data: an ordered list of [`FieldDescriptor`]s that a
//! renderer interprets. A descriptor never holds a callback; it names the
//! [`ChangeTarget`] its edits are reported to.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::dbt::{ConfigKey, DbtBucketDetails, SCredentials, ValueShape};

/// Current value of a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Credentials(SCredentials),
    Bucket(DbtBucketDetails),
}

impl FieldValue {
    pub const fn shape(&self) -> ValueShape {
        match self {
            Self::Text(_) => ValueShape::Text,
            Self::Bool(_) => ValueShape::Bool,
            Self::Credentials(_) => ValueShape::Credentials,
            Self::Bucket(_) => ValueShape::Bucket,
        }
    }

    /// Decode a JSON value into the given shape.
    pub fn from_json(shape: ValueShape, raw: serde_json::Value) -> serde_json::Result<Self> {
        Ok(match shape {
            ValueShape::Text => Self::Text(serde_json::from_value(raw)?),
            ValueShape::Bool => Self::Bool(serde_json::from_value(raw)?),
            ValueShape::Credentials => Self::Credentials(serde_json::from_value(raw)?),
            ValueShape::Bucket => Self::Bucket(serde_json::from_value(raw)?),
        })
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<SCredentials> for FieldValue {
    fn from(value: SCredentials) -> Self {
        Self::Credentials(value)
    }
}

impl From<DbtBucketDetails> for FieldValue {
    fn from(value: DbtBucketDetails) -> Self {
        Self::Bucket(value)
    }
}

/// Which provider's credential inputs a credentials field shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CredentialShape {
    Aws,
    GcsValues,
    GcsPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Kind of input a field renders as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Password,
    Switch,
    Select { options: Vec<SelectOption> },
    Credentials { shape: CredentialShape },
    BucketPath,
}

impl FieldKind {
    /// Whether a value is legal for this kind.
    pub fn accepts(&self, value: &FieldValue) -> bool {
        match self {
            Self::Text | Self::Password => matches!(value, FieldValue::Text(_)),
            Self::Select { options } => match value {
                FieldValue::Text(text) => {
                    text.is_empty() || options.iter().any(|option| &option.value == text)
                }
                _ => false,
            },
            Self::Switch => matches!(value, FieldValue::Bool(_)),
            Self::Credentials { .. } => matches!(value, FieldValue::Credentials(_)),
            Self::BucketPath => matches!(value, FieldValue::Bucket(_)),
        }
    }
}

/// Where a field reports its edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "target", content = "key", rename_all = "camelCase")]
pub enum ChangeTarget {
    /// A key of the local dbt draft
    Config(ConfigKey),
    IngestionName,
    SourceType,
    GcsConfigType,
    EnableDebugLog,
}

/// One form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: String,
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
    pub on_change: ChangeTarget,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    pub has_separator: bool,
    pub test_id: String,
    pub disabled: bool,
}

impl FieldDescriptor {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        kind: FieldKind,
        value: FieldValue,
        on_change: ChangeTarget,
    ) -> Self {
        let name = name.into();
        Self {
            id: format!("root/{name}"),
            test_id: name.clone(),
            name,
            label: label.into(),
            kind,
            required: false,
            value,
            on_change,
            help_text: None,
            has_separator: false,
            disabled: false,
        }
    }

    /// Text field bound to a draft key.
    pub fn config_text(key: ConfigKey, label: impl Into<String>, value: String) -> Self {
        Self::new(
            key.as_str(),
            label,
            FieldKind::Text,
            FieldValue::Text(value),
            ChangeTarget::Config(key),
        )
    }

    /// Switch bound to a draft key.
    pub fn config_switch(key: ConfigKey, label: impl Into<String>, checked: bool) -> Self {
        Self::new(
            key.as_str(),
            label,
            FieldKind::Switch,
            FieldValue::Bool(checked),
            ChangeTarget::Config(key),
        )
    }

    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn help(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }

    #[must_use]
    pub const fn separator(mut self) -> Self {
        self.has_separator = true;
        self
    }

    #[must_use]
    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = test_id.into();
        self
    }

    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Required field whose value is still empty.
    pub fn is_missing(&self) -> bool {
        self.required
            && match &self.value {
                FieldValue::Text(text) => text.trim().is_empty(),
                _ => false,
            }
    }
}

/// Names of required fields that are still empty, in form order.
pub fn missing_required(fields: &[FieldDescriptor]) -> Vec<&str> {
    fields
        .iter()
        .filter(|field| field.is_missing())
        .map(|field| field.name.as_str())
        .collect()
}

/// Whether every descriptor id in the form is distinct.
pub fn has_unique_ids(fields: &[FieldDescriptor]) -> bool {
    let mut seen = HashSet::new();
    fields.iter().all(|field| seen.insert(field.id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_id_and_test_id_from_name() {
        let field = FieldDescriptor::config_text(ConfigKey::DbtCloudUrl, "URL", String::new());
        assert_eq!(field.id, "root/dbtCloudUrl");
        assert_eq!(field.test_id, "dbtCloudUrl");
        assert_eq!(field.on_change, ChangeTarget::Config(ConfigKey::DbtCloudUrl));
    }

    #[test]
    fn kind_accepts_matching_values_only() {
        assert!(FieldKind::Switch.accepts(&FieldValue::Bool(true)));
        assert!(!FieldKind::Switch.accepts(&FieldValue::from("true")));
        assert!(FieldKind::Password.accepts(&FieldValue::from("secret")));
        assert!(FieldKind::BucketPath.accepts(&DbtBucketDetails::default().into()));
    }

    #[test]
    fn select_accepts_known_options_or_empty() {
        let kind = FieldKind::Select {
            options: vec![SelectOption::new("Local", "local")],
        };
        assert!(kind.accepts(&FieldValue::from("local")));
        assert!(kind.accepts(&FieldValue::from("")));
        assert!(!kind.accepts(&FieldValue::from("ftp")));
    }

    #[test]
    fn missing_required_reports_blank_required_text() {
        let fields = vec![
            FieldDescriptor::config_text(ConfigKey::DbtManifestFilePath, "Manifest", " ".into())
                .required(true),
            FieldDescriptor::config_text(ConfigKey::DbtCatalogFilePath, "Catalog", String::new()),
        ];
        assert_eq!(missing_required(&fields), vec!["dbtManifestFilePath"]);
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let field = FieldDescriptor::config_switch(ConfigKey::IncludeTags, "Tags", true);
        assert!(has_unique_ids(std::slice::from_ref(&field)));
        assert!(!has_unique_ids(&[field.clone(), field]));
    }
}
