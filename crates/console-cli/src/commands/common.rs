use std::path::Path;

use console_core::config::ConsoleConfig;
use console_core::dbt_form::{DbtFormData, FormLabels};
use console_core::models::{
    ConfigKey, CredentialShape, DbtConfigSourceType, FieldDescriptor, FieldKind, FieldValue,
    ValueShape,
};
use console_core::{Catalog, Translator};

use crate::error::CliError;

const MASK: &str = "********";

/// Load the console config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConsoleConfig, CliError> {
    match path {
        Some(path) => {
            let mut config = ConsoleConfig::load_from_path(path)?;
            config.apply_env_overrides(|name| std::env::var(name).ok());
            Ok(config)
        }
        None => Ok(ConsoleConfig::load()?),
    }
}

pub fn catalog_for(config: &ConsoleConfig) -> Catalog {
    Catalog::for_locale(config.locale.as_deref())
}

pub fn form_labels(t: &dyn Translator) -> FormLabels {
    FormLabels::new(t.t("label.submit"), t.t("label.back"))
}

/// Read form data from a JSON file and select `source` on it.
pub fn load_form_data(path: Option<&Path>, source: &str) -> Result<DbtFormData, CliError> {
    let mut data = match path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => DbtFormData::default(),
    };
    data.dbt_config_source_type = source.parse::<DbtConfigSourceType>()?;
    Ok(data)
}

/// Parse a `key=value` draft edit.
///
/// Text keys take the raw value; other keys take JSON.
pub fn parse_edit(raw: &str) -> Result<(ConfigKey, FieldValue), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::InvalidEdit(raw.to_string()))?;
    let key = key.trim();
    let config_key: ConfigKey = serde_json::from_value(serde_json::Value::String(key.to_string()))
        .map_err(|_| CliError::UnknownConfigKey(key.to_string()))?;

    let field_value = match config_key.shape() {
        ValueShape::Text => FieldValue::Text(value.to_string()),
        shape => serde_json::from_str(value)
            .and_then(|json| FieldValue::from_json(shape, json))
            .map_err(|error| CliError::InvalidEditValue {
                key: key.to_string(),
                reason: error.to_string(),
            })?,
    };
    Ok((config_key, field_value))
}

pub fn kind_label(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Text => "text".to_string(),
        FieldKind::Password => "password".to_string(),
        FieldKind::Switch => "switch".to_string(),
        FieldKind::Select { options } => {
            let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
            format!("select: {}", values.join("|"))
        }
        FieldKind::Credentials { shape } => match shape {
            CredentialShape::Aws => "credentials: aws".to_string(),
            CredentialShape::GcsValues => "credentials: gcs values".to_string(),
            CredentialShape::GcsPath => "credentials: gcs path".to_string(),
        },
        FieldKind::BucketPath => "bucket".to_string(),
    }
}

pub fn format_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Bool(true) => "on".to_string(),
        FieldValue::Bool(false) => "off".to_string(),
        FieldValue::Credentials(credentials) => {
            serde_json::to_string(credentials).unwrap_or_default()
        }
        FieldValue::Bucket(bucket) => format!(
            "{}/{}",
            bucket.dbt_bucket_name.as_deref().unwrap_or_default(),
            bucket.dbt_object_prefix.as_deref().unwrap_or_default()
        ),
    }
}

/// One line per field: `label* [kind] = value`, masking passwords.
pub fn format_field_lines(fields: &[FieldDescriptor]) -> Vec<String> {
    fields
        .iter()
        .map(|field| {
            let marker = if field.required { "*" } else { "" };
            let value = match (&field.kind, &field.value) {
                (FieldKind::Password, FieldValue::Text(text)) if !text.is_empty() => {
                    MASK.to_string()
                }
                (_, value) => format_value(value),
            };
            let suffix = if field.disabled { " (disabled)" } else { "" };
            format!(
                "{}{marker} [{}] = {value}{suffix}",
                field.label,
                kind_label(&field.kind)
            )
        })
        .collect()
}
