//! Console configuration shared by the desktop and CLI clients.
//!
//! Stored as JSON in the user's config directory. A missing file yields the
//! defaults; environment variables override individual fields.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::PermissionSet;
use crate::placeholder::PlaceholderSize;
use crate::util::{normalize_text_option, parse_flag};
use crate::{Error, Result};

const CONFIG_DIR_NAME: &str = "catalog-console";
const CONFIG_FILE_NAME: &str = "console-config.json";
const CONFIG_VERSION: u32 = 1;

pub const LOCALE_ENV: &str = "CONSOLE_LOCALE";
pub const ADMIN_ENV: &str = "CONSOLE_ADMIN";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    #[serde(default = "default_config_version")]
    pub version: u32,
    /// UI locale, e.g. `en-US`
    #[serde(default)]
    pub locale: Option<String>,
    /// Illustration size used by page-level placeholders
    #[serde(default)]
    pub placeholder_size: PlaceholderSize,
    /// Treat the current user as an administrator
    #[serde(default)]
    pub is_admin: bool,
    /// JSON file holding the user's resolved permissions
    #[serde(default)]
    pub permissions_path: Option<PathBuf>,
}

const fn default_config_version() -> u32 {
    CONFIG_VERSION
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            locale: None,
            placeholder_size: PlaceholderSize::default(),
            is_admin: false,
            permissions_path: None,
        }
    }
}

/// Default location of the config file, when a config directory exists.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl ConsoleConfig {
    /// Load from the default location and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match default_config_path() {
            Some(path) => Self::load_from_path(&path)?,
            None => {
                tracing::warn!("No config directory available, using default console config");
                Self::default()
            }
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&raw).map_err(|error| {
            Error::Config(format!("failed to parse {}: {error}", path.display()))
        })?;
        if config.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "unsupported config version {} (expected {})",
                config.version, CONFIG_VERSION
            )));
        }
        config.normalize();
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut normalized = self.clone();
        normalized.normalize();
        std::fs::write(path, serde_json::to_string_pretty(&normalized)?)?;
        Ok(())
    }

    /// Apply `CONSOLE_LOCALE` and `CONSOLE_ADMIN` through `lookup`.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = normalize_text_option(lookup(LOCALE_ENV)) {
            self.locale = Some(locale);
        }
        if let Some(raw) = lookup(ADMIN_ENV) {
            match parse_flag(&raw) {
                Some(is_admin) => self.is_admin = is_admin,
                None => tracing::warn!("Ignoring invalid {} value: {}", ADMIN_ENV, raw),
            }
        }
    }

    /// Permissions from `permissions_path`, or none when unset.
    pub fn load_permissions(&self) -> Result<PermissionSet> {
        match &self.permissions_path {
            Some(path) => PermissionSet::load_from_path(path),
            None => Ok(PermissionSet::default()),
        }
    }

    fn normalize(&mut self) {
        self.locale = normalize_text_option(self.locale.take());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConsoleConfig::load_from_path(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn save_then_load_normalizes_locale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let config = ConsoleConfig {
            locale: Some("  ".to_string()),
            placeholder_size: PlaceholderSize::Medium,
            ..ConsoleConfig::default()
        };
        config.save_to_path(&path).unwrap();

        let loaded = ConsoleConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.locale, None);
        assert_eq!(loaded.placeholder_size, PlaceholderSize::Medium);
    }

    #[test]
    fn rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "version": 1, "theme": "dark" }"#).unwrap();
        let error = ConsoleConfig::load_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("unknown field"));
    }

    #[test]
    fn rejects_unsupported_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "version": 7 }"#).unwrap();
        let error = ConsoleConfig::load_from_path(&path).unwrap_err();
        assert!(error.to_string().contains("version"));
    }

    #[test]
    fn env_overrides_apply_valid_values_only() {
        let mut config = ConsoleConfig::default();
        config.apply_env_overrides(|name| match name {
            LOCALE_ENV => Some(" en-US ".to_string()),
            ADMIN_ENV => Some("perhaps".to_string()),
            _ => None,
        });
        assert_eq!(config.locale.as_deref(), Some("en-US"));
        assert!(!config.is_admin);

        config.apply_env_overrides(|name| (name == ADMIN_ENV).then(|| "yes".to_string()));
        assert!(config.is_admin);
    }

    #[test]
    fn loads_permissions_from_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("permissions.json");
        std::fs::write(&path, r#"{ "role": ["ViewAll"] }"#).unwrap();
        let config = ConsoleConfig {
            permissions_path: Some(path),
            ..ConsoleConfig::default()
        };
        let permissions = config.load_permissions().unwrap();
        assert!(permissions.can_view(crate::models::ResourceEntity::Role));
        assert!(ConsoleConfig::default().load_permissions().unwrap().is_empty());
    }
}
