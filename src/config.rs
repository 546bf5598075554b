use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::db::DEFAULT_NAMESPACE_VERSION;
use crate::models::user::ADMIN_PHONE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub storage: StorageConfig,

    pub marketplace: MarketplaceConfig,

    pub sos: SosConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    pub data_dir: String,

    /// Bumping this starts from an empty namespace; older data stays on disk
    /// but is never read again.
    pub namespace_version: u32,

    pub seed_on_first_run: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: "data".to_string(),
            namespace_version: DEFAULT_NAMESPACE_VERSION,
            seed_on_first_run: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplaceConfig {
    /// Logging in with this phone always resolves the built-in admin.
    pub admin_phone: String,

    pub urgent_window_minutes: u32,

    /// Stored on new accounts. Never checked at login.
    pub default_password: String,

    /// Daily wage when a self-registering worker leaves it blank.
    pub registration_wage: u32,

    pub registration_experience: u32,

    /// Daily wage when the admin adds a worker without one.
    pub admin_added_wage: u32,

    /// Tally new accounts start with.
    pub starting_rating_sum: u32,

    pub starting_rating_count: u32,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            admin_phone: ADMIN_PHONE.to_string(),
            urgent_window_minutes: 120,
            default_password: "123".to_string(),
            registration_wage: 400,
            registration_experience: 1,
            admin_added_wage: 500,
            starting_rating_sum: 5,
            starting_rating_count: 1,
        }
    }
}

impl MarketplaceConfig {
    #[must_use]
    pub fn urgent_window_millis(&self) -> i64 {
        i64::from(self.urgent_window_minutes) * crate::domain::MILLIS_PER_MINUTE
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SosConfig {
    pub send_delay_ms: u64,

    pub dismiss_delay_ms: u64,
}

impl Default for SosConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 2000,
            dismiss_delay_ms: 2000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        paths.push(PathBuf::from("config.toml"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("kaamchowk").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".kaamchowk").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.storage.namespace_version == 0 {
            anyhow::bail!("Storage namespace version must be > 0");
        }

        if self.storage.backend == StorageBackend::File && self.storage.data_dir.trim().is_empty()
        {
            anyhow::bail!("Data directory cannot be empty for the file backend");
        }

        if self.marketplace.admin_phone.trim().is_empty() {
            anyhow::bail!("Admin phone cannot be empty");
        }

        if self.marketplace.starting_rating_count == 0 && self.marketplace.starting_rating_sum != 0
        {
            anyhow::bail!("Starting rating sum must be 0 when the starting count is 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.namespace_version, 3);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert_eq!(config.marketplace.admin_phone, "9999999999");
        assert_eq!(config.marketplace.urgent_window_millis(), 2 * 60 * 60 * 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[general]"));
        assert!(toml_str.contains("[storage]"));
        assert!(toml_str.contains("[marketplace]"));
        assert!(toml_str.contains("[sos]"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
            [general]
            log_level = "debug"

            [storage]
            backend = "memory"
            namespace_version = 4
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.namespace_version, 4);

        assert_eq!(config.marketplace.registration_wage, 400);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.storage.namespace_version = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.marketplace.starting_rating_count = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.storage.backend = StorageBackend::Memory;
        config.storage.data_dir = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = std::env::temp_dir()
            .join(format!("kaamchowk-config-{}", uuid::Uuid::new_v4()))
            .join("config.toml");

        let mut config = Config::default();
        config.marketplace.urgent_window_minutes = 45;
        config.save_to_path(&path).unwrap();

        let loaded = Config::load_from_path(&path).unwrap();
        assert_eq!(loaded.marketplace.urgent_window_minutes, 45);

        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }
    }
}
