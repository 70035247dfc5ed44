use crate::output::OutputFormat;
use crate::paths;
use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use hashify_core::error::ValidationError;
use hashify_core::{HashAlgorithm, SaltPosition};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment prefix for configuration overrides, e.g. `HASHIFY_HISTORY__ENABLED`
const ENV_PREFIX: &str = "HASHIFY_";

#[derive(Deserialize, Serialize, Debug, Default, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub hashing: HashingConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HashingConfig {
    pub default_algorithm: HashAlgorithm,
    pub salt_position: SaltPosition,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct HistoryConfig {
    pub enabled: bool,
    pub max_entries: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OutputConfig {
    pub default_format: OutputFormat,
    pub color_enabled: bool,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            default_algorithm: HashAlgorithm::SHA256,
            salt_position: SaltPosition::Prefix,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 50,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            color_enabled: true,
        }
    }
}

/// Configuration manager that handles XDG-compliant paths and layered configuration
pub struct ConfigManager {
    config_path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// Create a new ConfigManager with the default config path
    pub fn new() -> Self {
        Self {
            config_path: paths::get_config_path(),
        }
    }

    /// Create a ConfigManager with a specific path (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the configuration file path
    pub fn get_config_path(&self) -> PathBuf {
        self.config_path.clone()
    }

    /// Load configuration with layered priority: ENV > File > Defaults
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new();

        // Layer 1: Defaults
        figment = figment.merge(Serialized::defaults(AppConfig::default()));

        // Layer 2: Config file (if exists)
        if self.config_path.exists() {
            figment = figment.merge(Toml::file(&self.config_path));
        }

        // Layer 3: Environment variables
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: AppConfig = figment.extract().context("Failed to load configuration")?;
        Self::check(&config)?;
        Ok(config)
    }

    /// Get a configuration value by key (dot notation)
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;
        let toml_string = toml::to_string(&config)?;
        let value: toml::Value = toml::from_str(&toml_string)?;

        let mut current = &value;
        for part in key.split('.') {
            match current {
                toml::Value::Table(table) => {
                    current = table
                        .get(part)
                        .ok_or_else(|| anyhow::anyhow!("Key '{}' not found", key))?;
                }
                _ => anyhow::bail!("Invalid key path: {}", key),
            }
        }

        match current {
            toml::Value::String(s) => Ok(s.clone()),
            toml::Value::Integer(i) => Ok(i.to_string()),
            toml::Value::Float(f) => Ok(f.to_string()),
            toml::Value::Boolean(b) => Ok(b.to_string()),
            _ => anyhow::bail!("Value at '{}' is not a simple type", key),
        }
    }

    /// Set a configuration value by key (dot notation)
    ///
    /// Only keys that exist in [`AppConfig`] are accepted, and the value is
    /// normalized (e.g. `SHA-256` is stored as `sha256`).
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parsed_value = Self::parse_config_value(key, value)?;

        let mut config = if self.config_path.exists() {
            let content = fs::read_to_string(&self.config_path).with_context(|| {
                format!("Failed to read {}", self.config_path.display())
            })?;
            toml::from_str(&content)?
        } else {
            toml::Value::Table(toml::map::Map::new())
        };

        let (section, field) = key
            .split_once('.')
            .ok_or_else(|| anyhow::anyhow!("Invalid key path: {}", key))?;

        let toml::Value::Table(root) = &mut config else {
            anyhow::bail!("Configuration file is not a table");
        };
        let section_value = root
            .entry(section.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
        let toml::Value::Table(section_table) = section_value else {
            anyhow::bail!("Invalid key path: expected table at '{}'", section);
        };
        section_table.insert(field.to_string(), parsed_value);

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(&config)?;
        fs::write(&self.config_path, toml_string)
            .with_context(|| format!("Failed to write {}", self.config_path.display()))?;

        log::debug!("Set {key} = {value} in {}", self.config_path.display());
        Ok(())
    }

    /// List all configuration values
    pub fn list(&self) -> Result<Vec<(String, String)>> {
        let config = self.load()?;
        let toml_string = toml::to_string(&config)?;
        let value: toml::Value = toml::from_str(&toml_string)?;

        let mut items = Vec::new();
        Self::collect_values(&value, String::new(), &mut items);
        items.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(items)
    }

    /// Recursively collect all key-value pairs from TOML
    fn collect_values(value: &toml::Value, prefix: String, items: &mut Vec<(String, String)>) {
        match value {
            toml::Value::Table(table) => {
                for (key, val) in table {
                    let new_prefix = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    Self::collect_values(val, new_prefix, items);
                }
            }
            toml::Value::String(s) => items.push((prefix, s.clone())),
            toml::Value::Integer(i) => items.push((prefix, i.to_string())),
            toml::Value::Float(f) => items.push((prefix, f.to_string())),
            toml::Value::Boolean(b) => items.push((prefix, b.to_string())),
            _ => {} // Skip arrays and other complex types
        }
    }

    /// Validate and convert a value to the TOML type its key expects
    fn parse_config_value(key: &str, value: &str) -> Result<toml::Value> {
        match key {
            "hashing.default_algorithm" => {
                let algorithm: HashAlgorithm = value.parse()?;
                Ok(toml::Value::String(algorithm.id().to_string()))
            }
            "hashing.salt_position" => {
                let position: SaltPosition = value.parse()?;
                Ok(toml::Value::String(position.to_string()))
            }
            "history.max_entries" => match value.trim().parse::<i64>() {
                Ok(max) if max >= 1 => Ok(toml::Value::Integer(max)),
                _ => Err(invalid_parameter(key, "must be a positive integer")),
            },
            "history.enabled" | "output.color_enabled" => {
                let enabled: bool = value
                    .trim()
                    .parse()
                    .map_err(|_| invalid_parameter(key, "must be 'true' or 'false'"))?;
                Ok(toml::Value::Boolean(enabled))
            }
            "output.default_format" => {
                let format = OutputFormat::from_string(value)?;
                Ok(toml::Value::String(format.to_string()))
            }
            _ => anyhow::bail!("Unknown configuration key: {}", key),
        }
    }

    /// Reject values that deserialize but make no sense
    fn check(config: &AppConfig) -> Result<()> {
        if config.history.max_entries == 0 {
            return Err(hashify_core::Error::Validation(ValidationError::invalid_configuration(
                "history.max_entries must be at least 1",
            ))
            .into());
        }
        Ok(())
    }
}

fn invalid_parameter(key: &str, reason: &str) -> anyhow::Error {
    hashify_core::Error::Validation(ValidationError::invalid_parameter(key, reason)).into()
}

/// Load the configuration from the default location
pub fn get_config() -> Result<AppConfig> {
    ConfigManager::new().load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.hashing.default_algorithm, HashAlgorithm::SHA256);
        assert_eq!(config.hashing.salt_position, SaltPosition::Prefix);
        assert!(config.history.enabled);
        assert_eq!(config.history.max_entries, 50);
        assert_eq!(config.output.default_format, OutputFormat::Text);
        assert!(config.output.color_enabled);
    }

    #[test]
    fn test_file_layer_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[hashing]\ndefault_algorithm = \"md5\"\nsalt_position = \"postfix\"\n",
        )
        .unwrap();

        let config = ConfigManager::with_path(path).load().unwrap();
        assert_eq!(config.hashing.default_algorithm, HashAlgorithm::MD5);
        assert_eq!(config.hashing.salt_position, SaltPosition::Postfix);
        assert_eq!(config.history.max_entries, 50);
    }

    #[test]
    fn test_zero_max_entries_is_rejected_on_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[history]\nenabled = true\nmax_entries = 0\n").unwrap();

        let err = ConfigManager::with_path(path).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<hashify_core::Error>(),
            Some(hashify_core::Error::Validation(ValidationError::InvalidConfiguration { .. }))
        ));
    }

    #[test]
    fn test_file_accepts_any_parser_spelling() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[hashing]\ndefault_algorithm = \"SHA-256\"\nsalt_position = \"Suffix\"\n\n[output]\ndefault_format = \"JSON\"\n",
        )
        .unwrap();

        let config = ConfigManager::with_path(path).load().unwrap();
        assert_eq!(config.hashing.default_algorithm, HashAlgorithm::SHA256);
        assert_eq!(config.hashing.salt_position, SaltPosition::Postfix);
        assert_eq!(config.output.default_format, OutputFormat::Json);
    }

    #[test]
    fn test_bad_values_are_invalid_parameters() {
        for (key, value) in [("history.max_entries", "0"), ("history.enabled", "yes")] {
            let err = ConfigManager::parse_config_value(key, value).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<hashify_core::Error>(),
                Some(hashify_core::Error::Validation(ValidationError::InvalidParameter { .. }))
            ));
            assert!(err.to_string().contains(key));
        }
    }

    #[test]
    fn test_parse_config_value_normalizes() {
        assert_eq!(
            ConfigManager::parse_config_value("hashing.default_algorithm", "SHA-512").unwrap(),
            toml::Value::String("sha512".to_string())
        );
        assert_eq!(
            ConfigManager::parse_config_value("output.default_format", "JSON").unwrap(),
            toml::Value::String("json".to_string())
        );
        assert!(ConfigManager::parse_config_value("hashing.default_algorithm", "sha1").is_err());
        assert!(ConfigManager::parse_config_value("network.timeout", "3").is_err());
    }
}
