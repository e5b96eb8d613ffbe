use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Host-tunable settings, stored as TOML under the platform config dir
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub naming: NamingConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Prefix for generated column names ("column-" gives "column-1", ...)
    pub column_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Infer column types when loading CSV/JSON files
    pub infer_types_on_load: bool,

    /// Maximum rows sampled per column during type inference
    pub type_sample_rows: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            naming: NamingConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            column_prefix: "column-".to_string(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            infer_types_on_load: true,
            type_sample_rows: 100,
        }
    }
}

impl EditorConfig {
    /// Load config from the default location, creating it when missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&config_path)?;
        let config: EditorConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("boxed-table").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EditorConfig::default();
        assert_eq!(config.naming.column_prefix, "column-");
        assert!(config.behavior.infer_types_on_load);
        assert_eq!(config.behavior.type_sample_rows, 100);
    }

    #[test]
    fn test_config_serialization() {
        let config = EditorConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: EditorConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.naming.column_prefix, config.naming.column_prefix);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: EditorConfig = toml::from_str("[naming]\ncolumn_prefix = \"col_\"\n").unwrap();
        assert_eq!(parsed.naming.column_prefix, "col_");
        assert_eq!(parsed.behavior.type_sample_rows, 100);
    }
}
