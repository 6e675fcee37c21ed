//! Configuration file support for arduino-device.
//!
//! Configuration is loaded from multiple sources with the following priority (highest first):
//! 1. Command-line arguments
//! 2. Environment variables (ARDPORT_*)
//! 3. Local config file (./ardport.toml)
//! 4. Global config file (~/.config/ardport/config.toml)
//!
//! `--config <PATH>` replaces sources 3 and 4 with a single file.
//!
//! ```toml
//! [filter]
//! manufacturer = "arduino"
//!
//! [device]
//! serial = "85734323231351E0D0F1"
//! ```

use {
    directories::ProjectDirs,
    log::{debug, warn},
    serde::{Deserialize, Serialize},
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

/// Local configuration file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "ardport.toml";

/// Port filtering configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Manufacturer substring identifying supported boards.
    pub manufacturer: Option<String>,
}

/// Default board configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Serial number resolved when none is given on the command line.
    pub serial: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Filter configuration.
    #[serde(default)]
    pub filter: FilterConfig,
    /// Device configuration.
    #[serde(default)]
    pub device: DeviceConfig,
}

impl Config {
    /// Load configuration from the global and local files.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if let Some(global_config) = Self::load_from_file(&global_path) {
                debug!("Loaded global config from {}", global_path.display());
                config.merge(global_config);
            }
        }

        // Local config overrides global
        if let Some(local_config) = Self::load_from_file(Path::new(LOCAL_CONFIG_FILE)) {
            debug!("Loaded local config from {LOCAL_CONFIG_FILE}");
            config.merge(local_config);
        }

        config
    }

    /// Load configuration from a specific file path (--config flag).
    pub fn load_from_path(path: &Path) -> Self {
        if let Some(config) = Self::load_from_file(path) {
            debug!("Loaded config from {}", path.display());
            config
        } else {
            warn!(
                "Could not load config from {}, using defaults",
                path.display()
            );
            Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(e) => {
                    warn!("Failed to parse config file {}: {}", path.display(), e);
                    None
                },
            },
            Err(e) => {
                warn!("Failed to read config file {}: {}", path.display(), e);
                None
            },
        }
    }

    /// Get the global configuration directory.
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ardport").map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Get the global configuration file path.
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Configured manufacturer pattern, ignoring empty values.
    pub fn manufacturer(&self) -> Option<&str> {
        self.filter
            .manufacturer
            .as_deref()
            .filter(|m| !m.is_empty())
    }

    /// Configured default serial number, ignoring empty values.
    pub fn serial(&self) -> Option<&str> {
        self.device
            .serial
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    /// Merge another config into this one.
    fn merge(&mut self, other: Self) {
        if other.filter.manufacturer.is_some() {
            self.filter.manufacturer = other.filter.manufacturer;
        }
        if other.device.serial.is_some() {
            self.device.serial = other.device.serial;
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, tempfile::tempdir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.manufacturer().is_none());
        assert!(config.serial().is_none());
    }

    #[test]
    fn test_config_merge_overrides() {
        let mut config = Config::default();
        config.filter.manufacturer = Some("arduino".to_string());
        config.device.serial = Some("AB12".to_string());

        let mut other = Config::default();
        other.device.serial = Some("CD34".to_string());
        config.merge(other);

        assert_eq!(config.manufacturer(), Some("arduino"));
        assert_eq!(config.serial(), Some("CD34"));
    }

    #[test]
    fn test_config_merge_does_not_overwrite_with_none() {
        let mut config = Config::default();
        config.device.serial = Some("AB12".to_string());
        config.merge(Config::default());
        assert_eq!(config.serial(), Some("AB12"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [filter]
            manufacturer = "wch"

            [device]
            serial = "85734323231351E0D0F1"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.manufacturer(), Some("wch"));
        assert_eq!(config.serial(), Some("85734323231351E0D0F1"));
    }

    #[test]
    fn test_config_from_partial_toml() {
        let config: Config = toml::from_str("[device]\nserial = \"AB12\"\n").unwrap();
        assert!(config.manufacturer().is_none());
        assert_eq!(config.serial(), Some("AB12"));

        let empty: Config = toml::from_str("").unwrap();
        assert!(empty.serial().is_none());
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config: Config =
            toml::from_str("[filter]\nmanufacturer = \"\"\n[device]\nserial = \"\"\n").unwrap();
        assert!(config.manufacturer().is_none());
        assert!(config.serial().is_none());
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempdir().unwrap();
        let path = dir
            .path()
            .join("custom.toml");
        fs::write(&path, "[device]\nserial = \"AB12\"\n").unwrap();

        assert_eq!(Config::load_from_path(&path).serial(), Some("AB12"));
    }

    #[test]
    fn test_load_from_invalid_or_missing_path_uses_defaults() {
        let dir = tempdir().unwrap();
        let invalid = dir
            .path()
            .join("invalid.toml");
        fs::write(&invalid, "invalid toml [[[").unwrap();

        assert!(Config::load_from_path(&invalid).serial().is_none());
        assert!(Config::load_from_path(&dir.path().join("missing.toml"))
            .serial()
            .is_none());
    }

    #[test]
    fn test_global_config_path_name() {
        if let Some(path) = Config::global_config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}
