//! Configuration Management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Recording settings
    pub recording: RecordingConfig,
    /// Peripheral discovery settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

/// Recording configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Scratch directory holding the working file while a session is active
    pub scratch_dir: PathBuf,
    /// Destination directory for finalized recordings
    pub destination_dir: PathBuf,
}

/// Peripheral discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Scan window in milliseconds
    pub scan_window_ms: u64,
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            scratch_dir: dirs::home_dir()
                .map(|h| h.join(".handtrace").join("tmp"))
                .unwrap_or_else(|| PathBuf::from(".handtrace-tmp")),
            destination_dir: dirs::download_dir()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            scan_window_ms: crate::discovery::DEFAULT_SCAN_WINDOW.as_millis() as u64,
        }
    }
}

impl Config {
    /// Validate config values are within acceptable ranges.
    /// Returns Ok(()) if valid, or Err with a description of the first invalid field.
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.recording.scratch_dir.as_os_str().is_empty() {
            return Err(crate::Error::Config(
                "recording.scratch_dir must not be empty".to_string(),
            ));
        }
        if self.recording.destination_dir.as_os_str().is_empty() {
            return Err(crate::Error::Config(
                "recording.destination_dir must not be empty".to_string(),
            ));
        }
        if self.recording.scratch_dir == self.recording.destination_dir {
            return Err(crate::Error::Config(
                "recording.scratch_dir and destination_dir must differ".to_string(),
            ));
        }
        if self.discovery.scan_window_ms == 0 {
            return Err(crate::Error::Config(
                "discovery.scan_window_ms must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load config from file
    pub fn load(path: &PathBuf) -> Result<Self, crate::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default location
    pub fn load_default() -> Result<Self, crate::Error> {
        let path = Self::default_path();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to file
    pub fn save(&self, path: &PathBuf) -> Result<(), crate::Error> {
        let content = toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;

        // Create parent directories
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save to default location
    pub fn save_default(&self) -> Result<(), crate::Error> {
        self.save(&Self::default_path())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".handtrace").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    /// Generate TOML representation
    pub fn to_toml(&self) -> Result<String, crate::Error> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }
}
