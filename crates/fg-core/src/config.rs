//! Configuration structures for filmguide.
//!
//! - [`SearchConfig`] - Search box debounce window
//! - [`ChannelsConfig`] - Where the channel list comes from
//! - [`TelemetryConfig`] - Whether and where user-action events go
//! - [`Config`] - Root configuration combining all settings
//!
//! Configuration files are JSON. Every section is `#[serde(default)]`, so a
//! file only needs the keys it overrides.

use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default search debounce window in milliseconds.
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Upper bound accepted for the search debounce window.
const MAX_SEARCH_DEBOUNCE_MS: u64 = 10_000;

/// Configuration for the search box.
///
/// # Examples
///
/// ```
/// use fg_core::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.debounce_ms, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How long the search text must be stable before it is committed.
    pub debounce_ms: u64,
}

impl SearchConfig {
    /// Returns the debounce window as a [`Duration`].
    #[inline]
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

/// Configuration for the upstream channel list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelsConfig {
    /// JSON file holding the channel list (`{"channels": [...]}`).
    ///
    /// `None` means the channel list is not available yet and is treated
    /// as loading.
    pub path: Option<Utf8PathBuf>,
}

/// Where telemetry events are delivered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum TelemetryTarget {
    /// Emit events as structured log records.
    #[default]
    Log,
    /// Drop events.
    Off,
}

/// Configuration for user-action telemetry.
///
/// # Examples
///
/// ```
/// use fg_core::{TelemetryConfig, TelemetryTarget};
///
/// let config = TelemetryConfig::default();
/// assert!(config.enabled);
/// assert_eq!(config.target, TelemetryTarget::Log);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Master switch; `false` behaves like [`TelemetryTarget::Off`].
    pub enabled: bool,

    /// Delivery target.
    pub target: TelemetryTarget,
}

impl TelemetryConfig {
    /// Returns `true` if events should be delivered anywhere.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.enabled && !matches!(self.target, TelemetryTarget::Off)
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target: TelemetryTarget::Log,
        }
    }
}

/// Root configuration for filmguide.
///
/// # Examples
///
/// ```
/// use fg_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"search": {"debounce_ms": 250}}"#).unwrap();
/// assert_eq!(config.search.debounce_ms, 250);
/// assert!(config.channels.path.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search box configuration.
    pub search: SearchConfig,

    /// Channel list configuration.
    pub channels: ChannelsConfig,

    /// Telemetry configuration.
    pub telemetry: TelemetryConfig,
}

impl Config {
    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_owned()));
        }
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks option ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.debounce_ms == 0 {
            return Err(ConfigError::invalid_option(
                "search.debounce_ms",
                "must be greater than zero",
            ));
        }
        if self.search.debounce_ms > MAX_SEARCH_DEBOUNCE_MS {
            return Err(ConfigError::invalid_option(
                "search.debounce_ms",
                format!("must not exceed {MAX_SEARCH_DEBOUNCE_MS}"),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
        assert_eq!(config.delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_telemetry_is_active() {
        assert!(TelemetryConfig::default().is_active());
        let off = TelemetryConfig {
            enabled: true,
            target: TelemetryTarget::Off,
        };
        assert!(!off.is_active());
        let disabled = TelemetryConfig {
            enabled: false,
            target: TelemetryTarget::Log,
        };
        assert!(!disabled.is_active());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"telemetry": {"target": "off"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.telemetry.target, TelemetryTarget::Off);
        assert!(config.telemetry.enabled);
        assert_eq!(config.search.debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    }

    #[test]
    fn test_validate_rejects_zero_delay() {
        let mut config = Config::default();
        config.search.debounce_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { .. }));
    }

    #[test]
    fn test_validate_rejects_huge_delay() {
        let mut config = Config::default();
        config.search.debounce_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("filmguide.json")).unwrap();
        std::fs::write(
            &path,
            r#"{"search": {"debounce_ms": 300}, "channels": {"path": "channels.json"}}"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(
            config.channels.path.as_deref(),
            Some(Utf8Path::new("channels.json"))
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Utf8Path::new("/nonexistent/filmguide.json")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("broken.json")).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Config::load(&path).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_telemetry_target_serialization() {
        assert_eq!(
            serde_json::to_string(&TelemetryTarget::Log).unwrap(),
            r#""log""#
        );
        assert_eq!(
            serde_json::to_string(&TelemetryTarget::Off).unwrap(),
            r#""off""#
        );
    }
}
