use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "/status/sending";
pub const DEFAULT_ELEMENT_ID: &str = "sending-status";
pub const DEFAULT_INTERVAL_MS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Options accepted by `start_sending_status`. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PollerConfig {
    pub endpoint: String,
    pub element_id: String,
    pub interval_ms: u32,
    pub log_level: LogLevel,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            element_id: DEFAULT_ELEMENT_ID.to_string(),
            interval_ms: DEFAULT_INTERVAL_MS,
            log_level: LogLevel::default(),
        }
    }
}

impl PollerConfig {
    /// Reads options handed over from JavaScript. `undefined` and `null` mean defaults.
    pub fn from_js(options: JsValue) -> Result<Self, ConfigError> {
        let config = if options.is_undefined() || options.is_null() {
            Self::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| ConfigError::InvalidOptions(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::InvalidOptions("endpoint is empty".to_string()));
        }
        if self.element_id.trim().is_empty() {
            return Err(ConfigError::InvalidOptions("elementId is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PollerConfig::default();
        assert_eq!(config.endpoint, "/status/sending");
        assert_eq!(config.element_id, "sending-status");
        assert_eq!(config.interval_ms, 2000);
        assert_eq!(log::LevelFilter::from(config.log_level), log::LevelFilter::Error);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_options_keep_defaults() {
        let config: PollerConfig =
            serde_json::from_str(r#"{"intervalMs": 500, "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.interval_ms, 500);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.element_id, DEFAULT_ELEMENT_ID);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = PollerConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroInterval));

        let config = PollerConfig {
            endpoint: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidOptions(_))));

        let config = PollerConfig {
            element_id: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidOptions(_))));
    }
}
