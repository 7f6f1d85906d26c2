use serde::Serialize;
use serde_json::{Map, Value};

/// Debug flag baked into the build
pub const DEBUG: bool = true;

/// Default log level for the demo binary
pub const LOG_LEVEL: &str = "info";

/// Simulated connection pool ceiling
pub const MAX_CONNECTIONS: u32 = 100;

/// Simulated operation timeout in seconds
pub const TIMEOUT_SECS: u64 = 30;

/// Process-wide settings, fixed at compile time
///
/// There is no file or environment override: the values exist so the
/// analyzer demo has a configuration surface to scan, not so they can
/// change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    pub debug: bool,
    pub log_level: String,
    pub max_connections: u32,
    /// Timeout in seconds
    pub timeout: u64,
}

impl AppConfig {
    /// Expose the settings as a name-to-value mapping
    #[must_use]
    pub fn as_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("debug".to_string(), Value::Bool(self.debug));
        map.insert(
            "log_level".to_string(),
            Value::String(self.log_level.clone()),
        );
        map.insert(
            "max_connections".to_string(),
            Value::from(self.max_connections),
        );
        map.insert("timeout".to_string(), Value::from(self.timeout));
        map
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            debug: DEBUG,
            log_level: LOG_LEVEL.to_string(),
            max_connections: MAX_CONNECTIONS,
            timeout: TIMEOUT_SECS,
        }
    }
}

/// Get the current configuration
///
/// Total and side-effect free; every call returns the same four values.
#[must_use]
pub fn get_config() -> AppConfig {
    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_values() {
        let config = get_config();
        assert!(config.debug);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.max_connections, 100);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_get_config_is_stable() {
        assert_eq!(get_config(), get_config());
    }

    #[test]
    fn test_as_map_has_all_settings() {
        let map = get_config().as_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map["debug"], Value::Bool(true));
        assert_eq!(map["log_level"], Value::String("info".to_string()));
        assert_eq!(map["max_connections"], Value::from(100));
        assert_eq!(map["timeout"], Value::from(30));
    }

    #[test]
    fn test_config_serializes_to_json() {
        let json = serde_json::to_value(get_config()).unwrap();
        assert_eq!(json["max_connections"], 100);
        assert_eq!(json["log_level"], "info");
    }
}
