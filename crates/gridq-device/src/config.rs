//! Device configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML or JSON, chosen by extension)
//! 2. Environment variables (with `GRIDQ_` prefix)
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values (the Foxtail device)

use std::path::Path;
use std::time::Duration;

use gridq_ir::GridQubit;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::device::GridDevice;
use crate::timing::GateDurations;
use crate::topology::GridTopology;

/// Complete device configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Device name shown by tooling.
    #[serde(default = "default_name")]
    pub name: String,

    /// Gate durations in nanoseconds.
    #[serde(default)]
    pub durations: DurationConfig,

    /// Explicit sites.
    #[serde(default)]
    pub qubits: Vec<GridQubit>,

    /// ASCII layout; its sites are added to `qubits`.
    #[serde(default)]
    pub layout: Option<String>,
}

/// Gate durations in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationConfig {
    /// Measurement duration
    #[serde(default = "default_measurement_ns")]
    pub measurement_ns: u64,

    /// Single-qubit rotation duration
    #[serde(default = "default_single_qubit_ns")]
    pub single_qubit_ns: u64,

    /// Two-qubit interaction duration
    #[serde(default = "default_two_qubit_ns")]
    pub two_qubit_ns: u64,
}

fn default_name() -> String {
    "foxtail".to_string()
}

fn default_measurement_ns() -> u64 {
    4000
}

fn default_single_qubit_ns() -> u64 {
    20
}

fn default_two_qubit_ns() -> u64 {
    50
}

impl Default for DurationConfig {
    fn default() -> Self {
        DurationConfig {
            measurement_ns: default_measurement_ns(),
            single_qubit_ns: default_single_qubit_ns(),
            two_qubit_ns: default_two_qubit_ns(),
        }
    }
}

impl DurationConfig {
    /// Convert to a duration table.
    pub fn to_durations(&self) -> GateDurations {
        GateDurations::new(
            Duration::from_nanos(self.measurement_ns),
            Duration::from_nanos(self.single_qubit_ns),
            Duration::from_nanos(self.two_qubit_ns),
        )
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::foxtail()
    }
}

impl DeviceConfig {
    /// The 2 × 11 Foxtail device.
    pub fn foxtail() -> Self {
        DeviceConfig {
            name: default_name(),
            durations: DurationConfig::default(),
            qubits: GridQubit::rect(2, 11),
            layout: None,
        }
    }

    /// A named preset, if one exists.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "foxtail" => Some(Self::foxtail()),
            _ => None,
        }
    }

    /// Names accepted by [`DeviceConfig::preset`].
    pub fn preset_names() -> &'static [&'static str] {
        &["foxtail"]
    }

    /// Load configuration from a YAML or JSON file.
    ///
    /// Files ending in `.json` are read as JSON, everything else as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };
        debug!("loaded device config {} from {}", config.name, path.display());
        Ok(config)
    }

    /// Parse a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DeviceConfig =
            serde_yaml_ng::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: DeviceConfig =
            serde_json::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load from file if provided
    /// 2. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.merge_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Merge `GRIDQ_*` environment variables into this configuration.
    pub fn merge_env(self) -> Result<Self, ConfigError> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Merge overrides looked up through `lookup`.
    ///
    /// Only variables that are set override the file-loaded (or default)
    /// values; a set variable that is not a number is an error.
    pub fn merge_env_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let parse = |key: &str| -> Result<Option<u64>, ConfigError> {
            lookup(key)
                .map(|v| {
                    v.trim().parse::<u64>().map_err(|_| {
                        ConfigError::Parse(format!("{key} must be an integer, got {v:?}"))
                    })
                })
                .transpose()
        };

        if let Some(v) = parse("GRIDQ_MEASUREMENT_NS")? {
            self.durations.measurement_ns = v;
        }
        if let Some(v) = parse("GRIDQ_SINGLE_QUBIT_NS")? {
            self.durations.single_qubit_ns = v;
        }
        if let Some(v) = parse("GRIDQ_TWO_QUBIT_NS")? {
            self.durations.two_qubit_ns = v;
        }

        Ok(self)
    }

    /// The configured sites: explicit qubits plus those of the layout.
    pub fn topology(&self) -> GridTopology {
        let mut qubits = self.qubits.clone();
        if let Some(layout) = &self.layout {
            qubits.extend(GridTopology::parse_layout(layout).iter().copied());
        }
        GridTopology::from_qubits(qubits)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.topology().is_empty() {
            return Err(ConfigError::Validation(format!(
                "device {} has no qubits",
                self.name
            )));
        }

        if self.durations.measurement_ns == 0 {
            return Err(ConfigError::Validation(
                "measurement_ns must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Build the device described by this configuration.
    pub fn build_device(&self) -> Result<GridDevice, ConfigError> {
        self.validate()?;
        Ok(GridDevice::from_parts(
            self.durations.to_durations(),
            self.topology(),
        ))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = DeviceConfig::default();
        assert_eq!(config.name, "foxtail");
        assert_eq!(config.durations.measurement_ns, 4000);
        assert!(config.validate().is_ok());
        assert_eq!(config.build_device().unwrap(), GridDevice::foxtail());
    }

    #[test]
    fn test_yaml_with_layout() {
        let yaml = r#"
name: tee
durations:
  two_qubit_ns: 45
qubits:
  - { row: 5, col: 5 }
layout: |
  ABC
  .D.
"#;
        let config = DeviceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.name, "tee");
        assert_eq!(config.durations.two_qubit_ns, 45);
        assert_eq!(config.durations.single_qubit_ns, 20);

        let device = config.build_device().unwrap();
        assert_eq!(device.qubit_set().len(), 5);
        assert_eq!(device.col(1), vec![GridQubit::new(0, 1), GridQubit::new(1, 1)]);
        assert_eq!(device.durations().two_qubit, Duration::from_nanos(45));
    }

    #[test]
    fn test_json() {
        let json = r#"{"name": "pair", "qubits": [{"row": 0, "col": 0}, {"row": 0, "col": 1}]}"#;
        let config = DeviceConfig::from_json_str(json).unwrap();
        assert_eq!(config.topology().len(), 2);
    }

    #[test]
    fn test_validate_no_qubits() {
        let result = DeviceConfig::from_yaml_str("name: empty\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_zero_measurement() {
        let mut config = DeviceConfig::foxtail();
        config.durations.measurement_ns = 0;
        assert!(config.validate().is_err());
        assert!(config.build_device().is_err());
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            DeviceConfig::from_yaml_str("qubits: 7"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> =
            HashMap::from([("GRIDQ_TWO_QUBIT_NS", "60"), ("GRIDQ_MEASUREMENT_NS", " 3000 ")]);
        let config = DeviceConfig::foxtail()
            .merge_env_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.durations.two_qubit_ns, 60);
        assert_eq!(config.durations.measurement_ns, 3000);
        assert_eq!(config.durations.single_qubit_ns, 20);
    }

    #[test]
    fn test_env_rejects_garbage() {
        let result = DeviceConfig::foxtail()
            .merge_env_from(|key| (key == "GRIDQ_SINGLE_QUBIT_NS").then(|| "fast".to_string()));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_presets() {
        for name in DeviceConfig::preset_names() {
            assert!(DeviceConfig::preset(name).is_some());
        }
        assert!(DeviceConfig::preset("bristlecone").is_none());
    }
}
