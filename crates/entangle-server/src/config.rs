//! Configuration management for the Entangle server.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with ENTANGLE_ prefix)
//! 3. .env files
//!
//! Configuration precedence (highest to lowest):
//! 1. Environment variables
//! 2. Configuration file
//! 3. Default values

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Complete server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address (e.g., "127.0.0.1:8001")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Allowed CORS origins: comma-separated list, or "*"
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Request bounds
    #[serde(default)]
    pub limits: CircuitLimits,

    /// Reject unknown gate types and two-qubit gates without a control
    /// instead of skipping them
    #[serde(default)]
    pub strict_gates: bool,

    /// Maximum number of status checks returned by GET /api/status
    #[serde(default = "default_status_list_limit")]
    pub status_list_limit: usize,

    /// SQLite database for the status-check log; in-memory when unset
    #[serde(default)]
    pub sqlite_path: Option<String>,
}

/// Bounds applied to incoming circuit requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitLimits {
    #[serde(default = "default_qubits_min")]
    pub qubits_min: u32,

    #[serde(default = "default_qubits_max")]
    pub qubits_max: u32,

    #[serde(default = "default_shots_min")]
    pub shots_min: u32,

    #[serde(default = "default_shots_max")]
    pub shots_max: u32,

    /// Bloch spheres are rendered only up to this register width
    #[serde(default = "default_bloch_max_qubits")]
    pub bloch_max_qubits: u32,
}

// Default value functions
fn default_bind_address() -> String {
    "127.0.0.1:8001".to_string()
}

fn default_cors_origins() -> String {
    "*".to_string()
}

fn default_status_list_limit() -> usize {
    1000
}

fn default_qubits_min() -> u32 {
    2
}

fn default_qubits_max() -> u32 {
    5
}

fn default_shots_min() -> u32 {
    512
}

fn default_shots_max() -> u32 {
    8192
}

fn default_bloch_max_qubits() -> u32 {
    3
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: default_bind_address(),
            cors_origins: default_cors_origins(),
            limits: CircuitLimits::default(),
            strict_gates: false,
            status_list_limit: default_status_list_limit(),
            sqlite_path: None,
        }
    }
}

impl Default for CircuitLimits {
    fn default() -> Self {
        CircuitLimits {
            qubits_min: default_qubits_min(),
            qubits_max: default_qubits_max(),
            shots_min: default_shots_min(),
            shots_max: default_shots_max(),
            bloch_max_qubits: default_bloch_max_qubits(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: ServerConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with the following precedence:
    /// 1. Load .env file if it exists
    /// 2. Load from file if provided
    /// 3. Apply environment variable overrides
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = if let Some(path) = config_file {
            Self::from_file(path)?
        } else {
            ServerConfig::default()
        };

        let config = config.merge_env_from(|key| std::env::var(key).ok())?;

        config.validate()?;
        Ok(config)
    }

    /// Merge `ENTANGLE_*` variables into this configuration.
    ///
    /// Only variables present in `lookup` override the file-loaded (or default)
    /// values. A present but unparsable value is an error.
    pub fn merge_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("ENTANGLE_BIND_ADDRESS") {
            self.bind_address = v;
        }
        if let Some(v) = lookup("ENTANGLE_CORS_ORIGINS") {
            self.cors_origins = v;
        }
        if let Some(v) = lookup("ENTANGLE_QUBITS_MIN") {
            self.limits.qubits_min = parse_var("ENTANGLE_QUBITS_MIN", &v)?;
        }
        if let Some(v) = lookup("ENTANGLE_QUBITS_MAX") {
            self.limits.qubits_max = parse_var("ENTANGLE_QUBITS_MAX", &v)?;
        }
        if let Some(v) = lookup("ENTANGLE_SHOTS_MIN") {
            self.limits.shots_min = parse_var("ENTANGLE_SHOTS_MIN", &v)?;
        }
        if let Some(v) = lookup("ENTANGLE_SHOTS_MAX") {
            self.limits.shots_max = parse_var("ENTANGLE_SHOTS_MAX", &v)?;
        }
        if let Some(v) = lookup("ENTANGLE_BLOCH_MAX_QUBITS") {
            self.limits.bloch_max_qubits = parse_var("ENTANGLE_BLOCH_MAX_QUBITS", &v)?;
        }
        if let Some(v) = lookup("ENTANGLE_STRICT_GATES") {
            self.strict_gates = parse_flag("ENTANGLE_STRICT_GATES", &v)?;
        }
        if let Some(v) = lookup("ENTANGLE_STATUS_LIST_LIMIT") {
            self.status_list_limit = parse_var("ENTANGLE_STATUS_LIST_LIMIT", &v)?;
        }
        if let Some(v) = lookup("ENTANGLE_SQLITE_PATH") {
            self.sqlite_path = (!v.is_empty()).then_some(v);
        }

        Ok(self)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;

        if self.cors_origins.split(',').all(|o| o.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "cors_origins must be \"*\" or a comma-separated list of origins".to_string(),
            ));
        }

        let l = &self.limits;
        if l.qubits_min == 0 || l.qubits_min > l.qubits_max {
            return Err(ConfigError::ValidationError(format!(
                "Invalid qubit bounds: {}..={}",
                l.qubits_min, l.qubits_max
            )));
        }
        if l.shots_min == 0 || l.shots_min > l.shots_max {
            return Err(ConfigError::ValidationError(format!(
                "Invalid shot bounds: {}..={}",
                l.shots_min, l.shots_max
            )));
        }

        if self.status_list_limit == 0 {
            return Err(ConfigError::ValidationError(
                "status_list_limit must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the parsed bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address.parse().map_err(|_| {
            ConfigError::ValidationError(format!("Invalid bind address: {}", self.bind_address))
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ParseError(format!("{key}={value:?} is not a valid number")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::ParseError(format!(
            "{key}={value:?} is not a boolean"
        ))),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
