//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GESTURA_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use gestura_cloud::{FieldTuning, PatternKind};
use gestura_vision::OpennessBounds;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Particle cloud configuration
    #[serde(default)]
    pub particles: ParticlesConfig,
    /// Gesture estimation configuration
    #[serde(default)]
    pub gesture: GestureConfig,
    /// Field motion tuning
    #[serde(default)]
    pub field: FieldTuning,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`GESTURA_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // GESTURA_PARTICLES__COUNT=5000 -> particles.count = 5000
        figment = figment.merge(Env::prefixed("GESTURA_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Particle cloud configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    /// Number of particles (fixed at startup)
    pub count: usize,
    /// Initial target pattern
    pub pattern: PatternKind,
    /// Base color as a `#rrggbb` hex string
    pub color: String,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: 15_000,
            pattern: PatternKind::Sphere,
            color: "#00ffff".to_string(),
        }
    }
}

/// Gesture estimation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Wrist-to-fingertip distance bounds mapped onto openness 0..1
    #[serde(default)]
    pub openness: OpennessBounds,
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
