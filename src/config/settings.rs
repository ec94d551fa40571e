use crate::locale::Locale;
use crate::units::Unit;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tickcalc.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Initial state of the form
    #[serde(default)]
    pub defaults: FormDefaults,

    // Title colour cycling
    #[serde(default)]
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FormDefaults {
    pub want_unit: String,
    pub have_unit: String,
    pub per_tick_unit: String,
    pub locale: Locale,
    pub double_rate: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            want_unit: "B".to_string(),
            have_unit: "M".to_string(),
            per_tick_unit: "M".to_string(),
            locale: Locale::English,
            double_rate: false,
        }
    }
}

impl FormDefaults {
    pub fn want_unit(&self) -> Unit {
        resolve_unit("want_unit", &self.want_unit)
    }

    pub fn have_unit(&self) -> Unit {
        resolve_unit("have_unit", &self.have_unit)
    }

    pub fn per_tick_unit(&self) -> Unit {
        resolve_unit("per_tick_unit", &self.per_tick_unit)
    }
}

fn resolve_unit(key: &str, suffix: &str) -> Unit {
    Unit::from_suffix(suffix).unwrap_or_else(|| {
        warn!(
            "Unknown unit '{}' for defaults.{}, falling back to no suffix",
            suffix, key
        );
        Unit::NONE
    })
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frame interval in milliseconds
    pub interval_ms: u64,
    /// Hue turns per second
    pub speed: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            interval_ms: 16,
            speed: 0.1,
            saturation: 0.6,
            value: 1.0,
        }
    }
}

impl AnimationConfig {
    pub fn interval(&self) -> Duration {
        // A zero interval would spin the frame loop
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.warn_unknown_units();
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// An explicit path must load. Otherwise `tickcalc.toml` in the working
    /// directory is used if present, else the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::load_from_file(fallback)
        } else {
            debug!("No config file found, using defaults");
            Ok(Self::empty())
        }
    }

    fn warn_unknown_units(&self) {
        let units = [
            ("want_unit", &self.defaults.want_unit),
            ("have_unit", &self.defaults.have_unit),
            ("per_tick_unit", &self.defaults.per_tick_unit),
        ];
        for (key, suffix) in units {
            if Unit::from_suffix(suffix).is_none() {
                warn!("defaults.{} = '{}' is not a known unit", key, suffix);
            }
        }
    }
}
