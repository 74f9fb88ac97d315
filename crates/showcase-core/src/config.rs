//! Showcase configuration
//!
//! Every value the runner uses lives here. The defaults reproduce the fixed
//! demonstration run; a TOML file may override any subset of them.

use crate::error::{Result, ShowcaseError};
use crate::geometry::Point;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Largest factorial input whose result fits in `u64`
pub const MAX_FACTORIAL_INPUT: u64 = 20;

/// Showcase configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Radius passed to the traced area helper
    pub radius: f64,
    /// Ordered key/value mapping printed after the area
    pub numbers: IndexMap<String, i64>,
    /// Input to the factorial helper
    pub factorial_input: u64,
    /// Point stored in the single-item container
    pub point: Point,
    /// Name given to the rendered shape
    pub shape_name: String,
    /// Size of the doubled sequence produced by the async task
    pub task_size: u64,
    /// Path of the scoped temp file
    pub temp_path: PathBuf,
    /// Name of the scoped async resource
    pub resource_name: String,
    /// Countdown start value
    pub countdown_start: u64,
    /// Simulated render latency in milliseconds
    pub render_delay_ms: u64,
    /// Simulated acquire/release latency in milliseconds
    pub resource_delay_ms: u64,
}

impl ShowcaseConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML; missing keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            ShowcaseError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");
        Self::from_toml_str(&source)
    }

    /// Reject values the runner cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.radius.is_finite() {
            return Err(ShowcaseError::config("radius must be finite"));
        }
        if self.factorial_input > MAX_FACTORIAL_INPUT {
            return Err(ShowcaseError::config(format!(
                "factorial_input must be at most {MAX_FACTORIAL_INPUT}, got {}",
                self.factorial_input
            )));
        }
        if self.temp_path.as_os_str().is_empty() {
            return Err(ShowcaseError::config("temp_path must not be empty"));
        }
        if self.resource_name.trim().is_empty() {
            return Err(ShowcaseError::config("resource_name must not be empty"));
        }
        Ok(())
    }

    /// With area radius
    #[inline]
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// With factorial input
    #[inline]
    #[must_use]
    pub fn with_factorial_input(mut self, n: u64) -> Self {
        self.factorial_input = n;
        self
    }

    /// With shape name
    #[inline]
    #[must_use]
    pub fn with_shape_name(mut self, name: impl Into<String>) -> Self {
        self.shape_name = name.into();
        self
    }

    /// With temp file path
    #[inline]
    #[must_use]
    pub fn with_temp_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.temp_path = path.into();
        self
    }

    /// With countdown start
    #[inline]
    #[must_use]
    pub fn with_countdown_start(mut self, start: u64) -> Self {
        self.countdown_start = start;
        self
    }

    /// Zero out all simulated latencies
    #[inline]
    #[must_use]
    pub fn without_delays(mut self) -> Self {
        self.render_delay_ms = 0;
        self.resource_delay_ms = 0;
        self
    }

    /// Render latency as a duration
    #[inline]
    #[must_use]
    pub fn render_delay(&self) -> Duration {
        Duration::from_millis(self.render_delay_ms)
    }

    /// Resource latency as a duration
    #[inline]
    #[must_use]
    pub fn resource_delay(&self) -> Duration {
        Duration::from_millis(self.resource_delay_ms)
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let mut numbers = IndexMap::new();
        numbers.insert("one".to_string(), 1);
        numbers.insert("two".to_string(), 2);

        Self {
            radius: 2.5,
            numbers,
            factorial_input: 5,
            point: Point::new(1.5, 2.5),
            shape_name: "Circle".to_string(),
            task_size: 5,
            temp_path: PathBuf::from("temp.txt"),
            resource_name: "demo-resource".to_string(),
            countdown_start: 3,
            render_delay_ms: 10,
            resource_delay_ms: 5,
        }
    }
}
