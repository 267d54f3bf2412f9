//! Page tunables and their JSON asset loader.
//!
//! # Responsibility
//! - Hold every layout constant the handlers depend on.
//! - Allow a host to override them from a JSON asset without code changes.
//!
//! # Invariants
//! - Missing keys fall back to the reference values.
//! - `scroll_throttle_ms = 0` disables throttling.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub const DEFAULT_SCROLLED_THRESHOLD: f64 = 50.0;
pub const DEFAULT_SECTION_ACTIVATION_OFFSET: f64 = 100.0;
pub const DEFAULT_HEADER_CLEARANCE: f64 = 80.0;
pub const DEFAULT_DESKTOP_BREAKPOINT: f64 = 768.0;
pub const DEFAULT_SCROLL_THROTTLE_MS: u64 = 16;

/// Layout and timing tunables for all page handlers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Navbar gets the scrolled style strictly above this offset.
    pub scrolled_threshold: f64,
    /// Subtracted from a section top to get its activation threshold.
    pub section_activation_offset: f64,
    /// Subtracted from an anchor target top before smooth scrolling.
    pub header_clearance: f64,
    /// Viewport widths strictly above this are desktop layout.
    pub desktop_breakpoint: f64,
    /// Minimum spacing between two applied scroll events.
    pub scroll_throttle_ms: u64,
    /// Navigation link targets in display order.
    pub nav_links: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: DEFAULT_SCROLLED_THRESHOLD,
            section_activation_offset: DEFAULT_SECTION_ACTIVATION_OFFSET,
            header_clearance: DEFAULT_HEADER_CLEARANCE,
            desktop_breakpoint: DEFAULT_DESKTOP_BREAKPOINT,
            scroll_throttle_ms: DEFAULT_SCROLL_THROTTLE_MS,
            nav_links: ["#home", "#about", "#projects", "#skills", "#contact"]
                .iter()
                .map(|href| href.to_string())
                .collect(),
        }
    }
}

impl PageConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str::<Self>(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(raw.as_str())
    }

    /// Rejects non-finite or negative distances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let distances = [
            ("scrolled_threshold", self.scrolled_threshold),
            ("section_activation_offset", self.section_activation_offset),
            ("header_clearance", self.header_clearance),
            ("desktop_breakpoint", self.desktop_breakpoint),
        ];
        for (field, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }
}

/// Config asset errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidValue {
        field: &'static str,
        value: f64,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::InvalidValue { field, value } => {
                write!(f, "config field `{field}` must be a finite, non-negative number, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
