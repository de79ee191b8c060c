//! Fit configuration
//!
//! [`FitOptions::default`] reproduces the classic logo behaviour: start at
//! 150px, shrink one pixel at a time, bold black text. Two environment
//! variables can override the search at startup:
//!
//! ```bash
//! LOGOFIT_INITIAL_SIZE=96 LOGOFIT_FIT_STRATEGY=binary logofit render "Pi-X"
//! ```
//!
//! Values that do not parse are logged and ignored.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::{
    error::{LogofitError, Result},
    Color,
};

/// Font size the search starts from
pub const DEFAULT_INITIAL_SIZE: u32 = 150;

/// OpenType weight class for bold
pub const WEIGHT_BOLD: u16 = 700;

pub const ENV_INITIAL_SIZE: &str = "LOGOFIT_INITIAL_SIZE";
pub const ENV_FIT_STRATEGY: &str = "LOGOFIT_FIT_STRATEGY";

/// How the largest fitting size is searched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStrategy {
    /// Step down one size at a time from the initial size
    #[default]
    Linear,
    /// Bisect between 1 and the initial size
    Binary,
}

impl FitStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitStrategy::Linear => "linear",
            FitStrategy::Binary => "binary",
        }
    }
}

impl fmt::Display for FitStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitStrategy {
    type Err = LogofitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(FitStrategy::Linear),
            "binary" | "bisect" => Ok(FitStrategy::Binary),
            other => Err(LogofitError::Config(format!(
                "unknown fit strategy '{}' (expected linear or binary)",
                other
            ))),
        }
    }
}

/// Knobs for fitting and drawing
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub initial_size: u32,
    pub strategy: FitStrategy,
    pub foreground: Color,
    /// Requested weight class; the nearest available face is used
    pub weight: u16,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            initial_size: DEFAULT_INITIAL_SIZE,
            strategy: FitStrategy::Linear,
            foreground: Color::black(),
            weight: WEIGHT_BOLD,
        }
    }
}

impl FitOptions {
    /// Defaults with `LOGOFIT_*` environment overrides applied
    pub fn from_env() -> Self {
        let mut options = Self::default();
        options.apply_overrides(|key| std::env::var(key).ok());
        options
    }

    /// Apply overrides from any key/value source.
    ///
    /// Unparseable values keep the current setting.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_INITIAL_SIZE) {
            match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => {
                    log::debug!("{} overrides initial size to {}", ENV_INITIAL_SIZE, size);
                    self.initial_size = size;
                },
                _ => log::warn!("Ignoring {}={:?}: expected a positive integer", ENV_INITIAL_SIZE, raw),
            }
        }

        if let Some(raw) = lookup(ENV_FIT_STRATEGY) {
            match raw.parse::<FitStrategy>() {
                Ok(strategy) => {
                    log::debug!("{} overrides fit strategy to {}", ENV_FIT_STRATEGY, strategy);
                    self.strategy = strategy;
                },
                Err(e) => log::warn!("Ignoring {}: {}", ENV_FIT_STRATEGY, e),
            }
        }
    }

    pub fn with_initial_size(mut self, size: u32) -> Self {
        self.initial_size = size;
        self
    }

    pub fn with_strategy(mut self, strategy: FitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_size == 0 {
            return Err(LogofitError::invalid_input("initial font size must be at least 1"));
        }
        if !(1..=1000).contains(&self.weight) {
            return Err(LogofitError::Config(format!(
                "font weight {} outside 1..=1000",
                self.weight
            )));
        }
        Ok(())
    }
}
