//! Optional TOML configuration for the calculator server
//!
//! ```toml
//! base = "hex"      # dec, bin or hex
//! precision = 6     # fractional digits shown in Decimal mode
//! grouping = true   # thousands separators in Decimal mode
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::calc::{Calculator, DEFAULT_PRECISION, DisplaySettings, NumberBase};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number system the calculator starts in
    pub base: NumberBase,
    /// Maximum fractional digits in Decimal mode
    pub precision: usize,
    /// Thousands separators in Decimal mode
    pub grouping: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base: NumberBase::Decimal,
            precision: DEFAULT_PRECISION,
            grouping: true,
        }
    }
}

impl Config {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Display settings with `precision` clamped to the supported range
    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings::new(self.precision, self.grouping)
    }

    pub fn build_calculator(&self) -> Calculator {
        Calculator::with_settings(self.base, self.display_settings())
    }
}
