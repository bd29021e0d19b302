use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use planetary_age::{solar_system, Body};
use serde::Deserialize;

/// Body table configuration, read from TOML.
///
/// ```toml
/// solar_system = true
///
/// [[bodies]]
/// name = "Eris"
/// year_length = 203830.0
///
/// [[bodies]]
/// name = "Home"
/// year_length = 365.2425
/// calendar_year = true
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgeConfig {
    /// Start from the built-in Mercury..Pluto table.
    #[serde(default = "default_true")]
    pub solar_system: bool,

    /// Extra bodies, appended after the built-in table.
    #[serde(default)]
    pub bodies: Vec<Body>,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            solar_system: true,
            bodies:       Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

impl AgeConfig {
    /// Loads a config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config: {}", path.display()))
    }

    fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The bodies to report on, in table order.
    pub fn bodies(&self) -> Vec<Body> {
        let mut bodies = if self.solar_system {
            solar_system()
        } else {
            Vec::new()
        };
        bodies.extend(self.bodies.iter().cloned());
        bodies
    }
}
