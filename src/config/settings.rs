//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Pause between two generations, in seconds
    pub delay_seconds: f64,
    /// Stop after this many generations have been shown
    pub max_generations: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Every frame is padded with blank lines up to this height
    pub terminal_height: usize,
    pub color: bool,
    pub alive_glyph: char,
    pub dead_glyph: char,
}

/// Reasons a set of settings is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Delay must be a non-negative number of seconds a Duration can hold, got {0}")]
    InvalidDelay(f64),
    #[error("Alive and dead cells must use different glyphs, both are '{0}'")]
    IndistinctGlyphs(char),
    #[error("Generation limit must be positive")]
    ZeroGenerations,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_seconds: 0.05,
            max_generations: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            terminal_height: 45,
            color: true,
            alive_glyph: '1',
            dead_glyph: '0',
        }
    }
}

impl Settings {
    /// Load settings from a YAML or JSON file, chosen by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Serialize settings as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize settings")
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_yaml_string()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        let delay = self.simulation.delay_seconds;
        if Duration::try_from_secs_f64(delay).is_err() {
            return Err(SettingsError::InvalidDelay(delay));
        }

        if self.display.alive_glyph == self.display.dead_glyph {
            return Err(SettingsError::IndistinctGlyphs(self.display.alive_glyph));
        }

        if self.simulation.max_generations == Some(0) {
            return Err(SettingsError::ZeroGenerations);
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(terminal_height) = cli_overrides.terminal_height {
            self.display.terminal_height = terminal_height;
        }
        if let Some(delay_seconds) = cli_overrides.delay_seconds {
            self.simulation.delay_seconds = delay_seconds;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(max_generations);
        }
        if cli_overrides.no_color {
            self.display.color = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub terminal_height: Option<usize>,
    pub delay_seconds: Option<f64>,
    pub max_generations: Option<usize>,
    pub no_color: bool,
}
