//! Engine configuration, loadable from YAML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the classic setup: a 100x60 board, about 10% alive, normal speed,
//! paused after the first generation.

use super::ConfigError;
use crate::SpeedLevel;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LifeConfig {
    /// Board width in cells.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Board height in cells.
    #[serde(default = "default_height")]
    pub height: usize,

    /// Probability of a cell being alive in a freshly generated board.
    #[serde(default = "default_fill_rate")]
    pub fill_rate: f64,

    /// Seed for board generation; drawn from entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Initial playback speed, 1 (fastest) to 5 (slowest).
    #[serde(default = "default_speed_level")]
    pub speed_level: u8,

    /// Whether the first generated board waits in the paused state.
    #[serde(default = "default_start_paused")]
    pub start_paused: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            fill_rate: default_fill_rate(),
            seed: None,
            speed_level: default_speed_level(),
            start_paused: default_start_paused(),
        }
    }
}

const fn default_width() -> usize {
    100
}

const fn default_height() -> usize {
    60
}

const fn default_fill_rate() -> f64 {
    0.1
}

fn default_speed_level() -> u8 {
    SpeedLevel::NORMAL.get()
}

const fn default_start_paused() -> bool {
    true
}

impl LifeConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if it is not valid YAML, or a validation error.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or a
    /// validation error.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // an empty document deserializes to nothing, not to an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns the first constraint the configuration violates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.fill_rate) {
            return Err(ConfigError::InvalidFillRate(self.fill_rate));
        }
        if SpeedLevel::new(self.speed_level).is_none() {
            return Err(ConfigError::InvalidSpeedLevel(self.speed_level));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LifeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!((config.width, config.height), (100, 60));
        assert_eq!(config.speed_level, 3);
        assert!(config.start_paused);
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(LifeConfig::parse("").unwrap(), LifeConfig::default());
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = LifeConfig::parse("width: 32\nseed: 7\n").unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, 60);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.fill_rate, 0.1);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            LifeConfig::parse("width: 0"),
            Err(ConfigError::InvalidDimensions { width: 0, .. })
        ));
        assert!(matches!(
            LifeConfig::parse("fill_rate: 1.5"),
            Err(ConfigError::InvalidFillRate(_))
        ));
        assert!(matches!(
            LifeConfig::parse("speed_level: 9"),
            Err(ConfigError::InvalidSpeedLevel(9))
        ));
        assert!(matches!(
            LifeConfig::parse("width: [1, 2]"),
            Err(ConfigError::Yaml { .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = LifeConfig::from_file(Path::new("/nonexistent/life-config.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
