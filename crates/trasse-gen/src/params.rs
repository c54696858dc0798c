//! Generation parameters, loadable from TOML.

use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Bias weights for the option shuffle. Each weight is the number of
/// duplicate copies of the matching option pushed into the candidate set
/// before the uniform shuffle, so an option with weight `k` is `k` times as
/// likely to be drawn. Weights must be at least 1.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct GenParams {
    /// Copies of the go-straight option.
    #[serde(default = "default_linearity")]
    pub linearity: u32,
    /// Copies of each of the climb-up and climb-down options.
    #[serde(default = "default_altitude_variation")]
    pub altitude_variation: u32,
}

fn default_linearity() -> u32 {
    4
}

fn default_altitude_variation() -> u32 {
    1
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            linearity: default_linearity(),
            altitude_variation: default_altitude_variation(),
        }
    }
}

impl GenParams {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_favor_straight_travel() {
        let params = GenParams::default();
        assert_eq!(params.linearity, 4);
        assert_eq!(params.altitude_variation, 1);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let params = GenParams::from_toml_str("linearity = 9\n").unwrap();
        assert_eq!(params.linearity, 9);
        assert_eq!(params.altitude_variation, 1);
        let params = GenParams::from_toml_str("").unwrap();
        assert_eq!(params, GenParams::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        // a typo in a params file should surface, not silently fall back
        assert!(GenParams::from_toml_str("linearty = 9\n").is_err());
    }
}
