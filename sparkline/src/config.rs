//! Per-widget render configuration.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::series::ValueSeries;

/// How raw samples map onto the height of the drawing area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueScale {
    /// Samples are already fractions of the height (`0.0..=1.0`).
    #[default]
    Fraction,
    /// Samples use the advertised `0..=100` range and are divided by 100.
    Percent,
}

impl ValueScale {
    pub fn normalize(self, value: f64) -> f64 {
        match self {
            Self::Fraction => value,
            Self::Percent => value / ValueSeries::MAX_VALUE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fraction => "fraction",
            Self::Percent => "percent",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "fraction" => Some(Self::Fraction),
            "percent" => Some(Self::Percent),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fill the area under the line instead of stroking it.
    pub filled: bool,
    /// Draw each series back to front while x still grows left to right.
    pub reversed: bool,
    num_sets: NonZeroUsize,
    pub scale: ValueScale,
    /// Pin normalized values into the drawing area.
    pub clamp: bool,
    /// Leave a gap where consecutive samples sit on the baseline.
    pub break_at_zero: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            filled: true,
            reversed: false,
            num_sets: NonZeroUsize::MIN,
            scale: ValueScale::Fraction,
            clamp: false,
            break_at_zero: false,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn num_sets(&self) -> NonZeroUsize {
        self.num_sets
    }

    /// Change the number of interleaved series. Zero is rejected and the
    /// current value stays in effect.
    pub fn set_num_sets(&mut self, num_sets: usize) -> Result<()> {
        match NonZeroUsize::new(num_sets) {
            Some(n) => {
                self.num_sets = n;
                Ok(())
            }
            None => {
                tracing::debug!(current = self.num_sets.get(), "rejected num_sets = 0");
                Err(Error::InvalidConfiguration(
                    "num_sets must be at least 1".to_string(),
                ))
            }
        }
    }

    pub fn with_num_sets(mut self, num_sets: NonZeroUsize) -> Self {
        self.num_sets = num_sets;
        self
    }

    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }

    pub fn scale(mut self, scale: ValueScale) -> Self {
        self.scale = scale;
        self
    }

    /// Map a raw sample to a fraction of the area height.
    pub fn normalize(&self, value: f64) -> f64 {
        let v = self.scale.normalize(value);
        if self.clamp {
            v.clamp(0.0, 1.0)
        } else {
            v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RenderConfig::new();
        assert!(config.filled);
        assert!(!config.reversed);
        assert_eq!(config.num_sets().get(), 1);
        assert_eq!(config.scale, ValueScale::Fraction);
    }

    #[test]
    fn zero_sets_rejected_and_previous_kept() {
        let mut config = RenderConfig::new();
        config.set_num_sets(2).unwrap();
        let err = config.set_num_sets(0).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert_eq!(config.num_sets().get(), 2);
    }

    #[test]
    fn percent_scale_divides_by_max() {
        let config = RenderConfig::new().scale(ValueScale::Percent);
        assert_eq!(config.normalize(50.0), 0.5);
    }

    #[test]
    fn clamp_is_opt_in() {
        let mut config = RenderConfig::new();
        assert_eq!(config.normalize(1.5), 1.5);
        config.clamp = true;
        assert_eq!(config.normalize(1.5), 1.0);
        assert_eq!(config.normalize(-0.5), 0.0);
    }

    #[test]
    fn deserializes_partial_json() {
        let config: RenderConfig =
            serde_json::from_str(r#"{ "filled": false, "num_sets": 2, "scale": "percent" }"#)
                .unwrap();
        assert!(!config.filled);
        assert_eq!(config.num_sets().get(), 2);
        assert_eq!(config.scale, ValueScale::Percent);
        assert!(!config.reversed);
    }

    #[test]
    fn deserializing_zero_sets_fails() {
        let parsed: std::result::Result<RenderConfig, _> =
            serde_json::from_str(r#"{ "num_sets": 0 }"#);
        assert!(parsed.is_err());
    }
}
