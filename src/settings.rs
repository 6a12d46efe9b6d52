use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, Result, SettingsError};
use crate::math::Point2;
use crate::operations::CenterCount;

/// Fewest fit points offered for a sampled curve.
pub const MIN_FIT_POINTS: u32 = 7;
/// Most fit points offered for a sampled curve.
pub const MAX_FIT_POINTS: u32 = 255;

/// Defaults remembered between two curve constructions.
///
/// Stored as TOML by the host; missing keys fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    /// Number of catenary fit points.
    #[serde(default = "default_num_samples")]
    pub num_samples: u32,
    /// Last committed catenary tension. `None` offers the horizontal span.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    /// Basket-handle variant.
    #[serde(default)]
    pub center_count: CenterCount,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            num_samples: MIN_FIT_POINTS,
            tension: None,
            center_count: CenterCount::default(),
        }
    }
}

fn default_num_samples() -> u32 {
    MIN_FIT_POINTS
}

impl CurveSettings {
    /// Parses and validates settings from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed TOML or an unsupported
    /// center count, and a [`ParameterError`] if a value is out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(SettingsError::from)?;
        settings.validate()?;
        tracing::debug!(?settings, "loaded curve settings");
        Ok(settings)
    }

    /// Serializes the settings as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Serialize`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self).map_err(SettingsError::from)?)
    }

    /// Checks that every value can be used by the builders.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfRange`] for a sample count outside
    /// `MIN_FIT_POINTS..=MAX_FIT_POINTS` or a non-positive tension.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_FIT_POINTS..=MAX_FIT_POINTS).contains(&self.num_samples) {
            return Err(ParameterError::OutOfRange {
                parameter: "num_samples",
                value: f64::from(self.num_samples),
                min: f64::from(MIN_FIT_POINTS),
                max: f64::from(MAX_FIT_POINTS),
            }
            .into());
        }
        if let Some(tension) = self.tension {
            if !(tension > 0.0 && tension.is_finite()) {
                return Err(ParameterError::OutOfRange {
                    parameter: "tension",
                    value: tension,
                    min: 0.0,
                    max: f64::MAX,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Tension to offer for a cable between `start` and `end`.
    #[must_use]
    pub fn tension_for(&self, start: &Point2, end: &Point2) -> f64 {
        self.tension.unwrap_or_else(|| (end.x - start.x).abs())
    }

    /// Remembers a committed tension for the next cable.
    pub fn remember_tension(&mut self, tension: f64) {
        self.tension = Some(tension);
    }
}
