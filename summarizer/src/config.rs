// Copyright 2023 Xayn AG
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, version 3.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::ops::RangeInclusive;

use displaydoc::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Configurations of the summarizer.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
#[must_use]
pub struct Config {
    summary_ratio: f64,
    threshold_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_ratio: 0.3,
            threshold_factor: 1.2,
        }
    }
}

/// Errors of the summarizer configuration.
#[derive(Clone, Debug, Display, Error, PartialEq)]
pub enum ConfigError {
    /// Invalid summary ratio {0}, expected value within 0.1 and 0.9
    SummaryRatio(f64),
    /// Invalid threshold factor {0}, expected value within 0.1 and 3.0
    ThresholdFactor(f64),
    /// Invalid value '{0}', expected a number
    NotNumeric(String),
}

/// A raw configuration value as received from the outside.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Parameter {
    Number(f64),
    Text(String),
}

impl Parameter {
    /// Interprets the value as a number.
    ///
    /// Text is parsed as a float, surrounding whitespace is ignored. NaN is not a number.
    pub fn to_number(&self) -> Result<f64, ConfigError> {
        let number = match self {
            Self::Number(number) => Some(*number),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
        };

        number
            .filter(|number| !number.is_nan())
            .ok_or_else(|| ConfigError::NotNumeric(self.to_string()))
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<f64> for Parameter {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for Parameter {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Parameter {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// The outcome of [`Config::configure()`].
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct Configured {
    /// The updated configuration.
    pub config: Config,
    /// The values which were rejected and not applied.
    pub rejected: Vec<ConfigError>,
}

impl Config {
    /// The valid range of the summary ratio.
    pub const SUMMARY_RATIO: RangeInclusive<f64> = 0.1..=0.9;

    /// The valid range of the threshold factor.
    pub const THRESHOLD_FACTOR: RangeInclusive<f64> = 0.1..=3.0;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Self::SUMMARY_RATIO.contains(&self.summary_ratio) {
            return Err(ConfigError::SummaryRatio(self.summary_ratio));
        }
        if !Self::THRESHOLD_FACTOR.contains(&self.threshold_factor) {
            return Err(ConfigError::ThresholdFactor(self.threshold_factor));
        }

        Ok(())
    }

    /// The proportion of sentences to keep.
    pub fn summary_ratio(&self) -> f64 {
        self.summary_ratio
    }

    /// Sets the summary ratio.
    ///
    /// # Errors
    /// Fails if the ratio is not within [`Self::SUMMARY_RATIO`].
    pub fn with_summary_ratio(mut self, summary_ratio: f64) -> Result<Self, ConfigError> {
        if !Self::SUMMARY_RATIO.contains(&summary_ratio) {
            return Err(ConfigError::SummaryRatio(summary_ratio));
        }
        self.summary_ratio = summary_ratio;

        Ok(self)
    }

    /// The factor by which the summary ratio is scaled.
    pub fn threshold_factor(&self) -> f64 {
        self.threshold_factor
    }

    /// Sets the threshold factor.
    ///
    /// # Errors
    /// Fails if the factor is not within [`Self::THRESHOLD_FACTOR`].
    pub fn with_threshold_factor(mut self, threshold_factor: f64) -> Result<Self, ConfigError> {
        if !Self::THRESHOLD_FACTOR.contains(&threshold_factor) {
            return Err(ConfigError::ThresholdFactor(threshold_factor));
        }
        self.threshold_factor = threshold_factor;

        Ok(self)
    }

    /// Updates the configuration with raw values.
    ///
    /// Each value is validated independently. Invalid values are logged and rejected, the prior
    /// value is kept instead.
    pub fn configure(
        &self,
        summary_ratio: Option<Parameter>,
        threshold_factor: Option<Parameter>,
    ) -> Configured {
        let mut config = *self;
        let mut rejected = Vec::new();

        if let Some(summary_ratio) = summary_ratio {
            match summary_ratio
                .to_number()
                .and_then(|summary_ratio| config.with_summary_ratio(summary_ratio))
            {
                Ok(updated) => config = updated,
                Err(error) => rejected.push(error),
            }
        }
        if let Some(threshold_factor) = threshold_factor {
            match threshold_factor
                .to_number()
                .and_then(|threshold_factor| config.with_threshold_factor(threshold_factor))
            {
                Ok(updated) => config = updated,
                Err(error) => rejected.push(error),
            }
        }

        for error in &rejected {
            warn!(%error, "rejected summarizer configuration");
        }

        Configured { config, rejected }
    }

    /// Replaces each invalid value by its default.
    pub fn sanitized(self) -> Self {
        let default = Self::default();
        default
            .configure(
                Some(self.summary_ratio.into()),
                Some(self.threshold_factor.into()),
            )
            .config
    }
}
