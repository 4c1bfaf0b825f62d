/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Settings handed to the benchmark driver.
//!
//! The defaults are 10000 entries, 3 warm-up iterations, 10 measured iterations and a single
//! fork, with latencies reported in microseconds.
//!
//! ```rust
//! use map_iter_bench::{HarnessConfig, TimeUnit};
//!
//! let config = HarnessConfig::from_json_str(r#"{ "forks": 3, "time_unit": "nanoseconds" }"#)
//!     .unwrap();
//!
//! assert_eq!(config.forks, 3);
//! assert_eq!(config.time_unit, TimeUnit::Nanoseconds);
//! assert_eq!(config.dataset_size, 10_000);
//! ```

use crate::case::Variant;
use crate::dataset::MAX_DATASET_SIZE;
use core::fmt::{self, Display};
use core::time::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("measurement_iterations must be at least 1")]
    NoMeasurementIterations,
    #[error("forks must be at least 1")]
    NoForks,
    #[error("no variant selected")]
    NoVariants,
    #[error("dataset_size {size} exceeds the maximum of {max}")]
    DatasetTooLarge { size: usize, max: usize },
    #[error("malformed configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Unit latencies are reported in.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    #[default]
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Expresses `duration` in this unit.
    #[must_use]
    pub fn convert(self, duration: Duration) -> f64 {
        match self {
            TimeUnit::Nanoseconds => duration.as_nanos() as f64,
            TimeUnit::Microseconds => duration.as_nanos() as f64 / 1e3,
            TimeUnit::Milliseconds => duration.as_nanos() as f64 / 1e6,
            TimeUnit::Seconds => duration.as_secs_f64(),
        }
    }

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }
}

impl Display for TimeUnit {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Number of entries in the dataset.
    pub dataset_size: usize,
    pub warm_up_iterations: u32,
    pub measurement_iterations: u32,
    /// Independent repetitions of the whole warm-up and measurement cycle.
    pub forks: u32,
    pub time_unit: TimeUnit,
    /// The variants to run, in order.
    pub variants: Vec<Variant>,
}

impl Default for HarnessConfig {
    fn default() -> HarnessConfig {
        HarnessConfig {
            dataset_size: crate::DEFAULT_DATASET_SIZE,
            warm_up_iterations: 3,
            measurement_iterations: 10,
            forks: 1,
            time_unit: TimeUnit::default(),
            variants: Variant::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    /// Parses a JSON document.  Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<HarnessConfig, ConfigError> {
        let config: HarnessConfig = serde_json::from_str(json)?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.measurement_iterations == 0 {
            return Err(ConfigError::NoMeasurementIterations);
        }

        if self.forks == 0 {
            return Err(ConfigError::NoForks);
        }

        if self.variants.is_empty() {
            return Err(ConfigError::NoVariants);
        }

        if self.dataset_size > MAX_DATASET_SIZE {
            return Err(ConfigError::DatasetTooLarge {
                size: self.dataset_size,
                max: MAX_DATASET_SIZE,
            });
        }

        Ok(())
    }

    /// To avoid long benchmarks running in the CI system we limit the iteration counts to *2*.
    #[must_use]
    pub fn ci_scaled(self) -> HarnessConfig {
        let on_ci = matches!(std::env::var("CI"), Ok(ref v) if v == "true");

        self.scaled_for_ci(on_ci)
    }

    fn scaled_for_ci(self, on_ci: bool) -> HarnessConfig {
        if on_ci {
            HarnessConfig {
                warm_up_iterations: self.warm_up_iterations.min(2),
                measurement_iterations: self.measurement_iterations.min(2),
                ..self
            }
        } else {
            self
        }
    }
}
