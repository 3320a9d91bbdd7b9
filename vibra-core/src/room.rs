//! Room size estimation against the studio standard
//!
//! The rig sits at the center of the room, so the farthest echo in a sweep
//! is roughly the room's radius and twice that is taken as its size. This
//! is a heuristic, not a measured diameter: an off-center rig or an open
//! doorway will skew it. The verdict is informational and never blocks a
//! deploy.

use alloc::format;
use alloc::string::String;

use crate::constants::room::{STUDIO_MAX_SIZE_M, STUDIO_MIN_SIZE_M};
use crate::errors::{ConfigError, ConfigResult};
use crate::reading::{parse_distance_m, DistanceUnit, NormalizedReading, RawReading};
use crate::traits::Validatable;

/// Reason given when a batch has no usable distance
pub const NO_DISTANCE_REASON: &str = "No usable distance values found.";

/// Accepted room size range, inclusive, in meters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoomStandard {
    /// Smallest accepted size
    pub min_m: f64,
    /// Largest accepted size
    pub max_m: f64,
}

impl Default for RoomStandard {
    fn default() -> Self {
        Self {
            min_m: STUDIO_MIN_SIZE_M,
            max_m: STUDIO_MAX_SIZE_M,
        }
    }
}

impl RoomStandard {
    /// Custom range; rejects inverted or non-finite bounds
    pub fn new(min_m: f64, max_m: f64) -> ConfigResult<Self> {
        let standard = Self { min_m, max_m };
        standard.validate()?;
        Ok(standard)
    }

    /// Check the range is finite and ordered
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.min_m.is_valid() {
            return Err(ConfigError::NonFinite { field: "min_m" });
        }
        if !self.max_m.is_valid() {
            return Err(ConfigError::NonFinite { field: "max_m" });
        }
        if self.min_m > self.max_m {
            return Err(ConfigError::InvertedRange { min: self.min_m, max: self.max_m });
        }
        Ok(())
    }

    /// Whether a size falls inside the range
    pub fn contains(&self, size_m: f64) -> bool {
        size_m >= self.min_m && size_m <= self.max_m
    }
}

/// Verdict on a batch's room size
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSizeStatus {
    /// Estimate falls inside the standard range
    pub is_standard: bool,
    /// Estimated size; `None` when no distance was usable
    pub estimated_size_m: Option<f64>,
    /// Human-readable explanation
    pub reason: String,
}

impl RoomSizeStatus {
    /// Status used before anything has been deployed
    pub fn pending() -> Self {
        Self {
            is_standard: true,
            estimated_size_m: None,
            reason: String::new(),
        }
    }
}

/// Estimates room size from a reading batch
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RoomEstimator {
    standard: RoomStandard,
    default_unit: DistanceUnit,
}

impl RoomEstimator {
    /// Estimator for a custom standard
    pub fn new(standard: RoomStandard, default_unit: DistanceUnit) -> Self {
        Self { standard, default_unit }
    }

    /// Range estimates are compared against
    pub fn standard(&self) -> &RoomStandard {
        &self.standard
    }

    /// Estimate from distances in meters.
    ///
    /// Non-finite and non-positive values are ignored.
    pub fn estimate_distances<I>(&self, distances_m: I) -> RoomSizeStatus
    where
        I: IntoIterator<Item = f64>,
    {
        let farthest = distances_m
            .into_iter()
            .filter(|d| d.is_valid() && *d > 0.0)
            .fold(None, |max: Option<f64>, d| Some(max.map_or(d, |m| m.max(d))));

        let Some(radius_m) = farthest else {
            return RoomSizeStatus {
                is_standard: false,
                estimated_size_m: None,
                reason: String::from(NO_DISTANCE_REASON),
            };
        };

        let size_m = radius_m * 2.0;
        let is_standard = self.standard.contains(size_m);
        let reason = if is_standard {
            format!(
                "Studio standard detected: ~{:.2} m (expected {:.2}–{:.2} m).",
                size_m, self.standard.min_m, self.standard.max_m
            )
        } else {
            format!(
                "Outside studio standard: ~{:.2} m (expected {:.2}–{:.2} m).",
                size_m, self.standard.min_m, self.standard.max_m
            )
        };

        RoomSizeStatus {
            is_standard,
            estimated_size_m: Some(size_m),
            reason,
        }
    }

    /// Estimate from normalized readings
    pub fn estimate_readings(&self, readings: &[NormalizedReading]) -> RoomSizeStatus {
        self.estimate_distances(readings.iter().map(|r| r.distance_m))
    }

    /// Estimate from raw rows before angle filtering.
    ///
    /// A row with a good distance but an unreadable angle still tells us
    /// how far away a wall is, so it counts here.
    pub fn estimate_raw(&self, batch: &[RawReading]) -> RoomSizeStatus {
        self.estimate_distances(
            batch
                .iter()
                .filter_map(|raw| parse_distance_m(&raw.distance, self.default_unit).ok()),
        )
    }
}
