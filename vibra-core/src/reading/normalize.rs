//! Raw row -> typed reading
//!
//! Drops are silent on the event surface: sweeps routinely include rows with
//! no echo or a half-typed angle. Each drop is still logged at debug level
//! and counted so tooling can show how much of a batch was usable.

use alloc::vec::Vec;

use crate::errors::ReadingError;
use crate::zone::classify;

use super::parse::{parse_distance_m, parse_layer_index, parse_numeric, DistanceUnit, FieldError};
use super::{NormalizedReading, RawReading};

/// A row that did not survive normalization
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DroppedReading {
    /// Position of the row in its batch
    pub batch_index: usize,
    /// Why it was dropped
    pub reason: ReadingError,
}

/// Result of normalizing a whole batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedBatch {
    /// Usable readings, in batch order
    pub readings: Vec<NormalizedReading>,
    /// Rows that were filtered out, in batch order
    pub dropped: Vec<DroppedReading>,
}

impl NormalizedBatch {
    /// Number of rows that were filtered out
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// True when no row survived
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

/// Coerces raw rows into [`NormalizedReading`]s
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normalizer {
    /// Unit assumed for distances without a suffix
    pub default_unit: DistanceUnit,
}

impl Normalizer {
    /// Normalizer assuming `unit` for bare distances
    pub fn with_default_unit(unit: DistanceUnit) -> Self {
        Self { default_unit: unit }
    }

    /// Normalize one row, explaining any rejection
    pub fn try_normalize(
        &self,
        raw: &RawReading,
        batch_index: usize,
    ) -> Result<NormalizedReading, ReadingError> {
        let angle_deg = parse_numeric(&raw.angle).map_err(|err| match err {
            FieldError::Missing => ReadingError::MissingAngle,
            FieldError::Invalid => ReadingError::InvalidAngle,
        })?;

        let distance_m = parse_distance_m(&raw.distance, self.default_unit)?;

        Ok(NormalizedReading {
            angle_deg,
            distance_m,
            level_db: parse_numeric(&raw.level).ok(),
            rt60: parse_numeric(&raw.reverberation).ok(),
            zone: classify(raw.classification_label()),
            layer_index: parse_layer_index(raw.layer_label()),
            batch_index,
            raw: raw.clone(),
        })
    }

    /// Normalize one row; unusable rows give `None`
    pub fn normalize(&self, raw: &RawReading, batch_index: usize) -> Option<NormalizedReading> {
        self.try_normalize(raw, batch_index).ok()
    }

    /// Normalize a batch, keeping batch indices for key derivation
    pub fn normalize_batch(&self, batch: &[RawReading]) -> NormalizedBatch {
        let mut out = NormalizedBatch {
            readings: Vec::with_capacity(batch.len()),
            dropped: Vec::new(),
        };

        for (batch_index, raw) in batch.iter().enumerate() {
            match self.try_normalize(raw, batch_index) {
                Ok(reading) => out.readings.push(reading),
                Err(reason) => {
                    log_debug!("Dropping reading #{}: {}", batch_index, reason);
                    out.dropped.push(DroppedReading { batch_index, reason });
                }
            }
        }

        out
    }
}
