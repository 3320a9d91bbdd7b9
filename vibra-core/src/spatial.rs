//! Spatial Mapping of Readings into Scene Coordinates
//!
//! ## Geometry
//!
//! The rig sits at the room's center and sweeps a horizontal circle per
//! layer. A reading at angle θ and range r lands on that circle:
//!
//! ```text
//!            z
//!            ↑   • (r·cos θ, r·sin θ)
//!            |  /
//!            | / r
//!            |/ θ
//!   ---------+--------→ x
//!            |
//!
//! y = layer_index · layer_height_step + base_height
//! ```
//!
//! Units are meters throughout.
//!
//! ## Point Identity
//!
//! Each point gets a key built from the original row text and its position
//! in the batch:
//!
//! ```text
//! "Layer 2__45__150cm__7"
//!  layer    angle distance batch index
//! ```
//!
//! The batch index makes keys unique even when two rows are identical. Keys
//! are only stable for one deployed batch; redeploying recomputes them, so
//! any state keyed by them must be cleared at the same time.
//!
//! ## Extents
//!
//! While mapping, the running min/max of `x` and `z` is tracked so the
//! renderer can size an enclosing boundary without a second pass.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::mapping::{
    KEY_SEPARATOR, LAYER_BASE_HEIGHT_M, LAYER_HEIGHT_STEP_M, LAYER_LABEL_PREFIX,
};
use crate::errors::{ConfigError, ConfigResult};
use crate::reading::{NormalizedReading, RawReading};
use crate::traits::Validatable;
use crate::zone::ZoneKind;

/// Scene position in meters
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    /// East-west
    pub x: f64,
    /// Height above floor
    pub y: f64,
    /// North-south
    pub z: f64,
}

/// Horizontal bounding box of a mapped batch
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extents {
    /// Smallest x seen
    pub min_x: f64,
    /// Largest x seen
    pub max_x: f64,
    /// Smallest z seen
    pub min_z: f64,
    /// Largest z seen
    pub max_z: f64,
}

impl Extents {
    /// Box containing a single point
    pub fn at(x: f64, z: f64) -> Self {
        Self { min_x: x, max_x: x, min_z: z, max_z: z }
    }

    /// Grow to contain `(x, z)`
    pub fn include(&mut self, x: f64, z: f64) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_z = self.min_z.min(z);
        self.max_z = self.max_z.max(z);
    }

    /// Size along x
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Size along z
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Center of the box on the floor plane
    pub fn center(&self) -> (f64, f64) {
        ((self.min_x + self.max_x) / 2.0, (self.min_z + self.max_z) / 2.0)
    }
}

/// A reading placed in the scene
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpatialPoint {
    /// Identity within the deployed batch
    pub key: String,
    /// Scene position
    pub position: Vec3,
    /// Zone category
    pub zone: ZoneKind,
    /// Reading the point was built from
    pub source: NormalizedReading,
}

/// Layer placement settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MappingConfig {
    /// Vertical distance between layers (meters)
    pub layer_height_step_m: f64,
    /// Height of layer 0 (meters)
    pub base_height_m: f64,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            layer_height_step_m: LAYER_HEIGHT_STEP_M,
            base_height_m: LAYER_BASE_HEIGHT_M,
        }
    }
}

impl MappingConfig {
    /// Create settings with custom layer placement
    pub fn new(layer_height_step_m: f64, base_height_m: f64) -> ConfigResult<Self> {
        let config = Self { layer_height_step_m, base_height_m };
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is finite
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.layer_height_step_m.is_valid() {
            return Err(ConfigError::NonFinite { field: "layer_height_step_m" });
        }
        if !self.base_height_m.is_valid() {
            return Err(ConfigError::NonFinite { field: "base_height_m" });
        }
        Ok(())
    }

    /// Height of a layer
    pub fn layer_height(&self, layer_index: u32) -> f64 {
        layer_index as f64 * self.layer_height_step_m + self.base_height_m
    }
}

/// Points of one deployed batch plus their horizontal extents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappedBatch {
    points: Vec<SpatialPoint>,
    extents: Option<Extents>,
}

impl MappedBatch {
    /// Points in batch order
    pub fn points(&self) -> &[SpatialPoint] {
        &self.points
    }

    /// Bounding box; `None` for an empty batch
    pub fn extents(&self) -> Option<Extents> {
        self.extents
    }

    /// Look a point up by key
    pub fn get(&self, key: &str) -> Option<&SpatialPoint> {
        self.points.iter().find(|p| p.key == key)
    }

    /// All keys in batch order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.key.as_str())
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when nothing was mapped
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the identity key for a row.
///
/// Blank layer labels are replaced by `Layer {index + 1}` so keys stay
/// readable.
pub fn point_key(raw: &RawReading, layer_index: u32, batch_index: usize) -> String {
    let layer = match raw.layer_label().map(str::trim) {
        Some(label) if !label.is_empty() => String::from(label),
        _ => format!("{}{}", LAYER_LABEL_PREFIX, layer_index as u64 + 1),
    };

    format!(
        "{layer}{sep}{angle}{sep}{distance}{sep}{index}",
        layer = layer,
        angle = raw.angle,
        distance = raw.distance,
        index = batch_index,
        sep = KEY_SEPARATOR,
    )
}

/// Projects normalized readings into the scene
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpatialMapper {
    config: MappingConfig,
}

impl SpatialMapper {
    /// Mapper with custom layer placement
    pub fn new(config: MappingConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Scene position of one reading
    pub fn position(&self, reading: &NormalizedReading) -> Vec3 {
        let angle_rad = reading.angle_rad();
        Vec3 {
            x: libm::cos(angle_rad) * reading.distance_m,
            y: self.config.layer_height(reading.layer_index),
            z: libm::sin(angle_rad) * reading.distance_m,
        }
    }

    /// Map one reading to a point
    pub fn map_reading(&self, reading: &NormalizedReading) -> SpatialPoint {
        SpatialPoint {
            key: point_key(&reading.raw, reading.layer_index, reading.batch_index),
            position: self.position(reading),
            zone: reading.zone,
            source: reading.clone(),
        }
    }

    /// Map a batch, tracking extents as points are placed
    pub fn map(&self, readings: &[NormalizedReading]) -> MappedBatch {
        let mut points = Vec::with_capacity(readings.len());
        let mut extents: Option<Extents> = None;

        for reading in readings {
            let point = self.map_reading(reading);
            let Vec3 { x, z, .. } = point.position;
            match extents.as_mut() {
                Some(bounds) => bounds.include(x, z),
                None => extents = Some(Extents::at(x, z)),
            }
            points.push(point);
        }

        MappedBatch { points, extents }
    }
}
