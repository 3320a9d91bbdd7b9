//! Sensor Readings: Raw Records and Their Normalized Form
//!
//! ## Overview
//!
//! A sweep of the room produces one row per (layer, angle) sample:
//!
//! ```text
//! Angle | dB | Ultrasonic | RT60 | Classification | Layer
//! ------+----+------------+------+----------------+--------
//!   45  | 82 |   150cm    | 0.61 | Hot Spot       | Layer 1
//! ```
//!
//! Rows arrive from spreadsheets, CSV files and hand-typed tables, so every
//! numeric column may be a number, a string with units, or blank.
//! `RawReading` keeps the row exactly as received; `NormalizedReading` is
//! the typed result of the [`Normalizer`].
//!
//! ## Coercion Rules
//!
//! | Column         | Rule                                                 | On failure        |
//! |----------------|------------------------------------------------------|-------------------|
//! | angle          | permissive float parse                               | row dropped       |
//! | distance       | permissive float parse, unit suffix, must be `> 0`   | row dropped       |
//! | level, RT60    | permissive float parse                               | `None`            |
//! | classification | substring keyword match                              | `Neutral`         |
//! | layer          | trailing numeral minus one                           | index 0           |
//!
//! The original row travels with the normalized reading so point keys and
//! exports can be rebuilt from the text the user actually saw.

mod normalize;
mod parse;

pub use normalize::{DroppedReading, NormalizedBatch, Normalizer};
pub use parse::{
    leading_float, parse_distance_m, parse_layer_index, parse_numeric, DistanceUnit, FieldError,
};

use alloc::string::{String, ToString};
use core::fmt;

use crate::constants::units::CM_PER_M;
use crate::zone::ZoneKind;

/// One column of a raw row
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RawField {
    /// Column absent
    #[default]
    Missing,
    /// Already numeric (spreadsheet cell, JSON number)
    Number(f64),
    /// Free text, possibly with units or stray characters
    Text(String),
}

impl RawField {
    /// True when the column carries nothing usable as text
    pub fn is_blank(&self) -> bool {
        match self {
            RawField::Missing => true,
            RawField::Number(_) => false,
            RawField::Text(text) => text.trim().is_empty(),
        }
    }

    /// Text form as shown to the user; empty for `Missing`
    pub fn to_text(&self) -> String {
        match self {
            RawField::Missing => String::new(),
            RawField::Number(value) => value.to_string(),
            RawField::Text(text) => text.clone(),
        }
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawField::Missing => Ok(()),
            RawField::Number(value) => write!(f, "{}", value),
            RawField::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for RawField {
    fn from(value: f64) -> Self {
        RawField::Number(value)
    }
}

impl From<&str> for RawField {
    fn from(value: &str) -> Self {
        RawField::Text(value.into())
    }
}

impl From<String> for RawField {
    fn from(value: String) -> Self {
        RawField::Text(value)
    }
}

impl<T: Into<RawField>> From<Option<T>> for RawField {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawField::Missing, Into::into)
    }
}

/// A sensor row exactly as received
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RawReading {
    /// Sweep angle in degrees
    pub angle: RawField,
    /// Sound pressure level in dB
    pub level: RawField,
    /// Sensor-to-surface distance, centimeters unless suffixed
    pub distance: RawField,
    /// RT60 reverberation time in seconds
    pub reverberation: RawField,
    /// Hand-entered zone label ("Hot Spot", "Dead Spot", ...)
    pub classification: Option<String>,
    /// Layer label ("Layer 2")
    pub layer: Option<String>,
}

impl RawReading {
    /// Build a row from its six columns
    pub fn new(
        angle: impl Into<RawField>,
        level: impl Into<RawField>,
        distance: impl Into<RawField>,
        reverberation: impl Into<RawField>,
        classification: impl Into<String>,
        layer: impl Into<String>,
    ) -> Self {
        Self {
            angle: angle.into(),
            level: level.into(),
            distance: distance.into(),
            reverberation: reverberation.into(),
            classification: Some(classification.into()),
            layer: Some(layer.into()),
        }
    }

    /// Classification label, if present
    pub fn classification_label(&self) -> Option<&str> {
        self.classification.as_deref()
    }

    /// Layer label, if present
    pub fn layer_label(&self) -> Option<&str> {
        self.layer.as_deref()
    }

    /// A blank row has neither an angle nor a level.
    ///
    /// Editable tables pad with empty rows; exports skip them.
    pub fn is_blank(&self) -> bool {
        self.angle.is_blank() && self.level.is_blank()
    }
}

/// Typed reading ready for spatial mapping
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizedReading {
    /// Sweep angle in degrees
    pub angle_deg: f64,
    /// Sensor-to-surface distance in meters, always `> 0`
    pub distance_m: f64,
    /// Sound pressure level in dB
    pub level_db: Option<f64>,
    /// RT60 in seconds
    pub rt60: Option<f64>,
    /// Zone derived from the classification label
    pub zone: ZoneKind,
    /// Zero-based layer index
    pub layer_index: u32,
    /// Position of the row in the deployed batch
    pub batch_index: usize,
    /// The row this reading came from
    pub raw: RawReading,
}

impl NormalizedReading {
    /// Distance in centimeters
    pub fn distance_cm(&self) -> f64 {
        self.distance_m * CM_PER_M
    }

    /// Angle in radians
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }
}
