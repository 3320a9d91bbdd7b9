//! Permissive parsing of numeric columns, units and layer labels
//!
//! All the guesswork about messy input lives here so the rest of the engine
//! only ever sees finite floats and whole layer indices.

use alloc::string::String;

use crate::constants::units::{CM_PER_M, MM_PER_M};
use crate::errors::ReadingError;
use crate::traits::Validatable;

use super::RawField;

/// Why a numeric column could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Column absent or blank
    Missing,
    /// Text held no finite number
    Invalid,
}

/// Unit a distance column was recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DistanceUnit {
    /// "mm" suffix
    Millimeters,
    /// "cm" suffix, and the default for bare numbers
    #[default]
    Centimeters,
    /// "m" suffix
    Meters,
}

impl DistanceUnit {
    /// Infer the unit from a suffix.
    ///
    /// Recognized suffixes, case-insensitive and ignoring trailing
    /// whitespace: `mm`, `cm`, `m`. A bare `m` only counts when it is not
    /// the end of a longer word, so "2km" or "3dm" fall back. Anything else
    /// is `fallback`.
    pub fn infer(text: &str, fallback: DistanceUnit) -> DistanceUnit {
        let mut tail = text
            .trim_end()
            .chars()
            .rev()
            .flat_map(char::to_lowercase);

        match (tail.next(), tail.next()) {
            (Some('m'), Some('m')) => DistanceUnit::Millimeters,
            (Some('m'), Some('c')) => DistanceUnit::Centimeters,
            (Some('m'), Some(prev)) if !prev.is_alphabetic() => DistanceUnit::Meters,
            (Some('m'), None) => DistanceUnit::Meters,
            _ => fallback,
        }
    }

    /// Convert a value in this unit to meters
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            DistanceUnit::Millimeters => value / MM_PER_M,
            DistanceUnit::Centimeters => value / CM_PER_M,
            DistanceUnit::Meters => value,
        }
    }

    /// Canonical suffix
    pub const fn suffix(self) -> &'static str {
        match self {
            DistanceUnit::Millimeters => "mm",
            DistanceUnit::Centimeters => "cm",
            DistanceUnit::Meters => "m",
        }
    }
}

/// Parse the longest numeric prefix of `text`.
///
/// Characters other than digits, signs and decimal points are removed
/// first, so "150 cm" and " 45° " both parse. After stripping, the prefix
/// rule makes "12.5.3" read as 12.5.
pub fn leading_float(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
        .collect();

    let bytes = cleaned.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let dot = end;
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
        // "5." parses but a lone "." does not
        if digits == 0 {
            end = dot;
        }
    }

    if digits == 0 {
        return None;
    }

    cleaned[..end].parse::<f64>().ok().filter(<f64 as Validatable>::is_valid)
}

/// Read a numeric column
pub fn parse_numeric(field: &RawField) -> Result<f64, FieldError> {
    match field {
        RawField::Missing => Err(FieldError::Missing),
        RawField::Number(value) if value.is_valid() => Ok(*value),
        RawField::Number(_) => Err(FieldError::Invalid),
        RawField::Text(text) if text.trim().is_empty() => Err(FieldError::Missing),
        RawField::Text(text) => leading_float(text).ok_or(FieldError::Invalid),
    }
}

/// Read a distance column and convert it to meters.
///
/// Bare numbers are taken to be in `fallback` units.
pub fn parse_distance_m(
    field: &RawField,
    fallback: DistanceUnit,
) -> Result<f64, ReadingError> {
    let value = parse_numeric(field).map_err(|err| match err {
        FieldError::Missing => ReadingError::MissingDistance,
        FieldError::Invalid => ReadingError::InvalidDistance,
    })?;

    let unit = match field {
        RawField::Text(text) => DistanceUnit::infer(text, fallback),
        _ => fallback,
    };

    let meters = unit.to_meters(value);
    if meters > 0.0 {
        Ok(meters)
    } else {
        Err(ReadingError::NonPositiveDistance { meters })
    }
}

/// Zero-based layer index from a label such as "Layer 3".
///
/// Takes the last run of digits and subtracts one. Missing labels, labels
/// without digits and "Layer 0" all give index 0.
pub fn parse_layer_index(label: Option<&str>) -> u32 {
    let Some(label) = label else {
        return 0;
    };

    let bytes = label.as_bytes();
    let Some(last_digit) = bytes.iter().rposition(u8::is_ascii_digit) else {
        return 0;
    };
    let first_digit = bytes[..last_digit]
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |pos| pos + 1);

    label[first_digit..=last_digit]
        .parse::<u32>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .unwrap_or(0)
}
