//! Error Types for Reading Coercion and Configuration
//!
//! ## Design Philosophy
//!
//! Nothing on Vibra's event surface is fatal. Noisy sensor rows are dropped,
//! missing labels fall back to defaults and a room that does not match the
//! studio standard is reported as a verdict. Errors therefore only exist at
//! the seams where a caller can act on them:
//!
//! 1. **Diagnostics**: `ReadingError` explains why a raw row was dropped.
//!    The normalizer logs it and moves on; tooling can surface it.
//!
//! 2. **Construction**: `ConfigError` and `CatalogError` reject settings that
//!    would make the simulator or estimator meaningless (inverted ranges,
//!    empty catalogs). They are returned once, at startup.
//!
//! 3. **Copy Semantics**: Variants carry only `Copy` payloads or short owned
//!    identifiers so errors can be cloned freely into reports.
//!
//! ## Error Categories
//!
//! ### Reading Coercion
//! - `MissingAngle` / `MissingDistance`: the column was absent or blank
//! - `InvalidAngle` / `InvalidDistance`: text did not yield a finite number
//! - `NonPositiveDistance`: the sensor reported zero or a negative range
//!
//! ### Configuration
//! - `InvertedRange`: a `[min, max]` pair with `min > max`
//! - `NonFinite`: NaN or infinity in a numeric setting
//! - `SeverityOutOfOrder`: floor, initial and maximum severity not ordered
//! - `SeverityAboveCap`: maximum severity above the 0-100 scale
//! - `RepeatFactorOutOfRange`: diminishing factor outside `(0, 1]`
//!
//! ### Catalog
//! - `Empty`: no treatments to apply
//! - `DuplicateId`: two definitions share an identifier
//!
//! ## Usage
//!
//! ```rust
//! use vibra_core::{Normalizer, RawReading, ReadingError};
//!
//! let raw = RawReading::new("45", "82", "-3", "0.6", "Hot Spot", "Layer 1");
//! match Normalizer::default().try_normalize(&raw, 0) {
//!     Ok(_) => {}
//!     Err(ReadingError::NonPositiveDistance { .. }) => {
//!         // Sensor returned no echo, skip this row
//!     }
//!     Err(_) => {}
//! }
//! ```

use alloc::string::String;
use thiserror_no_std::Error;

/// Result type for configuration construction
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Reasons a raw reading cannot become a normalized reading
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ReadingError {
    /// Angle column absent or blank
    #[error("Angle is missing")]
    MissingAngle,

    /// Angle text held no finite number
    #[error("Angle is not a valid number")]
    InvalidAngle,

    /// Distance column absent or blank
    #[error("Distance is missing")]
    MissingDistance,

    /// Distance text held no finite number
    #[error("Distance is not a valid number")]
    InvalidDistance,

    /// Distance parsed but is zero or negative
    #[error("Distance {meters} m is not positive")]
    NonPositiveDistance {
        /// Parsed distance converted to meters
        meters: f64,
    },
}

/// Invalid configuration values
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Lower bound exceeds upper bound
    #[error("Range [{min}, {max}] is inverted")]
    InvertedRange {
        /// Configured lower bound
        min: f64,
        /// Configured upper bound
        max: f64,
    },

    /// Setting is NaN or infinite
    #[error("Setting '{field}' is not finite")]
    NonFinite {
        /// Name of the offending setting
        field: &'static str,
    },

    /// Severity settings must satisfy floor <= initial <= max
    #[error("Severity settings out of order: floor {floor}, initial {initial}, max {max}")]
    SeverityOutOfOrder {
        /// Lock floor
        floor: u8,
        /// Seed severity for new points
        initial: u8,
        /// Upper clamp
        max: u8,
    },

    /// Severity is a 0-100 scale
    #[error("Maximum severity {max} above {cap}")]
    SeverityAboveCap {
        /// Configured upper clamp
        max: u8,
        /// Highest allowed value
        cap: u8,
    },

    /// Diminishing factor must lie in (0, 1]
    #[error("Repeat factor {factor} outside (0, 1]")]
    RepeatFactorOutOfRange {
        /// Configured factor
        factor: f64,
    },
}

/// Treatment catalog construction failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Catalog has no definitions
    #[error("Treatment catalog is empty")]
    Empty,

    /// Same identifier used twice
    #[error("Duplicate treatment id '{0}'")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_problem() {
        let err = ReadingError::NonPositiveDistance { meters: -0.5 };
        assert_eq!(err.to_string(), "Distance -0.5 m is not positive");

        let err = CatalogError::DuplicateId("rug".into());
        assert_eq!(err.to_string(), "Duplicate treatment id 'rug'");
    }

    #[test]
    fn config_errors_are_copy() {
        let err = ConfigError::InvertedRange { min: 5.0, max: 3.0 };
        let copy = err;
        assert_eq!(err, copy);
    }
}
