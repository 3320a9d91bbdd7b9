//! Core engine for Vibra acoustic room mapping
//!
//! Turns raw sensor sweeps into zone-tagged points in room space and
//! simulates how acoustic treatments improve them.
//!
//! Key constraints:
//! - `no_std` + `alloc`, so the same engine runs on the rig and in tools
//! - Unusable readings are filtered, never fatal
//! - Every state change goes through [`StudioSession`]
//!
//! ```
//! use vibra_core::{RawReading, StudioSession, ZoneKind};
//!
//! let mut session = StudioSession::default();
//! session.deploy(&[
//!     RawReading::new("0", "84", "180cm", "0.7", "Hot Spot", "Layer 1"),
//!     RawReading::new("120", "58", "1.2m", "0.3", "Dead Spot", "Layer 2"),
//! ]);
//!
//! assert_eq!(session.points().len(), 2);
//! assert_eq!(session.points()[0].zone, ZoneKind::Hotspot);
//! assert!(session.room_status().is_standard);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod color;
pub mod config;
pub mod constants;
pub mod errors;
pub mod reading;
pub mod room;
pub mod session;
pub mod spatial;
pub mod traits;
pub mod treatment;
pub mod zone;

// Public API
pub use color::{resolve_colors, ColorPair, Palette, Rgb, ViewMode};
pub use config::StudioConfig;
pub use errors::{CatalogError, ConfigError, ConfigResult, ReadingError};
pub use reading::{DistanceUnit, NormalizedReading, Normalizer, RawField, RawReading};
pub use room::{RoomEstimator, RoomSizeStatus, RoomStandard};
pub use session::{DeployReport, Recommendation, StudioSession};
pub use spatial::{Extents, MappedBatch, MappingConfig, SpatialMapper, SpatialPoint, Vec3};
pub use traits::{TreatmentLookup, Validatable};
pub use treatment::{
    ApplyOutcome, Intensity, SimulatorConfig, TreatmentCatalog, TreatmentDefinition,
    TreatmentEffectState, TreatmentId, TreatmentSimulator, ZoneImpact,
};
pub use zone::{classify, ZoneKind};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
