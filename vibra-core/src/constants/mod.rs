//! Constants for Vibra Core
//!
//! Centralized, documented defaults used throughout the engine. Runtime
//! configuration structs (`MappingConfig`, `RoomStandard`, `SimulatorConfig`,
//! `Palette`) take their `Default` values from here, so every number below
//! can be overridden at startup without touching code.
//!
//! ## Organization
//!
//! - **Units**: Distance conversion factors
//! - **Mapping**: Scene placement of layered readings
//! - **Room**: Studio standard enclosure size
//! - **Treatment**: Severity model parameters
//! - **Colors**: Zone base colors
//!
//! ## Usage Guidelines
//!
//! 1. Use these constants instead of magic numbers
//! 2. Include the unit in the name (`_M`, `_CM`, `_MM`)
//! 3. Keep the source of a value next to it

/// Distance unit conversion factors.
pub mod units;

/// Spatial mapping defaults for layered sensor sweeps.
pub mod mapping;

/// Studio standard room dimensions.
pub mod room;

/// Treatment severity model parameters.
pub mod treatment;

/// Zone base colors for visualization.
pub mod colors;

// Re-export commonly used constants for convenience
pub use units::{MM_PER_M, CM_PER_M};

pub use mapping::{LAYER_HEIGHT_STEP_M, LAYER_BASE_HEIGHT_M, KEY_SEPARATOR};

pub use room::{STUDIO_MIN_SIZE_M, STUDIO_MAX_SIZE_M};

pub use treatment::{
    INITIAL_SEVERITY, SEVERITY_FLOOR, MAX_SEVERITY, REPEAT_FACTOR,
};

pub use colors::{HOTSPOT_COLOR, DEADSPOT_COLOR, NEUTRAL_COLOR};
