//! Spatial Mapping Defaults
//!
//! The sensor rig sweeps a horizontal circle per layer and is raised by a
//! fixed step between layers. These values place each layer in the scene.

/// Vertical distance between consecutive layers (meters).
///
/// Matches the mast step used when sweeping a room in four passes.
pub const LAYER_HEIGHT_STEP_M: f64 = 0.5;

/// Height of the first layer above the floor (meters).
///
/// The lowest sweep is taken with the sensor resting on a short stand.
pub const LAYER_BASE_HEIGHT_M: f64 = 0.3;

/// Separator between the components of a point key.
pub const KEY_SEPARATOR: &str = "__";

/// Prefix used to rebuild a layer label from its index when the
/// original label is blank ("Layer 1" for index 0).
pub const LAYER_LABEL_PREFIX: &str = "Layer ";
