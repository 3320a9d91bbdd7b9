//! Studio-wide configuration
//!
//! Every field falls back to its default when omitted, so a partial JSON
//! document such as `{"room": {"min_m": 2.5, "max_m": 6.0}}` is a complete
//! configuration.

use crate::color::Palette;
use crate::errors::ConfigResult;
use crate::reading::{DistanceUnit, Normalizer};
use crate::room::{RoomEstimator, RoomStandard};
use crate::spatial::{MappingConfig, SpatialMapper};
use crate::treatment::{SimulatorConfig, TreatmentSimulator};

/// Settings for a [`StudioSession`](crate::session::StudioSession)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StudioConfig {
    /// Layer placement
    pub mapping: MappingConfig,
    /// Accepted room size
    pub room: RoomStandard,
    /// Severity model
    pub simulator: SimulatorConfig,
    /// Zone colors
    pub palette: Palette,
    /// Unit for distances without a suffix
    pub default_unit: DistanceUnit,
}

impl StudioConfig {
    /// Check every section
    pub fn validate(&self) -> ConfigResult<()> {
        self.mapping.validate()?;
        self.room.validate()?;
        self.simulator.validate()?;
        Ok(())
    }

    /// Replace the room standard
    pub fn with_room(mut self, room: RoomStandard) -> Self {
        self.room = room;
        self
    }

    /// Replace the severity model
    pub fn with_simulator(mut self, simulator: SimulatorConfig) -> Self {
        self.simulator = simulator;
        self
    }

    /// Replace the default distance unit
    pub fn with_default_unit(mut self, unit: DistanceUnit) -> Self {
        self.default_unit = unit;
        self
    }

    pub(crate) fn normalizer(&self) -> Normalizer {
        Normalizer::with_default_unit(self.default_unit)
    }

    pub(crate) fn mapper(&self) -> SpatialMapper {
        SpatialMapper::new(self.mapping)
    }

    pub(crate) fn estimator(&self) -> RoomEstimator {
        RoomEstimator::new(self.room, self.default_unit)
    }

    pub(crate) fn simulator(&self) -> TreatmentSimulator {
        TreatmentSimulator::new(self.simulator)
    }
}
