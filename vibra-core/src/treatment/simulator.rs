//! Treatment Effect Simulator
//!
//! ## State Machine
//!
//! Each point key owns at most one [`TreatmentEffectState`]. Applying a
//! treatment runs [`transition`], a pure function of the current state, the
//! treatment, the point's zone and the configuration:
//!
//! ```text
//!   absent ──seed──▶ { severity: 70, applied: [], locked: false }
//!                         │
//!            locked or severity <= floor? ──yes──▶ clamp to floor, lock (absorbing)
//!                         │ no
//!            n      = times this treatment was already applied here
//!            impact = round(base_impact[zone] · 0.7ⁿ)
//!                         │
//!            impact <= 0 ───────────────────────▶ no effect (nothing recorded)
//!                         │
//!            next = clamp(severity − impact, floor, 100)
//!            next == severity ──────────────────▶ no effect
//!                         │
//!            commit next, record treatment, locked = next <= floor
//! ```
//!
//! ## Diminishing Returns
//!
//! Repeating a treatment on the same point is 70% as effective as the
//! previous use. Rounding is half away from zero, so a 35-point bass trap
//! removes 35, then 25 (24.5 rounded), then 17.
//!
//! ## Ownership
//!
//! [`TreatmentSimulator`] owns the per-key map and is the only writer.
//! Every commit replaces the whole state for a key; readers never observe a
//! half-applied update. Clearing the map is the only other mutation.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::constants::treatment::{INITIAL_SEVERITY, MAX_SEVERITY, REPEAT_FACTOR, SEVERITY_FLOOR};
use crate::errors::{ConfigError, ConfigResult};
use crate::traits::{TreatmentLookup, Validatable};
use crate::zone::ZoneKind;

use super::{TreatmentDefinition, TreatmentId};

/// Severity model settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulatorConfig {
    /// Severity seeded on a point's first treatment
    pub initial_severity: u8,
    /// Lowest reachable severity; reaching it locks the point
    pub floor: u8,
    /// Upper clamp
    pub max_severity: u8,
    /// Effectiveness of each repeat relative to the previous use
    pub repeat_factor: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            initial_severity: INITIAL_SEVERITY,
            floor: SEVERITY_FLOOR,
            max_severity: MAX_SEVERITY,
            repeat_factor: REPEAT_FACTOR,
        }
    }
}

impl SimulatorConfig {
    /// Custom model; requires `floor <= initial <= max <= 100` and a factor
    /// in `(0, 1]`
    pub fn new(
        initial_severity: u8,
        floor: u8,
        max_severity: u8,
        repeat_factor: f64,
    ) -> ConfigResult<Self> {
        let config = Self { initial_severity, floor, max_severity, repeat_factor };
        config.validate()?;
        Ok(config)
    }

    /// Check the settings are consistent
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_severity > MAX_SEVERITY {
            return Err(ConfigError::SeverityAboveCap {
                max: self.max_severity,
                cap: MAX_SEVERITY,
            });
        }
        if !(self.floor <= self.initial_severity && self.initial_severity <= self.max_severity) {
            return Err(ConfigError::SeverityOutOfOrder {
                floor: self.floor,
                initial: self.initial_severity,
                max: self.max_severity,
            });
        }
        if !self.repeat_factor.is_valid() || self.repeat_factor <= 0.0 || self.repeat_factor > 1.0 {
            return Err(ConfigError::RepeatFactorOutOfRange { factor: self.repeat_factor });
        }
        Ok(())
    }
}

/// Accumulated treatment effect at one point
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreatmentEffectState {
    /// Remaining severity, within `[floor, max]`
    pub severity: u8,
    /// Treatments that changed severity, in order
    pub applied: Vec<TreatmentId>,
    /// Floor reached; further treatments are absorbed
    pub locked: bool,
}

impl TreatmentEffectState {
    /// Fresh state for a point's first treatment
    pub fn seeded(config: &SimulatorConfig) -> Self {
        Self {
            severity: config.initial_severity,
            applied: Vec::new(),
            locked: false,
        }
    }

    /// How many times `id` has been recorded here
    pub fn times_applied(&self, id: &str) -> usize {
        self.applied.iter().filter(|applied| applied.as_str() == id).count()
    }

    /// True once any treatment has been recorded
    pub fn has_applied(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// What an application did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Severity dropped and the treatment was recorded
    Applied {
        /// Severity before
        previous: u8,
        /// Severity after
        severity: u8,
        /// Points requested after diminishing returns
        impact: u32,
        /// Floor reached by this application
        locked: bool,
    },
    /// Point is at the floor; nothing changes
    Locked {
        /// Floor severity
        severity: u8,
    },
    /// Treatment has no effect on this zone (or no longer any)
    NoEffect,
    /// Id not in the catalog
    UnknownTreatment,
    /// Key not in the deployed batch
    UnknownPoint,
}

impl ApplyOutcome {
    /// True when severity changed
    pub fn changed(&self) -> bool {
        matches!(self, ApplyOutcome::Applied { .. })
    }
}

/// Result of [`transition`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Replacement state to store, if any
    pub next: Option<TreatmentEffectState>,
    /// What happened
    pub outcome: ApplyOutcome,
}

impl Transition {
    fn unchanged(outcome: ApplyOutcome) -> Self {
        Self { next: None, outcome }
    }
}

/// Diminishing-returns impact of the `times_applied + 1`-th use
pub fn diminished_impact(base_impact: i32, times_applied: usize, repeat_factor: f64) -> i64 {
    let factor = libm::pow(repeat_factor, times_applied as f64);
    libm::round(base_impact as f64 * factor) as i64
}

/// Pure state transition for one treatment application
pub fn transition(
    current: Option<&TreatmentEffectState>,
    treatment: &TreatmentDefinition,
    zone: ZoneKind,
    config: &SimulatorConfig,
) -> Transition {
    let state = match current {
        Some(state) => state.clone(),
        None => TreatmentEffectState::seeded(config),
    };

    if state.locked || state.severity <= config.floor {
        let absorbed = TreatmentEffectState {
            severity: config.floor,
            applied: state.applied,
            locked: true,
        };
        let next = match current {
            Some(existing) if *existing == absorbed => None,
            _ => Some(absorbed),
        };
        return Transition {
            next,
            outcome: ApplyOutcome::Locked { severity: config.floor },
        };
    }

    let times = state.times_applied(treatment.id.as_str());
    let impact = diminished_impact(treatment.impact(zone), times, config.repeat_factor);
    if impact <= 0 {
        return Transition::unchanged(ApplyOutcome::NoEffect);
    }

    let previous = state.severity;
    let next_severity = (i64::from(previous) - impact)
        .clamp(i64::from(config.floor), i64::from(config.max_severity)) as u8;
    if next_severity == previous {
        return Transition::unchanged(ApplyOutcome::NoEffect);
    }

    let locked = next_severity <= config.floor;
    let mut applied = state.applied;
    applied.push(treatment.id.clone());

    Transition {
        next: Some(TreatmentEffectState {
            severity: next_severity,
            applied,
            locked,
        }),
        outcome: ApplyOutcome::Applied {
            previous,
            severity: next_severity,
            impact: u32::try_from(impact).unwrap_or(u32::MAX),
            locked,
        },
    }
}

/// Owner of every point's treatment state
#[derive(Debug, Clone, Default)]
pub struct TreatmentSimulator {
    config: SimulatorConfig,
    effects: BTreeMap<String, TreatmentEffectState>,
}

impl TreatmentSimulator {
    /// Empty simulator with a custom model
    pub fn new(config: SimulatorConfig) -> Self {
        Self {
            config,
            effects: BTreeMap::new(),
        }
    }

    /// Active model
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Apply a catalog treatment by id
    pub fn apply<C>(&mut self, key: &str, treatment_id: &str, zone: ZoneKind, catalog: &C) -> ApplyOutcome
    where
        C: TreatmentLookup + ?Sized,
    {
        match catalog.find(treatment_id) {
            Some(treatment) => self.apply_definition(key, treatment, zone),
            None => {
                log_warn!("Unknown treatment '{}' for point {}", treatment_id, key);
                ApplyOutcome::UnknownTreatment
            }
        }
    }

    /// Apply a treatment definition directly
    pub fn apply_definition(
        &mut self,
        key: &str,
        treatment: &TreatmentDefinition,
        zone: ZoneKind,
    ) -> ApplyOutcome {
        let Transition { next, outcome } =
            transition(self.effects.get(key), treatment, zone, &self.config);

        if let Some(state) = next {
            if state.locked {
                log_debug!("Point {} locked at severity {}", key, state.severity);
            }
            self.effects.insert(String::from(key), state);
        }

        log_trace!("{} on {} ({}): {:?}", treatment.id, key, zone, outcome);
        outcome
    }

    /// State for a key
    pub fn effect(&self, key: &str) -> Option<&TreatmentEffectState> {
        self.effects.get(key)
    }

    /// All states, ordered by key
    pub fn effects(&self) -> impl Iterator<Item = (&str, &TreatmentEffectState)> {
        self.effects.iter().map(|(key, state)| (key.as_str(), state))
    }

    /// Number of treated points
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True when no point has been treated
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Forget every state
    pub fn clear(&mut self) {
        self.effects.clear();
    }
}
