//! Core traits shared by the engine
//!
//! Keep them simple - the engine only needs a couple of seams.

use crate::treatment::TreatmentDefinition;
use crate::zone::ZoneKind;

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Read-only source of treatment definitions
///
/// The simulator and the recommendation logic look treatments up through
/// this trait so callers can back it with the built-in catalog or one
/// loaded from configuration.
pub trait TreatmentLookup {
    /// Find a definition by identifier
    fn find(&self, id: &str) -> Option<&TreatmentDefinition>;

    /// Definitions in catalog order
    fn definitions(&self) -> &[TreatmentDefinition];

    /// Highest-impact treatment for a zone; ties go to the earliest entry
    fn best_for(&self, zone: ZoneKind) -> Option<&TreatmentDefinition> {
        let mut best: Option<&TreatmentDefinition> = None;
        for def in self.definitions() {
            match best {
                Some(current) if def.impact(zone) <= current.impact(zone) => {}
                _ => best = Some(def),
            }
        }
        best
    }
}
