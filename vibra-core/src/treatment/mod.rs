//! Acoustic Treatments and Their Simulated Effect
//!
//! ## Overview
//!
//! A treatment is something placed in the room to fix a problem zone: bass
//! traps and absorbers soak up excess energy at hotspots, diffusers scatter
//! energy into deadspots. Each treatment has a fixed number of severity
//! points it removes per zone type.
//!
//! ## Catalog
//!
//! | id          | name      | hotspot | deadspot | neutral |
//! |-------------|-----------|---------|----------|---------|
//! | `bass_trap` | Bass Trap | 35      | 5        | 0       |
//! | `absorber`  | Absorber  | 25      | 0        | 0       |
//! | `diffuser`  | Diffuser  | 10      | 20       | 5       |
//! | `rug`       | Rug       | 15      | 0        | 0       |
//!
//! The catalog is loaded once at startup and never changes. Order matters:
//! when two treatments tie for best, the earlier one is recommended.
//!
//! ## Severity Model
//!
//! See [`simulator`] for the per-point state machine. In short:
//!
//! ```text
//! severity: 70 ──bass_trap──▶ 35 ──bass_trap(×0.7)──▶ 20 (floor, locked)
//!                                                      │
//!                                   any treatment ─────┘ (absorbed)
//! ```

pub mod simulator;
pub mod summary;

pub use simulator::{
    transition, ApplyOutcome, SimulatorConfig, Transition, TreatmentEffectState,
    TreatmentSimulator,
};
pub use summary::{applied_counts, dominant_treatment, format_applied, Intensity};

use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;

use crate::errors::CatalogError;
use crate::traits::TreatmentLookup;
use crate::zone::ZoneKind;

/// Identifier of a treatment ("bass_trap")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TreatmentId(String);

impl TreatmentId {
    /// Wrap an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TreatmentId {
    fn from(id: &str) -> Self {
        Self(id.into())
    }
}

impl Borrow<str> for TreatmentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TreatmentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for TreatmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Severity points removed per zone type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ZoneImpact {
    /// Points removed at a hotspot
    pub hotspot: i32,
    /// Points removed at a deadspot
    pub deadspot: i32,
    /// Points removed at a neutral point
    pub neutral: i32,
}

impl ZoneImpact {
    /// Impact for each zone
    pub const fn new(hotspot: i32, deadspot: i32, neutral: i32) -> Self {
        Self { hotspot, deadspot, neutral }
    }

    /// Impact for one zone
    pub const fn get(&self, zone: ZoneKind) -> i32 {
        match zone {
            ZoneKind::Hotspot => self.hotspot,
            ZoneKind::Deadspot => self.deadspot,
            ZoneKind::Neutral => self.neutral,
        }
    }
}

/// One catalog entry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreatmentDefinition {
    /// Stable identifier
    pub id: TreatmentId,
    /// Name shown to users
    pub name: String,
    /// Optional glyph for treatment cards
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub icon: Option<String>,
    /// Severity reduction per zone
    pub impact: ZoneImpact,
}

impl TreatmentDefinition {
    /// Build a definition without an icon
    pub fn new(id: &str, name: &str, impact: ZoneImpact) -> Self {
        Self {
            id: TreatmentId::from(id),
            name: name.into(),
            icon: None,
            impact,
        }
    }

    /// Attach an icon
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Name shown to users
    pub fn display_name(&self) -> &str {
        &self.name
    }

    /// Severity reduction for a zone
    pub fn impact(&self, zone: ZoneKind) -> i32 {
        self.impact.get(zone)
    }
}

/// Ordered, non-empty set of treatments with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentCatalog {
    definitions: Vec<TreatmentDefinition>,
}

impl TreatmentCatalog {
    /// Validate and wrap a list of definitions
    pub fn new(definitions: Vec<TreatmentDefinition>) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, def) in definitions.iter().enumerate() {
            if definitions[..i].iter().any(|earlier| earlier.id == def.id) {
                return Err(CatalogError::DuplicateId(def.id.as_str().into()));
            }
        }
        Ok(Self { definitions })
    }

    /// Treatments shipped with Vibra
    pub fn builtin() -> Self {
        Self {
            definitions: alloc::vec![
                TreatmentDefinition::new("bass_trap", "Bass Trap", ZoneImpact::new(35, 5, 0))
                    .with_icon("🟥"),
                TreatmentDefinition::new("absorber", "Absorber", ZoneImpact::new(25, 0, 0))
                    .with_icon("🧱"),
                TreatmentDefinition::new("diffuser", "Diffuser", ZoneImpact::new(10, 20, 5))
                    .with_icon("🔀"),
                TreatmentDefinition::new("rug", "Rug", ZoneImpact::new(15, 0, 0))
                    .with_icon("🟫"),
            ],
        }
    }

    /// Number of treatments
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate in catalog order
    pub fn iter(&self) -> core::slice::Iter<'_, TreatmentDefinition> {
        self.definitions.iter()
    }

    /// Display name for an id, falling back to the id itself
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.find(id).map_or(id, TreatmentDefinition::display_name)
    }
}

impl Default for TreatmentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TreatmentLookup for TreatmentCatalog {
    fn find(&self, id: &str) -> Option<&TreatmentDefinition> {
        self.definitions.iter().find(|def| def.id.as_str() == id)
    }

    fn definitions(&self) -> &[TreatmentDefinition] {
        &self.definitions
    }
}

impl<'a> IntoIterator for &'a TreatmentCatalog {
    type Item = &'a TreatmentDefinition;
    type IntoIter = core::slice::Iter<'a, TreatmentDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn builtin_catalog_matches_table() {
        let catalog = TreatmentCatalog::builtin();
        assert_eq!(catalog.len(), 4);

        let bass = catalog.find("bass_trap").unwrap();
        assert_eq!(bass.impact(ZoneKind::Hotspot), 35);
        assert_eq!(bass.impact(ZoneKind::Deadspot), 5);
        assert_eq!(bass.impact(ZoneKind::Neutral), 0);
        assert_eq!(bass.display_name(), "Bass Trap");
    }

    #[test]
    fn best_treatment_per_zone() {
        let catalog = TreatmentCatalog::builtin();
        assert_eq!(catalog.best_for(ZoneKind::Hotspot).unwrap().id.as_str(), "bass_trap");
        assert_eq!(catalog.best_for(ZoneKind::Deadspot).unwrap().id.as_str(), "diffuser");
        assert_eq!(catalog.best_for(ZoneKind::Neutral).unwrap().id.as_str(), "diffuser");
    }

    #[test]
    fn ties_go_to_the_first_entry() {
        let catalog = TreatmentCatalog::new(vec![
            TreatmentDefinition::new("panel", "Panel", ZoneImpact::new(10, 0, 0)),
            TreatmentDefinition::new("foam", "Foam", ZoneImpact::new(10, 0, 0)),
        ])
        .unwrap();
        assert_eq!(catalog.best_for(ZoneKind::Hotspot).unwrap().id.as_str(), "panel");
        // Nothing helps a neutral point, the first entry still wins
        assert_eq!(catalog.best_for(ZoneKind::Neutral).unwrap().id.as_str(), "panel");
    }

    #[test]
    fn rejects_bad_catalogs() {
        assert_eq!(TreatmentCatalog::new(vec![]), Err(CatalogError::Empty));

        let dup = vec![
            TreatmentDefinition::new("rug", "Rug", ZoneImpact::default()),
            TreatmentDefinition::new("rug", "Big Rug", ZoneImpact::default()),
        ];
        assert_eq!(TreatmentCatalog::new(dup), Err(CatalogError::DuplicateId("rug".into())));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let catalog = TreatmentCatalog::builtin();
        assert_eq!(catalog.display_name("rug"), "Rug");
        assert_eq!(catalog.display_name("curtain"), "curtain");
    }
}
