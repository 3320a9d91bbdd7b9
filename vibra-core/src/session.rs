//! Studio Session
//!
//! One session per open room. It owns the deployed point set, the room
//! verdict, the treatment simulator, the current selection and the view
//! mode, and it is the only way to change any of them:
//!
//! | Event                | Effect                                                    |
//! |----------------------|-----------------------------------------------------------|
//! | `deploy(batch)`      | replace points and verdict, clear effects and selection   |
//! | `reset()`            | clear everything                                          |
//! | `apply_treatment`    | run the simulator for one point                           |
//! | `select_point`       | focus a point for recommendations                         |
//! | `set_view_mode`      | choose before/after colors                                |
//!
//! A deploy builds the new batch completely before swapping it in, so
//! point keys and effect states always belong to the same batch.
//!
//! ```
//! use vibra_core::{RawReading, StudioSession, ViewMode};
//!
//! let mut session = StudioSession::default();
//! let report = session.deploy(&[RawReading::new("0", "82", "150", "0.6", "Hot Spot", "Layer 1")]);
//! assert_eq!(report.points, 1);
//!
//! let key = session.points()[0].key.clone();
//! session.apply_treatment(&key, "bass_trap");
//! assert_eq!(session.effect(&key).map(|e| e.severity), Some(35));
//!
//! session.set_view_mode(ViewMode::Before);
//! assert_eq!(session.display_color(&key).map(|c| c.to_hex()), Some("#b22222".into()));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::color::{ColorPair, Rgb, ViewMode};
use crate::config::StudioConfig;
use crate::errors::ConfigResult;
use crate::reading::{Normalizer, RawReading};
use crate::room::{RoomEstimator, RoomSizeStatus};
use crate::spatial::{Extents, MappedBatch, SpatialMapper, SpatialPoint};
use crate::traits::TreatmentLookup;
use crate::treatment::{
    dominant_treatment, format_applied, ApplyOutcome, Intensity, TreatmentCatalog,
    TreatmentDefinition, TreatmentEffectState, TreatmentSimulator,
};
use crate::zone::ZoneKind;

/// Summary of a deploy
#[derive(Debug, Clone, PartialEq)]
pub struct DeployReport {
    /// Rows received
    pub rows: usize,
    /// Points placed
    pub points: usize,
    /// Rows filtered out by the normalizer
    pub dropped: usize,
    /// Room verdict for the batch
    pub room: RoomSizeStatus,
}

/// Recommendation panel contents for one point
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    /// Point the recommendation is for
    pub key: &'a str,
    /// Zone of the point
    pub zone: ZoneKind,
    /// Highest-impact treatment for the zone
    pub best: Option<&'a TreatmentDefinition>,
    /// Current severity, or the seed severity if untreated
    pub severity: u8,
    /// Band for `severity`
    pub intensity: Intensity,
    /// Floor reached
    pub locked: bool,
    /// "Bass Trap ×2" entries
    pub applied: Vec<String>,
    /// Most-applied treatment's name, or the best treatment's when untreated
    pub dominant: Option<&'a str>,
}

/// Event surface over a deployed batch
#[derive(Debug, Clone)]
pub struct StudioSession {
    config: StudioConfig,
    catalog: TreatmentCatalog,
    normalizer: Normalizer,
    mapper: SpatialMapper,
    estimator: RoomEstimator,
    rows: Vec<RawReading>,
    batch: MappedBatch,
    room: RoomSizeStatus,
    simulator: TreatmentSimulator,
    selected: Option<String>,
    view_mode: ViewMode,
}

impl Default for StudioSession {
    fn default() -> Self {
        Self::from_parts(StudioConfig::default(), TreatmentCatalog::builtin())
    }
}

impl StudioSession {
    /// Session with a validated configuration and catalog
    pub fn new(config: StudioConfig, catalog: TreatmentCatalog) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, catalog))
    }

    fn from_parts(config: StudioConfig, catalog: TreatmentCatalog) -> Self {
        Self {
            normalizer: config.normalizer(),
            mapper: config.mapper(),
            estimator: config.estimator(),
            simulator: config.simulator(),
            config,
            catalog,
            rows: Vec::new(),
            batch: MappedBatch::default(),
            room: RoomSizeStatus::pending(),
            selected: None,
            view_mode: ViewMode::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Treatment catalog
    pub fn catalog(&self) -> &TreatmentCatalog {
        &self.catalog
    }

    /// Replace the point set with a new batch.
    ///
    /// Effects from the previous batch are discarded because its keys no
    /// longer exist.
    pub fn deploy(&mut self, batch: &[RawReading]) -> DeployReport {
        let normalized = self.normalizer.normalize_batch(batch);
        let mapped = self.mapper.map(&normalized.readings);
        let room = self.estimator.estimate_raw(batch);

        let report = DeployReport {
            rows: batch.len(),
            points: mapped.len(),
            dropped: normalized.dropped_count(),
            room: room.clone(),
        };

        self.rows = batch.to_vec();
        self.batch = mapped;
        self.room = room;
        self.simulator.clear();
        self.selected = None;
        self.view_mode = ViewMode::After;

        log_debug!(
            "Deployed {} points from {} rows ({} dropped)",
            report.points,
            report.rows,
            report.dropped
        );
        if !self.room.is_standard {
            log_warn!("{}", self.room.reason);
        }

        report
    }

    /// Clear points, verdict, effects and selection
    pub fn reset(&mut self) {
        self.rows.clear();
        self.batch = MappedBatch::default();
        self.room = RoomSizeStatus::pending();
        self.simulator.clear();
        self.selected = None;
        self.view_mode = ViewMode::After;
        log_debug!("Session reset");
    }

    /// Apply a catalog treatment to a deployed point
    pub fn apply_treatment(&mut self, key: &str, treatment_id: &str) -> ApplyOutcome {
        let Some(point) = self.batch.get(key) else {
            log_warn!("Treatment '{}' for unknown point {}", treatment_id, key);
            return ApplyOutcome::UnknownPoint;
        };
        self.simulator.apply(key, treatment_id, point.zone, &self.catalog)
    }

    /// Focus a point; unknown keys leave the selection unchanged
    pub fn select_point(&mut self, key: &str) -> bool {
        if self.batch.get(key).is_none() {
            log_warn!("Cannot select unknown point {}", key);
            return false;
        }
        self.selected = Some(String::from(key));
        true
    }

    /// Drop the selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Key of the focused point
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The focused point
    pub fn selected_point(&self) -> Option<&SpatialPoint> {
        self.selected.as_deref().and_then(|key| self.batch.get(key))
    }

    /// Choose which colors are displayed
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Displayed color set
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Raw rows of the deployed batch, including any that were dropped
    pub fn rows(&self) -> &[RawReading] {
        &self.rows
    }

    /// Deployed point set
    pub fn batch(&self) -> &MappedBatch {
        &self.batch
    }

    /// Deployed points in batch order
    pub fn points(&self) -> &[SpatialPoint] {
        self.batch.points()
    }

    /// Horizontal bounds of the deployed points
    pub fn extents(&self) -> Option<Extents> {
        self.batch.extents()
    }

    /// Latest room verdict
    pub fn room_status(&self) -> &RoomSizeStatus {
        &self.room
    }

    /// Re-run the room estimate over the deployed rows
    pub fn recompute_room_status(&mut self) -> &RoomSizeStatus {
        self.room = self.estimator.estimate_raw(&self.rows);
        &self.room
    }

    /// Treatment state of a point
    pub fn effect(&self, key: &str) -> Option<&TreatmentEffectState> {
        self.simulator.effect(key)
    }

    /// Every treated point, ordered by key
    pub fn effects(&self) -> impl Iterator<Item = (&str, &TreatmentEffectState)> {
        self.simulator.effects()
    }

    /// Before and after colors of a point
    pub fn colors(&self, key: &str) -> Option<ColorPair> {
        let point = self.batch.get(key)?;
        Some(self.config.palette.resolve(point.zone, self.simulator.effect(key)))
    }

    /// Color of a point in the current view mode
    pub fn display_color(&self, key: &str) -> Option<Rgb> {
        self.colors(key).map(|pair| pair.for_view(self.view_mode))
    }

    /// Highest-impact treatment for a zone
    pub fn best_treatment(&self, zone: ZoneKind) -> Option<&TreatmentDefinition> {
        self.catalog.best_for(zone)
    }

    /// Recommendation for the focused point
    pub fn recommendation(&self) -> Option<Recommendation<'_>> {
        self.recommendation_for(self.selected.as_deref()?)
    }

    /// Recommendation for any deployed point
    pub fn recommendation_for(&self, key: &str) -> Option<Recommendation<'_>> {
        let point = self.batch.get(key)?;
        let best = self.best_treatment(point.zone);
        let effect = self.simulator.effect(key);

        let severity = effect.map_or(self.config.simulator.initial_severity, |e| e.severity);
        let dominant = effect
            .and_then(dominant_treatment)
            .map(|id| self.catalog.display_name(id.as_str()))
            .or_else(|| best.map(TreatmentDefinition::display_name));

        Some(Recommendation {
            key: point.key.as_str(),
            zone: point.zone,
            best,
            severity,
            intensity: Intensity::from_severity(severity),
            locked: effect.is_some_and(|e| e.locked),
            applied: effect.map(|e| format_applied(e, &self.catalog)).unwrap_or_default(),
            dominant,
        })
    }
}
