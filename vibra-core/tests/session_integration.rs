//! Integration tests for the studio session
//!
//! Tests the full event flow:
//! - Deploy: normalization, mapping and room verdict together
//! - Treatments across points and zones
//! - Reset and redeploy semantics
//! - Colors and recommendations read back through the session

mod common;

use vibra_core::{
    ApplyOutcome, Intensity, RawReading, RoomSizeStatus, StudioConfig, StudioSession,
    TreatmentCatalog, TreatmentDefinition, ViewMode, ZoneImpact, ZoneKind,
};

use common::{broken_rows, key_for, studio_sweep, warehouse_sweep, SweepGenerator};

#[test]
fn test_deploy_studio_sweep() {
    let mut session = StudioSession::default();
    let report = session.deploy(&studio_sweep());

    assert_eq!(report.rows, 6);
    assert_eq!(report.points, 6);
    assert_eq!(report.dropped, 0);
    assert!(report.room.is_standard);
    assert_eq!(report.room.estimated_size_m, Some(4.0));

    let zones: Vec<ZoneKind> = session.points().iter().map(|p| p.zone).collect();
    assert_eq!(
        zones,
        [
            ZoneKind::Hotspot,
            ZoneKind::Deadspot,
            ZoneKind::Neutral,
            ZoneKind::Hotspot,
            ZoneKind::Deadspot,
            ZoneKind::Neutral,
        ]
    );

    // Second layer sits one step above the first
    let first = session.points()[0].position;
    let upper = session.points()[4].position;
    assert!((upper.y - first.y - 0.5).abs() < 1e-9);
}

#[test]
fn test_broken_rows_are_filtered() {
    let mut batch = broken_rows();
    batch.extend(studio_sweep());

    let mut session = StudioSession::default();
    let report = session.deploy(&batch);

    assert_eq!(report.dropped, broken_rows().len());
    assert_eq!(report.points, 6);
    assert_eq!(session.rows().len(), batch.len());
    // Batch indices follow the full batch, dropped rows included
    assert_eq!(session.points()[0].source.batch_index, broken_rows().len());
}

#[test]
fn test_oversized_room_is_a_verdict() {
    let mut session = StudioSession::default();
    let report = session.deploy(&warehouse_sweep());

    assert_eq!(report.points, 2);
    assert!(!report.room.is_standard);
    assert_eq!(report.room.estimated_size_m, Some(9.0));
    assert!(report.room.reason.starts_with("Outside studio standard"));

    // Treatments still work in a non-standard room
    let hot = key_for(&session, ZoneKind::Hotspot);
    assert!(session.apply_treatment(&hot, "bass_trap").changed());
}

#[test]
fn test_empty_batch() {
    let mut session = StudioSession::default();
    let report = session.deploy(&[]);

    assert_eq!(report.points, 0);
    assert!(!report.room.is_standard);
    assert_eq!(report.room.estimated_size_m, None);
    assert_eq!(report.room.reason, "No usable distance values found.");
    assert_eq!(session.extents(), None);
}

#[test]
fn test_treatment_sequence_on_hotspot() {
    let mut session = StudioSession::default();
    session.deploy(&studio_sweep());
    let hot = key_for(&session, ZoneKind::Hotspot);

    assert_eq!(
        session.apply_treatment(&hot, "bass_trap"),
        ApplyOutcome::Applied { previous: 70, severity: 35, impact: 35, locked: false }
    );
    assert_eq!(
        session.apply_treatment(&hot, "bass_trap"),
        ApplyOutcome::Applied { previous: 35, severity: 20, impact: 25, locked: true }
    );

    for id in ["bass_trap", "absorber", "diffuser", "rug"] {
        assert_eq!(session.apply_treatment(&hot, id), ApplyOutcome::Locked { severity: 20 });
    }

    let effect = session.effect(&hot).unwrap();
    assert_eq!(effect.severity, 20);
    assert!(effect.locked);
    assert_eq!(effect.applied.len(), 2);

    // Other points are untouched
    assert_eq!(session.effects().count(), 1);
}

#[test]
fn test_treatments_are_per_point() {
    let mut session = StudioSession::default();
    session.deploy(&studio_sweep());

    let keys: Vec<String> = session.points().iter().map(|p| p.key.clone()).collect();
    let hot_a = &keys[0];
    let hot_b = &keys[3];

    session.apply_treatment(hot_a, "absorber");
    session.apply_treatment(hot_b, "rug");

    assert_eq!(session.effect(hot_a).unwrap().severity, 45);
    assert_eq!(session.effect(hot_b).unwrap().severity, 55);
}

#[test]
fn test_neutral_points_only_respond_to_diffusers() {
    let mut session = StudioSession::default();
    session.deploy(&studio_sweep());
    let neutral = key_for(&session, ZoneKind::Neutral);

    assert_eq!(session.apply_treatment(&neutral, "bass_trap"), ApplyOutcome::NoEffect);
    assert!(session.effect(&neutral).is_none());

    assert!(session.apply_treatment(&neutral, "diffuser").changed());
    assert_eq!(session.effect(&neutral).unwrap().severity, 65);
}

#[test]
fn test_reset_after_deploy_and_treatments() {
    let mut session = StudioSession::default();
    session.deploy(&studio_sweep());
    let hot = key_for(&session, ZoneKind::Hotspot);
    session.apply_treatment(&hot, "bass_trap");
    session.select_point(&hot);
    session.set_view_mode(ViewMode::Before);

    session.reset();

    assert!(session.points().is_empty());
    assert_eq!(session.effects().count(), 0);
    assert_eq!(session.selected(), None);
    assert_eq!(session.view_mode(), ViewMode::After);
    assert_eq!(session.room_status(), &RoomSizeStatus::pending());

    // Reset is always safe
    session.reset();
    assert!(session.points().is_empty());
}

#[test]
fn test_redeploy_keeps_keys_but_not_effects() {
    let mut session = StudioSession::default();
    session.deploy(&studio_sweep());
    let hot = key_for(&session, ZoneKind::Hotspot);
    session.apply_treatment(&hot, "bass_trap");

    session.deploy(&studio_sweep());
    assert!(session.batch().get(&hot).is_some());
    assert!(session.effect(&hot).is_none());
    assert_eq!(session.colors(&hot).unwrap().after, session.colors(&hot).unwrap().before);
}

#[test]
fn test_recommendations() {
    let mut session = StudioSession::default();
    session.deploy(&studio_sweep());

    assert_eq!(session.best_treatment(ZoneKind::Hotspot).unwrap().id.as_str(), "bass_trap");
    assert_eq!(session.best_treatment(ZoneKind::Deadspot).unwrap().id.as_str(), "diffuser");

    let dead = key_for(&session, ZoneKind::Deadspot);
    session.select_point(&dead);
    session.apply_treatment(&dead, "diffuser");
    session.apply_treatment(&dead, "bass_trap");
    session.apply_treatment(&dead, "diffuser");

    // 70 - 20 - 5 - 14
    let rec = session.recommendation().unwrap();
    assert_eq!(rec.zone, ZoneKind::Deadspot);
    assert_eq!(rec.severity, 31);
    assert_eq!(rec.intensity, Intensity::Medium);
    assert_eq!(rec.applied, vec!["Diffuser ×2", "Bass Trap ×1"]);
    assert_eq!(rec.dominant, Some("Diffuser"));
}

#[test]
fn test_custom_catalog() {
    let catalog = TreatmentCatalog::new(vec![
        TreatmentDefinition::new("cloud", "Ceiling Cloud", ZoneImpact::new(20, 0, 0)),
        TreatmentDefinition::new("panel", "Wall Panel", ZoneImpact::new(40, 0, 0)),
    ])
    .unwrap();
    let mut session = StudioSession::new(StudioConfig::default(), catalog).unwrap();
    session.deploy(&studio_sweep());

    let hot = key_for(&session, ZoneKind::Hotspot);
    assert_eq!(session.best_treatment(ZoneKind::Hotspot).unwrap().name, "Wall Panel");
    assert_eq!(session.apply_treatment(&hot, "bass_trap"), ApplyOutcome::UnknownTreatment);
    assert!(session.apply_treatment(&hot, "panel").changed());
}

#[test]
fn test_view_mode_colors() {
    let mut session = StudioSession::default();
    session.deploy(&studio_sweep());
    let dead = key_for(&session, ZoneKind::Deadspot);

    session.apply_treatment(&dead, "diffuser");
    let after = session.display_color(&dead).unwrap();
    session.set_view_mode(ViewMode::Before);
    let before = session.display_color(&dead).unwrap();

    assert_eq!(before.to_hex(), "#4292c6");
    assert_ne!(after, before);
}

#[test]
fn test_large_generated_sweep() {
    let mut generator = SweepGenerator::new(7);
    let batch = generator.sweep(4, 5, 240.0);
    assert_eq!(batch.len(), 4 * 72);

    let mut session = StudioSession::default();
    let report = session.deploy(&batch);

    assert_eq!(report.points + report.dropped, batch.len());
    assert!(report.dropped > 0);

    let mut keys: Vec<&str> = session.batch().keys().collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), report.points);

    let bounds = session.extents().unwrap();
    assert!(bounds.width() <= 4.8 + 1e-9);
    assert!(bounds.depth() <= 4.8 + 1e-9);
}

#[test]
fn test_numeric_and_text_fields_agree() {
    let text = RawReading::new("30", "70", "150", "0.4", "Hot Spot", "Layer 1");
    let numeric = RawReading::new(30.0, 70.0, 150.0, 0.4, "Hot Spot", "Layer 1");

    let mut a = StudioSession::default();
    let mut b = StudioSession::default();
    a.deploy(&[text]);
    b.deploy(&[numeric]);

    assert_eq!(a.points()[0].position, b.points()[0].position);
    assert_eq!(a.points()[0].key, b.points()[0].key);
}
