//! Tests for the pure scheduling algorithms and shared types.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::enums::*;
use crate::timing::TickAccumulator;
use crate::types::PlayArea;
use crate::weighted::{pick, WeightedEntry};

// ---- Tick accumulator ----

#[test]
fn test_accumulator_long_run_rate() {
    let mut acc = TickAccumulator::new(0.6);
    let mut emitted = 0;
    // Half-interval steps: exactly one event every two steps.
    for _ in 0..1000 {
        emitted += acc.tick(0.3);
    }
    assert_eq!(emitted, 500);
}

#[test]
fn test_accumulator_catches_up_after_stall() {
    let mut acc = TickAccumulator::new(0.5);
    assert_eq!(acc.tick(2.5), 5, "a 5x-interval frame emits 5 events");
    assert_eq!(acc.tick(0.1), 0);
}

#[test]
fn test_accumulator_remainder_carries_over() {
    let mut acc = TickAccumulator::new(1.0);
    assert_eq!(acc.tick(0.7), 0);
    assert_eq!(acc.tick(0.7), 1);
    assert_eq!(acc.tick(0.7), 1);
}

#[test]
fn test_accumulator_disabled_when_interval_nonpositive() {
    let mut acc = TickAccumulator::new(0.0);
    assert_eq!(acc.tick(100.0), 0);

    let mut acc = TickAccumulator::new(-1.0);
    assert_eq!(acc.tick(100.0), 0);
}

#[test]
fn test_accumulator_ignores_negative_delta() {
    let mut acc = TickAccumulator::new(1.0);
    assert_eq!(acc.tick(-5.0), 0);
    assert_eq!(acc.tick(1.0), 1);
}

#[test]
fn test_accumulator_per_second() {
    let mut acc = TickAccumulator::per_second(8.0);
    assert!((acc.interval() - 0.125).abs() < 1e-6);
    assert_eq!(acc.tick(1.0), 8);

    let mut disabled = TickAccumulator::per_second(0.0);
    assert_eq!(disabled.tick(1.0), 0);
}

// ---- Weighted selection ----

#[test]
fn test_pick_respects_weights_over_many_draws() {
    let entries = vec![
        WeightedEntry::new(70.0, EnemyClass::Small),
        WeightedEntry::new(25.0, EnemyClass::Medium),
        WeightedEntry::new(5.0, EnemyClass::Large),
    ];
    let mut rng = StdRng::seed_from_u64(7);

    let mut counts = [0u32; 3];
    const DRAWS: u32 = 100_000;
    for _ in 0..DRAWS {
        match pick(&entries, &mut rng) {
            Some(EnemyClass::Small) => counts[0] += 1,
            Some(EnemyClass::Medium) => counts[1] += 1,
            Some(EnemyClass::Large) => counts[2] += 1,
            None => panic!("all entries enabled, pick must not return None"),
        }
    }

    let freq = |c: u32| c as f32 / DRAWS as f32;
    assert!((freq(counts[0]) - 0.70).abs() < 0.01, "small: {counts:?}");
    assert!((freq(counts[1]) - 0.25).abs() < 0.01, "medium: {counts:?}");
    assert!((freq(counts[2]) - 0.05).abs() < 0.01, "large: {counts:?}");
}

#[test]
fn test_pick_never_returns_disabled_entry() {
    let entries = vec![
        WeightedEntry::new(70.0, EnemyClass::Small),
        WeightedEntry::<EnemyClass>::disabled(25.0),
        WeightedEntry::new(5.0, EnemyClass::Large),
    ];
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10_000 {
        let picked = pick(&entries, &mut rng).copied();
        assert_ne!(picked, Some(EnemyClass::Medium));
        assert!(picked.is_some());
    }
}

#[test]
fn test_pick_zero_weight_entry_never_selected() {
    let entries = vec![
        WeightedEntry::new(0.0, EnemyClass::Small),
        WeightedEntry::new(1.0, EnemyClass::Medium),
    ];
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..1_000 {
        assert_eq!(pick(&entries, &mut rng), Some(&EnemyClass::Medium));
    }
}

#[test]
fn test_pick_all_zero_falls_back_deterministically() {
    // Zero weights but payloads present: first payload by priority order.
    let entries = vec![
        WeightedEntry::<EnemyClass>::disabled(70.0),
        WeightedEntry::new(0.0, EnemyClass::Medium),
        WeightedEntry::new(-3.0, EnemyClass::Large),
    ];
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        assert_eq!(pick(&entries, &mut rng), Some(&EnemyClass::Medium));
    }
}

#[test]
fn test_pick_nothing_enabled_returns_none() {
    let entries: Vec<WeightedEntry<EnemyClass>> = vec![
        WeightedEntry::disabled(70.0),
        WeightedEntry::disabled(30.0),
    ];
    let mut rng = StdRng::seed_from_u64(19);
    assert_eq!(pick(&entries, &mut rng), None);

    let empty: Vec<WeightedEntry<EnemyClass>> = Vec::new();
    assert_eq!(pick(&empty, &mut rng), None);
}

// ---- Play area ----

#[test]
fn test_play_area_limits_and_clamp() {
    let area = PlayArea::new(Vec2::new(-360.0, -640.0), Vec2::new(360.0, 640.0));
    assert_eq!(area.fall_limit(80.0), -720.0);
    assert_eq!(area.rise_limit(80.0), 720.0);
    // Negative margin is treated as zero.
    assert_eq!(area.fall_limit(-10.0), -640.0);

    let clamped = area.clamp(Vec2::new(-1000.0, 900.0));
    assert_eq!(clamped, Vec2::new(-360.0, 640.0));
}

#[test]
fn test_play_area_corner_order_normalized() {
    let area = PlayArea::new(Vec2::new(360.0, 640.0), Vec2::new(-360.0, -640.0));
    assert_eq!(area.min, Vec2::new(-360.0, -640.0));
    assert_eq!(area.max, Vec2::new(360.0, 640.0));
}

// ---- Serde round trips ----

#[test]
fn test_lifecycle_phase_serde() {
    let variants = vec![
        LifecyclePhase::Active,
        LifecyclePhase::Reacting,
        LifecyclePhase::Removed,
    ];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: LifecyclePhase = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}

#[test]
fn test_pickup_kind_serde() {
    let variants = vec![PickupKind::WeaponUpgrade, PickupKind::Bomb];
    for v in variants {
        let json = serde_json::to_string(&v).unwrap();
        let back: PickupKind = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
