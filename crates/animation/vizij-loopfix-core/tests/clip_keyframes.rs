use vizij_loopfix_core::{
    clip_keyframes, parse_clip_json, AnimationClip, ClipConfig, CurveChange, LoopFixError,
    MemoryClipStore, WrapMode,
};

fn load(name: &str) -> AnimationClip {
    let json = vizij_test_fixtures::clips::json(name).expect("load clip fixture");
    parse_clip_json(&json).expect("parse clip fixture")
}

fn cfg(count: usize) -> ClipConfig {
    ClipConfig {
        new_clip_name: format!("Clipped{count}"),
        keyframes_to_clip: count,
    }
}

#[test]
fn long_curves_lose_exactly_k_trailing_keys() {
    let source = load("walk-cycle");
    let mut store = MemoryClipStore::new();
    let original = store.insert(source.clone());

    let outcome = clip_keyframes(&mut store, Some(original), &cfg(3)).unwrap();
    let out = store.get(outcome.clip).unwrap();
    assert_eq!(out.curve_count(), source.curve_count());
    for (binding, before) in source.curves() {
        let after = out.curve(binding).unwrap();
        assert_eq!(after.len(), before.len() - 3, "{binding}");
        assert_eq!(after.keys(), &before.keys()[..before.len() - 3]);
    }
    assert!(outcome.message.starts_with("3 keyframes clipped"));
}

#[test]
fn curves_not_longer_than_k_pass_through() {
    let source = load("mixed-lengths");
    let mut store = MemoryClipStore::new();
    let original = store.insert(source.clone());

    let outcome = clip_keyframes(&mut store, Some(original), &cfg(3)).unwrap();
    let out = store.get(outcome.clip).unwrap();
    for name in ["Empty", "Single", "Pair", "Triple"] {
        assert_eq!(out.curve_by_property(name), source.curve_by_property(name));
        assert_eq!(outcome.change_for(name), Some(&CurveChange::Unchanged));
    }
    assert_eq!(out.curve_by_property("Long").unwrap().len(), 5);
    assert_eq!(
        outcome.change_for("Long"),
        Some(&CurveChange::Clipped { removed: 3 })
    );
}

#[test]
fn zero_count_copies_everything() {
    let source = load("mixed-lengths");
    let mut store = MemoryClipStore::new();
    let original = store.insert(source.clone());
    let outcome = clip_keyframes(&mut store, Some(original), &cfg(0)).unwrap();
    let out = store.get(outcome.clip).unwrap();
    assert_eq!(out.curves().collect::<Vec<_>>(), source.curves().collect::<Vec<_>>());
}

#[test]
fn settings_are_preserved_and_result_persisted() {
    let source = load("mixed-lengths");
    let mut store = MemoryClipStore::new();
    let original = store.insert(source.clone());
    let outcome = clip_keyframes(&mut store, Some(original), &ClipConfig::default()).unwrap();
    let out = store.get(outcome.clip).unwrap();
    assert_eq!(out.name, "NewAnimationClip");
    assert_eq!(out.frame_rate, 24.0);
    assert_eq!(out.wrap_mode, WrapMode::PingPong);
    assert!(store.is_persisted(outcome.clip));
    assert!(!store.is_persisted(original));
    assert_eq!(store.get(original), Some(&source));
}

#[test]
fn missing_source_clip_is_invalid_input() {
    let mut store = MemoryClipStore::new();
    let err = clip_keyframes(&mut store, None, &ClipConfig::default()).unwrap_err();
    assert!(matches!(err, LoopFixError::InvalidInput { .. }));
    assert!(store.is_empty());
}
