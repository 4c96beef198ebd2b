use std::fs;

use vizij_loopfix::commands::{
    blend::{self, BlendOverrides},
    clip, inspect,
};
use vizij_loopfix::dir_store::DirectoryClipStore;
use vizij_loopfix_core::{
    parse_clip_json, ClipConfig, ClipStore, CurveChange, LoopFixError, WrapMode,
};

#[test]
fn blend_writes_named_clip_document() {
    let input = vizij_test_fixtures::clips::path("walk-cycle").expect("walk-cycle path");
    let out = tempfile::tempdir().unwrap();
    let overrides = BlendOverrides {
        name: Some("WalkLoop".into()),
        remove_root_qy: true,
        ..BlendOverrides::default()
    };

    let outcome = blend::run(Some(&input), None, out.path(), &overrides, true).unwrap();
    assert_eq!(outcome.change_for("RootQ.y"), Some(&CurveChange::Removed));

    let written = out.path().join("WalkLoop.anim.json");
    let clip = parse_clip_json(&fs::read_to_string(&written).unwrap()).unwrap();
    assert_eq!(clip.name, "WalkLoop");
    assert_eq!(clip.wrap_mode, WrapMode::Loop);
    assert!(clip.curve_by_property("RootQ.y").is_none());
    let leg = clip.curve_by_property("Left Upper Leg Front-Back").unwrap();
    assert_eq!(leg.last().unwrap().value, leg.first().unwrap().value);
}

#[test]
fn blend_reads_settings_file() {
    let input = vizij_test_fixtures::clips::path("walk-cycle").expect("walk-cycle path");
    let settings =
        vizij_test_fixtures::settings::path("strip-root-motion").expect("settings path");
    let out = tempfile::tempdir().unwrap();

    let outcome = blend::run(
        Some(&input),
        Some(&settings),
        out.path(),
        &BlendOverrides::default(),
        true,
    )
    .unwrap();
    assert_eq!(outcome.count(|c| matches!(c, CurveChange::Removed)), 3);
    assert!(out.path().join("WalkInPlace.anim.json").exists());
}

#[test]
fn missing_input_is_invalid_input_and_writes_nothing() {
    let out = tempfile::tempdir().unwrap();
    let err = blend::run(None, None, out.path(), &BlendOverrides::default(), true).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoopFixError>(),
        Some(LoopFixError::InvalidInput { .. })
    ));

    let err = clip::run(None, out.path(), &ClipConfig::default(), true).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoopFixError>(),
        Some(LoopFixError::InvalidInput { .. })
    ));
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn clip_writes_truncated_curves() {
    let input = vizij_test_fixtures::clips::path("mixed-lengths").expect("mixed-lengths path");
    let out = tempfile::tempdir().unwrap();
    let cfg = ClipConfig {
        new_clip_name: "Trimmed".into(),
        keyframes_to_clip: 2,
    };
    clip::run(Some(&input), out.path(), &cfg, true).unwrap();

    let text = fs::read_to_string(out.path().join("Trimmed.anim.json")).unwrap();
    let clip = parse_clip_json(&text).unwrap();
    assert_eq!(clip.curve_by_property("Long").unwrap().len(), 6);
    assert_eq!(clip.curve_by_property("Triple").unwrap().len(), 1);
    assert_eq!(clip.curve_by_property("Pair").unwrap().len(), 2);
}

#[test]
fn inspect_reports_seam_after_blend() {
    let input = vizij_test_fixtures::clips::path("walk-cycle").expect("walk-cycle path");
    let before = inspect::run(&input, true).unwrap();
    assert!(before.curves.iter().any(|c| !c.closed));

    let out = tempfile::tempdir().unwrap();
    blend::run(Some(&input), None, out.path(), &BlendOverrides::default(), true).unwrap();
    let after = inspect::run(&out.path().join("NewAnimationClip.anim.json"), true).unwrap();
    for c in &after.curves {
        assert_eq!(c.closed, c.binding != "RootT.z", "{}", c.binding);
    }
}

#[test]
fn directory_store_persist_writes_file() {
    let out = tempfile::tempdir().unwrap();
    let mut store = DirectoryClipStore::new(out.path().join("nested"));
    let id = store.create_clip("Empty", 12.0, WrapMode::Once).unwrap();
    store.persist(id).unwrap();
    let clip = parse_clip_json(
        &fs::read_to_string(out.path().join("nested").join("Empty.anim.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(clip.frame_rate, 12.0);
    assert_eq!(clip.curve_count(), 0);
}

#[test]
fn output_never_replaces_the_source_document() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("Walk.anim.json");
    let original = vizij_test_fixtures::clips::json("walk-cycle").expect("walk-cycle json");
    fs::write(&source, &original).unwrap();

    let overrides = BlendOverrides {
        name: Some("Walk".into()),
        ..BlendOverrides::default()
    };
    let err = blend::run(Some(&source), None, dir.path(), &overrides, true).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoopFixError>(),
        Some(LoopFixError::Store { .. })
    ));
    assert_eq!(fs::read_to_string(&source).unwrap(), original);
}

#[test]
fn clip_name_cannot_escape_output_directory() {
    let input = vizij_test_fixtures::clips::path("mixed-lengths").expect("mixed-lengths path");
    let root = tempfile::tempdir().unwrap();
    let out = root.path().join("out");
    let cfg = ClipConfig {
        new_clip_name: "../escaped".into(),
        keyframes_to_clip: 1,
    };
    let err = clip::run(Some(&input), &out, &cfg, true).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoopFixError>(),
        Some(LoopFixError::InvalidInput { .. })
    ));
    assert!(!root.path().join("escaped.anim.json").exists());
}
