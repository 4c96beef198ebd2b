use vizij_loopfix_core::{
    clip_to_json, parse_clip_json, CurveBinding, LoopFixError, TangentMode, WrapMode,
};

#[test]
fn parses_walk_cycle_fixture() {
    let json = vizij_test_fixtures::clips::json("walk-cycle").expect("load walk-cycle fixture");
    let clip = parse_clip_json(&json).expect("parse walk-cycle");

    assert_eq!(clip.name, "Walk");
    assert_eq!(clip.frame_rate, 30.0);
    assert_eq!(clip.wrap_mode, WrapMode::Loop);
    assert_eq!(clip.curve_count(), 11);

    // bindings keep document order
    let first = clip.bindings().next().unwrap();
    assert_eq!(first, &CurveBinding::animator("RootT.x"));

    let hips = clip
        .curve(&CurveBinding::new(
            "Armature/Hips",
            "m_LocalPosition.y",
            "Transform",
        ))
        .expect("hips curve");
    assert_eq!(hips.len(), 13);
    assert!((hips.duration() - 0.4).abs() < 1e-5);
    assert!((clip.length_seconds() - 0.4).abs() < 1e-5);
}

#[test]
fn written_document_parses_back_to_same_clip() {
    let json = vizij_test_fixtures::clips::json("mixed-lengths").expect("load mixed-lengths");
    let clip = parse_clip_json(&json).unwrap();
    let text = clip_to_json(&clip).unwrap();
    assert!(text.contains("\"wrapMode\": \"pingPong\""));
    assert!(text.contains("\"leftMode\": \"free\""));
    assert_eq!(parse_clip_json(&text).unwrap(), clip);
}

#[test]
fn tangent_modes_are_read_from_keys() {
    let clip = parse_clip_json(
        r#"{ "name": "T", "frameRate": 24, "wrapMode": "clampForever", "curves": [
            { "propertyName": "x", "keys": [
                { "time": 0, "value": 0, "inTangent": 1.5, "outTangent": 2, "leftMode": "linear", "rightMode": "clampedAuto" }
            ] }
        ] }"#,
    )
    .unwrap();
    let key = clip.curve_by_property("x").unwrap().keys()[0];
    assert_eq!(key.left_mode, TangentMode::Linear);
    assert_eq!(key.right_mode, TangentMode::ClampedAuto);
    assert_eq!(key.out_tangent, 2.0);
    assert_eq!(clip.wrap_mode, WrapMode::ClampForever);
}

#[test]
fn rejects_bad_documents() {
    assert!(matches!(
        parse_clip_json("{ not json"),
        Err(LoopFixError::Store { .. })
    ));
    assert!(matches!(
        parse_clip_json(r#"{ "name": "Z", "frameRate": 0 }"#),
        Err(LoopFixError::InvalidInput { .. })
    ));
}
