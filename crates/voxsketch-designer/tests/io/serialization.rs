use voxsketch_core::Error;
use voxsketch_designer::serialization::{load_shapes, save_shapes, scene_from_json, scene_to_json};
use voxsketch_designer::{DesignerState, Shape};

#[test]
fn test_json_record_format() {
    let shapes = vec![
        Shape::rectangle(10.0, 20.0, -40.0, 30.0),
        Shape::circle(150.0, 150.0, 50.0).with_color("red"),
    ];
    let json = scene_to_json(&shapes).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            { "type": "rectangle", "x": 10.0, "y": 20.0, "w": -40.0, "h": 30.0 },
            { "type": "circle", "x": 150.0, "y": 150.0, "r": 50.0, "color": "red" }
        ])
    );
}

#[test]
fn test_parse_hand_written_design() {
    let json = r#"[
        {"type": "line", "x1": 0, "y1": 1, "x2": 2, "y2": 3, "color": "blue"},
        {"type": "circle", "x": 5, "y": 5, "r": 1}
    ]"#;
    let shapes = scene_from_json(json).unwrap();
    assert_eq!(
        shapes,
        vec![
            Shape::line(0.0, 1.0, 2.0, 3.0).with_color("blue"),
            Shape::circle(5.0, 5.0, 1.0),
        ]
    );
}

#[test]
fn test_malformed_json_is_an_error() {
    for bad in [
        "",
        "{}",
        "[{\"type\": \"hexagon\"}]",
        "[{\"type\": \"circle\", \"x\": 1}]",
        "not json",
    ] {
        let err = scene_from_json(bad).unwrap_err();
        assert!(matches!(err, Error::InvalidDesign(_)), "{bad}");
    }
    assert_eq!(scene_from_json("[]").unwrap(), Vec::<Shape>::new());
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("design.json");
    let shapes = vec![
        Shape::rectangle(1.0, 2.0, 3.0, 4.0).with_color("green"),
        Shape::line(0.0, 0.0, 9.0, 9.0),
    ];

    save_shapes(&shapes, &path).unwrap();
    assert_eq!(load_shapes(&path).unwrap(), shapes);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_shapes(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_designer_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sketch.json");

    let mut state = DesignerState::new();
    state.handle_voice_command("blue square").unwrap();
    assert_eq!(state.display_name(), "Untitled*");

    state.save_to_file(&path).unwrap();
    assert_eq!(state.display_name(), "sketch.json");

    let mut other = DesignerState::new();
    other.handle_voice_command("circle").unwrap();
    other.load_from_file(&path).unwrap();
    assert_eq!(other.scene().shapes(), state.scene().shapes());
    assert!(!other.is_modified);

    // Loading replaced the scene undoably.
    assert!(other.undo());
    assert_eq!(
        other.scene().shapes(),
        &[Shape::circle(150.0, 150.0, 50.0).with_color("black")]
    );
}

#[test]
fn test_designer_load_malformed_keeps_scene() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"type\": \"rectangle\"").unwrap();

    let mut state = DesignerState::new();
    state.handle_voice_command("circle").unwrap();
    let before = state.scene().clone();
    let depth = state.history().undo_depth();

    let err = state.load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.json"));
    assert_eq!(state.scene(), &before);
    assert_eq!(state.history().undo_depth(), depth);
    assert!(state.current_file_path.is_none());
}
