use proptest::prelude::*;
use voxsketch_designer::{History, Scene, Shape, Snapshot};

fn shape(i: usize) -> Shape {
    Shape::circle(i as f64, i as f64, 1.0)
}

/// Appends through the history the way the designer does: snapshot first.
fn append(history: &mut History, scene: &mut Scene, shape: Shape) {
    history.snapshot(scene);
    scene.append(shape);
}

fn undo(history: &mut History, scene: &mut Scene) -> bool {
    match history.undo(scene) {
        Some(snapshot) => {
            scene.replace_all(snapshot.into_shapes());
            true
        }
        None => false,
    }
}

fn redo(history: &mut History, scene: &mut Scene) -> bool {
    match history.redo(scene) {
        Some(snapshot) => {
            scene.replace_all(snapshot.into_shapes());
            true
        }
        None => false,
    }
}

#[test]
fn test_new_history_is_empty() {
    let mut history = History::new();
    let scene = Scene::new();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert_eq!(history.max_depth(), 100);
    assert!(history.undo(&scene).is_none());
    assert!(history.redo(&scene).is_none());
}

#[test]
fn test_undo_all_then_redo_all() {
    for n in 1..=8 {
        let mut history = History::new();
        let mut scene = Scene::new();
        for i in 0..n {
            append(&mut history, &mut scene, shape(i));
        }
        let final_state = scene.clone();

        for _ in 0..n {
            assert!(undo(&mut history, &mut scene));
        }
        assert!(scene.is_empty());
        assert!(!undo(&mut history, &mut scene));

        for _ in 0..n {
            assert!(redo(&mut history, &mut scene));
        }
        assert_eq!(scene, final_state);
        assert!(!redo(&mut history, &mut scene));
    }
}

#[test]
fn test_snapshot_after_undo_discards_redo() {
    let mut history = History::new();
    let mut scene = Scene::new();
    append(&mut history, &mut scene, shape(0));
    append(&mut history, &mut scene, shape(1));

    undo(&mut history, &mut scene);
    assert!(history.can_redo());

    history.snapshot(&scene);
    let before = scene.clone();
    assert!(!history.can_redo());
    assert!(!redo(&mut history, &mut scene));
    assert_eq!(scene, before);
}

#[test]
fn test_snapshots_are_independent_copies() {
    let mut scene = Scene::new();
    scene.append(shape(0));
    let snapshot = Snapshot::capture(&scene);

    scene.translate(0, 10.0, 10.0);
    assert_eq!(snapshot.shapes(), &[shape(0)]);
}

#[test]
fn test_depth_limit_drops_oldest() {
    let mut history = History::with_depth(3);
    let mut scene = Scene::new();
    for i in 0..5 {
        append(&mut history, &mut scene, shape(i));
    }
    assert_eq!(history.undo_depth(), 3);

    while undo(&mut history, &mut scene) {}
    // The two oldest pre-states were dropped.
    assert_eq!(scene.shapes(), &[shape(0), shape(1)]);
    assert_eq!(history.redo_depth(), 3);
}

#[test]
fn test_clear() {
    let mut history = History::default();
    let mut scene = Scene::new();
    append(&mut history, &mut scene, shape(0));
    undo(&mut history, &mut scene);
    history.clear();
    assert_eq!(history.undo_depth(), 0);
    assert_eq!(history.redo_depth(), 0);
}

proptest! {
    #[test]
    fn prop_partial_undo_then_redo_replays(n in 1usize..30, k in 0usize..30) {
        let k = k.min(n);
        let mut history = History::new();
        let mut scene = Scene::new();
        for i in 0..n {
            append(&mut history, &mut scene, shape(i));
        }
        let final_state = scene.clone();

        for _ in 0..k {
            prop_assert!(undo(&mut history, &mut scene));
        }
        prop_assert_eq!(scene.len(), n - k);
        prop_assert_eq!(scene.shapes(), &final_state.shapes()[..n - k]);

        for _ in 0..k {
            prop_assert!(redo(&mut history, &mut scene));
        }
        prop_assert_eq!(&scene, &final_state);
    }
}
