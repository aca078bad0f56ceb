use voxsketch_designer::{DesignerShape, Point, Shape, ShapeType};

#[test]
fn test_rectangle_drag_direction_does_not_change_hits() {
    let forward = Shape::from_drag(
        ShapeType::Rectangle,
        Point::new(10.0, 10.0),
        Point::new(60.0, 40.0),
        None,
    );
    let backward = Shape::from_drag(
        ShapeType::Rectangle,
        Point::new(60.0, 40.0),
        Point::new(10.0, 10.0),
        None,
    );

    assert_eq!(forward.bounds(), backward.bounds());
    for p in [
        Point::new(10.0, 10.0),
        Point::new(35.0, 25.0),
        Point::new(60.0, 40.0),
        Point::new(9.9, 25.0),
        Point::new(35.0, 40.1),
    ] {
        assert_eq!(forward.contains_point(p), backward.contains_point(p));
    }
    assert!(backward.contains_point(Point::new(35.0, 25.0)));
}

#[test]
fn test_negative_extent_is_kept() {
    let shape = Shape::from_drag(
        ShapeType::Rectangle,
        Point::new(60.0, 40.0),
        Point::new(10.0, 10.0),
        None,
    );
    assert_eq!(shape, Shape::rectangle(60.0, 40.0, -50.0, -30.0));
}

#[test]
fn test_circle_from_drag() {
    let shape = Shape::from_drag(
        ShapeType::Circle,
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Some("red".to_string()),
    );
    assert_eq!(shape, Shape::circle(0.0, 0.0, 5.0).with_color("red"));
    assert!(shape.contains_point(Point::new(5.0, 0.0)));
    assert!(!shape.contains_point(Point::new(4.0, 4.0)));
}

#[test]
fn test_lines_are_never_hit() {
    let line = Shape::line(0.0, 0.0, 100.0, 0.0);
    assert!(!line.contains_point(Point::new(50.0, 0.0)));
    assert!(!line.contains_point(Point::new(0.0, 0.0)));
    assert_eq!(line.bounds(), (0.0, 0.0, 100.0, 0.0));
}

#[test]
fn test_translate_moves_every_kind() {
    let mut rect = Shape::rectangle(0.0, 0.0, -10.0, 10.0);
    rect.translate(5.0, 5.0);
    assert_eq!(rect, Shape::rectangle(5.0, 5.0, -10.0, 10.0));

    let mut circle = Shape::circle(1.0, 1.0, 2.0);
    circle.translate(-1.0, 2.0);
    assert_eq!(circle, Shape::circle(0.0, 3.0, 2.0));

    let mut line = Shape::line(0.0, 0.0, 1.0, 1.0);
    line.translate(2.0, 3.0);
    assert_eq!(line, Shape::line(2.0, 3.0, 3.0, 4.0));
}

#[test]
fn test_color_accessors() {
    let mut shape = Shape::line(0.0, 0.0, 1.0, 1.0);
    assert_eq!(shape.color(), None);
    shape.set_color(Some("blue".to_string()));
    assert_eq!(shape.color(), Some("blue"));
    assert_eq!(shape.shape_type(), ShapeType::Line);
    assert_eq!(ShapeType::Circle.to_string(), "circle");
}
