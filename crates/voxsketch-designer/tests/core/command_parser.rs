use voxsketch_designer::{parse_command, parse_natural_command, Command, Shape};

#[test]
fn test_labeled_circle() {
    let shape = parse_natural_command("draw a red circle radius 40 x 10 y 20").unwrap();
    assert_eq!(shape, Shape::circle(10.0, 20.0, 40.0).with_color("red"));
}

#[test]
fn test_square_defaults() {
    let shape = parse_natural_command("square").unwrap();
    assert_eq!(
        shape,
        Shape::rectangle(100.0, 100.0, 100.0, 100.0).with_color("black")
    );
}

#[test]
fn test_rectangle_defaults() {
    let shape = parse_natural_command("Rectangle").unwrap();
    assert_eq!(
        shape,
        Shape::rectangle(100.0, 100.0, 150.0, 100.0).with_color("black")
    );
}

#[test]
fn test_unknown_shape() {
    assert_eq!(parse_natural_command("triangle"), None);
    assert_eq!(parse_command("draw a triangle"), None);
    assert_eq!(parse_natural_command(""), None);
}

#[test]
fn test_line_labels_leave_y_defaults() {
    let shape = parse_natural_command("line from 5 to 50").unwrap();
    assert_eq!(
        shape,
        Shape::line(5.0, 100.0, 50.0, 200.0).with_color("black")
    );
}

#[test]
fn test_line_positional() {
    let shape = parse_natural_command("green line 1 2 3 4").unwrap();
    assert_eq!(shape, Shape::line(1.0, 2.0, 3.0, 4.0).with_color("green"));
}

#[test]
fn test_positional_rectangle() {
    let shape = parse_natural_command("rectangle 10 20 30 40").unwrap();
    assert_eq!(
        shape,
        Shape::rectangle(10.0, 20.0, 30.0, 40.0).with_color("black")
    );
}

#[test]
fn test_label_beats_position() {
    let shape = parse_natural_command("blue rectangle 5 6 width 50").unwrap();
    assert_eq!(
        shape,
        Shape::rectangle(5.0, 6.0, 50.0, 100.0).with_color("blue")
    );
}

#[test]
fn test_label_without_space() {
    let shape = parse_natural_command("circle x10 y20 radius5").unwrap();
    assert_eq!(shape, Shape::circle(10.0, 20.0, 5.0).with_color("black"));
}

#[test]
fn test_first_shape_keyword_in_priority_order() {
    // "rectangle" is checked before "circle" regardless of position.
    let shape = parse_natural_command("circle inside a rectangle").unwrap();
    assert!(matches!(shape, Shape::Rectangle(_)));
}

#[test]
fn test_color_matches_by_substring() {
    let shape = parse_natural_command("a bored circle").unwrap();
    assert_eq!(shape.color(), Some("red"));
}

#[test]
fn test_whitespace_and_case_are_normalized() {
    let text = "   DRAW  a  Purple\tCIRCLE   radius   7 ";
    let shape = parse_natural_command(text).unwrap();
    assert_eq!(
        shape,
        Shape::circle(150.0, 150.0, 7.0).with_color("purple")
    );
}

#[test]
fn test_canvas_intents() {
    assert_eq!(parse_command("clear the canvas"), Some(Command::Clear));
    assert_eq!(parse_command("Undo that"), Some(Command::Undo));
    assert_eq!(parse_command("redo"), Some(Command::Redo));
    // Intents win over shape keywords.
    assert_eq!(parse_command("clear circle"), Some(Command::Clear));
}

#[test]
fn test_draw_command() {
    assert_eq!(
        parse_command("yellow circle"),
        Some(Command::Draw(
            Shape::circle(150.0, 150.0, 50.0).with_color("yellow")
        ))
    );
}
