//! Rule-based parser for spoken or typed canvas commands.
//!
//! Turns utterances such as `"draw a red circle radius 40 x 10 y 20"` into a
//! [`Shape`], or into one of the canvas-level intents `clear`, `undo` and
//! `redo`. This is keyword and digit matching, not language understanding:
//!
//! 1. The text is lowercased and its whitespace collapsed.
//! 2. The shape kind is the first of `rectangle`, `circle`, `line`, `square`
//!    found anywhere in the text.
//! 3. The color is the first palette entry found anywhere in the text,
//!    `black` otherwise. Matching is by substring, so `"bored"` yields red.
//! 4. Each field resolves as labeled value, then positional value, then default.
//!    A labeled value is a label word followed by optional whitespace and a
//!    digit run (`"width 50"`, `"x10"`). Digit runs consumed by a label are
//!    removed from the positional pool; the remaining runs fill fields by fixed
//!    index.
//!
//! Produced coordinates are logical canvas coordinates.

use std::sync::OnceLock;

use regex::Regex;
use voxsketch_core::constants::DEFAULT_COMMAND_COLOR;

use crate::model::Shape;

/// Color words recognized in commands, in match priority order.
pub const PALETTE: [&str; 9] = [
    "red", "blue", "green", "black", "white", "yellow", "orange", "purple", "gray",
];

/// Label words that can precede a numeric value.
const LABEL_WORDS: [&str; 7] = ["x", "y", "width", "height", "radius", "from", "to"];

/// A recognized utterance.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Remove every shape from the canvas
    Clear,
    Undo,
    Redo,
    /// Append the parsed shape
    Draw(Shape),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShapeKeyword {
    Rectangle,
    Circle,
    Line,
    Square,
}

impl ShapeKeyword {
    /// Detection order matters: the first keyword present wins.
    const ALL: [(&'static str, ShapeKeyword); 4] = [
        ("rectangle", ShapeKeyword::Rectangle),
        ("circle", ShapeKeyword::Circle),
        ("line", ShapeKeyword::Line),
        ("square", ShapeKeyword::Square),
    ];

    fn detect(text: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(word, _)| text.contains(word))
            .map(|(_, kind)| *kind)
    }

    fn fields(self) -> &'static [FieldSpec; 4] {
        match self {
            ShapeKeyword::Rectangle => &RECTANGLE_FIELDS,
            ShapeKeyword::Square => &SQUARE_FIELDS,
            ShapeKeyword::Circle => &CIRCLE_FIELDS,
            ShapeKeyword::Line => &LINE_FIELDS,
        }
    }
}

/// How one numeric field of a shape is resolved.
#[derive(Debug, Clone, Copy)]
struct FieldSpec {
    label: Option<&'static str>,
    index: usize,
    default: f64,
}

const fn field(label: Option<&'static str>, index: usize, default: f64) -> FieldSpec {
    FieldSpec {
        label,
        index,
        default,
    }
}

/// Sentinel for the unused fourth slot of three-field shapes.
const UNUSED: FieldSpec = field(None, usize::MAX, 0.0);

const RECTANGLE_FIELDS: [FieldSpec; 4] = [
    field(Some("x"), 0, 100.0),
    field(Some("y"), 1, 100.0),
    field(Some("width"), 2, 150.0),
    field(Some("height"), 3, 100.0),
];

const SQUARE_FIELDS: [FieldSpec; 4] = [
    field(Some("x"), 0, 100.0),
    field(Some("y"), 1, 100.0),
    field(Some("width"), 2, 100.0),
    field(Some("height"), 3, 100.0),
];

const CIRCLE_FIELDS: [FieldSpec; 4] = [
    field(Some("x"), 0, 150.0),
    field(Some("y"), 1, 150.0),
    field(Some("radius"), 2, 50.0),
    UNUSED,
];

const LINE_FIELDS: [FieldSpec; 4] = [
    field(Some("from"), 0, 100.0),
    field(None, 1, 100.0),
    field(Some("to"), 2, 200.0),
    field(None, 3, 200.0),
];

/// A maximal run of ASCII digits in the normalized text.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DigitRun {
    start: usize,
    value: f64,
}

fn digit_regex() -> &'static Regex {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    DIGITS.get_or_init(|| Regex::new(r"[0-9]+").expect("invalid digit pattern"))
}

fn label_regex(label: &str) -> Option<&'static Regex> {
    static LABELS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    LABELS
        .get_or_init(|| {
            LABEL_WORDS
                .iter()
                .map(|word| {
                    let pattern = format!(r"{}\s*([0-9]+)", regex::escape(word));
                    (*word, Regex::new(&pattern).expect("invalid label pattern"))
                })
                .collect()
        })
        .iter()
        .find(|(word, _)| *word == label)
        .map(|(_, re)| re)
}

/// Lowercases the text, trims it and collapses internal whitespace to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classifies an utterance as a canvas intent or a shape command.
///
/// The `clear`, `undo` and `redo` keywords are checked first (in that order)
/// and bypass shape parsing entirely.
pub fn parse_command(text: &str) -> Option<Command> {
    let text = normalize(text);

    if text.contains("clear") {
        return Some(Command::Clear);
    }
    if text.contains("undo") {
        return Some(Command::Undo);
    }
    if text.contains("redo") {
        return Some(Command::Redo);
    }

    parse_normalized(&text).map(Command::Draw)
}

/// Parses a shape description. Returns `None` when no shape keyword is present.
pub fn parse_natural_command(text: &str) -> Option<Shape> {
    parse_normalized(&normalize(text))
}

fn parse_normalized(text: &str) -> Option<Shape> {
    let kind = ShapeKeyword::detect(text)?;
    let color = detect_color(text);
    let [a, b, c, d] = resolve_fields(text, kind.fields());

    let shape = match kind {
        ShapeKeyword::Rectangle | ShapeKeyword::Square => Shape::rectangle(a, b, c, d),
        ShapeKeyword::Circle => Shape::circle(a, b, c),
        ShapeKeyword::Line => Shape::line(a, b, c, d),
    };
    Some(shape.with_color(color))
}

fn detect_color(text: &str) -> &'static str {
    PALETTE
        .iter()
        .copied()
        .find(|color| text.contains(color))
        .unwrap_or(DEFAULT_COMMAND_COLOR)
}

fn digit_runs(text: &str) -> Vec<DigitRun> {
    digit_regex()
        .find_iter(text)
        .filter_map(|m| {
            m.as_str().parse::<f64>().ok().map(|value| DigitRun {
                start: m.start(),
                value,
            })
        })
        .collect()
}

/// Finds the first `label <digits>` occurrence, returning the value and the
/// byte offset of its digit run.
fn labeled_value(text: &str, label: &str) -> Option<(f64, usize)> {
    let caps = label_regex(label)?.captures(text)?;
    let digits = caps.get(1)?;
    let value = digits.as_str().parse::<f64>().ok()?;
    Some((value, digits.start()))
}

fn resolve_fields(text: &str, specs: &[FieldSpec; 4]) -> [f64; 4] {
    let runs = digit_runs(text);

    let labeled: Vec<Option<(f64, usize)>> = specs
        .iter()
        .map(|spec| spec.label.and_then(|label| labeled_value(text, label)))
        .collect();

    let pool: Vec<f64> = runs
        .iter()
        .filter(|run| {
            !labeled
                .iter()
                .flatten()
                .any(|(_, start)| *start == run.start)
        })
        .map(|run| run.value)
        .collect();

    let mut values = [0.0; 4];
    for (slot, (spec, label_hit)) in values.iter_mut().zip(specs.iter().zip(&labeled)) {
        *slot = match label_hit {
            Some((value, _)) => *value,
            None => pool.get(spec.index).copied().unwrap_or(spec.default),
        };
    }
    values
}
