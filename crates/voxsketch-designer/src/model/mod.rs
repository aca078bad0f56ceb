use serde::{Deserialize, Serialize};
use std::fmt;

mod circle;
mod line;
mod rectangle;

pub use circle::DesignCircle;
pub use line::DesignLine;
pub use rectangle::DesignRectangle;

/// A point in logical (canvas) or device space, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Geometry shared by every shape kind.
pub trait DesignerShape {
    /// Normalized axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    fn bounds(&self) -> (f64, f64, f64, f64);

    /// Point-in-shape test in logical coordinates.
    fn contains_point(&self, p: Point) -> bool;

    fn translate(&mut self, dx: f64, dy: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Rectangle,
    Circle,
    Line,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Rectangle => write!(f, "rectangle"),
            ShapeType::Circle => write!(f, "circle"),
            ShapeType::Line => write!(f, "line"),
        }
    }
}

/// A shape record. Serialized with a `"type"` discriminant and the
/// case-specific fields flattened beside it, e.g.
/// `{"type":"circle","x":10.0,"y":20.0,"r":40.0,"color":"red"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(DesignRectangle),
    Circle(DesignCircle),
    Line(DesignLine),
}

impl DesignerShape for Shape {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            Shape::Rectangle(s) => s.bounds(),
            Shape::Circle(s) => s.bounds(),
            Shape::Line(s) => s.bounds(),
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(p),
            Shape::Circle(s) => s.contains_point(p),
            Shape::Line(s) => s.contains_point(p),
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Line(s) => s.translate(dx, dy),
        }
    }
}

impl Shape {
    pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Self {
        Shape::Rectangle(DesignRectangle::new(x, y, w, h))
    }

    pub fn circle(x: f64, y: f64, r: f64) -> Self {
        Shape::Circle(DesignCircle::new(x, y, r))
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Shape::Line(DesignLine::new(x1, y1, x2, y2))
    }

    /// Builder-style color assignment.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.set_color(Some(color.into()));
        self
    }

    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Line(_) => ShapeType::Line,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            Shape::Rectangle(s) => s.color.as_deref(),
            Shape::Circle(s) => s.color.as_deref(),
            Shape::Line(s) => s.color.as_deref(),
        }
    }

    pub fn set_color(&mut self, color: Option<String>) {
        match self {
            Shape::Rectangle(s) => s.color = color,
            Shape::Circle(s) => s.color = color,
            Shape::Line(s) => s.color = color,
        }
    }

    /// Builds the shape produced by a completed draw gesture from `start` to `end`,
    /// both in logical coordinates.
    ///
    /// Rectangles keep the signed extent of the drag, circles are centered on the
    /// press point with the drag length as radius.
    pub fn from_drag(kind: ShapeType, start: Point, end: Point, color: Option<String>) -> Self {
        let mut shape = match kind {
            ShapeType::Rectangle => {
                Shape::rectangle(start.x, start.y, end.x - start.x, end.y - start.y)
            }
            ShapeType::Circle => Shape::circle(start.x, start.y, start.distance_to(&end)),
            ShapeType::Line => Shape::line(start.x, start.y, end.x, end.y),
        };
        shape.set_color(color);
        shape
    }
}
