use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignCircle {
    /// Center
    pub x: f64,
    pub y: f64,
    pub r: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DesignCircle {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self {
            x,
            y,
            r,
            color: None,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl DesignerShape for DesignCircle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        (
            self.x - self.r,
            self.y - self.r,
            self.x + self.r,
            self.y + self.r,
        )
    }

    fn contains_point(&self, p: Point) -> bool {
        self.center().distance_to(&p) <= self.r
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
