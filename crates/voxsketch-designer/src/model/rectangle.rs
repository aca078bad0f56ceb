use serde::{Deserialize, Serialize};

use super::{DesignerShape, Point};

/// Axis-aligned rectangle anchored at the corner where the drag started.
///
/// `w` and `h` carry the drag direction and may be negative; all geometry
/// queries work on the normalized extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl DesignRectangle {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            color: None,
        }
    }

    /// Top-left corner and non-negative size, independent of drag direction.
    pub fn normalized(&self) -> (f64, f64, f64, f64) {
        let x = self.x.min(self.x + self.w);
        let y = self.y.min(self.y + self.h);
        (x, y, self.w.abs(), self.h.abs())
    }
}

impl DesignerShape for DesignRectangle {
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let (x, y, w, h) = self.normalized();
        (x, y, x + w, y + h)
    }

    fn contains_point(&self, p: Point) -> bool {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
