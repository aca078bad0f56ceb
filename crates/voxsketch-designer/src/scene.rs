//! Ordered shape collection.
//!
//! Paint order is sequence order: later shapes are drawn on top, and hit
//! testing walks the sequence in reverse so the topmost shape wins.

use crate::model::{DesignerShape, Point, Shape};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Adds a shape on top of all others and returns its index.
    pub fn append(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Replaces the whole sequence (load, undo and redo restore).
    pub fn replace_all(&mut self, shapes: Vec<Shape>) {
        self.shapes = shapes;
    }

    /// Returns the index of the topmost shape containing `point`.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.shapes
            .iter()
            .rposition(|shape| shape.contains_point(point))
    }

    /// Moves the shape at `index` by `(dx, dy)`. Returns `false` for a stale index.
    pub fn translate(&mut self, index: usize, dx: f64, dy: f64) -> bool {
        match self.shapes.get_mut(index) {
            Some(shape) => {
                shape.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
