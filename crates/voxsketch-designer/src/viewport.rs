//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between device coordinates (pointer positions reported
//! by the input surface) and logical coordinates (canvas space). Manages zoom
//! and pan with the mapping:
//!
//! ```text
//! logical = (device - offset) / zoom
//! device  = logical * zoom + offset
//! ```
//!
//! Both axes grow in the same direction in both spaces; there is no Y flip.

use std::fmt;

use voxsketch_core::constants::{MAX_ZOOM, MIN_ZOOM};

use crate::model::Point;

/// Converts a device point to logical coordinates given the pan offset and zoom.
pub fn to_logical(device: Point, offset: Point, zoom: f64) -> Point {
    Point::new((device.x - offset.x) / zoom, (device.y - offset.y) / zoom)
}

/// Converts a logical point back to device coordinates. Inverse of [`to_logical`].
pub fn to_device(logical: Point, offset: Point, zoom: f64) -> Point {
    Point::new(logical.x * zoom + offset.x, logical.y * zoom + offset.y)
}

/// Represents the view transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    offset_x: f64,
    offset_y: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl Viewport {
    /// Creates an identity viewport (zoom 1, no pan).
    pub fn new() -> Self {
        Self::with_limits(MIN_ZOOM, MAX_ZOOM)
    }

    /// Creates an identity viewport with custom zoom limits.
    pub fn with_limits(min_zoom: f64, max_zoom: f64) -> Self {
        Self {
            zoom: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            min_zoom,
            max_zoom,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the configured limits.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        }
    }

    /// Gets the pan offset in device pixels.
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }

    /// Sets the pan offset.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Pans by a delta in device pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Converts a device point to logical coordinates.
    pub fn to_logical(&self, device: Point) -> Point {
        to_logical(device, self.offset(), self.zoom)
    }

    /// Converts a logical point to device coordinates.
    pub fn to_device(&self, logical: Point) -> Point {
        to_device(logical, self.offset(), self.zoom)
    }

    /// Multiplies the zoom by `factor` while keeping the logical point under
    /// `device` at the same device position.
    ///
    /// Returns `false` when the zoom was already at the limit in that direction.
    pub fn zoom_at(&mut self, device: Point, factor: f64) -> bool {
        let new_zoom = (self.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.zoom).abs() < f64::EPSILON {
            return false;
        }

        let anchor = self.to_logical(device);
        self.zoom = new_zoom;
        // device = anchor * zoom + offset  =>  offset = device - anchor * zoom
        self.offset_x = device.x - anchor.x * new_zoom;
        self.offset_y = device.y - anchor.y * new_zoom;
        true
    }

    /// Resets to identity zoom and pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.offset_x, self.offset_y
        )
    }
}
