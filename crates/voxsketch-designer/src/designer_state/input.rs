//! Pointer and wheel handling for designer state.
//!
//! All positions arrive in device coordinates and are mapped through the
//! viewport before hit testing or shape construction.

use super::{DesignerState, Gesture};
use crate::model::{Point, Shape};

impl DesignerState {
    /// Press at a device position.
    ///
    /// With the select tool a hit selects the topmost shape and starts dragging
    /// it; a miss clears the selection and starts panning. Draw tools start a
    /// rubber band at the logical press point.
    pub fn pointer_down(&mut self, device_x: f64, device_y: f64) {
        let device = Point::new(device_x, device_y);
        let logical = self.viewport.to_logical(device);

        self.gesture = match self.tool.shape_type() {
            Some(kind) => Gesture::Drawing {
                kind,
                start: logical,
                current: logical,
            },
            None => match self.scene.hit_test(logical) {
                Some(index) => {
                    tracing::debug!(
                        "Selected shape {} at ({:.1}, {:.1})",
                        index,
                        logical.x,
                        logical.y
                    );
                    self.selection = Some(index);
                    Gesture::DraggingShape {
                        index,
                        last: logical,
                        moved: false,
                    }
                }
                None => {
                    self.selection = None;
                    Gesture::Panning { last: device }
                }
            },
        };
    }

    /// Pointer motion at a device position.
    ///
    /// A shape drag records one history snapshot before its first movement, so
    /// a whole drag undoes as a single step and a plain click records nothing.
    pub fn pointer_move(&mut self, device_x: f64, device_y: f64) {
        let device = Point::new(device_x, device_y);
        let logical = self.viewport.to_logical(device);

        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::DraggingShape { index, last, moved } => {
                let dx = logical.x - last.x;
                let dy = logical.y - last.y;
                if dx == 0.0 && dy == 0.0 {
                    return;
                }
                let index = *index;
                *last = logical;
                if !*moved {
                    *moved = true;
                    self.history.snapshot(&self.scene);
                    self.is_modified = true;
                }
                self.scene.translate(index, dx, dy);
            }
            Gesture::Panning { last } => {
                let dx = device.x - last.x;
                let dy = device.y - last.y;
                *last = device;
                self.viewport.pan_by(dx, dy);
            }
            Gesture::Drawing { current, .. } => {
                *current = logical;
            }
        }
    }

    /// Release at a device position. Completes a draw gesture by appending the
    /// new shape and returns its index.
    pub fn pointer_up(&mut self, device_x: f64, device_y: f64) -> Option<usize> {
        self.pointer_move(device_x, device_y);

        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing {
                kind,
                start,
                current,
            } => {
                let shape = Shape::from_drag(kind, start, current, self.draw_color.clone());
                let index = self.mutate(|scene| scene.append(shape));
                tracing::debug!("Drew {} #{}", kind, index);
                Some(index)
            }
            _ => None,
        }
    }

    /// Wheel input at a device position: negative `delta_y` zooms in, positive
    /// zooms out, keeping the point under the cursor fixed.
    pub fn wheel(&mut self, device_x: f64, device_y: f64, delta_y: f64) {
        let factor = if delta_y < 0.0 {
            self.zoom_step
        } else if delta_y > 0.0 {
            1.0 / self.zoom_step
        } else {
            return;
        };
        self.viewport.zoom_at(Point::new(device_x, device_y), factor);
    }
}
