//! View2d: pan/zoom state of the 2D (pixel-space) view.
//!
//! Window coordinates arrive with y growing downward; the 2D projection has
//! y growing upward, so vertical drags are subtracted.

use glam::{DMat4, DVec2, DVec3};
use crate::camera::build_screen_orthographic;
use crate::error::Result;

/// Smallest zoom factor a drag can reach.
pub const MIN_SCALE_2D: f64 = 0.01;
/// Scale change per pixel of vertical zoom drag.
pub const ZOOM_STEP_2D: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View2d {
    pan: DVec2,
    scale: f64,
    /// Last pointer position seen by a pan drag
    anchor: DVec2,
    /// Last pointer y seen by a zoom drag
    zoom_anchor: f64,
}

impl Default for View2d {
    fn default() -> Self {
        Self {
            pan: DVec2::ZERO,
            scale: 1.0,
            anchor: DVec2::ZERO,
            zoom_anchor: 0.0,
        }
    }
}

impl View2d {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(&self) -> DVec2 {
        self.pan
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Back to no pan, unit scale.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record the pointer position a drag starts from.
    pub fn begin_drag(&mut self, x: i32, y: i32) {
        self.anchor = DVec2::new(x as f64, y as f64);
        self.zoom_anchor = y as f64;
    }

    /// Pan by the pointer motion since the last call.
    pub fn drag_pan(&mut self, x: i32, y: i32) {
        let (x, y) = (x as f64, y as f64);
        self.pan.x += x - self.anchor.x;
        self.pan.y -= y - self.anchor.y;
        self.anchor = DVec2::new(x, y);
    }

    /// Zoom by the vertical pointer motion since the last call.
    ///
    /// Dragging down shrinks, dragging up grows; never below `MIN_SCALE_2D`.
    pub fn drag_zoom(&mut self, y: i32) {
        let y = y as f64;
        self.scale -= ZOOM_STEP_2D * (y - self.zoom_anchor);
        self.zoom_anchor = y;
        if self.scale < MIN_SCALE_2D {
            self.scale = MIN_SCALE_2D;
        }
    }

    /// Forget the drag anchors.
    pub fn end_drag(&mut self) {
        self.anchor = DVec2::ZERO;
        self.zoom_anchor = 0.0;
    }

    /// Pixel-space projection for a `width` x `height` surface.
    pub fn projection_matrix(&self, width: u32, height: u32) -> Result<DMat4> {
        build_screen_orthographic(width, height)
    }

    /// `translate(pan) * scale(s, s, 1)`.
    pub fn model_view_matrix(&self) -> DMat4 {
        DMat4::from_translation(self.pan.extend(0.0))
            * DMat4::from_scale(DVec3::new(self.scale, self.scale, 1.0))
    }
}

#[cfg(test)]
#[path = "view2d_tests.rs"]
mod tests;
