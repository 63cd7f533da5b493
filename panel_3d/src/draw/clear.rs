/// Clear and fixed-function state descriptions for 3D and 2D frames.

use bitflags::bitflags;

bitflags! {
    /// Buffers cleared at the start of a frame.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearFlags: u32 {
        const COLOR = 0b01;
        const DEPTH = 0b10;
    }
}

/// Solid background color (RGB, 0..1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackgroundColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for BackgroundColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl BackgroundColor {
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// From 8-bit channels.
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// RGBA clear value (alpha 0).
    pub fn clear_value(&self) -> [f32; 4] {
        [self.r, self.g, self.b, 0.0]
    }
}

/// What to clear, with which color, and whether the gradient quad follows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearState {
    pub flags: ClearFlags,
    pub color: [f32; 4],
    pub viewport: (u32, u32),
    /// Draw the gradient background right after clearing
    pub draw_gradient: bool,
    /// Depth test state once the clear is done
    pub depth_test_after: bool,
}

/// Polygon offset pushing filled faces behind coincident lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonOffset {
    pub factor: f32,
    pub units: f32,
}

/// Render state of a 3D (or 2D) frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    pub depth_test: bool,
    /// Alpha test + `SRC_ALPHA, ONE_MINUS_SRC_ALPHA` blending
    pub transparency: bool,
    /// Line anti-aliasing with the nicest hint
    pub line_smooth: bool,
    pub polygon_offset: Option<PolygonOffset>,
    pub lighting: bool,
    pub texturing: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::scene_3d(false, false)
    }
}

impl RenderSettings {
    /// State of the 3D scene pass.
    pub fn scene_3d(transparency: bool, line_smooth: bool) -> Self {
        Self {
            depth_test: true,
            transparency,
            line_smooth,
            polygon_offset: Some(PolygonOffset { factor: 1.0, units: 1e-5 }),
            lighting: true,
            texturing: true,
        }
    }

    /// Everything off: plain 2D drawing.
    pub fn flat_2d() -> Self {
        Self {
            depth_test: false,
            transparency: false,
            line_smooth: false,
            polygon_offset: None,
            lighting: false,
            texturing: false,
        }
    }
}
