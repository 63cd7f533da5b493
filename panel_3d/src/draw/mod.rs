//! Draw helpers: clear state, helper geometry, and pixel buffers.
//!
//! These produce descriptions and vertex data; issuing the actual draw and
//! read-back calls is left to the host's graphics backend.

mod clear;
mod geometry;
mod pixels;

pub use clear::{BackgroundColor, ClearFlags, ClearState, PolygonOffset, RenderSettings};
pub use geometry::{
    axis_lines, gradient_background_quad, gradient_background_triangles, ColorVertex,
    GRADIENT_BOTTOM_COLOR, GRADIENT_TOP_COLOR,
};
pub use pixels::{
    flip_rows, flip_rows_in_place, PixelFormat, SamplerSettings, TextureFilter, TextureUpload,
    TextureWrap,
};

#[cfg(test)]
#[path = "draw_tests.rs"]
mod tests;
