/// Helper geometry: the gradient background quad and the axis tripod.

use bytemuck::{Pod, Zeroable};

/// Position + color vertex.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }
}

/// Dark blue at the bottom of the background.
pub const GRADIENT_BOTTOM_COLOR: [f32; 3] = [0.0, 0.0, 0.1];
/// Light blue at the top of the background.
pub const GRADIENT_TOP_COLOR: [f32; 3] = [0.4, 0.4, 1.0];

/// Full-screen quad in NDC, counter-clockwise from the bottom-left corner.
///
/// Drawn with identity matrices, depth test off, smooth shading.
pub fn gradient_background_quad() -> [ColorVertex; 4] {
    [
        ColorVertex::new([-1.0, -1.0, 0.0], GRADIENT_BOTTOM_COLOR),
        ColorVertex::new([1.0, -1.0, 0.0], GRADIENT_BOTTOM_COLOR),
        ColorVertex::new([1.0, 1.0, 0.0], GRADIENT_TOP_COLOR),
        ColorVertex::new([-1.0, 1.0, 0.0], GRADIENT_TOP_COLOR),
    ]
}

/// The quad split into two triangles, for APIs without quads.
pub fn gradient_background_triangles() -> [ColorVertex; 6] {
    let q = gradient_background_quad();
    [q[0], q[1], q[2], q[0], q[2], q[3]]
}

/// Unit X, Y and Z axes from the origin as a line list, drawn unlit in black.
pub fn axis_lines() -> [ColorVertex; 6] {
    const BLACK: [f32; 3] = [0.0, 0.0, 0.0];
    [
        ColorVertex::new([0.0, 0.0, 0.0], BLACK),
        ColorVertex::new([1.0, 0.0, 0.0], BLACK),
        ColorVertex::new([0.0, 0.0, 0.0], BLACK),
        ColorVertex::new([0.0, 1.0, 0.0], BLACK),
        ColorVertex::new([0.0, 0.0, 0.0], BLACK),
        ColorVertex::new([0.0, 0.0, 1.0], BLACK),
    ]
}
