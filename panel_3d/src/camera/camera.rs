/// Camera: the viewer's perspective camera.
///
/// Holds the surface size, lens, pose and manipulator state, and derives
/// fresh matrices on every query. Setters store, compute nothing.

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DVec3, Mat4};
use crate::error::Result;
use crate::panel_bail;
use super::projection::{FrustumBounds, PerspectiveLens};
use super::view::{build_view, CameraPose, ManipulatorTransform};

const LOG_SOURCE: &str = "panel3d::Camera";

/// Projection and view matrices of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub projection: DMat4,
    pub view: DMat4,
}

impl FrameMatrices {
    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> DMat4 {
        self.projection * self.view
    }

    /// Single-precision uniform block for upload.
    pub fn uniforms(&self) -> FrameUniforms {
        FrameUniforms {
            view: self.view.as_mat4(),
            projection: self.projection.as_mat4(),
            view_projection: self.view_projection().as_mat4(),
        }
    }
}

/// Per-frame uniform block, laid out for a std140 `mat4` triple.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
}

impl FrameUniforms {
    /// Raw bytes, ready for a uniform buffer update.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Perspective camera of the viewer surface.
#[derive(Debug, Clone)]
pub struct Camera {
    width: u32,
    height: u32,
    lens: PerspectiveLens,
    pose: CameraPose,
    manipulator: ManipulatorTransform,
}

impl Camera {
    /// Camera with the default lens and pose for a `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// `DomainError` if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            panel_bail!(LOG_SOURCE, DomainError, "surface size must be non-zero, got {}x{}", width, height);
        }
        Ok(Self {
            width,
            height,
            lens: PerspectiveLens::for_surface(width, height)?,
            pose: CameraPose::default(),
            manipulator: ManipulatorTransform::IDENTITY,
        })
    }

    // ===== GETTERS =====

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn lens(&self) -> &PerspectiveLens {
        &self.lens
    }

    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    pub fn manipulator(&self) -> &ManipulatorTransform {
        &self.manipulator
    }

    // ===== DERIVED MATRICES =====

    /// Perspective projection of the current lens.
    pub fn projection_matrix(&self) -> Result<DMat4> {
        self.lens.projection_matrix()
    }

    /// Look-at view composed with the manipulator transform.
    pub fn view_matrix(&self) -> Result<DMat4> {
        build_view(&self.pose, &self.manipulator)
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Result<DMat4> {
        Ok(self.projection_matrix()? * self.view_matrix()?)
    }

    /// Both matrices of the current frame.
    pub fn frame_matrices(&self) -> Result<FrameMatrices> {
        Ok(FrameMatrices {
            projection: self.projection_matrix()?,
            view: self.view_matrix()?,
        })
    }

    /// Symmetric frustum bounds of the current lens.
    pub fn frustum_bounds(&self) -> FrustumBounds {
        self.lens.frustum_bounds()
    }

    // ===== SETTERS =====

    /// Track a new surface size; updates the aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            panel_bail!(LOG_SOURCE, DomainError, "surface size must be non-zero, got {}x{}", width, height);
        }
        self.width = width;
        self.height = height;
        self.lens.set_aspect_from_size(width, height)
    }

    pub fn set_lens(&mut self, lens: PerspectiveLens) {
        self.lens = lens;
    }

    pub fn set_fov(&mut self, fov_degrees: f64) {
        self.lens.fov_degrees = fov_degrees;
    }

    pub fn set_clip_planes(&mut self, near: f64, far: f64) {
        self.lens.set_clip_planes(near, far);
    }

    /// Replace fov, clip planes and aspect (`width / height`) at once.
    ///
    /// The surface size is left untouched: the aspect may describe an
    /// offscreen target of another shape. It stays in effect for every
    /// projection until the next `resize` recomputes it from the surface.
    pub fn set_view_parameters(&mut self, width: f64, height: f64, fov_degrees: f64, near: f64, far: f64) {
        self.lens = PerspectiveLens {
            fov_degrees,
            aspect: width / height,
            near,
            far,
        };
    }

    pub fn set_pose(&mut self, pose: CameraPose) {
        self.pose = pose;
    }

    pub fn set_eye(&mut self, eye: DVec3) {
        self.pose.eye = eye;
    }

    pub fn set_target(&mut self, target: DVec3) {
        self.pose.target = target;
    }

    pub fn set_manipulator(&mut self, manipulator: ManipulatorTransform) {
        self.manipulator = manipulator;
    }

    /// Drop any manipulator contribution.
    pub fn reset_manipulator(&mut self) {
        self.manipulator = ManipulatorTransform::IDENTITY;
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
