/// Projection: perspective/orthographic matrix builders and their inverse.
///
/// All matrices follow the OpenGL conventions: column-major storage,
/// right-handed view space looking down -Z, clip-space depth in [-1, 1].
///
/// The math runs in `f64`. A far/near ratio of 1e7 (the viewer defaults)
/// leaves `m[10]` within a few ulps of -1 in `f32`, which destroys the far
/// plane on extraction. Convert with `as_mat4()` when uploading.
///
/// The builders run every frame and return their errors without logging.

use glam::{DMat4, DVec4};
use crate::error::{Error, Result};
use crate::panel_bail;

/// Default vertical field of view, in degrees.
pub const DEFAULT_FOV_DEGREES: f64 = 30.0;
/// Default near clipping distance.
pub const DEFAULT_NEAR: f64 = 0.01;
/// Default far clipping distance.
pub const DEFAULT_FAR: f64 = 100_000.0;

/// Kind of projection encoded in a 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    Perspective,
    Orthographic,
}

/// The six clipping values of a projection, as passed to
/// `glFrustum` (perspective) or `glOrtho` (orthographic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumBounds {
    pub kind: ProjectionKind,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub near: f64,
    pub far: f64,
}

impl FrustumBounds {
    /// Width over height of the near-plane window.
    pub fn aspect(&self) -> f64 {
        (self.right - self.left) / (self.top - self.bottom)
    }

    /// True when the near-plane window is centered on the view axis.
    pub fn is_symmetric(&self, epsilon: f64) -> bool {
        (self.left + self.right).abs() <= epsilon && (self.bottom + self.top).abs() <= epsilon
    }
}

fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::DomainError(format!("{} must be finite, got {}", name, value)))
    }
}

fn validate_clip_planes(near: f64, far: f64) -> Result<()> {
    require_finite("near", near)?;
    require_finite("far", far)?;
    if near <= 0.0 {
        return Err(Error::DomainError(format!("near must be > 0, got {}", near)));
    }
    if far <= near {
        return Err(Error::DomainError(format!(
            "far ({}) must be greater than near ({})", far, near
        )));
    }
    Ok(())
}

/// Build an OpenGL perspective projection matrix (the `gluPerspective` layout).
///
/// # Errors
///
/// - `PreconditionViolation` if `fov_degrees` is not in the open interval (0, 180)
/// - `DomainError` if `aspect <= 0`, `near <= 0`, `far <= near`, or any input is not finite
pub fn build_perspective(fov_degrees: f64, aspect: f64, near: f64, far: f64) -> Result<DMat4> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(Error::PreconditionViolation(format!(
            "fov must be in (0, 180) degrees, got {}", fov_degrees
        )));
    }
    require_finite("aspect", aspect)?;
    if aspect <= 0.0 {
        return Err(Error::DomainError(format!("aspect must be > 0, got {}", aspect)));
    }
    validate_clip_planes(near, far)?;

    let f = 1.0 / (fov_degrees * std::f64::consts::PI / 360.0).tan();
    let near_minus_far = near - far;

    Ok(DMat4::from_cols(
        DVec4::new(f / aspect, 0.0, 0.0, 0.0),
        DVec4::new(0.0, f, 0.0, 0.0),
        DVec4::new(0.0, 0.0, (far + near) / near_minus_far, -1.0),
        DVec4::new(0.0, 0.0, (2.0 * far * near) / near_minus_far, 0.0),
    ))
}

/// Build an OpenGL orthographic projection matrix (the `glOrtho` layout).
///
/// Unlike the perspective case, `near` may be zero or negative.
///
/// # Errors
///
/// `DomainError` if any pair of opposite planes coincides or an input is not finite.
pub fn build_orthographic(
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    near: f64,
    far: f64,
) -> Result<DMat4> {
    for (name, value) in [
        ("left", left), ("right", right),
        ("bottom", bottom), ("top", top),
        ("near", near), ("far", far),
    ] {
        require_finite(name, value)?;
    }
    if left == right || bottom == top || near == far {
        return Err(Error::DomainError(format!(
            "degenerate orthographic volume: l={} r={} b={} t={} n={} f={}",
            left, right, bottom, top, near, far
        )));
    }

    let rl = right - left;
    let tb = top - bottom;
    let fne = far - near;

    Ok(DMat4::from_cols(
        DVec4::new(2.0 / rl, 0.0, 0.0, 0.0),
        DVec4::new(0.0, 2.0 / tb, 0.0, 0.0),
        DVec4::new(0.0, 0.0, -2.0 / fne, 0.0),
        DVec4::new(-(right + left) / rl, -(top + bottom) / tb, -(far + near) / fne, 1.0),
    ))
}

/// Pixel-space projection for 2D overlays: `glOrtho(0, w, 0, h, -1, 1)`.
///
/// Origin at the bottom-left corner, y up.
pub fn build_screen_orthographic(width: u32, height: u32) -> Result<DMat4> {
    if width == 0 || height == 0 {
        return Err(Error::DomainError(format!(
            "surface size must be non-zero, got {}x{}", width, height
        )));
    }
    build_orthographic(0.0, width as f64, 0.0, height as f64, -1.0, 1.0)
}

/// Recover the frustum bounds a projection matrix was built from.
///
/// Classification reads the flattened element `m[15]` (row 3, column 3):
/// it is 0 for a perspective matrix (w' = -z) and 1 for an orthographic one.
///
/// The closed forms invert the general `glFrustum` / `glOrtho` layouts, so
/// off-axis matrices yield their asymmetric bounds. A matrix from
/// [`build_perspective`] yields the symmetric frustum of its fov and aspect.
pub fn extract_frustum(matrix: &DMat4) -> FrustumBounds {
    let m = matrix.to_cols_array();

    if m[15] == 0.0 {
        let x = m[0];  // 2N / (R-L)
        let y = m[5];  // 2N / (T-B)
        let a = m[8];  // (R+L) / (R-L)
        let b = m[9];  // (T+B) / (T-B)
        let c = m[10]; // -(F+N) / (F-N)
        let d = m[14]; // -2FN / (F-N)

        let near = -d / (1.0 - c);
        let far = (c - 1.0) * near / (c + 1.0);
        let left = near * (a - 1.0) / x;
        let right = 2.0 * near / x + left;
        let bottom = near * (b - 1.0) / y;
        let top = 2.0 * near / y + bottom;

        FrustumBounds { kind: ProjectionKind::Perspective, left, right, bottom, top, near, far }
    } else {
        let x = m[0];  //  2 / (R-L)
        let y = m[5];  //  2 / (T-B)
        let z = m[10]; // -2 / (F-N)
        let a = m[12]; // -(R+L) / (R-L)
        let b = m[13]; // -(T+B) / (T-B)
        let c = m[14]; // -(F+N) / (F-N)

        let right = -(a - 1.0) / x;
        let left = right - 2.0 / x;
        let top = -(b - 1.0) / y;
        let bottom = top - 2.0 / y;
        let far = (c - 1.0) / z;
        let near = far + 2.0 / z;

        FrustumBounds { kind: ProjectionKind::Orthographic, left, right, bottom, top, near, far }
    }
}

/// Perspective lens parameters of the viewer: field of view, aspect and clip planes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveLens {
    /// Vertical field of view in degrees, in (0, 180)
    pub fov_degrees: f64,
    /// Width / height of the surface
    pub aspect: f64,
    /// Near clipping distance (> 0)
    pub near: f64,
    /// Far clipping distance (> near)
    pub far: f64,
}

impl Default for PerspectiveLens {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            aspect: 1.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
        }
    }
}

impl PerspectiveLens {
    /// Default lens with the aspect ratio of a `width` x `height` surface.
    pub fn for_surface(width: u32, height: u32) -> Result<Self> {
        let mut lens = Self::default();
        lens.set_aspect_from_size(width, height)?;
        Ok(lens)
    }

    /// Set `aspect = width / height`.
    pub fn set_aspect_from_size(&mut self, width: u32, height: u32) -> Result<()> {
        if height == 0 {
            panel_bail!("panel3d::PerspectiveLens", DomainError, "cannot derive aspect from zero height (width {})", width);
        }
        self.aspect = width as f64 / height as f64;
        Ok(())
    }

    /// Set the near and far clipping distances (validated on use).
    pub fn set_clip_planes(&mut self, near: f64, far: f64) {
        self.near = near;
        self.far = far;
    }

    /// Check every lens invariant without building a matrix.
    pub fn validate(&self) -> Result<()> {
        build_perspective(self.fov_degrees, self.aspect, self.near, self.far).map(|_| ())
    }

    /// Projection matrix of this lens.
    pub fn projection_matrix(&self) -> Result<DMat4> {
        build_perspective(self.fov_degrees, self.aspect, self.near, self.far)
    }

    /// Symmetric frustum bounds derived directly from the lens parameters.
    ///
    /// Matches `extract_frustum(&self.projection_matrix()?)` up to rounding.
    pub fn frustum_bounds(&self) -> FrustumBounds {
        let top = self.near * (self.fov_degrees * std::f64::consts::PI / 360.0).tan();
        let bottom = -top;
        FrustumBounds {
            kind: ProjectionKind::Perspective,
            left: bottom * self.aspect,
            right: top * self.aspect,
            bottom,
            top,
            near: self.near,
            far: self.far,
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
