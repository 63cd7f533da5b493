/// View: look-at camera pose and the composed viewer view matrix.
///
/// The manipulator contribution (arcball rotation, dolly, pivot) is computed
/// elsewhere; this module only composes it after the look-at transform.

use glam::{DMat4, DQuat, DVec3, DVec4};
use crate::error::{Error, Result};

/// Relative tolerance below which `forward` and `up` count as parallel.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Eye, target and up hint of a look-at camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space
    pub eye: DVec3,
    /// Point the eye looks at
    pub target: DVec3,
    /// Up hint (need not be orthogonal to the view direction)
    pub up: DVec3,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            eye: DVec3::new(0.0, 0.0, 3.0),
            target: DVec3::ZERO,
            up: DVec3::Y,
        }
    }
}

impl CameraPose {
    pub fn new(eye: DVec3, target: DVec3, up: DVec3) -> Self {
        Self { eye, target, up }
    }

    /// Unnormalized view vector (`target - eye`).
    pub fn view_vector(&self) -> DVec3 {
        self.target - self.eye
    }

    /// Orthonormal `(side, true_up, forward)` basis of this pose.
    ///
    /// # Errors
    ///
    /// `DomainError` if eye == target, up is zero, or up is parallel to forward.
    pub fn basis(&self) -> Result<(DVec3, DVec3, DVec3)> {
        let view = self.view_vector();
        let view_len = view.length();
        if !(view_len > 0.0) || !view_len.is_finite() {
            return Err(Error::DomainError(format!(
                "eye {:?} and target {:?} coincide: forward vector is zero", self.eye, self.target
            )));
        }
        let up_len = self.up.length();
        if !(up_len > 0.0) || !up_len.is_finite() {
            return Err(Error::DomainError("up vector has zero length".to_string()));
        }

        let forward = view / view_len;
        let cross = forward.cross(self.up);
        if cross.length() <= PARALLEL_EPSILON * up_len {
            return Err(Error::DomainError(format!(
                "up {:?} is parallel to forward {:?}", self.up, forward
            )));
        }
        let side = cross.normalize();
        let true_up = side.cross(forward);

        Ok((side, true_up, forward))
    }
}

/// Incremental transform produced by an interactive manipulator (arcball).
///
/// Applied in view space as `translate(0, 0, zoom_offset) * rotation * translate(-pivot_offset)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManipulatorTransform {
    /// Accumulated rotation about the pivot
    pub rotation: DMat4,
    /// Dolly distance along the view axis
    pub zoom_offset: f64,
    /// Pivot point the rotation is centered on
    pub pivot_offset: DVec3,
}

impl ManipulatorTransform {
    /// No manipulator contribution.
    pub const IDENTITY: Self = Self {
        rotation: DMat4::IDENTITY,
        zoom_offset: 0.0,
        pivot_offset: DVec3::ZERO,
    };

    /// Manipulator state from an arcball quaternion.
    pub fn from_rotation(rotation: DQuat, zoom_offset: f64, pivot_offset: DVec3) -> Self {
        Self {
            rotation: DMat4::from_quat(rotation),
            zoom_offset,
            pivot_offset,
        }
    }

    /// The composed manipulator matrix.
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_translation(DVec3::new(0.0, 0.0, self.zoom_offset))
            * self.rotation
            * DMat4::from_translation(-self.pivot_offset)
    }
}

impl Default for ManipulatorTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Build the look-at view matrix of a pose (the `gluLookAt` layout).
///
/// Rows of the rotation block are `{side, true_up, -forward}`, followed by a
/// translation by `-eye`.
pub fn build_look_at(pose: &CameraPose) -> Result<DMat4> {
    let (side, up, forward) = pose.basis()?;

    // Columns of the transpose: row i of the rotation is (side, up, -forward)[i]
    let rotation = DMat4::from_cols(
        DVec4::new(side.x, up.x, -forward.x, 0.0),
        DVec4::new(side.y, up.y, -forward.y, 0.0),
        DVec4::new(side.z, up.z, -forward.z, 0.0),
        DVec4::W,
    );

    Ok(rotation * DMat4::from_translation(-pose.eye))
}

/// Build the viewer's view matrix: look-at composed with the manipulator.
pub fn build_view(pose: &CameraPose, manipulator: &ManipulatorTransform) -> Result<DMat4> {
    Ok(build_look_at(pose)? * manipulator.matrix())
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
