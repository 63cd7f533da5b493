/// LightRig: four point lights with on/off switches.
///
/// Positions are homogeneous: `w = 0` is a directional light, `w = 1` a
/// positional one. Only light 0 is switched on initially.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};
use crate::error::Result;
use crate::panel_bail;

const LOG_SOURCE: &str = "panel3d::LightRig";

/// Number of lights in the rig.
pub const NUM_LIGHTS: usize = 4;

/// Initial (and reset) position of each light.
pub const INITIAL_LIGHT_POSITIONS: [Vec4; NUM_LIGHTS] = [
    Vec4::new(0.0, 0.0, 1.0, 0.0),
    Vec4::new(1.0, 1.0, 1.0, 0.0),
    Vec4::new(-1.0, 1.0, 1.0, 0.0),
    Vec4::new(0.0, -1.0, 1.0, 0.0),
];

/// A single light of the rig.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec4,
    pub enabled: bool,
}

/// Light block for shader upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct LightUniforms {
    pub positions: [Vec4; NUM_LIGHTS],
    /// Bit `i` set when light `i` is on
    pub enabled_mask: u32,
    pub _padding: [u32; 3],
}

#[derive(Debug, Clone)]
pub struct LightRig {
    lights: [PointLight; NUM_LIGHTS],
}

impl Default for LightRig {
    fn default() -> Self {
        Self::new()
    }
}

impl LightRig {
    pub fn new() -> Self {
        let mut lights = INITIAL_LIGHT_POSITIONS.map(|position| PointLight { position, enabled: false });
        lights[0].enabled = true;
        Self { lights }
    }

    fn check_index(index: usize) -> Result<()> {
        if index >= NUM_LIGHTS {
            panel_bail!(LOG_SOURCE, InvalidResource, "light index {} out of range (0..{})", index, NUM_LIGHTS);
        }
        Ok(())
    }

    pub fn lights(&self) -> &[PointLight; NUM_LIGHTS] {
        &self.lights
    }

    pub fn light(&self, index: usize) -> Result<&PointLight> {
        Self::check_index(index)?;
        Ok(&self.lights[index])
    }

    /// Current position of light `index`.
    pub fn position(&self, index: usize) -> Result<Vec4> {
        Ok(self.light(index)?.position)
    }

    /// Position light `index` started with.
    pub fn initial_position(&self, index: usize) -> Result<Vec4> {
        Self::check_index(index)?;
        Ok(INITIAL_LIGHT_POSITIONS[index])
    }

    pub fn set_position(&mut self, index: usize, position: Vec4) -> Result<()> {
        Self::check_index(index)?;
        self.lights[index].position = position;
        Ok(())
    }

    /// Set a directional light from a 3D vector (`w = 0`).
    pub fn set_position_vec3(&mut self, index: usize, position: Vec3) -> Result<()> {
        self.set_position(index, position.extend(0.0))
    }

    /// Restore the initial position of light `index`.
    pub fn reset_position(&mut self, index: usize) -> Result<()> {
        let initial = self.initial_position(index)?;
        self.set_position(index, initial)
    }

    /// Direction the light shines in, taken from its initial position: `(-x, -y, -z, 1)`.
    pub fn light_vector(&self, index: usize) -> Result<Vec4> {
        let p = self.initial_position(index)?;
        Ok(Vec4::new(-p.x, -p.y, -p.z, 1.0))
    }

    pub fn set_enabled(&mut self, index: usize, enabled: bool) -> Result<()> {
        Self::check_index(index)?;
        self.lights[index].enabled = enabled;
        Ok(())
    }

    pub fn is_enabled(&self, index: usize) -> Result<bool> {
        Ok(self.light(index)?.enabled)
    }

    /// Lights currently switched on, with their indices.
    pub fn enabled_lights(&self) -> impl Iterator<Item = (usize, &PointLight)> {
        self.lights.iter().enumerate().filter(|(_, light)| light.enabled)
    }

    pub fn uniforms(&self) -> LightUniforms {
        let enabled_mask = self
            .enabled_lights()
            .fold(0u32, |mask, (index, _)| mask | (1 << index));
        LightUniforms {
            positions: self.lights.map(|light| light.position),
            enabled_mask,
            _padding: [0; 3],
        }
    }
}

#[cfg(test)]
#[path = "light_rig_tests.rs"]
mod tests;
