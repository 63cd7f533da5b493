//! Lighting module: the viewer's fixed array of point lights

mod light_rig;

pub use light_rig::{LightRig, LightUniforms, PointLight, INITIAL_LIGHT_POSITIONS, NUM_LIGHTS};
