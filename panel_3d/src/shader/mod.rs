//! Shader module - shading modes and their compiled programs

mod backend;
mod mock_backend;
mod program_set;
mod shading_mode;

pub use backend::{BuildOutput, ProgramHandle, ShaderBackend, ShaderHandle, ShaderStage};
pub use program_set::{ShaderProgramSet, TEXTURE_SAMPLER_UNIFORM, TEXTURE_SAMPLER_UNIT};
pub use shading_mode::{ShaderLibrary, ShaderSource, ShadingMode};

#[cfg(test)]
pub(crate) use mock_backend::{MockCall, MockShaderBackend};
