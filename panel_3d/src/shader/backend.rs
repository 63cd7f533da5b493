/// ShaderBackend trait: the seam between program management and the graphics API.
///
/// Mirrors the GL object model: a compile or link always yields an object
/// handle together with a status flag and the info log, so the caller
/// decides what to do with both.

use crate::error::Result;

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

/// Backend handle of a shader object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u32);

/// Backend handle of a linked program object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramHandle(pub u32);

/// Outcome of a compile or link step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutput<H> {
    /// Object created by the step (valid even when `success` is false)
    pub handle: H,
    /// Compile/link status reported by the driver
    pub success: bool,
    /// Info log (empty when the driver had nothing to say)
    pub log: String,
}

impl<H> BuildOutput<H> {
    pub fn ok(handle: H) -> Self {
        Self { handle, success: true, log: String::new() }
    }

    pub fn failed(handle: H, log: impl Into<String>) -> Self {
        Self { handle, success: false, log: log.into() }
    }
}

/// Graphics API operations needed to build and select shading programs.
///
/// Calls are synchronous and must be made on the thread that owns the
/// graphics context. `Err` is reserved for backend failures (lost context,
/// invalid handles); compile and link diagnostics travel in `BuildOutput`.
pub trait ShaderBackend {
    /// Create a shader object of `stage` and compile `source` into it.
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<BuildOutput<ShaderHandle>>;

    /// Delete a shader object (attached shaders live on until their program is deleted).
    fn delete_shader(&mut self, shader: ShaderHandle);

    /// Create a program, attach both shaders and link it.
    fn link_program(&mut self, vertex: ShaderHandle, fragment: ShaderHandle) -> Result<BuildOutput<ProgramHandle>>;

    /// Delete a program object.
    fn delete_program(&mut self, program: ProgramHandle);

    /// Make `program` current for subsequent draws.
    fn use_program(&mut self, program: ProgramHandle) -> Result<()>;

    /// Set an integer (or sampler) uniform of `program` by name.
    fn set_uniform_i32(&mut self, program: ProgramHandle, name: &str, value: i32) -> Result<()>;
}
