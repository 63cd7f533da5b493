/// Mock ShaderBackend for unit tests (no graphics context required)
///
/// Records every call and fails compiles or links whose sources contain
/// configurable markers.

#[cfg(test)]
use rustc_hash::FxHashMap;
#[cfg(test)]
use crate::error::{Error, Result};
#[cfg(test)]
use super::backend::{BuildOutput, ProgramHandle, ShaderBackend, ShaderHandle, ShaderStage};

/// One recorded backend call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Compile(ShaderStage, ShaderHandle),
    DeleteShader(ShaderHandle),
    Link(ShaderHandle, ShaderHandle, ProgramHandle),
    DeleteProgram(ProgramHandle),
    Use(ProgramHandle),
    Uniform(ProgramHandle, String, i32),
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockShaderBackend {
    next_handle: u32,
    sources: FxHashMap<u32, String>,
    pub calls: Vec<MockCall>,
    /// Compiles fail when the source contains this marker
    pub compile_error_marker: Option<String>,
    /// Links fail when either attached source contains this marker
    pub link_error_marker: Option<String>,
    /// Compiles succeed with a non-empty log when the source contains this marker
    pub warning_marker: Option<String>,
    /// Links succeed with a non-empty log when either attached source contains this marker
    pub link_warning_marker: Option<String>,
    /// Every call returns `BackendError` once set
    pub context_lost: bool,
}

#[cfg(test)]
impl MockShaderBackend {
    pub fn new() -> Self {
        Self { next_handle: 1, ..Default::default() }
    }

    fn allocate(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn check_context(&self) -> Result<()> {
        if self.context_lost {
            Err(Error::BackendError("context lost".to_string()))
        } else {
            Ok(())
        }
    }

    fn contains(source: &str, marker: &Option<String>) -> bool {
        marker.as_deref().map_or(false, |m| source.contains(m))
    }

    /// Shader objects created and not yet deleted
    pub fn live_shaders(&self) -> Vec<ShaderHandle> {
        self.live(|call| match call {
            MockCall::Compile(_, h) => Some(h.0),
            _ => None,
        }, |call| match call {
            MockCall::DeleteShader(h) => Some(h.0),
            _ => None,
        }).into_iter().map(ShaderHandle).collect()
    }

    /// Program objects created and not yet deleted
    pub fn live_programs(&self) -> Vec<ProgramHandle> {
        self.live(|call| match call {
            MockCall::Link(_, _, p) => Some(p.0),
            _ => None,
        }, |call| match call {
            MockCall::DeleteProgram(p) => Some(p.0),
            _ => None,
        }).into_iter().map(ProgramHandle).collect()
    }

    fn live(
        &self,
        created: impl Fn(&MockCall) -> Option<u32>,
        deleted: impl Fn(&MockCall) -> Option<u32>,
    ) -> Vec<u32> {
        let mut live: Vec<u32> = self.calls.iter().filter_map(&created).collect();
        for gone in self.calls.iter().filter_map(&deleted) {
            live.retain(|h| *h != gone);
        }
        live
    }
}

#[cfg(test)]
impl ShaderBackend for MockShaderBackend {
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<BuildOutput<ShaderHandle>> {
        self.check_context()?;
        let handle = ShaderHandle(self.allocate());
        self.sources.insert(handle.0, source.to_string());
        self.calls.push(MockCall::Compile(stage, handle));

        if Self::contains(source, &self.compile_error_marker) {
            return Ok(BuildOutput::failed(handle, format!("0:1(1): error: {:?} stage rejected", stage)));
        }
        if Self::contains(source, &self.warning_marker) {
            return Ok(BuildOutput { handle, success: true, log: "0:1(1): warning: unused variable".to_string() });
        }
        Ok(BuildOutput::ok(handle))
    }

    fn delete_shader(&mut self, shader: ShaderHandle) {
        self.calls.push(MockCall::DeleteShader(shader));
    }

    fn link_program(&mut self, vertex: ShaderHandle, fragment: ShaderHandle) -> Result<BuildOutput<ProgramHandle>> {
        self.check_context()?;
        let program = ProgramHandle(self.allocate());
        self.calls.push(MockCall::Link(vertex, fragment, program));

        let attached_contains = |marker: &Option<String>| {
            [vertex.0, fragment.0].iter().any(|h| {
                self.sources.get(h).map_or(false, |s| Self::contains(s, marker))
            })
        };
        if attached_contains(&self.link_error_marker) {
            return Ok(BuildOutput::failed(program, "error: vertex and fragment interfaces mismatch"));
        }
        if attached_contains(&self.link_warning_marker) {
            return Ok(BuildOutput {
                handle: program,
                success: true,
                log: "warning: varying `v_normal` written but never read".to_string(),
            });
        }
        Ok(BuildOutput::ok(program))
    }

    fn delete_program(&mut self, program: ProgramHandle) {
        self.calls.push(MockCall::DeleteProgram(program));
    }

    fn use_program(&mut self, program: ProgramHandle) -> Result<()> {
        self.check_context()?;
        self.calls.push(MockCall::Use(program));
        Ok(())
    }

    fn set_uniform_i32(&mut self, program: ProgramHandle, name: &str, value: i32) -> Result<()> {
        self.check_context()?;
        self.calls.push(MockCall::Uniform(program, name.to_string(), value));
        Ok(())
    }
}
