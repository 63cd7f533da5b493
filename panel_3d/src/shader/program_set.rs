/// ShaderProgramSet: one linked program per shading mode.

use rustc_hash::FxHashMap;
use crate::error::{Error, Result};
use crate::{panel_bail, panel_debug, panel_err, panel_error, panel_info, panel_warn};
use super::backend::{ProgramHandle, ShaderBackend, ShaderHandle, ShaderStage};
use super::shading_mode::{ShaderLibrary, ShaderSource, ShadingMode};

/// Sampler uniform of the textured program.
pub const TEXTURE_SAMPLER_UNIFORM: &str = "texture";
/// Texture unit the textured program samples from.
pub const TEXTURE_SAMPLER_UNIT: i32 = 0;

const LOG_SOURCE: &str = "panel3d::shader";

/// Compiled programs for every `ShadingMode`, plus the active selection.
#[derive(Debug, Clone)]
pub struct ShaderProgramSet {
    programs: FxHashMap<ShadingMode, ProgramHandle>,
    active: Option<ShadingMode>,
}

impl ShaderProgramSet {
    /// Compile and link the program of every mode.
    ///
    /// Stops at the first failure. Objects created before the failure are
    /// deleted, so a failed call leaves nothing behind in the backend.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if the library lacks sources for some mode
    /// - `ShaderCompileFailed` / `ShaderLinkFailed` carrying the driver log
    /// - any backend error
    pub fn compile_all(backend: &mut dyn ShaderBackend, library: &ShaderLibrary) -> Result<Self> {
        let missing = library.missing_modes();
        if !missing.is_empty() {
            panel_bail!(LOG_SOURCE, InvalidResource, "no shader sources for {:?}", missing);
        }

        let mut programs = FxHashMap::default();
        for mode in ShadingMode::ALL {
            let source = library
                .get(mode)
                .ok_or_else(|| panel_err!(LOG_SOURCE, InvalidResource, "no shader sources for {:?}", mode))?;

            match compile_program(backend, mode, source) {
                Ok(program) => {
                    panel_debug!(LOG_SOURCE, "{:?} program linked as {:?}", mode, program);
                    programs.insert(mode, program);
                }
                Err(err) => {
                    panel_error!(LOG_SOURCE, "{}", err);
                    for (_, program) in programs.drain() {
                        backend.delete_program(program);
                    }
                    return Err(err);
                }
            }
        }

        panel_info!(LOG_SOURCE, "Compiled {} shading programs", programs.len());

        Ok(Self { programs, active: None })
    }

    /// Program handle of `mode`.
    pub fn program(&self, mode: ShadingMode) -> Option<ProgramHandle> {
        self.programs.get(&mode).copied()
    }

    /// Mode selected by the last successful `activate`.
    pub fn active(&self) -> Option<ShadingMode> {
        self.active
    }

    /// Make the program of `mode` current.
    ///
    /// The textured program also gets its sampler bound to unit 0.
    pub fn activate(&mut self, backend: &mut dyn ShaderBackend, mode: ShadingMode) -> Result<ShadingMode> {
        let program = self
            .program(mode)
            .ok_or_else(|| panel_err!(LOG_SOURCE, InvalidResource, "no program compiled for {:?}", mode))?;

        backend.use_program(program)?;
        if mode.uses_texture() {
            backend.set_uniform_i32(program, TEXTURE_SAMPLER_UNIFORM, TEXTURE_SAMPLER_UNIT)?;
        }

        self.active = Some(mode);
        Ok(mode)
    }

    /// Delete every program from the backend.
    pub fn release(self, backend: &mut dyn ShaderBackend) {
        for (_, program) in self.programs {
            backend.delete_program(program);
        }
    }
}

fn compile_stage(
    backend: &mut dyn ShaderBackend,
    mode: ShadingMode,
    stage: ShaderStage,
    source: &str,
) -> Result<ShaderHandle> {
    let output = backend.compile_shader(stage, source)?;
    if !output.success {
        backend.delete_shader(output.handle);
        return Err(Error::ShaderCompileFailed { mode, stage, log: output.log });
    }
    if !output.log.trim().is_empty() {
        panel_warn!(LOG_SOURCE, "{:?} {:?} shader info log:\n{}", mode, stage, output.log);
    }
    Ok(output.handle)
}

fn compile_program(
    backend: &mut dyn ShaderBackend,
    mode: ShadingMode,
    source: &ShaderSource,
) -> Result<ProgramHandle> {
    let vertex = compile_stage(backend, mode, ShaderStage::Vertex, &source.vertex)?;
    let fragment = match compile_stage(backend, mode, ShaderStage::Fragment, &source.fragment) {
        Ok(fragment) => fragment,
        Err(err) => {
            backend.delete_shader(vertex);
            return Err(err);
        }
    };

    let linked = backend.link_program(vertex, fragment);

    // Shaders are owned by the program once attached
    backend.delete_shader(vertex);
    backend.delete_shader(fragment);

    let output = linked?;
    if !output.success {
        backend.delete_program(output.handle);
        return Err(Error::ShaderLinkFailed { mode, log: output.log });
    }
    if !output.log.trim().is_empty() {
        panel_warn!(LOG_SOURCE, "{:?} program info log:\n{}", mode, output.log);
    }
    Ok(output.handle)
}

#[cfg(test)]
#[path = "program_set_tests.rs"]
mod tests;
