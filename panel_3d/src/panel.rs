/// Panel: state holder of an interactive 3D viewer surface.
///
/// Owns the camera, the 2D view, the light rig, background settings and the
/// compiled shading programs. Every per-frame quantity is returned as a
/// value; the host passes those values to its graphics backend.

use glam::DVec3;
use crate::camera::{Camera, FrameMatrices, ManipulatorTransform, PerspectiveLens};
use crate::draw::{BackgroundColor, ClearFlags, ClearState, RenderSettings};
use crate::error::Result;
use crate::lighting::LightRig;
use crate::shader::{ShaderBackend, ShaderLibrary, ShaderProgramSet, ShadingMode};
use crate::view2d::View2d;
use crate::{panel_debug, panel_err, panel_info};

const LOG_SOURCE: &str = "panel3d::Panel";

/// Panel configuration
#[derive(Debug, Clone)]
pub struct PanelConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Lens parameters (aspect is recomputed from width/height)
    pub lens: PerspectiveLens,
    /// Eye position
    pub eye: DVec3,
    /// Look-at target
    pub target: DVec3,
    /// Solid background color
    pub background: BackgroundColor,
    /// Draw the blue gradient behind the 3D scene
    pub gradient_background: bool,
    /// Enable alpha blending in the 3D pass
    pub transparency: bool,
    /// Enable line anti-aliasing in the 3D pass
    pub line_smooth: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            lens: PerspectiveLens::default(),
            eye: DVec3::new(0.0, 0.0, 3.0),
            target: DVec3::ZERO,
            background: BackgroundColor::WHITE,
            gradient_background: true,
            transparency: false,
            line_smooth: false,
        }
    }
}

pub struct Panel {
    camera: Camera,
    view_2d: View2d,
    lights: LightRig,
    background: BackgroundColor,
    gradient_background: bool,
    settings: RenderSettings,
    programs: Option<ShaderProgramSet>,
}

impl Panel {
    /// Create a panel from its configuration.
    ///
    /// # Errors
    ///
    /// `DomainError` for a zero-sized surface or an invalid lens/pose.
    pub fn new(config: PanelConfig) -> Result<Self> {
        let mut camera = Camera::new(config.width, config.height)?;
        let mut lens = config.lens;
        lens.set_aspect_from_size(config.width, config.height)?;
        lens.validate()?;
        camera.set_lens(lens);
        camera.set_eye(config.eye);
        camera.set_target(config.target);
        // Degenerate pose fails here, not on the first frame
        camera.view_matrix()?;

        panel_info!(LOG_SOURCE, "Panel created ({}x{})", config.width, config.height);

        Ok(Self {
            camera,
            view_2d: View2d::new(),
            lights: LightRig::new(),
            background: config.background,
            gradient_background: config.gradient_background,
            settings: RenderSettings::scene_3d(config.transparency, config.line_smooth),
            programs: None,
        })
    }

    // ===== ACCESSORS =====

    pub fn width(&self) -> u32 {
        self.camera.width()
    }

    pub fn height(&self) -> u32 {
        self.camera.height()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn view_2d(&self) -> &View2d {
        &self.view_2d
    }

    pub fn view_2d_mut(&mut self) -> &mut View2d {
        &mut self.view_2d
    }

    pub fn lights(&self) -> &LightRig {
        &self.lights
    }

    pub fn lights_mut(&mut self) -> &mut LightRig {
        &mut self.lights
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn set_background_color(&mut self, r: f32, g: f32, b: f32) {
        self.background = BackgroundColor::new(r, g, b);
    }

    pub fn set_background_color_u8(&mut self, r: u8, g: u8, b: u8) {
        self.background = BackgroundColor::from_u8(r, g, b);
    }

    pub fn is_gradient_background(&self) -> bool {
        self.gradient_background
    }

    pub fn set_gradient_background(&mut self, enabled: bool) {
        self.gradient_background = enabled;
    }

    /// Apply the arcball's current transform to the view.
    pub fn set_manipulator(&mut self, manipulator: ManipulatorTransform) {
        self.camera.set_manipulator(manipulator);
    }

    // ===== FRAME =====

    /// Track a new surface size (aspect ratio follows).
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.camera.resize(width, height)?;
        panel_debug!(LOG_SOURCE, "Resized to {}x{}", width, height);
        Ok(())
    }

    /// Projection and view of the 3D pass.
    pub fn frame_matrices(&self) -> Result<FrameMatrices> {
        self.camera.frame_matrices()
    }

    /// Clear of the 3D pass: color + depth, then the optional gradient.
    pub fn clear_state(&self) -> ClearState {
        ClearState {
            flags: ClearFlags::COLOR | ClearFlags::DEPTH,
            color: self.background.clear_value(),
            viewport: (self.width(), self.height()),
            draw_gradient: self.gradient_background,
            depth_test_after: true,
        }
    }

    /// Clear of the 2D pass: color only, depth test off, no gradient.
    pub fn clear_state_2d(&self) -> ClearState {
        ClearState {
            flags: ClearFlags::COLOR,
            color: self.background.clear_value(),
            viewport: (self.width(), self.height()),
            draw_gradient: false,
            depth_test_after: false,
        }
    }

    /// Switch to 2D drawing: flat state, gradient off.
    pub fn enter_2d(&mut self) {
        self.settings = RenderSettings::flat_2d();
        self.gradient_background = false;
    }

    /// Switch to 3D drawing with the given blending/smoothing options.
    pub fn enter_3d(&mut self, transparency: bool, line_smooth: bool) {
        self.settings = RenderSettings::scene_3d(transparency, line_smooth);
    }

    // ===== SHADERS =====

    /// Compile every shading program and make Phong current.
    ///
    /// Replaces (and releases) previously compiled programs on success.
    pub fn init_shaders(&mut self, backend: &mut dyn ShaderBackend, library: &ShaderLibrary) -> Result<()> {
        let mut programs = ShaderProgramSet::compile_all(backend, library)?;
        if let Err(err) = programs.activate(backend, ShadingMode::default()) {
            programs.release(backend);
            return Err(err);
        }

        if let Some(previous) = self.programs.replace(programs) {
            previous.release(backend);
        }
        Ok(())
    }

    /// Make the program of `mode` current.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if `init_shaders` has not succeeded yet.
    pub fn change_program(&mut self, backend: &mut dyn ShaderBackend, mode: ShadingMode) -> Result<ShadingMode> {
        let programs = self.programs.as_mut().ok_or_else(|| {
            panel_err!(LOG_SOURCE, InvalidResource, "shaders not initialized; call init_shaders first")
        })?;
        programs.activate(backend, mode)
    }

    /// Mode of the current program, if shaders are initialized.
    pub fn active_program(&self) -> Option<ShadingMode> {
        self.programs.as_ref().and_then(|p| p.active())
    }

    pub fn programs(&self) -> Option<&ShaderProgramSet> {
        self.programs.as_ref()
    }

    /// Release the compiled programs.
    pub fn release_shaders(&mut self, backend: &mut dyn ShaderBackend) {
        if let Some(programs) = self.programs.take() {
            programs.release(backend);
        }
    }
}

#[cfg(test)]
#[path = "panel_tests.rs"]
mod tests;
