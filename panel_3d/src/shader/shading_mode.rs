/// Shading modes of the viewer and the sources that implement them.

use rustc_hash::FxHashMap;

/// Closed set of shading programs the viewer can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadingMode {
    /// Per-fragment lighting
    #[default]
    Phong,
    /// Per-vertex lighting
    Gouraud,
    /// Flat-colored edges
    Wireframe,
    /// Per-fragment lighting modulated by a 2D texture
    PhongTexture,
    /// Unlit per-vertex color
    Color,
}

impl ShadingMode {
    /// Every mode, in compilation order.
    pub const ALL: [ShadingMode; 5] = [
        ShadingMode::Phong,
        ShadingMode::Gouraud,
        ShadingMode::Wireframe,
        ShadingMode::PhongTexture,
        ShadingMode::Color,
    ];

    /// True if the program samples a texture.
    pub fn uses_texture(self) -> bool {
        matches!(self, ShadingMode::PhongTexture)
    }
}

/// Vertex + fragment source pair of one program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderSource {
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }
}

/// Caller-supplied sources for each shading mode.
#[derive(Debug, Clone, Default)]
pub struct ShaderLibrary {
    sources: FxHashMap<ShadingMode, ShaderSource>,
}

impl ShaderLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the sources of `mode`.
    pub fn insert(&mut self, mode: ShadingMode, source: ShaderSource) -> Option<ShaderSource> {
        self.sources.insert(mode, source)
    }

    /// Builder-style `insert`.
    pub fn with(mut self, mode: ShadingMode, source: ShaderSource) -> Self {
        self.sources.insert(mode, source);
        self
    }

    pub fn get(&self, mode: ShadingMode) -> Option<&ShaderSource> {
        self.sources.get(&mode)
    }

    /// Modes without sources, in `ShadingMode::ALL` order.
    pub fn missing_modes(&self) -> Vec<ShadingMode> {
        ShadingMode::ALL
            .iter()
            .copied()
            .filter(|mode| !self.sources.contains_key(mode))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_modes().is_empty()
    }
}
