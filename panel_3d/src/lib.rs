/*!
# Panel3D

State and transforms behind an interactive 3D viewer surface.

The crate owns what a viewer panel needs between frames (lens, camera
pose, manipulator transform, lights, background, shading-program selection)
and hands out per-frame values: projection and view matrices, clear state,
helper geometry. It never talks to a graphics context directly; shader
building goes through the `ShaderBackend` trait implemented by the host.

## Architecture

- **camera**: perspective/orthographic builders, frustum extraction, look-at view
- **shader**: `ShadingMode` and one compiled program per mode
- **lighting**: fixed array of four point lights
- **draw**: clear state, gradient/axis geometry, texture upload and capture buffers
- **view2d**: pan/zoom of the pixel-space 2D view
- **Panel**: ties the above together
*/

// Internal modules
mod error;
mod panel;
pub mod camera;
pub mod draw;
pub mod lighting;
pub mod log;
pub mod shader;
pub mod view2d;

// Main panel3d namespace module
pub mod panel3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Viewer state holder
    pub use crate::panel::{Panel, PanelConfig};

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            log, log_detailed, reset_logger, set_logger,
            DefaultLogger, LogEntry, LogSeverity, Logger,
        };
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod shader {
        pub use crate::shader::*;
    }

    pub mod lighting {
        pub use crate::lighting::*;
    }

    pub mod draw {
        pub use crate::draw::*;
    }

    pub use crate::view2d::View2d;
}

// Re-export math library at crate root
pub use glam;
