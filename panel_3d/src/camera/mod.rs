//! Camera module: projection, look-at view, and the viewer camera.
//!
//! Every matrix is a value returned from a pure function; nothing touches a
//! graphics context. The caller hands the results to whatever consumes them.

mod camera;
mod projection;
mod view;

pub use camera::{Camera, FrameMatrices, FrameUniforms};
pub use projection::{
    build_orthographic, build_perspective, build_screen_orthographic, extract_frustum,
    FrustumBounds, PerspectiveLens, ProjectionKind,
    DEFAULT_FAR, DEFAULT_FOV_DEGREES, DEFAULT_NEAR,
};
pub use view::{build_look_at, build_view, CameraPose, ManipulatorTransform};
