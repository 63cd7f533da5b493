use glam::{DQuat, DVec3};
use crate::camera::{extract_frustum, ManipulatorTransform, ProjectionKind};
use crate::draw::ClearFlags;
use crate::error::Error;
use crate::shader::{MockCall, MockShaderBackend, ShaderLibrary, ShaderSource, ShadingMode};
use super::*;

fn full_library() -> ShaderLibrary {
    ShadingMode::ALL.iter().fold(ShaderLibrary::new(), |library, mode| {
        library.with(*mode, ShaderSource::new(format!("{:?}.vert", mode), format!("{:?}.frag", mode)))
    })
}

#[test]
fn test_new_panel_with_defaults() {
    let panel = Panel::new(PanelConfig::default()).unwrap();

    assert_eq!(panel.width(), 640);
    assert_eq!(panel.height(), 480);
    assert!(panel.is_gradient_background());
    assert_eq!(panel.background(), BackgroundColor::WHITE);
    assert!(panel.lights().is_enabled(0).unwrap());
    assert!(panel.active_program().is_none());
}

#[test]
fn test_new_panel_rejects_invalid_config() {
    let config = PanelConfig { height: 0, ..PanelConfig::default() };
    assert!(matches!(Panel::new(config), Err(Error::DomainError(_))));

    let config = PanelConfig { target: DVec3::new(0.0, 0.0, 3.0), ..PanelConfig::default() };
    assert!(matches!(Panel::new(config), Err(Error::DomainError(_))));

    let mut lens = PerspectiveLens::default();
    lens.fov_degrees = 0.0;
    let config = PanelConfig { lens, ..PanelConfig::default() };
    assert!(matches!(Panel::new(config), Err(Error::PreconditionViolation(_))));
}

#[test]
fn test_frame_matrices_follow_resize() {
    let mut panel = Panel::new(PanelConfig::default()).unwrap();
    panel.resize(1200, 400).unwrap();

    let bounds = extract_frustum(&panel.frame_matrices().unwrap().projection);
    assert_eq!(bounds.kind, ProjectionKind::Perspective);
    assert!((bounds.aspect() - 3.0).abs() < 1e-6);
}

#[test]
fn test_manipulator_feeds_view() {
    let mut panel = Panel::new(PanelConfig::default()).unwrap();
    let before = panel.frame_matrices().unwrap().view;

    panel.set_manipulator(ManipulatorTransform::from_rotation(
        DQuat::from_rotation_z(1.0), 0.0, DVec3::ZERO,
    ));
    assert_ne!(panel.frame_matrices().unwrap().view, before);
}

#[test]
fn test_clear_states() {
    let mut panel = Panel::new(PanelConfig::default()).unwrap();
    panel.set_background_color_u8(0, 0, 255);

    let clear = panel.clear_state();
    assert_eq!(clear.flags, ClearFlags::COLOR | ClearFlags::DEPTH);
    assert_eq!(clear.color, [0.0, 0.0, 1.0, 0.0]);
    assert_eq!(clear.viewport, (640, 480));
    assert!(clear.draw_gradient);

    let clear_2d = panel.clear_state_2d();
    assert_eq!(clear_2d.flags, ClearFlags::COLOR);
    assert!(!clear_2d.draw_gradient);
    assert!(!clear_2d.depth_test_after);
}

#[test]
fn test_enter_2d_disables_gradient() {
    let mut panel = Panel::new(PanelConfig::default()).unwrap();
    panel.enter_2d();

    assert!(!panel.is_gradient_background());
    assert!(!panel.settings().depth_test);

    panel.enter_3d(true, true);
    assert!(panel.settings().depth_test);
    assert!(panel.settings().transparency);
    assert!(panel.settings().line_smooth);
}

#[test]
fn test_init_shaders_activates_phong() {
    let mut backend = MockShaderBackend::new();
    let mut panel = Panel::new(PanelConfig::default()).unwrap();

    panel.init_shaders(&mut backend, &full_library()).unwrap();

    assert_eq!(panel.active_program(), Some(ShadingMode::Phong));
    let phong = panel.programs().unwrap().program(ShadingMode::Phong).unwrap();
    assert_eq!(backend.calls.last(), Some(&MockCall::Use(phong)));
}

#[test]
fn test_change_program_requires_shaders() {
    let mut backend = MockShaderBackend::new();
    let mut panel = Panel::new(PanelConfig::default()).unwrap();

    let err = panel.change_program(&mut backend, ShadingMode::Wireframe).unwrap_err();
    assert!(matches!(err, Error::InvalidResource(_)));
}

#[test]
fn test_change_program_switches_mode() {
    let mut backend = MockShaderBackend::new();
    let mut panel = Panel::new(PanelConfig::default()).unwrap();
    panel.init_shaders(&mut backend, &full_library()).unwrap();

    panel.change_program(&mut backend, ShadingMode::Wireframe).unwrap();
    assert_eq!(panel.active_program(), Some(ShadingMode::Wireframe));
}

#[test]
fn test_reinit_releases_previous_programs() {
    let mut backend = MockShaderBackend::new();
    let mut panel = Panel::new(PanelConfig::default()).unwrap();

    panel.init_shaders(&mut backend, &full_library()).unwrap();
    panel.init_shaders(&mut backend, &full_library()).unwrap();
    assert_eq!(backend.live_programs().len(), 5);

    panel.release_shaders(&mut backend);
    assert!(backend.live_programs().is_empty());
    assert!(panel.active_program().is_none());
}

#[test]
fn test_failed_init_keeps_previous_programs() {
    let mut backend = MockShaderBackend::new();
    let mut panel = Panel::new(PanelConfig::default()).unwrap();
    panel.init_shaders(&mut backend, &full_library()).unwrap();
    panel.change_program(&mut backend, ShadingMode::Color).unwrap();

    backend.compile_error_marker = Some("Gouraud".to_string());
    let err = panel.init_shaders(&mut backend, &full_library()).unwrap_err();

    assert!(matches!(err, Error::ShaderCompileFailed { mode: ShadingMode::Gouraud, .. }));
    assert_eq!(panel.active_program(), Some(ShadingMode::Color));
    assert_eq!(backend.live_programs().len(), 5);
}
