use glam::{DMat4, DQuat, DVec3, Mat4};
use crate::error::Error;
use super::super::projection::{extract_frustum, ProjectionKind};
use super::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_camera_new_uses_viewer_defaults() {
    let camera = Camera::new(800, 600).unwrap();

    assert_eq!(camera.width(), 800);
    assert_eq!(camera.height(), 600);
    assert_eq!(camera.lens().fov_degrees, 30.0);
    assert!((camera.lens().aspect - 800.0 / 600.0).abs() < 1e-12);
    assert_eq!(camera.pose().eye, DVec3::new(0.0, 0.0, 3.0));
    assert_eq!(camera.pose().target, DVec3::ZERO);
    assert_eq!(*camera.manipulator(), ManipulatorTransform::IDENTITY);
}

#[test]
fn test_camera_new_rejects_empty_surface() {
    assert!(matches!(Camera::new(0, 600), Err(Error::DomainError(_))));
    assert!(matches!(Camera::new(800, 0), Err(Error::DomainError(_))));
}

// ============================================================================
// Derived matrices
// ============================================================================

#[test]
fn test_view_projection_matrix() {
    let camera = Camera::new(1920, 1080).unwrap();

    let expected = camera.projection_matrix().unwrap() * camera.view_matrix().unwrap();
    assert_eq!(camera.view_projection_matrix().unwrap(), expected);
    assert_eq!(camera.frame_matrices().unwrap().view_projection(), expected);
}

#[test]
fn test_projection_round_trips_through_extractor() {
    let camera = Camera::new(1024, 768).unwrap();
    let bounds = extract_frustum(&camera.projection_matrix().unwrap());

    assert_eq!(bounds.kind, ProjectionKind::Perspective);
    assert!(((bounds.near - 0.01) / 0.01).abs() < 1e-4);
    assert!(((bounds.far - 100_000.0) / 100_000.0).abs() < 1e-4);
    assert!((bounds.aspect() - 1024.0 / 768.0).abs() < 1e-6);
}

#[test]
fn test_manipulator_changes_view_only() {
    let mut camera = Camera::new(640, 480).unwrap();
    let before = camera.frame_matrices().unwrap();

    camera.set_manipulator(ManipulatorTransform::from_rotation(
        DQuat::from_rotation_x(0.3), -1.0, DVec3::ZERO,
    ));
    let after = camera.frame_matrices().unwrap();

    assert_eq!(before.projection, after.projection);
    assert_ne!(before.view, after.view);

    camera.reset_manipulator();
    assert_eq!(camera.view_matrix().unwrap(), before.view);
}

#[test]
fn test_degenerate_pose_surfaces_domain_error() {
    let mut camera = Camera::new(640, 480).unwrap();
    camera.set_target(DVec3::new(0.0, 0.0, 3.0));

    assert!(matches!(camera.view_matrix(), Err(Error::DomainError(_))));
    assert!(matches!(camera.frame_matrices(), Err(Error::DomainError(_))));
}

#[test]
fn test_invalid_fov_surfaces_precondition_violation() {
    let mut camera = Camera::new(640, 480).unwrap();
    camera.set_fov(180.0);
    assert!(matches!(camera.projection_matrix(), Err(Error::PreconditionViolation(_))));
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_resize_updates_aspect() {
    let mut camera = Camera::new(800, 600).unwrap();
    camera.resize(1000, 250).unwrap();

    assert_eq!(camera.width(), 1000);
    assert_eq!(camera.height(), 250);
    assert!((camera.lens().aspect - 4.0).abs() < 1e-12);
    assert!(camera.resize(10, 0).is_err());
    assert_eq!(camera.height(), 250);
}

#[test]
fn test_set_view_parameters() {
    let mut camera = Camera::new(800, 600).unwrap();
    camera.set_view_parameters(300.0, 100.0, 45.0, 1.0, 500.0);

    let lens = camera.lens();
    assert_eq!(lens.fov_degrees, 45.0);
    assert_eq!(lens.aspect, 3.0);
    assert_eq!(lens.near, 1.0);
    assert_eq!(lens.far, 500.0);
    assert_eq!(camera.width(), 800);
}

#[test]
fn test_set_clip_planes_and_bounds() {
    let mut camera = Camera::new(500, 500).unwrap();
    camera.set_clip_planes(2.0, 20.0);

    let bounds = camera.frustum_bounds();
    assert_eq!(bounds.near, 2.0);
    assert_eq!(bounds.far, 20.0);
    assert!((bounds.right + bounds.left).abs() < 1e-12);
    assert!((bounds.right - bounds.top).abs() < 1e-12);
}

// ============================================================================
// Frame uniforms
// ============================================================================

#[test]
fn test_frame_uniforms_layout() {
    let matrices = FrameMatrices {
        projection: DMat4::from_scale(DVec3::splat(2.0)),
        view: DMat4::from_translation(DVec3::new(1.0, 2.0, 3.0)),
    };
    let uniforms = matrices.uniforms();

    assert_eq!(uniforms.as_bytes().len(), 3 * 64);
    assert_eq!(uniforms.view, Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(uniforms.view_projection, matrices.view_projection().as_mat4());
}

#[test]
fn test_view_parameters_aspect_holds_until_resize() {
    let mut camera = Camera::new(800, 600).unwrap();
    camera.set_view_parameters(200.0, 100.0, 30.0, 0.1, 100.0);

    // Later projections keep the explicit aspect, not the surface's 4:3
    let bounds = extract_frustum(&camera.projection_matrix().unwrap());
    assert!((bounds.aspect() - 2.0).abs() < 1e-9);
    let bounds = extract_frustum(&camera.frame_matrices().unwrap().projection);
    assert!((bounds.aspect() - 2.0).abs() < 1e-9);

    camera.resize(800, 600).unwrap();
    let bounds = extract_frustum(&camera.projection_matrix().unwrap());
    assert!((bounds.aspect() - 800.0 / 600.0).abs() < 1e-9);
    assert_eq!(camera.lens().fov_degrees, 30.0);
    assert_eq!(camera.lens().near, 0.1);
}
