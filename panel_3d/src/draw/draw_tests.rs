use super::*;

// ============================================================================
// Background
// ============================================================================

#[test]
fn test_background_color_from_u8() {
    let color = BackgroundColor::from_u8(255, 0, 51);
    assert_eq!(color, BackgroundColor::new(1.0, 0.0, 0.2));
    assert_eq!(color.clear_value(), [1.0, 0.0, 0.2, 0.0]);
    assert_eq!(BackgroundColor::default(), BackgroundColor::WHITE);
}

#[test]
fn test_gradient_quad_is_dark_at_bottom_light_at_top() {
    let quad = gradient_background_quad();

    for vertex in &quad {
        let expected = if vertex.position[1] < 0.0 { GRADIENT_BOTTOM_COLOR } else { GRADIENT_TOP_COLOR };
        assert_eq!(vertex.color, expected);
        assert_eq!(vertex.position[0].abs(), 1.0);
        assert_eq!(vertex.position[1].abs(), 1.0);
    }
}

#[test]
fn test_gradient_triangles_cover_quad() {
    let quad = gradient_background_quad();
    let tris = gradient_background_triangles();

    assert_eq!(tris.len(), 6);
    for vertex in &tris {
        assert!(quad.contains(vertex));
    }
    assert_eq!(bytemuck::cast_slice::<ColorVertex, u8>(&tris).len(), 6 * 24);
}

#[test]
fn test_axis_lines_are_unit_segments_from_origin() {
    let lines = axis_lines();

    for (axis, pair) in lines.chunks(2).enumerate() {
        assert_eq!(pair[0].position, [0.0, 0.0, 0.0]);
        let mut tip = [0.0f32; 3];
        tip[axis] = 1.0;
        assert_eq!(pair[1].position, tip);
        assert_eq!(pair[1].color, [0.0, 0.0, 0.0]);
    }
}

// ============================================================================
// Render settings
// ============================================================================

#[test]
fn test_scene_settings() {
    let settings = RenderSettings::scene_3d(true, false);

    assert!(settings.depth_test);
    assert!(settings.transparency);
    assert!(!settings.line_smooth);
    assert_eq!(settings.polygon_offset, Some(PolygonOffset { factor: 1.0, units: 1e-5 }));
    assert_eq!(RenderSettings::default(), RenderSettings::scene_3d(false, false));
}

#[test]
fn test_flat_2d_settings_disable_everything() {
    let settings = RenderSettings::flat_2d();

    assert!(!settings.depth_test);
    assert!(!settings.transparency);
    assert!(!settings.lighting);
    assert!(!settings.texturing);
    assert!(settings.polygon_offset.is_none());
}

#[test]
fn test_clear_flags_combine() {
    let flags = ClearFlags::COLOR | ClearFlags::DEPTH;
    assert!(flags.contains(ClearFlags::COLOR));
    assert!(flags.contains(ClearFlags::DEPTH));
    assert!(!ClearFlags::COLOR.contains(ClearFlags::DEPTH));
}
