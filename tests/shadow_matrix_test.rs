//! The light-space matrix chain is plain math, so unlike the rendered output
//! it can be checked without a GPU.

use cgmath::{EuclideanSpace, InnerSpace, SquareMatrix};

use umbra_ngin::pipelines::shadow::{
    LIGHT_FAR, LIGHT_NEAR, frustum_world_matrix, light_projection_matrix, light_view_matrix,
    light_view_proj, light_world_matrix, reverse_light_direction, texture_matrix,
};
use umbra_ngin::settings::ShadowSettings;

const EPS: f32 = 1e-4;

fn assert_near(actual: f32, expected: f32, context: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{}: expected {} but got {}",
        context,
        expected,
        actual
    );
}

#[test]
fn reverse_light_direction_points_from_target_to_light() {
    let settings = ShadowSettings::default();
    let direction = reverse_light_direction(&settings);

    assert_near(direction.magnitude(), 1.0, "direction length");
    let expected = (settings.light_pos - settings.light_target).normalize();
    assert_near(direction.dot(expected), 1.0, "direction alignment");
}

#[test]
fn light_view_moves_the_light_to_the_origin() {
    let settings = ShadowSettings::default();
    let eye = light_view_matrix(&settings) * settings.light_pos.to_homogeneous();

    assert_near(eye.x, 0.0, "eye x");
    assert_near(eye.y, 0.0, "eye y");
    assert_near(eye.z, 0.0, "eye z");
    assert_near(eye.w, 1.0, "eye w");
}

#[test]
fn light_world_is_the_inverse_of_the_view() {
    let settings = ShadowSettings::default();
    let product = light_world_matrix(&settings) * light_view_matrix(&settings);

    let identity = cgmath::Matrix4::<f32>::identity();
    for column in 0..4 {
        for row in 0..4 {
            assert_near(
                product[column][row],
                identity[column][row],
                &format!("product[{}][{}]", column, row),
            );
        }
    }
}

#[test]
fn texture_matrix_maps_the_frustum_axis_to_the_map_center() {
    let settings = ShadowSettings::default();
    let forward = -reverse_light_direction(&settings);
    let midpoint = settings.light_pos + forward * ((LIGHT_NEAR + LIGHT_FAR) / 2.0);

    let projected = texture_matrix(&settings) * midpoint.to_homogeneous();
    let coord = projected.truncate() / projected.w;

    assert_near(coord.x, 0.5, "center u");
    assert_near(coord.y, 0.5, "center v");
    // Orthographic depth is linear between the near and far plane.
    assert_near(
        coord.z,
        ((LIGHT_NEAR + LIGHT_FAR) / 2.0 - LIGHT_NEAR) / (LIGHT_FAR - LIGHT_NEAR),
        "center depth",
    );
}

#[test]
fn texture_depth_spans_near_to_far() {
    let settings = ShadowSettings::default();
    let forward = -reverse_light_direction(&settings);

    for (distance, expected) in [(LIGHT_NEAR, 0.0), (LIGHT_FAR, 1.0)] {
        let point = settings.light_pos + forward * distance;
        let projected = texture_matrix(&settings) * point.to_homogeneous();
        let coord = projected.truncate() / projected.w;
        assert_near(coord.z, expected, "reference depth");
    }
}

#[test]
fn perspective_toggle_changes_the_projection_kind() {
    let mut settings = ShadowSettings::default();
    let probe = cgmath::Vector4::new(0.0, 0.0, -2.0, 1.0);

    // An orthographic projection leaves w untouched, a perspective one
    // moves the view depth into it.
    let orthographic = light_projection_matrix(&settings) * probe;
    assert_near(orthographic.w, 1.0, "orthographic w");

    settings.toggle_perspective();
    let perspective = light_projection_matrix(&settings) * probe;
    assert_near(perspective.w, 2.0, "perspective w");
}

#[test]
fn frustum_world_round_trips_the_clip_cube() {
    let settings = ShadowSettings::default();
    let world = frustum_world_matrix(&settings);
    let view_proj = light_view_proj(&settings);

    for z in [0.0, 1.0] {
        for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            let corner = cgmath::Vector4::new(x, y, z, 1.0);
            let round_trip = view_proj * world * corner;
            let recovered = round_trip.truncate() / round_trip.w;

            assert_near(recovered.x, x, "corner x");
            assert_near(recovered.y, y, "corner y");
            assert_near(recovered.z, z, "corner z");
        }
    }
}
