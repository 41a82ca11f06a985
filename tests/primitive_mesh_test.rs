use umbra_ngin::resources::mesh::{cube, frustum_lines, plane, sphere};

const EPS: f32 = 1e-5;

fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn sphere_has_expected_counts() {
    let (sectors, stacks) = (32, 24);
    let (vertices, indices) = sphere(1.0, sectors, stacks);

    assert_eq!(vertices.len(), ((sectors + 1) * (stacks + 1)) as usize);
    // Every grid cell contributes two triangles except the single-triangle
    // cells touching the poles.
    assert_eq!(indices.len(), (sectors * (2 * stacks - 2) * 3) as usize);
    assert!(indices.iter().all(|i| (*i as usize) < vertices.len()));
}

#[test]
fn sphere_vertices_sit_on_the_radius_with_radial_normals() {
    let radius = 2.5;
    let (vertices, _) = sphere(radius, 16, 12);

    for vertex in &vertices {
        assert!((length(vertex.position) - radius).abs() < 1e-4);
        assert!((length(vertex.normal) - 1.0).abs() < 1e-4);
        for axis in 0..3 {
            assert!((vertex.normal[axis] * radius - vertex.position[axis]).abs() < 1e-4);
        }
    }
}

#[test]
fn cube_has_four_vertices_per_face() {
    let (vertices, indices) = cube(2.0);

    assert_eq!(vertices.len(), 24);
    assert_eq!(indices.len(), 36);
    assert!(indices.iter().all(|i| (*i as usize) < vertices.len()));

    for vertex in &vertices {
        // Every corner of a size-2 cube sits at +-1 on every axis.
        for axis in 0..3 {
            assert!((vertex.position[axis].abs() - 1.0).abs() < EPS);
        }
        // Face normals are axis-aligned unit vectors pointing outward.
        assert!((length(vertex.normal) - 1.0).abs() < EPS);
        let outward: f32 = (0..3)
            .map(|axis| vertex.normal[axis] * vertex.position[axis])
            .sum();
        assert!((outward - 1.0).abs() < EPS);
    }
}

#[test]
fn plane_is_flat_with_up_normals() {
    let (width, depth) = (20.0, 20.0);
    let (vertices, indices) = plane(width, depth);

    assert_eq!(vertices.len(), 4);
    assert_eq!(indices.len(), 6);

    for vertex in &vertices {
        assert_eq!(vertex.position[1], 0.0);
        assert_eq!(vertex.normal, [0.0, 1.0, 0.0]);
        assert!((vertex.position[0].abs() - width / 2.0).abs() < EPS);
        assert!((vertex.position[2].abs() - depth / 2.0).abs() < EPS);
    }
}

#[test]
fn frustum_lines_trace_the_clip_cube() {
    let (vertices, indices) = frustum_lines();

    assert_eq!(vertices.len(), 8);
    // 12 edges, two indices each.
    assert_eq!(indices.len(), 24);
    assert!(indices.iter().all(|i| (*i as usize) < vertices.len()));

    for vertex in &vertices {
        assert!((vertex.position[0].abs() - 1.0).abs() < EPS);
        assert!((vertex.position[1].abs() - 1.0).abs() < EPS);
        // wgpu clip space: z spans 0..1 rather than -1..1.
        assert!(vertex.position[2] == 0.0 || vertex.position[2] == 1.0);
    }
}
