//! Procedural mesh generation.
//!
//! Geometry generation is split from GPU upload so the generators stay pure:
//! they return plain vertex/index vectors and [`upload`] turns them into a
//! [`model::Mesh`].

use std::f32::consts::PI;

use wgpu::util::DeviceExt;

use crate::data_structures::model::{self, LineVertex, ModelVertex};

/// A lat/long sphere centered at the origin.
///
/// `sectors` subdivides around the y axis, `stacks` from pole to pole.
/// Degenerate triangles at the poles are skipped.
pub fn sphere(radius: f32, sectors: u32, stacks: u32) -> (Vec<ModelVertex>, Vec<u32>) {
    let sectors = sectors.max(3);
    let stacks = stacks.max(2);

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for iy in 0..=stacks {
        let v = iy as f32 / stacks as f32;
        let theta = v * PI;

        for ix in 0..=sectors {
            let u = ix as f32 / sectors as f32;
            let phi = u * 2.0 * PI;

            let x = -radius * theta.sin() * phi.cos();
            let y = radius * theta.cos();
            let z = radius * theta.sin() * phi.sin();

            let inv_len = 1.0 / radius;
            vertices.push(ModelVertex {
                position: [x, y, z],
                tex_coords: [u, 1.0 - v],
                normal: [x * inv_len, y * inv_len, z * inv_len],
            });
        }
    }

    let row = sectors + 1;
    for iy in 0..stacks {
        for ix in 0..sectors {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != stacks - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    (vertices, indices)
}

/// An axis-aligned cube centered at the origin with edge length `size`.
///
/// 24 vertices so each face gets its own normals and texture coordinates.
pub fn cube(size: f32) -> (Vec<ModelVertex>, Vec<u32>) {
    let h = size / 2.0;

    // normal, tangent, bitangent per face; tangent x bitangent = normal so
    // the triangle winding stays counter-clockwise seen from outside.
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (face, (normal, tangent, bitangent)) in faces.iter().enumerate() {
        let n = cgmath::Vector3::from(*normal);
        let t = cgmath::Vector3::from(*tangent);
        let b = cgmath::Vector3::from(*bitangent);

        let corners = [
            (n - t - b, [0.0, 0.0]),
            (n + t - b, [1.0, 0.0]),
            (n + t + b, [1.0, 1.0]),
            (n - t + b, [0.0, 1.0]),
        ];
        for (corner, tex_coords) in corners {
            vertices.push(ModelVertex {
                position: (corner * h).into(),
                tex_coords,
                normal: *normal,
            });
        }

        let base = (face * 4) as u32;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    (vertices, indices)
}

/// A flat plane in the xz plane, centered at the origin, normal +y.
pub fn plane(width: f32, depth: f32) -> (Vec<ModelVertex>, Vec<u32>) {
    let w = width / 2.0;
    let d = depth / 2.0;

    let vertices = vec![
        ModelVertex {
            position: [-w, 0.0, -d],
            tex_coords: [0.0, 0.0],
            normal: [0.0, 1.0, 0.0],
        },
        ModelVertex {
            position: [-w, 0.0, d],
            tex_coords: [0.0, 1.0],
            normal: [0.0, 1.0, 0.0],
        },
        ModelVertex {
            position: [w, 0.0, d],
            tex_coords: [1.0, 1.0],
            normal: [0.0, 1.0, 0.0],
        },
        ModelVertex {
            position: [w, 0.0, -d],
            tex_coords: [1.0, 0.0],
            normal: [0.0, 1.0, 0.0],
        },
    ];
    let indices = vec![0, 1, 2, 0, 2, 3];

    (vertices, indices)
}

/// The unit clip-space cube (x/y in -1..1, z in 0..1) as 12 line segments.
///
/// Transformed by the inverse light projection it traces the light's view
/// volume; see [`crate::pipelines::shadow::frustum_world_matrix`].
pub fn frustum_lines() -> (Vec<LineVertex>, Vec<u16>) {
    let mut vertices = Vec::with_capacity(8);
    for z in [0.0, 1.0] {
        for (x, y) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            vertices.push(LineVertex { position: [x, y, z] });
        }
    }

    let indices = vec![
        0, 1, 1, 3, 3, 2, 2, 0, // near rectangle
        4, 5, 5, 7, 7, 6, 6, 4, // far rectangle
        0, 4, 1, 5, 3, 7, 2, 6, // connecting edges
    ];

    (vertices, indices)
}

/// Upload generated geometry into GPU buffers.
pub fn upload(
    name: &str,
    vertices: &[ModelVertex],
    indices: &[u32],
    device: &wgpu::Device,
) -> model::Mesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Vertex Buffer", name)),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Index Buffer", name)),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    model::Mesh {
        name: name.to_string(),
        vertex_buffer,
        index_buffer,
        num_elements: indices.len() as u32,
        material: 0,
    }
}
