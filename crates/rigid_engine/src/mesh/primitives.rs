//! Procedural mesh generators
//!
//! All meshes are centred on the local origin with outward-facing,
//! counter-clockwise winding, so they can feed [`MassProperties`] directly.
//!
//! [`MassProperties`]: crate::physics::MassProperties

use std::f64::consts::PI;

use super::Mesh;
use crate::foundation::math::{Real, Vec3};

/// Axis-aligned box with the given edge lengths, multiplied by `scale`
pub fn box_mesh(scale: Real, dimensions: Vec3) -> Mesh {
    let h = dimensions * (0.5 * scale);

    let vertices = vec![
        Vec3::new(-h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, -h.z),
        Vec3::new(h.x, -h.y, h.z),
        Vec3::new(-h.x, -h.y, h.z),
        Vec3::new(-h.x, h.y, -h.z),
        Vec3::new(h.x, h.y, -h.z),
        Vec3::new(h.x, h.y, h.z),
        Vec3::new(-h.x, h.y, h.z),
    ];

    let faces = vec![
        [0, 1, 2], [0, 2, 3], // bottom
        [4, 6, 5], [4, 7, 6], // top
        [3, 2, 6], [3, 6, 7], // front
        [0, 5, 1], [0, 4, 5], // back
        [0, 3, 7], [0, 7, 4], // left
        [1, 5, 6], [1, 6, 2], // right
    ];

    Mesh { vertices, faces }
}

/// Unit cube centred on the origin
pub fn unit_cube() -> Mesh {
    box_mesh(1.0, Vec3::new(1.0, 1.0, 1.0))
}

/// UV sphere with `lat_sections` rings from pole to pole and `lon_sections`
/// segments around the polar (Z) axis.
///
/// The seam and pole vertices are duplicated, which leaves zero-area
/// triangles at the poles; they contribute nothing to mass properties.
pub fn uv_sphere(radius: Real, lat_sections: usize, lon_sections: usize) -> Mesh {
    let lat_sections = lat_sections.max(2);
    let lon_sections = lon_sections.max(3);

    let mut vertices = Vec::with_capacity((lat_sections + 1) * (lon_sections + 1));
    for lat in 0..=lat_sections {
        let phi = lat as Real * PI / lat_sections as Real;
        for lon in 0..=lon_sections {
            let theta = lon as Real * 2.0 * PI / lon_sections as Real;
            vertices.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ));
        }
    }

    let mut faces = Vec::with_capacity(lat_sections * lon_sections * 2);
    for lat in 0..lat_sections {
        for lon in 0..lon_sections {
            let current = lat * (lon_sections + 1) + lon;
            let next = current + lon_sections + 1;
            faces.push([current, next, current + 1]);
            faces.push([next, next + 1, current + 1]);
        }
    }

    Mesh { vertices, faces }
}

/// Flat rectangle in the XZ plane, facing +Y.
///
/// Encloses no volume, so its inertia tensor is singular: bodies using it
/// must be static.
pub fn plane_mesh(size: Vec3) -> Mesh {
    let half_width = 0.5 * size.x;
    let half_depth = 0.5 * size.z;

    let vertices = vec![
        Vec3::new(-half_width, 0.0, -half_depth),
        Vec3::new(half_width, 0.0, -half_depth),
        Vec3::new(half_width, 0.0, half_depth),
        Vec3::new(-half_width, 0.0, half_depth),
    ];
    let faces = vec![[0, 2, 1], [0, 3, 2]];

    Mesh { vertices, faces }
}
