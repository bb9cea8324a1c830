//! Triangle meshes used for mass properties and as render geometry
//!
//! A [`Mesh`] lives in its body's local frame. There are two ways to get
//! world-space geometry out of it:
//!
//! - **Read-time transform** ([`Mesh::transformed_vertices`]): the stored
//!   vertices are never touched, the body's orientation and position are
//!   applied on demand. This is what renderers should use.
//! - **Destructive rotation** ([`Mesh::apply_rotation`]): overwrites every
//!   vertex with its rotated form. Kept for callers that bake a rotation
//!   into the local frame; repeated use accumulates floating-point drift.

pub mod primitives;

use thiserror::Error;

use crate::foundation::math::{Quat, QuatExt, Real, Vec3};

/// Mesh construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A face references a vertex that does not exist
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfBounds {
        /// Index of the offending face
        face: usize,
        /// The out-of-range vertex index
        index: usize,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },
}

/// A triangle of three vertex positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex
    pub v0: Vec3,
    /// Second vertex
    pub v1: Vec3,
    /// Third vertex
    pub v2: Vec3,
}

impl Triangle {
    /// Unnormalised face normal (right-hand rule)
    pub fn area_normal(&self) -> Vec3 {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }
}

/// Indexed triangle mesh.
///
/// Faces are expected to be consistently wound (counter-clockwise seen from
/// outside) and to close the surface. Neither property is checked; an open
/// or inconsistently wound mesh simply produces wrong mass properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vec3>,
    faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Create a mesh, validating that every face index is in bounds
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[usize; 3]>) -> Result<Self, MeshError> {
        let vertex_count = vertices.len();
        for (face, indices) in faces.iter().enumerate() {
            if let Some(&index) = indices.iter().find(|&&i| i >= vertex_count) {
                return Err(MeshError::FaceIndexOutOfBounds { face, index, vertex_count });
            }
        }
        Ok(Self { vertices, faces })
    }

    /// Vertex positions in the local frame
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangle faces as vertex index triples
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Iterate faces as resolved triangles
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(move |&[a, b, c]| Triangle {
            v0: self.vertices[a],
            v1: self.vertices[b],
            v2: self.vertices[c],
        })
    }

    /// Distance from the local origin to the furthest vertex
    pub fn local_bounding_radius(&self) -> Real {
        self.vertices
            .iter()
            .map(|v| v.magnitude_squared())
            .fold(0.0, Real::max)
            .sqrt()
    }

    /// Rotate every vertex in place by `rotation`.
    ///
    /// Irreversible: the previous local frame is lost.
    pub fn apply_rotation(&mut self, rotation: &Quat) {
        let matrix = rotation.to_mat3();
        for vertex in &mut self.vertices {
            *vertex = matrix * *vertex;
        }
    }

    /// World-space vertices for the given orientation and position, leaving
    /// the stored local vertices untouched
    pub fn transformed_vertices(&self, orientation: &Quat, position: &Vec3) -> Vec<Vec3> {
        let matrix = orientation.to_mat3();
        self.vertices.iter().map(|v| matrix * v + position).collect()
    }
}
