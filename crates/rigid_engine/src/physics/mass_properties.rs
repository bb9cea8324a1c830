//! Mass properties of closed triangle meshes
//!
//! Volume, centre of mass and inertia tensor are integrated exactly over the
//! polyhedron by splitting it into signed tetrahedra, one per face, each
//! with its apex at the mesh origin. Faces seen from their back side
//! contribute negative volume, which is what makes the decomposition work
//! for non-convex shapes and for meshes that do not contain the origin.
//!
//! # Preconditions
//!
//! The mesh must be closed and consistently wound with outward normals.
//! This is not checked: an open, self-intersecting or inside-out mesh yields
//! zero or negative volume and meaningless tensors rather than an error.

use crate::foundation::math::{Mat3, Real, Vec3, Vec3Ext};
use crate::mesh::Mesh;

/// Volume, centre of mass and inertia tensor of a solid mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    /// Enclosed volume
    pub volume: Real,
    /// Centre of mass in mesh-local coordinates
    pub center_of_mass: Vec3,
    /// Inertia tensor about the mesh origin (not the centre of mass)
    pub inertia_tensor: Mat3,
    /// Density the tensor was integrated with
    pub density: Real,
}

impl MassProperties {
    /// Integrate mass properties for `mesh` at uniform `density`.
    ///
    /// The returned tensor is taken about the mesh origin. Use
    /// [`about_center_of_mass`](Self::about_center_of_mass) for the tensor
    /// about the centroid; the two agree for meshes centred on the origin.
    #[allow(clippy::float_cmp)]
    pub fn compute(mesh: &Mesh, density: Real) -> Self {
        let mut volume = 0.0;
        let mut weighted_centroid = Vec3::zeros();

        // Second moments ∫x², ∫y², ∫z² and products ∫xy, ∫xz, ∫yz
        let mut second = Vec3::zeros();
        let mut product = Vec3::zeros();

        for triangle in mesh.triangles() {
            let (v0, v1, v2) = (triangle.v0, triangle.v1, triangle.v2);

            let tetra_volume = v0.dot(&v1.cross(&v2)) / 6.0;
            volume += tetra_volume;
            weighted_centroid += (v0 + v1 + v2) * (tetra_volume / 4.0);

            let sum = v0 + v1 + v2;
            for axis in 0..3 {
                let (a, b, c) = (v0[axis], v1[axis], v2[axis]);
                second[axis] += tetra_volume * (a * a + b * b + c * c + a * b + b * c + c * a) / 10.0;
            }
            for (slot, (p, q)) in [(0, 1), (0, 2), (1, 2)].into_iter().enumerate() {
                let diagonal = v0[p] * v0[q] + v1[p] * v1[q] + v2[p] * v2[q];
                product[slot] += tetra_volume * (sum[p] * sum[q] + diagonal) / 20.0;
            }
        }

        let center_of_mass = if volume == 0.0 {
            Vec3::zeros()
        } else {
            weighted_centroid / volume
        };

        let (sx, sy, sz) = (second.x * density, second.y * density, second.z * density);
        let (pxy, pxz, pyz) = (product.x * density, product.y * density, product.z * density);
        let inertia_tensor = Mat3::new(
            sy + sz, -pxy, -pxz,
            -pxy, sx + sz, -pyz,
            -pxz, -pyz, sx + sy,
        );

        log::trace!(
            "Mass properties: volume {:.6}, centre of mass {:?}",
            volume,
            center_of_mass
        );

        Self {
            volume,
            center_of_mass,
            inertia_tensor,
            density,
        }
    }

    /// Integrate with unit density
    pub fn compute_unit_density(mesh: &Mesh) -> Self {
        Self::compute(mesh, 1.0)
    }

    /// Mass of the solid, `density * volume`
    pub fn mass(&self) -> Real {
        self.density * self.volume
    }

    /// Inertia tensor moved from the mesh origin to the centre of mass
    /// with the parallel-axis theorem:
    /// `I_cm = I_o - m (|d|² E - d dᵀ)`.
    pub fn about_center_of_mass(&self) -> Mat3 {
        parallel_axis_shift(self.inertia_tensor, self.mass(), &self.center_of_mass)
    }
}

/// Remove the parallel-axis contribution of a point mass `mass` at `offset`
/// from `inertia`
pub fn parallel_axis_shift(inertia: Mat3, mass: Real, offset: &Vec3) -> Mat3 {
    let shift = Mat3::identity() * offset.magnitude_squared() - offset.outer_product(offset);
    inertia - shift * mass
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::primitives::{box_mesh, plane_mesh, unit_cube, uv_sphere};
    use crate::mesh::Mesh;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn translated(mesh: &Mesh, offset: Vec3) -> Mesh {
        Mesh::new(
            mesh.vertices().iter().map(|v| v + offset).collect(),
            mesh.faces().to_vec(),
        )
        .unwrap()
    }

    #[test]
    fn test_unit_cube() {
        let props = MassProperties::compute(&unit_cube(), 1.0);

        assert_relative_eq!(props.volume, 1.0, epsilon = EPSILON);
        assert_relative_eq!(props.center_of_mass, Vec3::zeros(), epsilon = EPSILON);
        for i in 0..3 {
            assert_relative_eq!(props.inertia_tensor[(i, i)], 1.0 / 6.0, epsilon = EPSILON);
            for j in 0..3 {
                if i != j {
                    assert_relative_eq!(props.inertia_tensor[(i, j)], 0.0, epsilon = EPSILON);
                }
            }
        }
    }

    #[test]
    fn test_density_scales_tensor_not_volume() {
        let props = MassProperties::compute(&unit_cube(), 3.0);
        assert_relative_eq!(props.volume, 1.0, epsilon = EPSILON);
        assert_relative_eq!(props.mass(), 3.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(0, 0)], 0.5, epsilon = EPSILON);
    }

    #[test]
    fn test_rectangular_box() {
        // I_xx = m (b² + c²) / 12 for edges a, b, c along x, y, z
        let props = MassProperties::compute_unit_density(&box_mesh(1.0, Vec3::new(2.0, 1.0, 1.0)));
        let m = 2.0;
        assert_relative_eq!(props.volume, 2.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(0, 0)], m * (1.0 + 1.0) / 12.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(1, 1)], m * (4.0 + 1.0) / 12.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(2, 2)], m * (4.0 + 1.0) / 12.0, epsilon = EPSILON);
    }

    #[test]
    fn test_offset_cube_is_about_origin() {
        let offset = Vec3::new(1.0, 2.0, 3.0);
        let props = MassProperties::compute(&translated(&unit_cube(), offset), 1.0);

        assert_relative_eq!(props.volume, 1.0, epsilon = EPSILON);
        assert_relative_eq!(props.center_of_mass, offset, epsilon = EPSILON);

        // Origin-referenced: 1/6 + (y² + z²) on the diagonal, -xy off it
        assert_relative_eq!(props.inertia_tensor[(0, 0)], 1.0 / 6.0 + 13.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(1, 1)], 1.0 / 6.0 + 10.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(2, 2)], 1.0 / 6.0 + 5.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(0, 1)], -2.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(0, 2)], -3.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor[(1, 2)], -6.0, epsilon = EPSILON);
        assert_relative_eq!(props.inertia_tensor, props.inertia_tensor.transpose(), epsilon = EPSILON);
    }

    #[test]
    fn test_parallel_axis_shift_recovers_centroidal_tensor() {
        let offset = Vec3::new(1.0, 2.0, 3.0);
        let shifted = MassProperties::compute(&translated(&unit_cube(), offset), 1.0);
        let centred = MassProperties::compute(&unit_cube(), 1.0);

        assert_relative_eq!(
            shifted.about_center_of_mass(),
            centred.inertia_tensor,
            epsilon = 1e-9
        );
        // No-op when the centre of mass is already at the origin
        assert_relative_eq!(centred.about_center_of_mass(), centred.inertia_tensor, epsilon = EPSILON);
    }

    #[test]
    fn test_sphere_approaches_analytic_inertia() {
        let radius = 1.0;
        let props = MassProperties::compute(&uv_sphere(radius, 48, 48), 1.0);
        let analytic_volume = 4.0 / 3.0 * PI * radius.powi(3);
        let analytic_inertia = 0.4 * analytic_volume * radius * radius;

        assert!((props.volume - analytic_volume).abs() / analytic_volume < 0.01);
        for i in 0..3 {
            let relative = (props.inertia_tensor[(i, i)] - analytic_inertia).abs() / analytic_inertia;
            assert!(relative < 0.03, "axis {i}: relative error {relative}");
        }
    }

    #[test]
    fn test_inside_out_mesh_has_negative_volume() {
        let cube = unit_cube();
        let flipped = Mesh::new(
            cube.vertices().to_vec(),
            cube.faces().iter().map(|&[a, b, c]| [a, c, b]).collect(),
        )
        .unwrap();
        assert_relative_eq!(MassProperties::compute(&flipped, 1.0).volume, -1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_flat_mesh_has_zero_volume_and_origin_centre() {
        let props = MassProperties::compute(&plane_mesh(Vec3::new(2.0, 0.0, 2.0)), 1.0);
        assert_eq!(props.volume, 0.0);
        assert_eq!(props.center_of_mass, Vec3::zeros());
    }
}
