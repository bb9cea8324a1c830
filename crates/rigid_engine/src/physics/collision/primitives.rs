//! Primitive collision shapes and their pairwise contact tests
//!
//! Every test returns `None` when the shapes are apart and a [`Contact`]
//! whose normal points from the shape the method is called on toward the
//! argument. Shapes are positioned in world space; they carry no rotation.

use super::Contact;
use crate::foundation::math::{MathError, Real, Vec3, Vec3Ext};

/// A sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: Real,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius
    pub const fn new(center: Vec3, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Sphere–sphere test.
    ///
    /// Overlap requires the centre distance to be strictly less than the sum
    /// of the radii, so touching spheres do not collide. Coincident centres
    /// report a fixed +X normal and the full radius sum as depth.
    #[allow(clippy::float_cmp)]
    pub fn contact_sphere(&self, other: &Sphere) -> Option<Contact> {
        let radius_sum = self.radius + other.radius;
        let delta = other.center - self.center;
        let distance = delta.magnitude();

        if distance == 0.0 {
            return Some(Contact::new(Vec3::x(), radius_sum));
        }
        if distance >= radius_sum {
            return None;
        }
        Some(Contact::new(delta / distance, radius_sum - distance))
    }
}

/// An axis-aligned box for collision detection
///
/// Rotation of the owning body is ignored: the box is always treated as
/// aligned with the world axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    /// The center position of the box in world space
    pub center: Vec3,
    /// Full edge lengths along x, y and z
    pub dimensions: Vec3,
}

impl Cuboid {
    /// Creates a new box with the given center and edge lengths
    pub const fn new(center: Vec3, dimensions: Vec3) -> Self {
        Self { center, dimensions }
    }

    /// Half the edge lengths
    pub fn half_extents(&self) -> Vec3 {
        self.dimensions * 0.5
    }

    /// Closest point on or inside the box to `point`
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        let min = self.center - self.half_extents();
        let max = self.center + self.half_extents();
        Vec3::new(
            point.x.clamp(min.x, max.x),
            point.y.clamp(min.y, max.y),
            point.z.clamp(min.z, max.z),
        )
    }

    /// Box–sphere test with the normal pointing from the box to the sphere.
    ///
    /// Overlap when the closest point is within the radius (touching counts).
    /// A sphere centre inside the box reports a fixed +Y normal and the
    /// radius as depth.
    #[allow(clippy::float_cmp)]
    pub fn contact_sphere(&self, sphere: &Sphere) -> Option<Contact> {
        let delta = sphere.center - self.closest_point(&sphere.center);
        let distance = delta.magnitude();

        if distance == 0.0 {
            return Some(Contact::new(Vec3::y(), sphere.radius));
        }
        if distance > sphere.radius {
            return None;
        }
        Some(Contact::new(delta / distance, sphere.radius - distance))
    }

    /// Box–box test on the three world axes.
    ///
    /// Separation along the axis of least overlap; ties prefer X, then Y,
    /// then Z. The normal is a signed unit axis pointing toward `other`
    /// (positive when the centres coincide on that axis).
    pub fn contact_cuboid(&self, other: &Cuboid) -> Option<Contact> {
        let delta = other.center - self.center;
        let reach = self.half_extents() + other.half_extents();
        let overlap = Vec3::new(
            reach.x - delta.x.abs(),
            reach.y - delta.y.abs(),
            reach.z - delta.z.abs(),
        );

        if overlap.x <= 0.0 || overlap.y <= 0.0 || overlap.z <= 0.0 {
            return None;
        }

        let mut axis = 0;
        for candidate in 1..3 {
            if overlap[candidate] < overlap[axis] {
                axis = candidate;
            }
        }

        let mut normal = Vec3::zeros();
        normal[axis] = if delta[axis] < 0.0 { -1.0 } else { 1.0 };
        Some(Contact::new(normal, overlap[axis]))
    }
}

/// An infinite plane for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Any point on the plane
    pub point: Vec3,
}

impl Plane {
    /// Creates a plane through `point`, normalising `normal`
    pub fn new(normal: Vec3, point: Vec3) -> Result<Self, MathError> {
        Ok(Self {
            normal: normal.try_normalize_exact()?,
            point,
        })
    }

    /// Signed distance from the plane, positive on the normal's side
    pub fn signed_distance(&self, point: &Vec3) -> Real {
        (point - self.point).dot(&self.normal)
    }

    /// Plane–sphere test with the normal pointing from the plane toward the
    /// side the sphere centre is on.
    ///
    /// Overlap when `|distance| <= radius`.
    pub fn contact_sphere(&self, sphere: &Sphere) -> Option<Contact> {
        let distance = self.signed_distance(&sphere.center);
        if distance.abs() > sphere.radius {
            return None;
        }

        let normal = if distance < 0.0 { -self.normal } else { self.normal };
        Some(Contact::new(normal, sphere.radius - distance.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_sphere_sphere_overlap() {
        let a = Sphere::new(Vec3::zeros(), 1.0);
        let b = Sphere::new(Vec3::new(1.5, 0.0, 0.0), 1.0);

        let contact = a.contact_sphere(&b).unwrap();
        assert_relative_eq!(contact.depth, 0.5, epsilon = EPSILON);
        assert_relative_eq!(contact.normal, Vec3::x(), epsilon = EPSILON);

        // Reversed order flips the normal
        let contact = b.contact_sphere(&a).unwrap();
        assert_relative_eq!(contact.normal, -Vec3::x(), epsilon = EPSILON);
    }

    #[test]
    fn test_sphere_sphere_apart_and_touching() {
        let a = Sphere::new(Vec3::zeros(), 1.0);
        assert!(a.contact_sphere(&Sphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0)).is_none());
        assert!(a.contact_sphere(&Sphere::new(Vec3::new(0.0, 2.0, 0.0), 1.0)).is_none());
    }

    #[test]
    fn test_sphere_sphere_coincident() {
        let a = Sphere::new(Vec3::new(1.0, 1.0, 1.0), 1.0);
        let b = Sphere::new(Vec3::new(1.0, 1.0, 1.0), 0.5);

        let contact = a.contact_sphere(&b).unwrap();
        assert_eq!(contact.normal, Vec3::x());
        assert_relative_eq!(contact.depth, 1.5);
    }

    #[test]
    fn test_box_sphere() {
        let cuboid = Cuboid::new(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0));

        // Sphere resting slightly into the top face
        let sphere = Sphere::new(Vec3::new(0.2, 1.4, -0.3), 0.5);
        let contact = cuboid.contact_sphere(&sphere).unwrap();
        assert_relative_eq!(contact.normal, Vec3::y(), epsilon = EPSILON);
        assert_relative_eq!(contact.depth, 0.1, epsilon = 1e-9);

        // Near a corner the normal points diagonally
        let sphere = Sphere::new(Vec3::new(1.3, 1.3, 0.0), 0.5);
        let contact = cuboid.contact_sphere(&sphere).unwrap();
        let diagonal = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert_relative_eq!(contact.normal, diagonal, epsilon = 1e-9);

        assert!(cuboid.contact_sphere(&Sphere::new(Vec3::new(3.0, 0.0, 0.0), 1.0)).is_none());
    }

    #[test]
    fn test_box_sphere_touching_counts() {
        let cuboid = Cuboid::new(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0));
        let contact = cuboid.contact_sphere(&Sphere::new(Vec3::new(2.0, 0.0, 0.0), 1.0)).unwrap();
        assert_relative_eq!(contact.depth, 0.0);
        assert_relative_eq!(contact.normal, Vec3::x());
    }

    #[test]
    fn test_sphere_centre_inside_box() {
        let cuboid = Cuboid::new(Vec3::zeros(), Vec3::new(4.0, 4.0, 4.0));
        let contact = cuboid.contact_sphere(&Sphere::new(Vec3::new(0.5, -1.0, 0.0), 0.75)).unwrap();
        assert_eq!(contact.normal, Vec3::y());
        assert_relative_eq!(contact.depth, 0.75);
    }

    #[test]
    fn test_box_box_minimum_axis() {
        let unit = Vec3::new(1.0, 1.0, 1.0);
        let a = Cuboid::new(Vec3::zeros(), unit);

        let contact = a.contact_cuboid(&Cuboid::new(Vec3::new(0.5, 0.0, 0.0), unit)).unwrap();
        assert_eq!(contact.normal, Vec3::x());
        assert_relative_eq!(contact.depth, 0.5, epsilon = EPSILON);

        let contact = a.contact_cuboid(&Cuboid::new(Vec3::new(0.1, -0.8, 0.3), unit)).unwrap();
        assert_eq!(contact.normal, -Vec3::y());
        assert_relative_eq!(contact.depth, 0.2, epsilon = 1e-9);

        let contact = a.contact_cuboid(&Cuboid::new(Vec3::new(0.0, 0.0, -0.9), unit)).unwrap();
        assert_eq!(contact.normal, -Vec3::z());
    }

    #[test]
    fn test_box_box_tie_prefers_x_then_y() {
        let unit = Vec3::new(1.0, 1.0, 1.0);
        let a = Cuboid::new(Vec3::zeros(), unit);

        let contact = a.contact_cuboid(&Cuboid::new(Vec3::new(0.5, 0.5, 0.5), unit)).unwrap();
        assert_eq!(contact.normal, Vec3::x());

        let contact = a.contact_cuboid(&Cuboid::new(Vec3::new(0.0, 0.5, 0.5), unit)).unwrap();
        assert_eq!(contact.normal, Vec3::y());
    }

    #[test]
    fn test_box_box_separated_or_touching() {
        let unit = Vec3::new(1.0, 1.0, 1.0);
        let a = Cuboid::new(Vec3::zeros(), unit);
        assert!(a.contact_cuboid(&Cuboid::new(Vec3::new(1.0, 0.0, 0.0), unit)).is_none());
        assert!(a.contact_cuboid(&Cuboid::new(Vec3::new(0.2, 0.3, 5.0), unit)).is_none());
    }

    #[test]
    fn test_plane_sphere() {
        let plane = Plane::new(Vec3::new(0.0, 2.0, 0.0), Vec3::zeros()).unwrap();
        assert_eq!(plane.normal, Vec3::y());

        let contact = plane.contact_sphere(&Sphere::new(Vec3::new(3.0, 0.25, 1.0), 0.5)).unwrap();
        assert_relative_eq!(contact.normal, Vec3::y());
        assert_relative_eq!(contact.depth, 0.25);

        // Below the plane the normal flips to face the sphere
        let contact = plane.contact_sphere(&Sphere::new(Vec3::new(0.0, -0.4, 0.0), 0.5)).unwrap();
        assert_relative_eq!(contact.normal, -Vec3::y());
        assert_relative_eq!(contact.depth, 0.1, epsilon = 1e-9);

        assert!(plane.contact_sphere(&Sphere::new(Vec3::new(0.0, 2.0, 0.0), 0.5)).is_none());
    }

    #[test]
    fn test_plane_rejects_zero_normal() {
        assert_eq!(Plane::new(Vec3::zeros(), Vec3::zeros()), Err(MathError::ZeroLengthVector));
    }
}
