//! Math utilities and types
//!
//! Provides the double-precision vector, matrix and quaternion types used by
//! the physics core. Storage and the bulk of the arithmetic come from
//! nalgebra; the extension traits below add the handful of operations the
//! simulation needs with exact (non-tolerant) failure rules.
//!
//! # Numeric contract
//!
//! Nothing in this module compares against an epsilon. Operations that can
//! fail on degenerate input expose a checked entry point returning
//! [`MathError`]; the unchecked nalgebra operations they shadow keep IEEE
//! semantics (`Vec3::normalize` on a zero vector yields NaN components).

pub use nalgebra::{Matrix3, Quaternion, Vector3};
use thiserror::Error;

/// Scalar type used throughout the engine
pub type Real = f64;

/// 3D vector type
pub type Vec3 = Vector3<Real>;

/// 3x3 matrix type (inertia tensors and rotation matrices)
pub type Mat3 = Matrix3<Real>;

/// Quaternion type for orientations.
///
/// This is intentionally the raw quaternion rather than `UnitQuaternion`:
/// zero-norm values must stay representable so that inverting one can be
/// reported as an error instead of being ruled out by construction.
pub type Quat = Quaternion<Real>;

/// Errors raised by degenerate algebraic operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Matrix inversion with a determinant of exactly zero
    #[error("matrix is not invertible (determinant is zero)")]
    SingularMatrix,

    /// Quaternion inversion with a squared norm of exactly zero
    #[error("quaternion has zero norm and cannot be inverted")]
    ZeroNormQuaternion,

    /// Normalisation of a vector with zero magnitude
    #[error("cannot normalize a zero-length vector")]
    ZeroLengthVector,
}

/// Extension trait for [`Vec3`]
pub trait Vec3Ext {
    /// Outer product `self * otherᵀ`
    fn outer_product(&self, other: &Vec3) -> Mat3;

    /// Normalise, failing instead of producing NaN when the magnitude is zero
    fn try_normalize_exact(&self) -> Result<Vec3, MathError>;
}

impl Vec3Ext for Vec3 {
    fn outer_product(&self, other: &Vec3) -> Mat3 {
        self * other.transpose()
    }

    #[allow(clippy::float_cmp)]
    fn try_normalize_exact(&self) -> Result<Vec3, MathError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::ZeroLengthVector);
        }
        Ok(self / magnitude)
    }
}

/// Extension trait for [`Mat3`]
pub trait Mat3Ext {
    /// Matrix of signed 2x2 minors
    fn cofactor(&self) -> Mat3;

    /// Adjugate inverse.
    ///
    /// Fails only when the determinant is exactly zero; nearly singular
    /// matrices invert to very large values.
    fn try_inverse_exact(&self) -> Result<Mat3, MathError>;
}

impl Mat3Ext for Mat3 {
    fn cofactor(&self) -> Mat3 {
        Mat3::from_fn(|i, j| {
            let rows = others(i);
            let cols = others(j);
            let minor = self[(rows[0], cols[0])] * self[(rows[1], cols[1])]
                - self[(rows[0], cols[1])] * self[(rows[1], cols[0])];
            if (i + j) % 2 == 0 {
                minor
            } else {
                -minor
            }
        })
    }

    #[allow(clippy::float_cmp)]
    fn try_inverse_exact(&self) -> Result<Mat3, MathError> {
        let determinant = self.determinant();
        if determinant == 0.0 {
            return Err(MathError::SingularMatrix);
        }
        Ok(self.cofactor().transpose() * (1.0 / determinant))
    }
}

/// The two indices in `0..3` other than `index`
const fn others(index: usize) -> [usize; 2] {
    match index {
        0 => [1, 2],
        1 => [0, 2],
        _ => [0, 1],
    }
}

/// Extension trait for [`Quat`]
pub trait QuatExt: Sized {
    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalised internally and must be non-zero; a zero axis
    /// produces NaN components.
    fn from_axis_angle(axis: &Vec3, angle: Real) -> Self;

    /// Rotation matrix for this quaternion.
    ///
    /// Uses the closed form for unit quaternions without renormalising, so a
    /// non-unit quaternion yields a matrix that also scales.
    fn to_mat3(&self) -> Mat3;

    /// Inverse via the squared norm: `conj(q) / |q|²`
    fn try_inverse_exact(&self) -> Result<Self, MathError>;

    /// Sandwich product `q * (0, v) * q⁻¹`
    fn rotate_vector(&self, v: &Vec3) -> Result<Vec3, MathError>;

    /// Unit quaternion in the same direction, or identity for the zero quaternion
    fn normalize_or_identity(&self) -> Self;
}

impl QuatExt for Quat {
    fn from_axis_angle(axis: &Vec3, angle: Real) -> Self {
        let half = angle * 0.5;
        let s = half.sin();
        let a = axis.normalize();
        Quat::new(half.cos(), s * a.x, s * a.y, s * a.z)
    }

    fn to_mat3(&self) -> Mat3 {
        let (w, x, y, z) = (self.w, self.i, self.j, self.k);
        Mat3::new(
            1.0 - 2.0 * y * y - 2.0 * z * z, 2.0 * x * y - 2.0 * z * w, 2.0 * x * z + 2.0 * y * w,
            2.0 * x * y + 2.0 * z * w, 1.0 - 2.0 * x * x - 2.0 * z * z, 2.0 * y * z - 2.0 * x * w,
            2.0 * x * z - 2.0 * y * w, 2.0 * y * z + 2.0 * x * w, 1.0 - 2.0 * x * x - 2.0 * y * y,
        )
    }

    #[allow(clippy::float_cmp)]
    fn try_inverse_exact(&self) -> Result<Self, MathError> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            return Err(MathError::ZeroNormQuaternion);
        }
        Ok(Quat::new(
            self.w / norm_squared,
            -self.i / norm_squared,
            -self.j / norm_squared,
            -self.k / norm_squared,
        ))
    }

    fn rotate_vector(&self, v: &Vec3) -> Result<Vec3, MathError> {
        let pure = Quat::new(0.0, v.x, v.y, v.z);
        let rotated = self * pure * self.try_inverse_exact()?;
        Ok(Vec3::new(rotated.i, rotated.j, rotated.k))
    }

    #[allow(clippy::float_cmp)]
    fn normalize_or_identity(&self) -> Self {
        let length = self.norm();
        if length == 0.0 {
            return Quat::identity();
        }
        *self / length
    }
}
