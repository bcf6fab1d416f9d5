#![warn(missing_docs)]

//! Math primitives for the glint picking kernel.
//!
//! Thin wrappers around nalgebra providing the types the picking
//! engine needs: points, vectors, homogeneous transforms, and
//! rotation quaternions. Matrices are column-major (OpenGL
//! convention) and compose right-to-left.

use nalgebra::{Unit, Vector3, Vector4};
use std::f64::consts::PI;

pub use nalgebra::Matrix4;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A homogeneous 4-component vector.
pub type Vec4 = Vector4<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Degrees-to-radians factor. All angle-in-degrees APIs in this
/// workspace convert through this one constant.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// A 4x4 homogeneous transformation matrix.
///
/// Wraps a column-major `Matrix4<f64>`. Covers the affine transforms
/// used for model/view matrices plus the (non-affine) perspective
/// projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// This transform followed by a translation: `T(offset) * self`.
    pub fn translated(&self, offset: &Vec3) -> Self {
        Self::translation(offset.x, offset.y, offset.z).then(self)
    }

    /// This transform followed by a Y-axis rotation of `degrees`:
    /// `Ry(degrees) * self`.
    pub fn rotated_y_deg(&self, degrees: f64) -> Self {
        Self::rotation_y(degrees * DEG_TO_RAD).then(self)
    }

    /// Right-handed OpenGL perspective projection.
    ///
    /// Maps the view frustum (eye looking down -Z) to the canonical
    /// clip volume. `fovy_degrees` is the full vertical field of view;
    /// `near`/`far` are positive clip-plane distances.
    pub fn perspective(fovy_degrees: f64, aspect: f64, near: f64, far: f64) -> Self {
        let f = 1.0 / (fovy_degrees * DEG_TO_RAD / 2.0).tan();
        let mut m = Matrix4::zeros();
        m[(0, 0)] = f / aspect;
        m[(1, 1)] = f;
        m[(2, 2)] = (far + near) / (near - far);
        m[(2, 3)] = 2.0 * far * near / (near - far);
        m[(3, 2)] = -1.0;
        Self { matrix: m }
    }

    /// Compose: `self * other` (apply `other` first, then `self`).
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point (w = 1, no perspective divide).
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vec4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (w = 0, ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vec4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform a raw homogeneous vector.
    pub fn apply_homogeneous(&self, v: &Vec4) -> Vec4 {
        self.matrix * v
    }

    /// Inverse of this transform, if it exists.
    ///
    /// Returns `None` for a singular matrix.
    pub fn try_inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// A rotation quaternion (Hamilton convention).
///
/// Represents a pure rotation only when unit-norm. Construction from
/// an axis and angle yields a unit quaternion; products of unit
/// quaternions drift under repeated composition, so callers
/// accumulating incremental rotations should [`normalize`](Quat::normalize)
/// periodically. Norm is not enforced automatically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat {
    /// Scalar part.
    pub w: f64,
    /// Vector part, x component.
    pub x: f64,
    /// Vector part, y component.
    pub y: f64,
    /// Vector part, z component.
    pub z: f64,
}

impl Quat {
    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized; it must not be zero-length.
    pub fn from_axis_rad(angle: f64, axis: &Vec3) -> Self {
        let a = axis.normalize();
        let (s, c) = (angle / 2.0).sin_cos();
        Self {
            w: c,
            x: s * a.x,
            y: s * a.y,
            z: s * a.z,
        }
    }

    /// Rotation of `degrees` about `axis`.
    pub fn from_axis_deg(degrees: f64, axis: &Vec3) -> Self {
        Self::from_axis_rad(degrees * DEG_TO_RAD, axis)
    }

    /// Euclidean norm of the four components.
    pub fn norm(&self) -> f64 {
        (self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit norm. The quaternion must not be zero.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        Self {
            w: self.w / n,
            x: self.x / n,
            y: self.y / n,
            z: self.z / n,
        }
    }

    /// Conjugate. Equals the inverse for a unit quaternion.
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Homogeneous rotation matrix for this (unit) quaternion.
    pub fn to_transform(&self) -> Transform {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        let mut m = Matrix4::identity();
        m[(0, 0)] = 1.0 - 2.0 * (y * y + z * z);
        m[(0, 1)] = 2.0 * (x * y - w * z);
        m[(0, 2)] = 2.0 * (x * z + w * y);
        m[(1, 0)] = 2.0 * (x * y + w * z);
        m[(1, 1)] = 1.0 - 2.0 * (x * x + z * z);
        m[(1, 2)] = 2.0 * (y * z - w * x);
        m[(2, 0)] = 2.0 * (x * z - w * y);
        m[(2, 1)] = 2.0 * (y * z + w * x);
        m[(2, 2)] = 1.0 - 2.0 * (x * x + y * y);
        Transform { matrix: m }
    }
}

impl std::ops::Mul for Quat {
    type Output = Quat;

    /// Hamilton product: `self * rhs` applies `rhs` first, then `self`.
    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        }
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}
