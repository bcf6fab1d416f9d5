//! Screen-to-world unprojection and camera pose math.

use crate::{PickError, Ray};
use glint_math::{Point3, Quat, Transform, Vec3, Vec4};

/// Viewport extent in pixels.
///
/// Screen-space origin is top-left with Y growing downward, matching
/// the mouse coordinates delivered by windowing libraries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A viewport with zero or negative extent cannot be unprojected.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Per-frame camera state needed for unprojection.
///
/// The host owns and updates this each frame; the picking engine only
/// reads it. `view` and `proj` must be invertible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World-space camera position (used as the ray origin).
    pub eye: Point3,
    /// World-to-eye view matrix.
    pub view: Transform,
    /// Eye-to-clip projection matrix.
    pub proj: Transform,
}

impl Camera {
    /// Create a camera from its world position and matrices.
    pub fn new(eye: Point3, view: Transform, proj: Transform) -> Self {
        Self { eye, view, proj }
    }

    /// Derive the eye position and view matrix from a [`CameraPose`].
    pub fn from_pose(pose: &CameraPose, proj: Transform) -> Self {
        Self {
            eye: pose.position,
            view: pose.view_matrix(),
            proj,
        }
    }

    /// Unproject a screen-space mouse position to a world-space ray.
    ///
    /// The mouse point is mapped to normalized device coordinates
    /// (flipping Y, since NDC Y grows upward), pushed back through the
    /// inverse projection into eye space as a direction at the far
    /// side of the frustum, then through the inverse view into world
    /// space. The ray originates at the camera's `eye`.
    pub fn world_ray(&self, mouse_x: f64, mouse_y: f64, viewport: &Viewport) -> Result<Ray, PickError> {
        if viewport.is_degenerate() {
            return Err(PickError::DegenerateViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let ndc_x = 2.0 * mouse_x / viewport.width - 1.0;
        let ndc_y = 1.0 - 2.0 * mouse_y / viewport.height;

        let inv_proj = self.proj.try_inverse().ok_or(PickError::SingularProjection)?;
        let inv_view = self.view.try_inverse().ok_or(PickError::SingularView)?;

        // Clip-space point looking down the frustum.
        let clip = Vec4::new(ndc_x, ndc_y, -1.0, 1.0);

        // Into eye space, then discard depth: keep only the direction
        // by forcing z = -1 (camera forward) and w = 0.
        let eye = inv_proj.apply_homogeneous(&clip);
        let eye_dir = Vec4::new(eye.x, eye.y, -1.0, 0.0);

        let world = inv_view.apply_homogeneous(&eye_dir);
        let direction = Vec3::new(world.x, world.y, world.z);

        Ok(Ray::new(self.eye, direction))
    }
}

/// A fly-camera pose: world position plus orientation quaternion.
///
/// Hosts accumulate yaw/pitch/roll increments into `orientation`
/// (Hamilton products, re-normalized periodically) and rebuild the
/// view matrix from the pose each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// World-space camera position.
    pub position: Point3,
    /// Orientation as a unit quaternion.
    pub orientation: Quat,
}

impl CameraPose {
    /// Create a pose from position and orientation.
    pub fn new(position: Point3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// The world-to-eye view matrix for this pose: `R^-1 * T^-1`.
    ///
    /// Built from the conjugate quaternion and the negated position,
    /// so no general matrix inversion is involved.
    pub fn view_matrix(&self) -> Transform {
        let inv_rotation = self.orientation.conjugate().to_transform();
        let inv_translation =
            Transform::translation(-self.position.x, -self.position.y, -self.position.z);
        inv_rotation.then(&inv_translation)
    }

    /// World-space forward vector (local -Z).
    pub fn forward(&self) -> Vec3 {
        self.orientation.to_transform().apply_vec(&Vec3::new(0.0, 0.0, -1.0))
    }

    /// World-space right vector (local +X).
    pub fn right(&self) -> Vec3 {
        self.orientation.to_transform().apply_vec(&Vec3::new(1.0, 0.0, 0.0))
    }

    /// World-space up vector (local +Y).
    pub fn up(&self) -> Vec3 {
        self.orientation.to_transform().apply_vec(&Vec3::new(0.0, 1.0, 0.0))
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::new(Point3::origin(), Quat::identity())
    }
}
