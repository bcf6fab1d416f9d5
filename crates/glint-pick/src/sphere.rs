//! Ray-sphere intersection (quadratic equation).

use crate::Ray;
use glint_math::Point3;

/// A pickable sphere: center plus non-negative radius.
///
/// Owned by the host scene; the picking engine only reads these per
/// call and never stores them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center of the sphere in world space.
    pub center: Point3,
    /// Radius (non-negative).
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from center and radius.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Intersect a ray with a sphere.
///
/// Returns the smallest non-negative distance along the ray, or `None`
/// if the sphere is missed or lies entirely behind the origin. When
/// the origin is inside the sphere the exit distance is returned.
///
/// Solves the quadratic `|L + t*d|^2 = r^2` with unit `d`, so the
/// leading coefficient is 1 and the discriminant reduces to `b^2 - c`.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Option<f64> {
    let l = ray.origin - sphere.center;
    let d = ray.direction.as_ref();

    let b = d.dot(&l);
    let c = l.dot(&l) - sphere.radius * sphere.radius;

    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt_disc = discriminant.sqrt();
    let t_near = -b - sqrt_disc;
    let t_far = -b + sqrt_disc;

    // t_far >= t_near always; if even the far root is behind the
    // origin, the whole sphere is.
    if t_far < 0.0 {
        return None;
    }

    if t_near >= 0.0 {
        Some(t_near)
    } else {
        // Origin inside the sphere (or grazing): fall back to the exit point.
        Some(t_far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    #[test]
    fn test_head_on_hit() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);
        let t = intersect_sphere(&ray, &sphere).unwrap();
        assert!((t - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_pointing_away_is_rejected() {
        // Same sphere, direction reversed: both roots are behind the origin.
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);
        assert!(intersect_sphere(&ray, &sphere).is_none());
    }

    #[test]
    fn test_clean_miss() {
        let ray = Ray::new(Point3::new(0.0, 3.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);
        assert!(intersect_sphere(&ray, &sphere).is_none());
    }

    #[test]
    fn test_origin_inside_returns_exit_distance() {
        let ray = Ray::new(Point3::origin(), Vec3::new(1.0, 0.0, 0.0));
        let sphere = Sphere::new(Point3::origin(), 2.0);
        let t = intersect_sphere(&ray, &sphere).unwrap();
        assert!((t - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_tangent_hit_in_front() {
        // Ray grazes the unit sphere at (0, 1, 0): discriminant is exactly 0.
        let ray = Ray::new(Point3::new(0.0, 1.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);
        let t = intersect_sphere(&ray, &sphere).unwrap();
        assert!((t - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_tangent_behind_origin_is_rejected() {
        // Same grazing geometry but pointing away: the single root is negative.
        let ray = Ray::new(Point3::new(0.0, 1.0, 5.0), Vec3::new(0.0, 0.0, 1.0));
        let sphere = Sphere::new(Point3::origin(), 1.0);
        assert!(intersect_sphere(&ray, &sphere).is_none());
    }

    #[test]
    fn test_off_axis_hit_distance() {
        // Ray through the center from a diagonal: distance is |offset| - r.
        let origin = Point3::new(3.0, 0.0, 4.0);
        let ray = Ray::new(origin, Point3::origin() - origin);
        let sphere = Sphere::new(Point3::origin(), 1.0);
        let t = intersect_sphere(&ray, &sphere).unwrap();
        assert!((t - 4.0).abs() < 1e-12);
    }
}
