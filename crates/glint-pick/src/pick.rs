//! Nearest-hit selection over a sphere list.

use crate::{intersect_sphere, Camera, PickError, Ray, Sphere, Viewport};

/// A successful pick: which sphere, and how far along the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickResult {
    /// Index of the hit sphere in the caller's list.
    pub index: usize,
    /// Distance from the ray origin to the intersection.
    pub distance: f64,
}

/// Find the nearest sphere hit by a ray.
///
/// Linear scan over the candidates; at the handful-of-objects scale
/// this engine targets, no acceleration structure is warranted. On an
/// exact distance tie the earlier index wins.
pub fn pick_closest(ray: &Ray, spheres: &[Sphere]) -> Option<PickResult> {
    let mut best: Option<PickResult> = None;

    for (index, sphere) in spheres.iter().enumerate() {
        if let Some(distance) = intersect_sphere(ray, sphere) {
            if best.map_or(true, |b| distance < b.distance) {
                best = Some(PickResult { index, distance });
            }
        }
    }

    best
}

/// Pick the nearest sphere under a screen-space mouse position.
///
/// This is the call a host's click handler makes: unprojects the
/// mouse point through `camera` and runs [`pick_closest`] over the
/// scene's spheres. Returns `Ok(None)` when the click hits empty
/// space.
pub fn pick_at_screen(
    mouse_x: f64,
    mouse_y: f64,
    viewport: &Viewport,
    camera: &Camera,
    spheres: &[Sphere],
) -> Result<Option<PickResult>, PickError> {
    let ray = camera.world_ray(mouse_x, mouse_y, viewport)?;
    Ok(pick_closest(&ray, spheres))
}
