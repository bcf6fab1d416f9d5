#![warn(missing_docs)]

//! Mouse-ray unprojection and ray-sphere picking.
//!
//! Pure geometry over the `glint-math` value types: the host
//! application owns windowing, input, and rendering, and calls in here
//! with plain numbers (mouse position, viewport size, view/projection
//! matrices, sphere list). Nothing is stored between calls and no
//! global state is touched, so calls are safe from any thread.
//!
//! # Architecture
//!
//! - [`Ray`] - world-space ray with origin and unit direction
//! - [`Camera`] / [`Viewport`] - unprojects a screen point to a [`Ray`]
//! - [`Sphere`] / [`intersect_sphere`] - closed-form ray-sphere test
//! - [`pick_closest`] / [`pick_at_screen`] - nearest-hit selection
//!
//! # Example
//!
//! ```
//! use glint_math::{Point3, Transform};
//! use glint_pick::{pick_at_screen, Camera, Sphere, Viewport};
//!
//! let camera = Camera::new(
//!     Point3::new(0.0, 0.0, 5.0),
//!     Transform::translation(0.0, 0.0, -5.0),
//!     Transform::perspective(67.0, 640.0 / 480.0, 0.1, 100.0),
//! );
//! let viewport = Viewport::new(640.0, 480.0);
//! let spheres = [Sphere::new(Point3::origin(), 1.0)];
//!
//! let hit = pick_at_screen(320.0, 240.0, &viewport, &camera, &spheres).unwrap();
//! assert_eq!(hit.unwrap().index, 0);
//! ```

mod camera;
mod error;
mod pick;
mod ray;
mod sphere;

pub use camera::{Camera, CameraPose, Viewport};
pub use error::PickError;
pub use pick::{pick_at_screen, pick_closest, PickResult};
pub use ray::Ray;
pub use sphere::{intersect_sphere, Sphere};
