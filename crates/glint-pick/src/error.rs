//! Error types for picking.

use thiserror::Error;

/// Errors surfaced by the unprojection entry points.
///
/// These correspond to caller-side precondition violations: a
/// well-behaved host never feeds a zero-size viewport or a singular
/// matrix, but the failure is reported rather than propagated as
/// garbage numbers.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PickError {
    /// Viewport has zero or negative extent.
    #[error("viewport is degenerate ({width} x {height})")]
    DegenerateViewport {
        /// Viewport width in pixels.
        width: f64,
        /// Viewport height in pixels.
        height: f64,
    },

    /// Projection matrix is singular.
    #[error("projection matrix is not invertible")]
    SingularProjection,

    /// View matrix is singular.
    #[error("view matrix is not invertible")]
    SingularView,
}
