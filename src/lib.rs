pub mod math;
pub mod camera;
pub mod intersect;
pub mod config;

/// Re-export common types for easier usage
pub use crate::camera::{Camera, ClipSpace};
pub use crate::config::KernelConfig;
pub use crate::intersect::{Face, IntersectionMethod, RayAabbHit};
pub use crate::math::{Aabb, Matrix3, Matrix4, Ray, Rect, Transform, Vector2, Vector3, Vector4};

/// Error types for the geometry kernel
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum KernelError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Degenerate range: {0}")]
        DegenerateRange(String),

        #[error("Ray direction has zero length")]
        ZeroDirection,
    }
}

/// Result type for geometry kernel operations
pub type Result<T> = std::result::Result<T, error::KernelError>;

/// Kernel version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
