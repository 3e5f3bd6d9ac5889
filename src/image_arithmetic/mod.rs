//! Utilities for working with images.

pub mod borders;
pub mod color_conversions;
pub mod traits;
pub use self::traits::*;
pub mod types;
pub use self::types::*;
pub mod utilities;
pub use self::utilities::*;

pub const STRAIGHT_LAPLACE_KERNEL: &[f32] = &[0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];
pub const SHARPEN_KERNEL: &[f32] = &[0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];
/// Derivative along x, responds to vertical edges.
pub const SOBEL_X_KERNEL: &[f32] = &[-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0];
/// Derivative along y, responds to horizontal edges.
pub const SOBEL_Y_KERNEL: &[f32] = &[-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0];
