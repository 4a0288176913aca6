//! Matrix and vector math for the demo scenes.
//!
//! All types here are plain value types designed to be compatible with GPU
//! memory layouts (usable with WGPU/WGSL via `bytemuck`).
//!
//! # Conventions
//!
//! One convention is used throughout and never mixed:
//!
//! - Matrices are **row-major**: the outer index of `[[f32; N]; N]` selects a
//!   row, and translation lives in the last row.
//! - Points are **row vectors**: a point is transformed as `p' = p · M`, so in
//!   the product `a.multiply(&b)` the transform of `a` applies first, then
//!   `b`. Callers are responsible for ordering factors; nothing here reorders
//!   for them.
//! - Matrix data is uploaded to the GPU untransposed. The WGSL vertex shaders
//!   are written so the same row-vector convention holds on the GPU side.
//!
//! # Module Organization
//!
//! - [`vec`] contains 3-component vector operations
//! - [`mat3`] contains the 2D (3×3 homogeneous) transform builders
//! - [`mat4`] contains the 3D (4×4 homogeneous) transform builders and the
//!   look-at camera helper

pub mod mat3;
pub mod mat4;
pub mod vec;

/// Converts degrees to radians.
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Converts radians to degrees.
#[allow(dead_code)]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * (180.0 / std::f32::consts::PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deg_to_rad() {
        assert_eq!(deg_to_rad(180.0), std::f32::consts::PI);
        assert_eq!(deg_to_rad(0.0), 0.0);
    }

    #[test]
    fn test_rad_to_deg() {
        assert_eq!(rad_to_deg(std::f32::consts::PI), 180.0);
    }
}
