//! 2D affine transforms in homogeneous form (3×3, row-major).

use crate::math::deg_to_rad;

/// A 3×3 matrix, row-major, representing a 2D affine transform in
/// homogeneous coordinates. Translation lives in the last row. See the
/// [`math`](crate::math) module docs for the multiplication convention.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3(pub [[f32; 3]; 3]);

impl Mat3 {
    pub fn identity() -> Mat3 {
        Mat3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn translation(tx: f32, ty: f32) -> Mat3 {
        Mat3([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [tx, ty, 1.0]])
    }

    /// Rotation by an angle in degrees. Positive angles rotate
    /// counter-clockwise in the standard mathematical sense; the screen-space
    /// Y-flip only enters later through [`Mat3::projection`].
    pub fn rotation(angle_in_degrees: f32) -> Mat3 {
        let rad = deg_to_rad(angle_in_degrees);
        let c = rad.cos();
        let s = rad.sin();
        Mat3([[c, s, 0.0], [-s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn scale(sx: f32, sy: f32) -> Mat3 {
        Mat3([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Maps pixel space to clip space. Flips the Y axis so that row 0 of the
    /// canvas is at the top.
    pub fn projection(width: f32, height: f32) -> Mat3 {
        Mat3([
            [2.0 / width, 0.0, 0.0],
            [0.0, -2.0 / height, 0.0],
            [-1.0, 1.0, 1.0],
        ])
    }

    /// Standard 3×3 product `self · other`: rows of `self` dotted with
    /// columns of `other`. Under the row-vector convention the transform of
    /// `self` applies before the transform of `other`.
    pub fn multiply(&self, other: &Mat3) -> Mat3 {
        let mut result = [[0.0; 3]; 3];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.0[i][k] * other.0[k][j]).sum();
            }
        }
        Mat3(result)
    }

    /// Transforms a homogeneous row vector: `p' = p · self`.
    pub fn transform_point(&self, p: [f32; 3]) -> [f32; 3] {
        let mut dst = [0.0; 3];
        for (j, out) in dst.iter_mut().enumerate() {
            *out = (0..3).map(|i| p[i] * self.0[i][j]).sum();
        }
        dst
    }
}

impl From<[[f32; 3]; 3]> for Mat3 {
    fn from(matrix: [[f32; 3]; 3]) -> Self {
        Mat3(matrix)
    }
}

impl From<Mat3> for [[f32; 3]; 3] {
    fn from(matrix: Mat3) -> Self {
        matrix.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat3_approx(a: &Mat3, b: &Mat3, tolerance: f32) {
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a.0[i][j] - b.0[i][j]).abs() < tolerance,
                    "element [{}][{}] differs: {} vs {}",
                    i,
                    j,
                    a.0[i][j],
                    b.0[i][j]
                );
            }
        }
    }

    /// Tests the identity law on both sides.
    #[test]
    fn test_multiply_identity() {
        let m = Mat3::translation(12.0, -7.0).multiply(&Mat3::rotation(33.0));
        assert_mat3_approx(&m.multiply(&Mat3::identity()), &m, 1e-6);
        assert_mat3_approx(&Mat3::identity().multiply(&m), &m, 1e-6);
    }

    /// Tests the rotation-direction convention: a 90 degree rotation takes
    /// the point (1, 0) to (0, 1), counter-clockwise.
    #[test]
    fn test_rotation_direction() {
        let p = Mat3::rotation(90.0).transform_point([1.0, 0.0, 1.0]);
        assert!(p[0].abs() < 1e-6);
        assert!((p[1] - 1.0).abs() < 1e-6);
    }

    /// Tests that chained rotations compose additively.
    #[test]
    fn test_rotation_composition() {
        let composed = Mat3::rotation(25.0).multiply(&Mat3::rotation(40.0));
        assert_mat3_approx(&composed, &Mat3::rotation(65.0), 1e-5);
    }

    #[test]
    fn test_translation_composition() {
        let composed = Mat3::translation(3.0, 4.0).multiply(&Mat3::translation(10.0, -2.0));
        assert_mat3_approx(&composed, &Mat3::translation(13.0, 2.0), 1e-6);
    }

    /// Tests the pixel-to-clip mapping and its Y-flip: the top-left pixel
    /// lands at clip (-1, 1) and the bottom-right at (1, -1).
    #[test]
    fn test_projection_corners() {
        let p = Mat3::projection(400.0, 300.0);
        let top_left = p.transform_point([0.0, 0.0, 1.0]);
        assert_eq!(top_left, [-1.0, 1.0, 1.0]);
        let bottom_right = p.transform_point([400.0, 300.0, 1.0]);
        assert!((bottom_right[0] - 1.0).abs() < 1e-5);
        assert!((bottom_right[1] + 1.0).abs() < 1e-5);
    }

    /// Tests that translation applies after rotation when it appears on the
    /// right of the product (left operand first).
    #[test]
    fn test_multiply_order() {
        let m = Mat3::rotation(90.0).multiply(&Mat3::translation(10.0, 0.0));
        let p = m.transform_point([1.0, 0.0, 1.0]);
        assert!((p[0] - 10.0).abs() < 1e-6);
        assert!((p[1] - 1.0).abs() < 1e-6);
    }
}
