//! 3D affine/projective transforms (4×4, row-major) and the look-at camera
//! builder.

use crate::math::deg_to_rad;
use crate::math::vec::Vec3;

/// A 4×4 matrix, row-major, representing a 3D affine or projective transform
/// in homogeneous coordinates. Translation lives in the last row. See the
/// [`math`](crate::math) module docs for the multiplication convention.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    pub fn identity() -> Mat4 {
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [tx, ty, tz, 1.0],
        ])
    }

    pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
        Mat4([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_x(angle_in_degrees: f32) -> Mat4 {
        let rad = deg_to_rad(angle_in_degrees);
        let c = rad.cos();
        let s = rad.sin();
        Mat4([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_y(angle_in_degrees: f32) -> Mat4 {
        let rad = deg_to_rad(angle_in_degrees);
        let c = rad.cos();
        let s = rad.sin();
        Mat4([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn rotation_z(angle_in_degrees: f32) -> Mat4 {
        let rad = deg_to_rad(angle_in_degrees);
        let c = rad.cos();
        let s = rad.sin();
        Mat4([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Maps pixel/depth space to clip space. Flips the Y axis so that row 0
    /// of the canvas is at the top.
    pub fn projection(width: f32, height: f32, depth: f32) -> Mat4 {
        Mat4([
            [2.0 / width, 0.0, 0.0, 0.0],
            [0.0, -2.0 / height, 0.0, 0.0],
            [0.0, 0.0, 2.0 / depth, 0.0],
            [-1.0, 1.0, 0.0, 1.0],
        ])
    }

    /// Symmetric perspective projection. The field of view is in degrees.
    ///
    /// `near == far` divides by zero and yields a non-finite matrix; callers
    /// must avoid it, the library does not correct it.
    pub fn perspective(fov_in_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let fov_rad = deg_to_rad(fov_in_degrees);
        let f = (std::f32::consts::PI * 0.5 - 0.5 * fov_rad).tan();
        let range_inv = 1.0 / (near - far);

        Mat4([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (near + far) * range_inv, -1.0],
            [0.0, 0.0, near * far * range_inv * 2.0, 0.0],
        ])
    }

    /// Standard 4×4 product `self · other`: rows of `self` dotted with
    /// columns of `other`. Under the row-vector convention the transform of
    /// `self` applies before the transform of `other`.
    pub fn multiply(&self, other: &Mat4) -> Mat4 {
        let mut result = [[0.0; 4]; 4];
        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..4).map(|k| self.0[i][k] * other.0[k][j]).sum();
            }
        }
        Mat4(result)
    }

    /// Transforms a homogeneous row vector: `p' = p · self`. The caller is
    /// responsible for the perspective divide when the transform is
    /// projective.
    pub fn transform_point(&self, p: [f32; 4]) -> [f32; 4] {
        let mut dst = [0.0; 4];
        for (j, out) in dst.iter_mut().enumerate() {
            *out = (0..4).map(|i| p[i] * self.0[i][j]).sum();
        }
        dst
    }

    /// General inverse via cofactor expansion. No singularity check is
    /// performed: a singular matrix makes the determinant reciprocal
    /// infinite and the result non-finite, which the caller must detect if
    /// it cares.
    pub fn inverse(&self) -> Mat4 {
        let [
            [m00, m01, m02, m03],
            [m10, m11, m12, m13],
            [m20, m21, m22, m23],
            [m30, m31, m32, m33],
        ] = self.0;

        let tmp0 = m22 * m33;
        let tmp1 = m32 * m23;
        let tmp2 = m12 * m33;
        let tmp3 = m32 * m13;
        let tmp4 = m12 * m23;
        let tmp5 = m22 * m13;
        let tmp6 = m02 * m33;
        let tmp7 = m32 * m03;
        let tmp8 = m02 * m23;
        let tmp9 = m22 * m03;
        let tmp10 = m02 * m13;
        let tmp11 = m12 * m03;
        let tmp12 = m20 * m31;
        let tmp13 = m30 * m21;
        let tmp14 = m10 * m31;
        let tmp15 = m30 * m11;
        let tmp16 = m10 * m21;
        let tmp17 = m20 * m11;
        let tmp18 = m00 * m31;
        let tmp19 = m30 * m01;
        let tmp20 = m00 * m21;
        let tmp21 = m20 * m01;
        let tmp22 = m00 * m11;
        let tmp23 = m10 * m01;

        let t0 = (tmp0 * m11 + tmp3 * m21 + tmp4 * m31) - (tmp1 * m11 + tmp2 * m21 + tmp5 * m31);
        let t1 = (tmp1 * m01 + tmp6 * m21 + tmp9 * m31) - (tmp0 * m01 + tmp7 * m21 + tmp8 * m31);
        let t2 = (tmp2 * m01 + tmp7 * m11 + tmp10 * m31) - (tmp3 * m01 + tmp6 * m11 + tmp11 * m31);
        let t3 = (tmp5 * m01 + tmp8 * m11 + tmp11 * m21) - (tmp4 * m01 + tmp9 * m11 + tmp10 * m21);

        let d = 1.0 / (m00 * t0 + m10 * t1 + m20 * t2 + m30 * t3);

        Mat4([
            [d * t0, d * t1, d * t2, d * t3],
            [
                d * ((tmp1 * m10 + tmp2 * m20 + tmp5 * m30)
                    - (tmp0 * m10 + tmp3 * m20 + tmp4 * m30)),
                d * ((tmp0 * m00 + tmp7 * m20 + tmp8 * m30)
                    - (tmp1 * m00 + tmp6 * m20 + tmp9 * m30)),
                d * ((tmp3 * m00 + tmp6 * m10 + tmp11 * m30)
                    - (tmp2 * m00 + tmp7 * m10 + tmp10 * m30)),
                d * ((tmp4 * m00 + tmp9 * m10 + tmp10 * m20)
                    - (tmp5 * m00 + tmp8 * m10 + tmp11 * m20)),
            ],
            [
                d * ((tmp12 * m13 + tmp15 * m23 + tmp16 * m33)
                    - (tmp13 * m13 + tmp14 * m23 + tmp17 * m33)),
                d * ((tmp13 * m03 + tmp18 * m23 + tmp21 * m33)
                    - (tmp12 * m03 + tmp19 * m23 + tmp20 * m33)),
                d * ((tmp14 * m03 + tmp19 * m13 + tmp22 * m33)
                    - (tmp15 * m03 + tmp18 * m13 + tmp23 * m33)),
                d * ((tmp17 * m03 + tmp20 * m13 + tmp23 * m23)
                    - (tmp16 * m03 + tmp21 * m13 + tmp22 * m23)),
            ],
            [
                d * ((tmp14 * m22 + tmp17 * m32 + tmp13 * m12)
                    - (tmp16 * m32 + tmp12 * m12 + tmp15 * m22)),
                d * ((tmp20 * m32 + tmp12 * m02 + tmp19 * m22)
                    - (tmp18 * m22 + tmp21 * m32 + tmp13 * m02)),
                d * ((tmp18 * m12 + tmp23 * m32 + tmp15 * m02)
                    - (tmp22 * m32 + tmp14 * m02 + tmp19 * m12)),
                d * ((tmp22 * m22 + tmp16 * m02 + tmp21 * m12)
                    - (tmp20 * m12 + tmp23 * m22 + tmp17 * m02)),
            ],
        ])
    }

    /// Builds a camera-to-world matrix from a camera position, a target
    /// point and an up hint: `z = normalize(camera − target)`,
    /// `x = up × z`, `y = z × x`, with the camera position in the
    /// translation row.
    ///
    /// The x and y axes are not re-normalized, so an `up` parallel to the
    /// view direction produces a zero x axis and a non-orthonormal basis.
    /// Known limitation; callers pick a sensible up vector.
    pub fn look_at(camera_position: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let z_axis = camera_position.subtract(&target).normalize();
        let x_axis = up.cross(&z_axis);
        let y_axis = z_axis.cross(&x_axis);

        Mat4([
            [x_axis.x(), x_axis.y(), x_axis.z(), 0.0],
            [y_axis.x(), y_axis.y(), y_axis.z(), 0.0],
            [z_axis.x(), z_axis.y(), z_axis.z(), 0.0],
            [
                camera_position.x(),
                camera_position.y(),
                camera_position.z(),
                1.0,
            ],
        ])
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(matrix: [[f32; 4]; 4]) -> Self {
        Mat4(matrix)
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(matrix: Mat4) -> Self {
        matrix.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat4_approx(a: &Mat4, b: &Mat4, tolerance: f32) {
        for i in 0..4 {
            for j in 0..4 {
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
        let m = Mat4::translation(1.0, 2.0, 3.0).multiply(&Mat4::rotation_x(45.0));
        assert_mat4_approx(&m.multiply(&Mat4::identity()), &m, 1e-6);
        assert_mat4_approx(&Mat4::identity().multiply(&m), &m, 1e-6);
    }

    /// Tests that a matrix times its inverse approximates the identity.
    #[test]
    fn test_inverse_law() {
        let m = Mat4::translation(10.0, 20.0, 30.0)
            .multiply(&Mat4::rotation_y(30.0))
            .multiply(&Mat4::scale(2.0, 3.0, 4.0));
        assert_mat4_approx(&m.multiply(&m.inverse()), &Mat4::identity(), 1e-4);
    }

    /// Tests that a singular matrix inverts to non-finite values rather than
    /// being silently corrected.
    #[test]
    fn test_inverse_singular_is_non_finite() {
        let m = Mat4([
            [1.0, 2.0, 3.0, 4.0],
            [1.0, 2.0, 3.0, 4.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inv = m.inverse();
        assert!(inv.0.iter().flatten().any(|v| !v.is_finite()));
    }

    /// Tests that Z rotations compose additively, including past 360
    /// degrees.
    #[test]
    fn test_rotation_z_composition() {
        let composed = Mat4::rotation_z(30.0).multiply(&Mat4::rotation_z(60.0));
        assert_mat4_approx(&composed, &Mat4::rotation_z(90.0), 1e-5);

        let wrapped = Mat4::rotation_z(300.0).multiply(&Mat4::rotation_z(120.0));
        assert_mat4_approx(&wrapped, &Mat4::rotation_z(60.0), 1e-5);
    }

    #[test]
    fn test_translation_composition() {
        let composed =
            Mat4::translation(1.0, 2.0, 3.0).multiply(&Mat4::translation(4.0, 5.0, 6.0));
        assert_mat4_approx(&composed, &Mat4::translation(5.0, 7.0, 9.0), 1e-6);
    }

    /// Tests the rotation direction about X: +Y goes to +Z at 90 degrees.
    #[test]
    fn test_rotation_x_direction() {
        let p = Mat4::rotation_x(90.0).transform_point([0.0, 1.0, 0.0, 1.0]);
        assert!(p[1].abs() < 1e-6);
        assert!((p[2] - 1.0).abs() < 1e-6);
    }

    /// Tests the pixel-to-clip mapping and its Y-flip.
    #[test]
    fn test_projection_corners() {
        let p = Mat4::projection(400.0, 300.0, 200.0);
        assert_eq!(
            p.transform_point([0.0, 0.0, 0.0, 1.0]),
            [-1.0, 1.0, 0.0, 1.0]
        );
        let bottom_right = p.transform_point([400.0, 300.0, 0.0, 1.0]);
        assert!((bottom_right[0] - 1.0).abs() < 1e-5);
        assert!((bottom_right[1] + 1.0).abs() < 1e-5);
    }

    /// Tests that multiplying a perspective matrix by the identity
    /// reproduces it exactly, element for element.
    #[test]
    fn test_perspective_identity_exact() {
        let p = Mat4::perspective(60.0, 1.0, 1.0, 1000.0);
        assert_eq!(p.multiply(&Mat4::identity()), p);
    }

    /// Tests the look-at scenario: camera at (0, 0, 10) looking at the
    /// origin has its position in the translation row and (0, 0, 1) as its
    /// z axis.
    #[test]
    fn test_look_at_basis() {
        use crate::math::vec::Vec3;
        let m = Mat4::look_at(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_eq!(m.0[3], [0.0, 0.0, 10.0, 1.0]);
        assert_eq!(m.0[2], [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(m.0[0], [1.0, 0.0, 0.0, 0.0]);
    }

    /// Tests that the view matrix (inverse of the camera matrix) undoes the
    /// camera transform.
    #[test]
    fn test_camera_view_round_trip() {
        let camera = Mat4::translation(0.0, 0.0, 300.0).multiply(&Mat4::rotation_y(40.0));
        let view = camera.inverse();
        assert_mat4_approx(&camera.multiply(&view), &Mat4::identity(), 1e-4);
    }
}
