//! # Uniform Data Structures
//!
//! GPU-side mirrors of the CPU matrix types, laid out to satisfy WGSL uniform
//! alignment rules, plus helpers for the buffers and bind groups that carry
//! them.
//!
//! Matrices are uploaded **untransposed**: the bytes of a row-major matrix
//! land in a WGSL `matNxN` whose columns are our rows, and the shaders
//! multiply `matrix * vector` so the row-vector convention from
//! [`math`](crate::math) still holds on the GPU.

use wgpu::util::DeviceExt;

use crate::math::mat3::Mat3;
use crate::math::mat4::Mat4;

/// A 3×3 matrix as WGSL sees it: each row padded to 16 bytes because
/// `mat3x3<f32>` columns have vec4 alignment in uniform storage.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3Uniform {
    pub rows: [[f32; 4]; 3],
}

impl From<Mat3> for Mat3Uniform {
    fn from(m: Mat3) -> Self {
        let mut rows = [[0.0; 4]; 3];
        for (padded, row) in rows.iter_mut().zip(m.0.iter()) {
            padded[..3].copy_from_slice(row);
        }
        Mat3Uniform { rows }
    }
}

/// A 4×4 matrix uniform. `mat4x4<f32>` needs no padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4Uniform {
    pub matrix: [[f32; 4]; 4],
}

impl From<Mat4> for Mat4Uniform {
    fn from(m: Mat4) -> Self {
        Mat4Uniform { matrix: m.0 }
    }
}

/// Helper for creating uniform buffers
///
pub fn create_uniform_buffer<T: bytemuck::Pod>(
    device: &wgpu::Device,
    data: &T,
    label: &str,
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(std::slice::from_ref(data)),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

/// Creates the layout every scene shares: one vertex-stage uniform buffer at
/// binding 0.
pub fn create_matrix_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Matrix Bind Group Layout"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    })
}

/// Binds a uniform buffer to binding 0 of the shared matrix layout.
pub fn create_matrix_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffer: &wgpu::Buffer,
    label: &str,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buffer.as_entire_binding(),
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the WGSL-mandated sizes: 3 padded vec4 rows and a full mat4x4.
    #[test]
    fn test_uniform_sizes() {
        assert_eq!(std::mem::size_of::<Mat3Uniform>(), 48);
        assert_eq!(std::mem::size_of::<Mat4Uniform>(), 64);
    }

    /// Tests that Mat3 rows land in the first three lanes and the pad lane
    /// stays zero.
    #[test]
    fn test_mat3_padding() {
        let uniform = Mat3Uniform::from(Mat3::translation(7.0, -2.0));
        assert_eq!(uniform.rows[0], [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(uniform.rows[2], [7.0, -2.0, 1.0, 0.0]);
        for row in &uniform.rows {
            assert_eq!(row[3], 0.0);
        }
    }

    /// Tests that Mat4 uploads untransposed: row i of the source is row i of
    /// the uniform.
    #[test]
    fn test_mat4_untransposed() {
        let uniform = Mat4Uniform::from(Mat4::translation(1.0, 2.0, 3.0));
        assert_eq!(uniform.matrix[3], [1.0, 2.0, 3.0, 1.0]);
    }
}
