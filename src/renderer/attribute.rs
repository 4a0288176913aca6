//! Typed vertex attribute data and the buffers that carry it.
//!
//! [`AttributeData`] is a closed sum of the component types the demos use, so
//! the size-in-bytes of a component is derived from the variant instead of
//! being passed alongside untyped bytes.

use wgpu::util::DeviceExt;

/// Vertex component data, one variant per supported component type.
pub enum AttributeData {
    Float32(Vec<f32>),
    Uint8(Vec<u8>),
    Int32(Vec<i32>),
}

impl AttributeData {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AttributeData::Float32(values) => bytemuck::cast_slice(values),
            AttributeData::Uint8(values) => values,
            AttributeData::Int32(values) => bytemuck::cast_slice(values),
        }
    }

    /// Number of scalar components, not bytes.
    pub fn len(&self) -> usize {
        match self {
            AttributeData::Float32(values) => values.len(),
            AttributeData::Uint8(values) => values.len(),
            AttributeData::Int32(values) => values.len(),
        }
    }

    fn component_size(&self) -> usize {
        match self {
            AttributeData::Float32(_) => 4,
            AttributeData::Uint8(_) => 1,
            AttributeData::Int32(_) => 4,
        }
    }
}

/// A vertex attribute: its data, how many components make up one vertex, and
/// whether integer data is normalized to [0, 1] on the GPU.
pub struct Attribute {
    pub data: AttributeData,
    pub size: u32,
    pub normalized: bool,
}

impl Attribute {
    pub fn new(data: AttributeData, size: u32) -> Self {
        Attribute {
            data,
            size,
            normalized: false,
        }
    }

    pub fn normalized(data: AttributeData, size: u32) -> Self {
        Attribute {
            data,
            size,
            normalized: true,
        }
    }

    /// Maps the variant, component count and normalization to a wgpu vertex
    /// format.
    ///
    /// # Panics
    ///
    /// Panics on combinations wgpu has no format for, such as three-component
    /// u8 data. Attributes are built from literals at scene construction, so
    /// this is a programming error, not an input error.
    pub fn vertex_format(&self) -> wgpu::VertexFormat {
        match (&self.data, self.size, self.normalized) {
            (AttributeData::Float32(_), 2, false) => wgpu::VertexFormat::Float32x2,
            (AttributeData::Float32(_), 3, false) => wgpu::VertexFormat::Float32x3,
            (AttributeData::Float32(_), 4, false) => wgpu::VertexFormat::Float32x4,
            (AttributeData::Uint8(_), 4, true) => wgpu::VertexFormat::Unorm8x4,
            (AttributeData::Uint8(_), 4, false) => wgpu::VertexFormat::Uint8x4,
            (AttributeData::Int32(_), 1, false) => wgpu::VertexFormat::Sint32,
            (AttributeData::Int32(_), 2, false) => wgpu::VertexFormat::Sint32x2,
            (AttributeData::Int32(_), 3, false) => wgpu::VertexFormat::Sint32x3,
            (data, size, normalized) => panic!(
                "unsupported vertex format: {} x{size} normalized={normalized}",
                match data {
                    AttributeData::Float32(_) => "f32",
                    AttributeData::Uint8(_) => "u8",
                    AttributeData::Int32(_) => "i32",
                }
            ),
        }
    }

    /// Bytes per vertex.
    pub fn stride(&self) -> u64 {
        (self.data.component_size() as u64) * u64::from(self.size)
    }

    pub fn vertex_count(&self) -> u32 {
        (self.data.len() as u32) / self.size
    }

    pub fn create_buffer(&self, device: &wgpu::Device, label: &str) -> wgpu::Buffer {
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: self.data.as_bytes(),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        })
    }

    pub fn write(&self, queue: &wgpu::Queue, buffer: &wgpu::Buffer) {
        queue.write_buffer(buffer, 0, self.data.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_count() {
        let positions = Attribute::new(AttributeData::Float32(vec![0.0; 12]), 2);
        assert_eq!(positions.vertex_count(), 6);

        let colors = Attribute::normalized(AttributeData::Uint8(vec![255; 24]), 4);
        assert_eq!(colors.vertex_count(), 6);
    }

    #[test]
    fn test_vertex_formats() {
        let pos2 = Attribute::new(AttributeData::Float32(vec![]), 2);
        assert_eq!(pos2.vertex_format(), wgpu::VertexFormat::Float32x2);

        let pos3 = Attribute::new(AttributeData::Float32(vec![]), 3);
        assert_eq!(pos3.vertex_format(), wgpu::VertexFormat::Float32x3);

        let colors = Attribute::normalized(AttributeData::Uint8(vec![]), 4);
        assert_eq!(colors.vertex_format(), wgpu::VertexFormat::Unorm8x4);
    }

    #[test]
    #[should_panic(expected = "unsupported vertex format")]
    fn test_unsupported_format_panics() {
        // u8 x3 has no wgpu format; colors must carry an alpha byte.
        let bad = Attribute::normalized(AttributeData::Uint8(vec![]), 3);
        bad.vertex_format();
    }

    #[test]
    fn test_stride() {
        let pos2 = Attribute::new(AttributeData::Float32(vec![]), 2);
        assert_eq!(pos2.stride(), 8);

        let colors = Attribute::normalized(AttributeData::Uint8(vec![]), 4);
        assert_eq!(colors.stride(), 4);
    }

    #[test]
    fn test_byte_lengths() {
        let data = AttributeData::Float32(vec![1.0, 2.0, 3.0]);
        assert_eq!(data.as_bytes().len(), 12);
        assert_eq!(data.len(), 3);

        let ints = AttributeData::Int32(vec![-1, 7]);
        assert_eq!(ints.as_bytes().len(), 8);
    }
}
