//! GPU plumbing shared by the scenes: the wgpu context, pipeline
//! construction, vertex attributes, uniform upload, and the demo geometry.

pub mod attribute;
pub mod geometry;
pub mod pipeline_builder;
pub mod uniform;
pub mod vertex;
pub mod wgpu_lib;
