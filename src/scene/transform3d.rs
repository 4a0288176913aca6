//! The 3D "F" with per-axis translation, rotation and scale sliders, drawn
//! through the orthographic-style pixel projection.

use crate::math::mat4::Mat4;
use crate::renderer::attribute::{Attribute, AttributeData};
use crate::renderer::geometry;
use crate::renderer::pipeline_builder::{default_depth_state, PipelineBuilder};
use crate::renderer::uniform::{
    create_matrix_bind_group, create_matrix_bind_group_layout, create_uniform_buffer, Mat4Uniform,
};
use crate::renderer::vertex;
use crate::renderer::wgpu_lib::{CLEAR_COLOR, WgpuRenderer};
use crate::sliders::custom_slider;

/// Depth of the visible volume in pixels.
const DEPTH: f32 = 400.0;

pub struct Transform3dParams {
    pub translation: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for Transform3dParams {
    fn default() -> Self {
        Transform3dParams {
            translation: [150.0, 150.0, 0.0],
            rotation: [20.0, 10.0, 340.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

/// The full transform for the 3D "F": center, scale, rotate about each axis
/// in X, Y, Z order, translate, then project pixels to clip space.
pub fn model_matrix(params: &Transform3dParams, width: f32, height: f32) -> Mat4 {
    Mat4::translation(-50.0, -75.0, 0.0)
        .multiply(&Mat4::scale(
            params.scale[0],
            params.scale[1],
            params.scale[2],
        ))
        .multiply(&Mat4::rotation_x(params.rotation[0]))
        .multiply(&Mat4::rotation_y(params.rotation[1]))
        .multiply(&Mat4::rotation_z(params.rotation[2]))
        .multiply(&Mat4::translation(
            params.translation[0],
            params.translation[1],
            params.translation[2],
        ))
        .multiply(&Mat4::projection(width, height, DEPTH))
}

pub struct Transform3dScene {
    pipeline: wgpu::RenderPipeline,
    positions: Attribute,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pub params: Transform3dParams,
}

impl Transform3dScene {
    pub fn new(renderer: &WgpuRenderer) -> Self {
        let positions = Attribute::new(AttributeData::Float32(geometry::f_positions_3d()), 3);
        let colors = Attribute::normalized(AttributeData::Uint8(geometry::f_colors_3d()), 4);

        let position_buffer = positions.create_buffer(&renderer.device, "F 3D Positions");
        let color_buffer = colors.create_buffer(&renderer.device, "F 3D Colors");

        let params = Transform3dParams::default();
        let matrix = model_matrix(
            &params,
            renderer.surface_config.width as f32,
            renderer.surface_config.height as f32,
        );
        let uniform_buffer =
            create_uniform_buffer(&renderer.device, &Mat4Uniform::from(matrix), "F 3D Matrix");

        let bind_group_layout = create_matrix_bind_group_layout(&renderer.device);
        let bind_group = create_matrix_bind_group(
            &renderer.device,
            &bind_group_layout,
            &uniform_buffer,
            "F 3D Matrix Bind Group",
        );

        let pipeline = PipelineBuilder::new(&renderer.device, renderer.surface_config.format)
            .with_label("Transform 3D Pipeline")
            .with_shader(include_str!("../renderer/scene3d.wgsl"))
            .with_vertex_buffer(vertex::position3d_layout())
            .with_vertex_buffer(vertex::color_layout())
            .with_bind_group_layout(&bind_group_layout)
            .with_depth_stencil(default_depth_state())
            .build();

        Transform3dScene {
            pipeline,
            positions,
            position_buffer,
            color_buffer,
            uniform_buffer,
            bind_group,
            params,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::Window::new("3D Transforms")
            .default_open(true)
            .collapsible(false)
            .default_size(egui::Vec2::new(220.0, 0.0))
            .show(ctx, |ui| {
                ui.spacing_mut().slider_width = 100.0;
                ui.vertical(|ui| {
                    ui.label("Translation");
                    custom_slider(ui, "X", &mut self.params.translation[0], 0.0..=800.0, 1.0, 0);
                    custom_slider(ui, "Y", &mut self.params.translation[1], 0.0..=600.0, 1.0, 0);
                    custom_slider(
                        ui,
                        "Z",
                        &mut self.params.translation[2],
                        -200.0..=200.0,
                        1.0,
                        0,
                    );

                    ui.separator();
                    ui.label("Rotation");
                    custom_slider(ui, "X", &mut self.params.rotation[0], 0.0..=360.0, 1.0, 0);
                    custom_slider(ui, "Y", &mut self.params.rotation[1], 0.0..=360.0, 1.0, 0);
                    custom_slider(ui, "Z", &mut self.params.rotation[2], 0.0..=360.0, 1.0, 0);

                    ui.separator();
                    ui.label("Scale");
                    custom_slider(ui, "X", &mut self.params.scale[0], -5.0..=5.0, 0.01, 2);
                    custom_slider(ui, "Y", &mut self.params.scale[1], -5.0..=5.0, 0.01, 2);
                    custom_slider(ui, "Z", &mut self.params.scale[2], -5.0..=5.0, 0.01, 2);
                });
            });
    }

    pub fn draw(
        &mut self,
        renderer: &mut WgpuRenderer,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let matrix = model_matrix(
            &self.params,
            renderer.surface_config.width as f32,
            renderer.surface_config.height as f32,
        );
        renderer.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Mat4Uniform::from(matrix)),
        );

        let depth_view = renderer.depth_view();
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Transform 3D Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.position_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.color_buffer.slice(..));
        rpass.draw(0..self.positions.vertex_count(), 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_matrix_matches_manual_chain() {
        let params = Transform3dParams::default();
        let manual = Mat4::translation(-50.0, -75.0, 0.0)
            .multiply(&Mat4::scale(1.0, 1.0, 1.0))
            .multiply(&Mat4::rotation_x(20.0))
            .multiply(&Mat4::rotation_y(10.0))
            .multiply(&Mat4::rotation_z(340.0))
            .multiply(&Mat4::translation(150.0, 150.0, 0.0))
            .multiply(&Mat4::projection(640.0, 480.0, 400.0));
        assert_eq!(model_matrix(&params, 640.0, 480.0), manual);
    }

    /// Tests that with no rotation or scale, the letter's center pixel
    /// (50, 75, 0) lands at the translation target.
    #[test]
    fn test_center_follows_translation() {
        let params = Transform3dParams {
            translation: [200.0, 100.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        };
        let matrix = model_matrix(&params, 400.0, 400.0);
        let center = matrix.transform_point([50.0, 75.0, 0.0, 1.0]);
        let expected =
            Mat4::projection(400.0, 400.0, 400.0).transform_point([200.0, 100.0, 0.0, 1.0]);
        for i in 0..4 {
            assert!((center[i] - expected[i]).abs() < 1e-4);
        }
    }
}
