//! The 2D "F" with translation, rotation and scale sliders.

use crate::math::mat3::Mat3;
use crate::renderer::attribute::{Attribute, AttributeData};
use crate::renderer::geometry;
use crate::renderer::pipeline_builder::PipelineBuilder;
use crate::renderer::uniform::{
    create_matrix_bind_group, create_matrix_bind_group_layout, create_uniform_buffer, Mat3Uniform,
};
use crate::renderer::vertex;
use crate::renderer::wgpu_lib::{CLEAR_COLOR, WgpuRenderer};
use crate::sliders::custom_slider;

pub struct Transform2dParams {
    pub translation: [f32; 2],
    pub rotation: f32,
    pub scale: [f32; 2],
}

impl Default for Transform2dParams {
    fn default() -> Self {
        Transform2dParams {
            translation: [100.0, 100.0],
            rotation: 0.0,
            scale: [1.0, 1.0],
        }
    }
}

/// The full transform for the 2D "F": move the letter's origin to its
/// center, scale, rotate, translate, then project to clip space. Order is
/// fixed; the letter scales and rotates about its center because the
/// centering translation applies first.
pub fn model_matrix(params: &Transform2dParams, width: f32, height: f32) -> Mat3 {
    Mat3::translation(-50.0, -75.0)
        .multiply(&Mat3::scale(params.scale[0], params.scale[1]))
        .multiply(&Mat3::rotation(params.rotation))
        .multiply(&Mat3::translation(
            params.translation[0],
            params.translation[1],
        ))
        .multiply(&Mat3::projection(width, height))
}

pub struct Transform2dScene {
    pipeline: wgpu::RenderPipeline,
    positions: Attribute,
    colors: Attribute,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pub params: Transform2dParams,
    recolor: bool,
}

impl Transform2dScene {
    pub fn new(renderer: &WgpuRenderer) -> Self {
        let mut rng = rand::thread_rng();

        let positions = Attribute::new(AttributeData::Float32(geometry::f_positions_2d()), 2);
        let color_data = geometry::solid_colors(
            geometry::random_color(&mut rng),
            positions.vertex_count() as usize,
        );
        let colors = Attribute::normalized(AttributeData::Uint8(color_data), 4);

        let position_buffer = positions.create_buffer(&renderer.device, "F 2D Positions");
        let color_buffer = colors.create_buffer(&renderer.device, "F 2D Colors");

        let params = Transform2dParams::default();
        let matrix = model_matrix(
            &params,
            renderer.surface_config.width as f32,
            renderer.surface_config.height as f32,
        );
        let uniform_buffer =
            create_uniform_buffer(&renderer.device, &Mat3Uniform::from(matrix), "F 2D Matrix");

        let bind_group_layout = create_matrix_bind_group_layout(&renderer.device);
        let bind_group = create_matrix_bind_group(
            &renderer.device,
            &bind_group_layout,
            &uniform_buffer,
            "F 2D Matrix Bind Group",
        );

        // Negative scale flips the winding, so both faces render.
        let pipeline = PipelineBuilder::new(&renderer.device, renderer.surface_config.format)
            .with_label("Transform 2D Pipeline")
            .with_shader(include_str!("../renderer/scene2d.wgsl"))
            .with_vertex_buffer(vertex::position2d_layout())
            .with_vertex_buffer(vertex::color_layout())
            .with_bind_group_layout(&bind_group_layout)
            .with_no_culling()
            .build();

        Transform2dScene {
            pipeline,
            positions,
            colors,
            position_buffer,
            color_buffer,
            uniform_buffer,
            bind_group,
            params,
            recolor: false,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::Window::new("2D Transforms")
            .default_open(true)
            .collapsible(false)
            .default_size(egui::Vec2::new(220.0, 0.0))
            .show(ctx, |ui| {
                ui.spacing_mut().slider_width = 100.0;
                ui.vertical(|ui| {
                    ui.label("Translation");
                    custom_slider(ui, "X", &mut self.params.translation[0], 0.0..=800.0, 1.0, 0);
                    custom_slider(ui, "Y", &mut self.params.translation[1], 0.0..=600.0, 1.0, 0);

                    ui.separator();
                    custom_slider(ui, "Rotation", &mut self.params.rotation, 0.0..=360.0, 1.0, 0);

                    ui.separator();
                    ui.label("Scale");
                    custom_slider(ui, "X", &mut self.params.scale[0], -5.0..=5.0, 0.01, 2);
                    custom_slider(ui, "Y", &mut self.params.scale[1], -5.0..=5.0, 0.01, 2);

                    ui.separator();
                    if ui.button("New Color").clicked() {
                        self.recolor = true;
                    }
                });
            });
    }

    pub fn draw(
        &mut self,
        renderer: &mut WgpuRenderer,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        if self.recolor {
            let mut rng = rand::thread_rng();
            let color_data = geometry::solid_colors(
                geometry::random_color(&mut rng),
                self.positions.vertex_count() as usize,
            );
            self.colors = Attribute::normalized(AttributeData::Uint8(color_data), 4);
            self.colors.write(&renderer.queue, &self.color_buffer);
            self.recolor = false;
        }

        let matrix = model_matrix(
            &self.params,
            renderer.surface_config.width as f32,
            renderer.surface_config.height as f32,
        );
        renderer.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Mat3Uniform::from(matrix)),
        );

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Transform 2D Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
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

    /// Tests that the composition helper matches the manually chained
    /// product.
    #[test]
    fn test_model_matrix_matches_manual_chain() {
        let params = Transform2dParams {
            translation: [120.0, 40.0],
            rotation: 30.0,
            scale: [2.0, 0.5],
        };
        let manual = Mat3::translation(-50.0, -75.0)
            .multiply(&Mat3::scale(2.0, 0.5))
            .multiply(&Mat3::rotation(30.0))
            .multiply(&Mat3::translation(120.0, 40.0))
            .multiply(&Mat3::projection(640.0, 480.0));
        assert_eq!(model_matrix(&params, 640.0, 480.0), manual);
    }

    /// Tests that with default parameters the letter's center pixel (50, 75)
    /// lands where the translation puts it, i.e. pixel (100, 100) in clip
    /// space.
    #[test]
    fn test_default_params_center() {
        let matrix = model_matrix(&Transform2dParams::default(), 400.0, 400.0);
        let center = matrix.transform_point([50.0, 75.0, 1.0]);
        let expected = Mat3::projection(400.0, 400.0).transform_point([100.0, 100.0, 1.0]);
        assert!((center[0] - expected[0]).abs() < 1e-5);
        assert!((center[1] - expected[1]).abs() < 1e-5);
    }
}
