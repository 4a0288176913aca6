//! Fifty random rectangles in random colors, drawn in pixel coordinates
//! through the 2D projection matrix alone.

use crate::math::mat3::Mat3;
use crate::renderer::attribute::{Attribute, AttributeData};
use crate::renderer::geometry;
use crate::renderer::pipeline_builder::PipelineBuilder;
use crate::renderer::uniform::{
    create_matrix_bind_group, create_matrix_bind_group_layout, create_uniform_buffer, Mat3Uniform,
};
use crate::renderer::vertex;
use crate::renderer::wgpu_lib::{CLEAR_COLOR, WgpuRenderer};

const RECT_COUNT: usize = 50;

pub struct RectanglesScene {
    pipeline: wgpu::RenderPipeline,
    positions: Attribute,
    colors: Attribute,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    regenerate: bool,
}

impl RectanglesScene {
    pub fn new(renderer: &WgpuRenderer) -> Self {
        let mut rng = rand::thread_rng();
        let (position_data, color_data) = geometry::random_rectangles(&mut rng, RECT_COUNT);

        let positions = Attribute::new(AttributeData::Float32(position_data), 2);
        let colors = Attribute::normalized(AttributeData::Uint8(color_data), 4);
        let position_buffer = positions.create_buffer(&renderer.device, "Rectangle Positions");
        let color_buffer = colors.create_buffer(&renderer.device, "Rectangle Colors");

        let projection = Mat3::projection(
            renderer.surface_config.width as f32,
            renderer.surface_config.height as f32,
        );
        let uniform_buffer = create_uniform_buffer(
            &renderer.device,
            &Mat3Uniform::from(projection),
            "Rectangle Matrix",
        );

        let bind_group_layout = create_matrix_bind_group_layout(&renderer.device);
        let bind_group = create_matrix_bind_group(
            &renderer.device,
            &bind_group_layout,
            &uniform_buffer,
            "Rectangle Matrix Bind Group",
        );

        let pipeline = PipelineBuilder::new(&renderer.device, renderer.surface_config.format)
            .with_label("Rectangles Pipeline")
            .with_shader(include_str!("../renderer/scene2d.wgsl"))
            .with_vertex_buffer(vertex::position2d_layout())
            .with_vertex_buffer(vertex::color_layout())
            .with_bind_group_layout(&bind_group_layout)
            .with_no_culling()
            .build();

        RectanglesScene {
            pipeline,
            positions,
            colors,
            position_buffer,
            color_buffer,
            uniform_buffer,
            bind_group,
            regenerate: false,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::Window::new("Rectangles")
            .default_open(true)
            .collapsible(false)
            .show(ctx, |ui| {
                if ui.button("Regenerate").clicked() {
                    self.regenerate = true;
                }
            });
    }

    pub fn draw(
        &mut self,
        renderer: &mut WgpuRenderer,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        if self.regenerate {
            let mut rng = rand::thread_rng();
            let (position_data, color_data) = geometry::random_rectangles(&mut rng, RECT_COUNT);
            self.positions = Attribute::new(AttributeData::Float32(position_data), 2);
            self.colors = Attribute::normalized(AttributeData::Uint8(color_data), 4);
            self.positions.write(&renderer.queue, &self.position_buffer);
            self.colors.write(&renderer.queue, &self.color_buffer);
            self.regenerate = false;
        }

        let projection = Mat3::projection(
            renderer.surface_config.width as f32,
            renderer.surface_config.height as f32,
        );
        renderer.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Mat3Uniform::from(projection)),
        );

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Rectangles Pass"),
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
