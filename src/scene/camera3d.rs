//! A ring of five 3D "F"s under a perspective projection, orbited by a
//! camera that can optionally stay locked onto the first letter.

use crate::math::mat4::Mat4;
use crate::math::vec::Vec3;
use crate::renderer::attribute::{Attribute, AttributeData};
use crate::renderer::geometry;
use crate::renderer::pipeline_builder::{default_depth_state, PipelineBuilder};
use crate::renderer::uniform::{
    create_matrix_bind_group, create_matrix_bind_group_layout, create_uniform_buffer, Mat4Uniform,
};
use crate::renderer::vertex;
use crate::renderer::wgpu_lib::{CLEAR_COLOR, WgpuRenderer};
use crate::sliders::custom_slider;

pub const F_COUNT: usize = 5;
pub const RADIUS: f32 = 200.0;
const Z_NEAR: f32 = 1.0;
const Z_FAR: f32 = 2000.0;

pub struct Camera3dParams {
    pub camera_angle: f32,
    pub fov: f32,
    pub locked_on: bool,
}

impl Default for Camera3dParams {
    fn default() -> Self {
        Camera3dParams {
            camera_angle: 0.0,
            fov: 60.0,
            locked_on: true,
        }
    }
}

/// World position of the `index`-th "F" on the ring.
pub fn f_position(index: usize) -> [f32; 3] {
    let angle = index as f32 * std::f32::consts::PI * 2.0 / F_COUNT as f32;
    [angle.cos() * RADIUS, 0.0, angle.sin() * RADIUS]
}

/// The camera's world matrix: an orbit around the ring's center, or a
/// look-at aimed at the first "F" from the orbit position when locked on.
pub fn camera_matrix(params: &Camera3dParams) -> Mat4 {
    let orbit =
        Mat4::translation(0.0, 0.0, RADIUS * 1.5).multiply(&Mat4::rotation_y(params.camera_angle));

    if params.locked_on {
        // The camera's position is the translation row of its matrix.
        let position = Vec3::new(orbit.0[3][0], orbit.0[3][1], orbit.0[3][2]);
        Mat4::look_at(
            position,
            Vec3::new(RADIUS, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    } else {
        orbit
    }
}

/// View-projection: the inverse of the camera matrix, then the perspective
/// projection.
pub fn view_projection(params: &Camera3dParams, aspect: f32) -> Mat4 {
    camera_matrix(params)
        .inverse()
        .multiply(&Mat4::perspective(params.fov, aspect, Z_NEAR, Z_FAR))
}

pub struct Camera3dScene {
    pipeline: wgpu::RenderPipeline,
    positions: Attribute,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    uniform_buffers: Vec<wgpu::Buffer>,
    bind_groups: Vec<wgpu::BindGroup>,
    pub params: Camera3dParams,
}

impl Camera3dScene {
    pub fn new(renderer: &WgpuRenderer) -> Self {
        let positions = Attribute::new(AttributeData::Float32(geometry::f_positions_3d()), 3);
        let colors = Attribute::normalized(AttributeData::Uint8(geometry::f_colors_3d()), 4);

        let position_buffer = positions.create_buffer(&renderer.device, "F Ring Positions");
        let color_buffer = colors.create_buffer(&renderer.device, "F Ring Colors");

        let params = Camera3dParams::default();
        let aspect =
            renderer.surface_config.width as f32 / renderer.surface_config.height as f32;
        let vp = view_projection(&params, aspect);

        let bind_group_layout = create_matrix_bind_group_layout(&renderer.device);

        // One uniform buffer per "F": each draw in the pass needs its own
        // matrix resident at submission time.
        let mut uniform_buffers = Vec::with_capacity(F_COUNT);
        let mut bind_groups = Vec::with_capacity(F_COUNT);
        for index in 0..F_COUNT {
            let [x, y, z] = f_position(index);
            let matrix = Mat4::translation(x, y, z).multiply(&vp);
            let buffer = create_uniform_buffer(
                &renderer.device,
                &Mat4Uniform::from(matrix),
                "F Ring Matrix",
            );
            bind_groups.push(create_matrix_bind_group(
                &renderer.device,
                &bind_group_layout,
                &buffer,
                "F Ring Matrix Bind Group",
            ));
            uniform_buffers.push(buffer);
        }

        let pipeline = PipelineBuilder::new(&renderer.device, renderer.surface_config.format)
            .with_label("Camera Pipeline")
            .with_shader(include_str!("../renderer/scene3d.wgsl"))
            .with_vertex_buffer(vertex::position3d_layout())
            .with_vertex_buffer(vertex::color_layout())
            .with_bind_group_layout(&bind_group_layout)
            .with_depth_stencil(default_depth_state())
            .build();

        Camera3dScene {
            pipeline,
            positions,
            position_buffer,
            color_buffer,
            uniform_buffers,
            bind_groups,
            params,
        }
    }

    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::Window::new("Camera")
            .default_open(true)
            .collapsible(false)
            .default_size(egui::Vec2::new(220.0, 0.0))
            .show(ctx, |ui| {
                ui.spacing_mut().slider_width = 100.0;
                ui.vertical(|ui| {
                    custom_slider(ui, "Angle", &mut self.params.camera_angle, 0.0..=360.0, 1.0, 0);
                    custom_slider(ui, "FOV", &mut self.params.fov, 1.0..=179.0, 1.0, 0);
                    ui.checkbox(&mut self.params.locked_on, "Lock onto first F");
                });
            });
    }

    pub fn draw(
        &mut self,
        renderer: &mut WgpuRenderer,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let aspect =
            renderer.surface_config.width as f32 / renderer.surface_config.height as f32;
        let vp = view_projection(&self.params, aspect);

        for (index, buffer) in self.uniform_buffers.iter().enumerate() {
            let [x, y, z] = f_position(index);
            let matrix = Mat4::translation(x, y, z).multiply(&vp);
            renderer
                .queue
                .write_buffer(buffer, 0, bytemuck::bytes_of(&Mat4Uniform::from(matrix)));
        }

        let depth_view = renderer.depth_view();
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Camera Pass"),
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
        rpass.set_vertex_buffer(0, self.position_buffer.slice(..));
        rpass.set_vertex_buffer(1, self.color_buffer.slice(..));
        for bind_group in &self.bind_groups {
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.draw(0..self.positions.vertex_count(), 0..1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the view matrix inverts the camera matrix.
    #[test]
    fn test_view_inverts_camera() {
        let params = Camera3dParams {
            camera_angle: 72.0,
            fov: 60.0,
            locked_on: false,
        };
        let camera = camera_matrix(&params);
        let product = camera.multiply(&camera.inverse());
        for (i, row) in product.0.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((value - expected).abs() < 1e-4);
            }
        }
    }

    /// Tests that every "F" sits on the ring at the expected radius.
    #[test]
    fn test_f_ring_radius() {
        for index in 0..F_COUNT {
            let [x, y, z] = f_position(index);
            assert_eq!(y, 0.0);
            assert!(((x * x + z * z).sqrt() - RADIUS).abs() < 1e-3);
        }
    }

    /// Tests that locking on keeps the camera's position but turns it toward
    /// the first "F": the translation row matches the free orbit and the
    /// target direction has no component along the camera's x axis.
    #[test]
    fn test_locked_on_keeps_position() {
        let free = Camera3dParams {
            camera_angle: 120.0,
            fov: 60.0,
            locked_on: false,
        };
        let locked = Camera3dParams {
            locked_on: true,
            ..free
        };
        let orbit = camera_matrix(&free);
        let aimed = camera_matrix(&locked);
        for j in 0..4 {
            assert!((orbit.0[3][j] - aimed.0[3][j]).abs() < 1e-4);
        }

        let to_target = Vec3::new(
            RADIUS - aimed.0[3][0],
            0.0 - aimed.0[3][1],
            0.0 - aimed.0[3][2],
        );
        let x_axis = Vec3::new(aimed.0[0][0], aimed.0[0][1], aimed.0[0][2]);
        assert!(to_target.dot(&x_axis).abs() < 1e-2);
    }
}
