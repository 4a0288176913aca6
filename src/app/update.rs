//! Per-frame redraw: acquire the surface, draw the active scene, then the
//! egui layer on top, submit and present.

use egui_wgpu::ScreenDescriptor;

use super::event_handler::App;

impl App {
    pub fn handle_redraw(&mut self) {
        let window = self
            .window
            .as_ref()
            .expect("Window must be initialized before use");
        if window.is_minimized().unwrap_or(false) {
            return;
        }

        let state = self
            .state
            .as_mut()
            .expect("State must be initialized before use");

        let (surface_texture, surface_view) = match state.wgpu_renderer.acquire_frame() {
            Ok(frame) => frame,
            Err(err) => {
                log::warn!("Skipping frame: {err}");
                return;
            }
        };

        let mut encoder = state
            .wgpu_renderer
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });

        state
            .scene
            .draw(&mut state.wgpu_renderer, &mut encoder, &surface_view);

        state.update_ui(window);

        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [
                state.wgpu_renderer.surface_config.width,
                state.wgpu_renderer.surface_config.height,
            ],
            pixels_per_point: window.scale_factor() as f32,
        };
        state.egui_renderer.end_frame_and_draw(
            &state.wgpu_renderer.device,
            &state.wgpu_renderer.queue,
            &mut encoder,
            window,
            &surface_view,
            screen_descriptor,
        );

        state.wgpu_renderer.queue.submit(Some(encoder.finish()));
        surface_texture.present();

        window.request_redraw();
    }
}
