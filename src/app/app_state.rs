//! Holds all state for a running demo: the GPU renderer, the egui layer,
//! and the active scene.

use std::sync::Arc;
use winit::window::Window;

use crate::egui_lib::EguiRenderer;
use crate::renderer::wgpu_lib::WgpuRenderer;
use crate::scene::{Scene, SceneKind};

pub struct AppState {
    pub wgpu_renderer: WgpuRenderer,
    pub egui_renderer: EguiRenderer,
    pub scene: Scene,
}

impl AppState {
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'static>,
        window: &Window,
        width: u32,
        height: u32,
        kind: SceneKind,
    ) -> Self {
        let wgpu_renderer = WgpuRenderer::new(instance, surface, width, height).await;

        let egui_renderer = EguiRenderer::new(
            &wgpu_renderer.device,
            wgpu_renderer.surface_config.format,
            None,
            1,
            window,
        );

        let scene = Scene::new(kind, &wgpu_renderer);

        AppState {
            wgpu_renderer,
            egui_renderer,
            scene,
        }
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        self.wgpu_renderer.resize(width, height);
    }

    /// Runs the scene's slider window inside a fresh egui frame. The frame is
    /// finished and drawn later in the redraw path.
    pub fn update_ui(&mut self, window: &Arc<Window>) {
        self.egui_renderer.begin_frame(window);
        let ctx = self.egui_renderer.context().clone();
        self.scene.ui(&ctx);
    }
}
