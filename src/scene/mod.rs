//! The four demo scenes. Each scene owns its pipeline, vertex buffers,
//! uniform buffer(s), parameters and egui panel; the pure matrix composition
//! for each lives in a free function so it can be tested without a GPU.

pub mod camera3d;
pub mod rectangles;
pub mod transform2d;
pub mod transform3d;

use crate::renderer::wgpu_lib::WgpuRenderer;

/// Which demo to run, picked on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Rectangles,
    Transform2d,
    Transform3d,
    Camera3d,
}

impl SceneKind {
    pub fn from_arg(arg: &str) -> Option<SceneKind> {
        match arg {
            "rectangles" => Some(SceneKind::Rectangles),
            "transform-2d" => Some(SceneKind::Transform2d),
            "transform-3d" => Some(SceneKind::Transform3d),
            "camera" => Some(SceneKind::Camera3d),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::Rectangles => "Random Rectangles",
            SceneKind::Transform2d => "2D Transforms",
            SceneKind::Transform3d => "3D Transforms",
            SceneKind::Camera3d => "Camera",
        }
    }
}

pub enum Scene {
    Rectangles(rectangles::RectanglesScene),
    Transform2d(transform2d::Transform2dScene),
    Transform3d(transform3d::Transform3dScene),
    Camera3d(camera3d::Camera3dScene),
}

impl Scene {
    pub fn new(kind: SceneKind, renderer: &WgpuRenderer) -> Scene {
        match kind {
            SceneKind::Rectangles => {
                Scene::Rectangles(rectangles::RectanglesScene::new(renderer))
            }
            SceneKind::Transform2d => {
                Scene::Transform2d(transform2d::Transform2dScene::new(renderer))
            }
            SceneKind::Transform3d => {
                Scene::Transform3d(transform3d::Transform3dScene::new(renderer))
            }
            SceneKind::Camera3d => Scene::Camera3d(camera3d::Camera3dScene::new(renderer)),
        }
    }

    /// Builds this scene's slider window. Runs between `begin_frame` and
    /// `end_frame_and_draw` on the egui side.
    pub fn ui(&mut self, ctx: &egui::Context) {
        match self {
            Scene::Rectangles(scene) => scene.ui(ctx),
            Scene::Transform2d(scene) => scene.ui(ctx),
            Scene::Transform3d(scene) => scene.ui(ctx),
            Scene::Camera3d(scene) => scene.ui(ctx),
        }
    }

    /// Recomputes this scene's matrices from the current parameters, uploads
    /// them, and records one render pass into `encoder`.
    pub fn draw(
        &mut self,
        renderer: &mut WgpuRenderer,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        match self {
            Scene::Rectangles(scene) => scene.draw(renderer, encoder, view),
            Scene::Transform2d(scene) => scene.draw(renderer, encoder, view),
            Scene::Transform3d(scene) => scene.draw(renderer, encoder, view),
            Scene::Camera3d(scene) => scene.draw(renderer, encoder, view),
        }
    }
}
