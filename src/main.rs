//! A progression of small GPU demos: random rectangles, 2D and 3D transforms
//! on the letter "F", and an orbiting camera, each driven by egui sliders.
//!
//! # Architecture
//! - `app/`: winit application handler, state, and the redraw loop
//! - `scene/`: the four demo scenes and their matrix compositions
//! - `renderer/`: wgpu plumbing shared by the scenes
//! - `math/`: the row-major matrix and vector types the demos are built on
//!
//! # Usage
//! `wgpu-fundamentals [scene]` where scene is one of `rectangles`,
//! `transform-2d`, `transform-3d` or `camera` (the default).

pub mod app;
pub mod egui_lib;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod sliders;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::scene::SceneKind;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let kind = match std::env::args().nth(1) {
        Some(arg) => SceneKind::from_arg(&arg).unwrap_or_else(|| {
            log::warn!(
                "unknown scene {arg:?}; expected rectangles, transform-2d, transform-3d or camera"
            );
            SceneKind::Camera3d
        }),
        None => SceneKind::Camera3d,
    };
    log::info!("starting scene: {}", kind.title());

    pollster::block_on(run(kind));
}

async fn run(kind: SceneKind) {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("Error creating event loop: {err}");
            return;
        }
    };

    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new(kind);

    event_loop.run_app(&mut app).expect("Failed to run app");
}
