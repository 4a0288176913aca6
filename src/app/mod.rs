//! Application lifecycle: the winit handler, its state, and the per-frame
//! update loop.
//!
//! # Module Structure
//!
//! - [`app_state`]: the [`AppState`] struct holding the renderers and scene
//! - [`event_handler`]: the [`App`] struct and winit event routing
//! - [`update`]: the per-frame redraw path
//!
//! The application runs single-threaded on the winit event loop: events
//! update scene parameters, and every redraw recomputes the scene's matrices
//! from those parameters before drawing.

pub mod app_state;
pub mod event_handler;
pub mod update;

pub use app_state::AppState;
pub use event_handler::App;
