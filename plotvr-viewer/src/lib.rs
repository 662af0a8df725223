//! Stereo rendering and session wiring for plotvr
//!
//! This crate ties the pieces together:
//! - [`Scene`] holds the current dataset and the cube mesh built from it
//! - [`FrameRenderer`] updates navigation once per frame and issues the cube
//!   and floor passes for each eye
//! - [`GraphicsBackend`] is the seam to the graphics API
//! - [`Session`] owns all of the above plus the loader and command queue

pub mod backend;
pub mod config;
pub mod eye;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod trigger;

pub use backend::{DrawCall, DrawKind, DrawUniforms, GraphicsBackend, RecordedDraw, RecordingBackend};
pub use config::RenderConfig;
pub use eye::{Eye, EyeParams, EyeViews};
pub use renderer::{FrameRenderer, FrameStats};
pub use scene::Scene;
pub use session::{Session, COMMAND_QUEUE_CAPACITY};
pub use trigger::{TriggerOutcome, TriggerState, DOUBLE_CLICK_WINDOW};
