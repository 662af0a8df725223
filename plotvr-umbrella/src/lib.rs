//! # plotvr
//!
//! Walk through point-cloud data in a stereoscopic head-mounted display.
//!
//! This is the umbrella crate that re-exports the plotvr crates in one place.
//! Use the individual crates for finer control over dependencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use plotvr::prelude::*;
//!
//! let dataset = Dataset::from_json_str(r#"{"data": [[0, 0, -5, 1]], "speed": 1.0}"#).unwrap();
//! let mesh = MeshBuilder::default().build(&dataset);
//! assert_eq!(mesh.vertex_count(), 36);
//!
//! let mut nav = NavigationState::default();
//! apply_action(dispatch("period"), &mut nav);
//! apply_action(dispatch("a"), &mut nav);
//! assert_eq!(nav.mode(), TrackingMode::Free);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: io, remote and viewer
//! - `io`: endpoint resolution and the background loader
//! - `remote`: the control-channel command protocol
//! - `viewer`: frame rendering and session wiring (implies `io` and `remote`)

pub use plotvr_core::*;
pub use plotvr_navigation as navigation;

#[cfg(feature = "io")]
pub use plotvr_io as io;

#[cfg(feature = "remote")]
pub use plotvr_remote as remote;

#[cfg(feature = "viewer")]
pub use plotvr_viewer as viewer;

/// Commonly used types
pub mod prelude {
    pub use plotvr_core::{Dataset, MeshBuffers, MeshBuilder, Palette, Sample, Transform3D};
    pub use plotvr_navigation::{Axis, Direction, HeadTransform, NavigationState, TrackingMode};

    #[cfg(feature = "io")]
    pub use plotvr_io::{Endpoint, FileSource, Loader, LoaderConfig};

    #[cfg(feature = "remote")]
    pub use plotvr_remote::{apply_action, dispatch, Action, Command};

    #[cfg(feature = "viewer")]
    pub use plotvr_viewer::{FrameRenderer, RenderConfig, Scene, Session};
}
