//! Head tracking and camera navigation for plotvr
//!
//! [`NavigationState`] owns the camera, head and pre-view matrices. The
//! camera either follows the physical head ([`TrackingMode::Tracking`]) or
//! is steered by discrete move commands while the head pose is frozen
//! ([`TrackingMode::Free`]). Switching between the two keeps the rendered
//! scene in place.

pub mod config;
pub mod head;
pub mod state;
pub mod focus;

pub use config::NavigationConfig;
pub use head::{Axis, Direction, HeadBasis, HeadTransform};
pub use state::{NavigationState, TrackingMode};
pub use focus::{Relocation, RELOCATE_AZIMUTH_DEG, RELOCATE_DISTANCE, RELOCATE_ELEVATION_DEG};
