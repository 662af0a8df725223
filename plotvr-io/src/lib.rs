//! Dataset loading for plotvr
//!
//! This crate turns an endpoint string into a normalized data location and
//! loads datasets off the render thread. Loads are tagged with increasing
//! sequence numbers so a slow, older load can never replace a newer one.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod loader;
pub mod sample;
pub mod source;

pub use config::LoaderConfig;
pub use endpoint::Endpoint;
pub use error::IoError;
pub use loader::{LoadOutcome, Loader};
pub use sample::sample_dataset;
pub use source::{read_dataset, DataSource, FileSource};
