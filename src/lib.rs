//! awake-inspect - HDF5 event file inventory and streak image preview
//!
//! Walks every member of an event file, writes one CSV row per dataset
//! (group, subgroup, name, shape, type, size) and renders the streak-camera
//! image as a median-filtered PNG.

pub mod config;
pub mod constants;
pub mod data;
pub mod discovery;
mod error;
pub mod inventory;
pub mod pipeline;
pub mod preview;
pub mod timestamp;

pub use config::{InspectConfig, LogLevel};
pub use error::{InspectError, Result};
pub use pipeline::{RunSummary, run};
