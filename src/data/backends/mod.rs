//! Built-in container backends.

mod hdf5_backend;
mod memory;

pub use hdf5_backend::Hdf5Container;
pub use memory::{MemoryContainer, MemoryDataset};
