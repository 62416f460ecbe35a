//! Read-only access to hierarchical containers.
//!
//! This module provides:
//! - `Container`: the seam the walker and extractor read through
//! - `Hdf5Container`: HDF5 files on disk
//! - `MemoryContainer`: synthetic containers assembled in code
//!
//! ## Adding New Backends
//!
//! Implement `Container` for the new handle type. Paths handed to a backend
//! never carry a leading slash and the root group is the empty path. Links
//! that could lead outside the tree (soft, external) must classify as
//! `MemberKind::Other`.
//!
//! ```rust,ignore
//! use awake_inspect::data::{Container, MemberKind, PayloadDescriptor};
//!
//! impl Container for MyHandle {
//!     fn id(&self) -> &'static str { "mine" }
//!     fn location(&self) -> &str { &self.name }
//!     fn child_names(&self, group: &str) -> Result<Vec<String>> { /* ... */ }
//!     fn member_kind(&self, path: &str) -> Result<MemberKind> { /* ... */ }
//!     fn object_id(&self, path: &str) -> Result<String> { /* ... */ }
//!     fn describe(&self, path: &str) -> Result<PayloadDescriptor> { /* ... */ }
//!     fn read_values(&self, path: &str) -> Result<Vec<f64>> { /* ... */ }
//! }
//! ```

pub mod backends;
mod container;

pub use backends::{Hdf5Container, MemoryContainer, MemoryDataset};
pub use container::{Container, ElementType, MemberKind, PayloadDescriptor, join_path};
