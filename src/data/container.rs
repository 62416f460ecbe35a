//! Trait-based container access.
//!
//! The hierarchy walker and the metadata extractor only see containers
//! through the `Container` trait, so the same traversal runs against HDF5
//! files and against synthetic in-memory trees.

use std::fmt;

use crate::error::{InspectError, Result};

/// What a member path resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKind {
    /// Internal node with children
    Group,
    /// Leaf node carrying array data
    Dataset,
    /// Anything else (soft or external link, named datatype, ...). Carries a
    /// short description for logging.
    Other(String),
}

/// Element type of a dataset payload.
///
/// Both variants serialize as their inner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    /// Type mapped onto a known scalar or composite type name
    Resolved(String),
    /// Type the backend could not map; holds a raw storage description
    Unresolved(String),
}

impl ElementType {
    /// Whether the type resolved to a known name.
    pub fn is_resolved(&self) -> bool {
        matches!(self, ElementType::Resolved(_))
    }

    /// Text written to the inventory.
    pub fn as_str(&self) -> &str {
        match self {
            ElementType::Resolved(name) | ElementType::Unresolved(name) => name,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape, type and element count of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadDescriptor {
    /// One extent per dimension; empty for scalars
    pub shape: Vec<usize>,
    /// Element type
    pub element_type: ElementType,
    /// Total element count
    pub size: usize,
}

/// Read-only view of a hierarchical container.
pub trait Container {
    /// Short backend identifier (e.g., "hdf5", "memory").
    fn id(&self) -> &'static str;

    /// Where the container lives, used in log and error messages.
    fn location(&self) -> &str;

    /// Names of the direct children of a group, in the container's own
    /// order. The root group is `""`.
    fn child_names(&self, group: &str) -> Result<Vec<String>>;

    /// Classify a member.
    ///
    /// Only hard links resolve to `Group` or `Dataset`; soft and external
    /// links are `Other`, so following members never leaves the tree.
    fn member_kind(&self, path: &str) -> Result<MemberKind>;

    /// Identity of the object a group or dataset path points at.
    ///
    /// Two paths share an id exactly when they are hard links to the same
    /// object.
    fn object_id(&self, path: &str) -> Result<String>;

    /// Payload descriptor of a dataset.
    ///
    /// Fails with `MissingPayload` when `path` is not a readable dataset.
    fn describe(&self, path: &str) -> Result<PayloadDescriptor>;

    /// Read a dataset's values, flattened in row-major order and converted
    /// to `f64`.
    fn read_values(&self, path: &str) -> Result<Vec<f64>>;

    /// Read the first value of a dataset. Scalar parameters are often
    /// stored as one-element arrays.
    fn read_scalar(&self, path: &str) -> Result<f64> {
        self.read_values(path)?
            .first()
            .copied()
            .ok_or_else(|| InspectError::missing_payload(path))
    }
}

/// Join a group path and a child name.
pub fn join_path(group: &str, name: &str) -> String {
    if group.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", group, name)
    }
}
