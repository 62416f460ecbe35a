//! In-memory containers.
//!
//! Useful for building synthetic hierarchies with exact shapes, types, link
//! aliases and unclassifiable members without touching the filesystem.

use std::collections::{BTreeMap, BTreeSet};

use crate::data::container::{Container, ElementType, MemberKind, PayloadDescriptor, join_path};
use crate::error::{InspectError, Result};

/// Dataset held by a `MemoryContainer`.
#[derive(Debug, Clone)]
pub struct MemoryDataset {
    shape: Vec<usize>,
    element_type: ElementType,
    values: Vec<f64>,
}

impl MemoryDataset {
    /// Create a dataset with a resolved element type.
    pub fn new(shape: Vec<usize>, type_name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            shape,
            element_type: ElementType::Resolved(type_name.into()),
            values,
        }
    }

    /// Create a dataset whose element type cannot be resolved.
    pub fn unresolved(shape: Vec<usize>, raw: impl Into<String>) -> Self {
        Self {
            shape,
            element_type: ElementType::Unresolved(raw.into()),
            values: Vec::new(),
        }
    }

    /// Element count implied by the shape.
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }
}

#[derive(Debug, Clone)]
enum MemoryNode {
    Group,
    Dataset(MemoryDataset),
    Other(String),
    /// Second name for the object at the (canonical) target path
    HardLink(String),
}

/// Hierarchical container held entirely in memory.
///
/// Parent groups are created implicitly when a member is added below them.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    location: String,
    nodes: BTreeMap<String, MemoryNode>,
    unreadable: bool,
}

impl MemoryContainer {
    /// Create an empty container.
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Default::default()
        }
    }

    /// Add a group (and its ancestors).
    pub fn with_group(mut self, path: &str) -> Self {
        self.insert(path, MemoryNode::Group);
        self
    }

    /// Add a dataset.
    pub fn with_dataset(mut self, path: &str, dataset: MemoryDataset) -> Self {
        self.insert(path, MemoryNode::Dataset(dataset));
        self
    }

    /// Add a member that is neither group nor dataset.
    pub fn with_other(mut self, path: &str, kind: impl Into<String>) -> Self {
        self.insert(path, MemoryNode::Other(kind.into()));
        self
    }

    /// Add a hard link: `path` names the same object as `target`.
    ///
    /// Targets below a hard link are followed, so `G/up -> G` makes
    /// `G/up/up/...` valid paths just as in HDF5.
    pub fn with_hard_link(mut self, path: &str, target: &str) -> Self {
        let target = self.resolve(target);
        self.insert(path, MemoryNode::HardLink(target));
        self
    }

    /// Add a soft link. Soft links are never followed.
    pub fn with_soft_link(self, path: &str, target: &str) -> Self {
        self.with_other(path, format!("soft link to {}", target))
    }

    /// Make every read fail, as a damaged file would.
    pub fn unreadable(mut self) -> Self {
        self.unreadable = true;
        self
    }

    /// Number of members below the root.
    pub fn member_count(&self) -> usize {
        self.nodes.len()
    }

    fn insert(&mut self, path: &str, node: MemoryNode) {
        let segments: Vec<&str> = path.split('/').collect();
        for depth in 1..segments.len() {
            self.nodes
                .entry(segments[..depth].join("/"))
                .or_insert(MemoryNode::Group);
        }
        self.nodes.insert(path.to_string(), node);
    }

    /// Canonical path of `path`, following hard links along the way.
    fn resolve(&self, path: &str) -> String {
        let mut current = String::new();
        for segment in path.split('/') {
            let candidate = join_path(&current, segment);
            current = match self.nodes.get(&candidate) {
                Some(MemoryNode::HardLink(target)) => target.clone(),
                _ => candidate,
            };
        }
        current
    }

    fn check_readable(&self, path: &str) -> Result<()> {
        if self.unreadable {
            Err(InspectError::container_access(
                format!("{}:/{}", self.location, path),
                "container is unreadable",
            ))
        } else {
            Ok(())
        }
    }

    fn dataset(&self, path: &str) -> Result<&MemoryDataset> {
        self.check_readable(path)?;
        match self.nodes.get(&self.resolve(path)) {
            Some(MemoryNode::Dataset(dataset)) => Ok(dataset),
            _ => Err(InspectError::missing_payload(path)),
        }
    }
}

impl Container for MemoryContainer {
    fn id(&self) -> &'static str {
        "memory"
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn child_names(&self, group: &str) -> Result<Vec<String>> {
        self.check_readable(group)?;

        let resolved = if group.is_empty() {
            String::new()
        } else {
            self.resolve(group)
        };

        if !resolved.is_empty() && !matches!(self.nodes.get(&resolved), Some(MemoryNode::Group)) {
            return Err(InspectError::container_access(
                format!("{}:/{}", self.location, group),
                "not a group",
            ));
        }

        let prefix = if resolved.is_empty() {
            String::new()
        } else {
            format!("{}/", resolved)
        };

        let names: BTreeSet<&str> = self
            .nodes
            .keys()
            .filter_map(|key| key.strip_prefix(prefix.as_str()))
            .filter_map(|rest| rest.split('/').next())
            .collect();

        Ok(names.into_iter().map(str::to_string).collect())
    }

    fn member_kind(&self, path: &str) -> Result<MemberKind> {
        self.check_readable(path)?;
        match self.nodes.get(&self.resolve(path)) {
            Some(MemoryNode::Group) => Ok(MemberKind::Group),
            Some(MemoryNode::Dataset(_)) => Ok(MemberKind::Dataset),
            Some(MemoryNode::Other(kind)) => Ok(MemberKind::Other(kind.clone())),
            Some(MemoryNode::HardLink(_)) | None => Err(InspectError::container_access(
                format!("{}:/{}", self.location, path),
                "no such member",
            )),
        }
    }

    fn object_id(&self, path: &str) -> Result<String> {
        self.check_readable(path)?;
        Ok(self.resolve(path))
    }

    fn describe(&self, path: &str) -> Result<PayloadDescriptor> {
        let dataset = self.dataset(path)?;
        Ok(PayloadDescriptor {
            shape: dataset.shape.clone(),
            element_type: dataset.element_type.clone(),
            size: dataset.size(),
        })
    }

    fn read_values(&self, path: &str) -> Result<Vec<f64>> {
        Ok(self.dataset(path)?.values.clone())
    }
}
