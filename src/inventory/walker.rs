//! Depth-first traversal and classification of container members.

use std::collections::HashMap;

use crate::data::{Container, MemberKind, join_path};
use crate::error::Result;

/// A member that is neither a group nor a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMember {
    /// Member path
    pub path: String,
    /// Why it was not classified
    pub reason: String,
}

/// Classified member paths of one container.
///
/// The three lists are disjoint and together cover every reachable member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hierarchy {
    /// Internal nodes, in visit order
    pub groups: Vec<String>,
    /// Leaf array nodes, in visit order
    pub datasets: Vec<String>,
    /// Unclassifiable members
    pub skipped: Vec<SkippedMember>,
}

impl Hierarchy {
    /// Total number of members visited.
    pub fn member_count(&self) -> usize {
        self.groups.len() + self.datasets.len() + self.skipped.len()
    }
}

/// Walk every member reachable from the root.
///
/// Members are visited in pre-order; siblings keep the order the container
/// lists them in. Only groups are descended into, and each object is
/// classified once: a later hard link to an object already seen is skipped.
pub fn walk(container: &dyn Container) -> Result<Hierarchy> {
    let mut hierarchy = Hierarchy::default();
    let mut seen: HashMap<String, String> = HashMap::new();

    // Children are pushed in reverse so they pop in listed order.
    let mut stack: Vec<String> = container
        .child_names("")?
        .into_iter()
        .rev()
        .map(|name| join_path("", &name))
        .collect();

    while let Some(path) = stack.pop() {
        let kind = container.member_kind(&path)?;

        if matches!(kind, MemberKind::Group | MemberKind::Dataset) {
            let id = container.object_id(&path)?;
            if let Some(first) = seen.get(&id) {
                let reason = format!("hard link to {}", first);
                log::debug!("Skipping alias {} ({})", path, reason);
                hierarchy.skipped.push(SkippedMember { path, reason });
                continue;
            }
            seen.insert(id, path.clone());
        }

        match kind {
            MemberKind::Group => {
                let children = container.child_names(&path)?;
                stack.extend(children.iter().rev().map(|name| join_path(&path, name)));
                hierarchy.groups.push(path);
            }
            MemberKind::Dataset => hierarchy.datasets.push(path),
            MemberKind::Other(reason) => {
                log::debug!("Skipping unclassifiable member {} ({})", path, reason);
                hierarchy.skipped.push(SkippedMember { path, reason });
            }
        }
    }

    log::debug!(
        "Walked {}: {} groups, {} datasets, {} skipped",
        container.location(),
        hierarchy.groups.len(),
        hierarchy.datasets.len(),
        hierarchy.skipped.len()
    );

    Ok(hierarchy)
}
