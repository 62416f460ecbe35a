//! Inventory records and member path decomposition.

use crate::data::{Container, ElementType};
use crate::error::Result;

/// A dataset path split into its inventory columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathParts<'a> {
    /// First segment
    pub group: &'a str,
    /// Every segment except the last; empty for single-segment paths
    pub subgroup: &'a str,
    /// Last segment
    pub name: &'a str,
}

impl<'a> PathParts<'a> {
    /// Split a slash-separated member path.
    pub fn split(path: &'a str) -> Self {
        let group = path.split('/').next().unwrap_or(path);
        let (subgroup, name) = match path.rsplit_once('/') {
            Some((subgroup, name)) => (subgroup, name),
            None => ("", path),
        };

        Self {
            group,
            subgroup,
            name,
        }
    }
}

/// One inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    /// Top-level group
    pub group: String,
    /// Path of the containing group
    pub subgroup: String,
    /// Dataset name
    pub name: String,
    /// Extent per dimension
    pub shape: Vec<usize>,
    /// Element type
    pub element_type: ElementType,
    /// Element count
    pub size: usize,
}

impl InventoryRecord {
    /// Build the record for a dataset path.
    ///
    /// Fails with `MissingPayload` if the path no longer resolves to a
    /// readable dataset.
    pub fn extract(container: &dyn Container, path: &str) -> Result<Self> {
        let payload = container.describe(path)?;
        let parts = PathParts::split(path);

        if !payload.element_type.is_resolved() {
            log::debug!(
                "Unresolved element type for {}: {}",
                path,
                payload.element_type
            );
        }

        Ok(Self {
            group: parts.group.to_string(),
            subgroup: parts.subgroup.to_string(),
            name: parts.name.to_string(),
            shape: payload.shape,
            element_type: payload.element_type,
            size: payload.size,
        })
    }

    /// Shape as a tuple literal: `(2, 3)`, `(5,)` or `()`.
    pub fn shape_text(&self) -> String {
        format_shape(&self.shape)
    }
}

/// Render a shape as a tuple literal.
pub fn format_shape(shape: &[usize]) -> String {
    match shape {
        [] => "()".to_string(),
        [single] => format!("({},)", single),
        dims => {
            let joined: Vec<String> = dims.iter().map(|d| d.to_string()).collect();
            format!("({})", joined.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MemoryContainer, MemoryDataset};
    use crate::error::InspectError;

    #[test]
    fn test_split_nested() {
        let parts = PathParts::split("AwakeEventData/XMPP-STREAK/StreakImage/streakImageData");
        assert_eq!(parts.group, "AwakeEventData");
        assert_eq!(parts.subgroup, "AwakeEventData/XMPP-STREAK/StreakImage");
        assert_eq!(parts.name, "streakImageData");
    }

    #[test]
    fn test_split_single_segment() {
        let parts = PathParts::split("x");
        assert_eq!(parts.group, "x");
        assert_eq!(parts.subgroup, "");
        assert_eq!(parts.name, "x");
    }

    #[test]
    fn test_split_identities() {
        for path in ["a", "a/b", "a/b/c", "A/B-1/c.d/eee", "top/x"] {
            let parts = PathParts::split(path);

            if parts.subgroup.is_empty() {
                assert_eq!(parts.name, path);
            } else {
                assert_eq!(format!("{}/{}", parts.subgroup, parts.name), path);
                assert!(
                    parts.subgroup.split('/').next() == Some(parts.group),
                    "group must lead the subgroup for {}",
                    path
                );
                let rest = &path[parts.group.len() + 1..];
                assert_eq!(format!("{}/{}", parts.group, rest), path);
            }
        }
    }

    #[test]
    fn test_format_shape() {
        assert_eq!(format_shape(&[]), "()");
        assert_eq!(format_shape(&[5]), "(5,)");
        assert_eq!(format_shape(&[2, 3]), "(2, 3)");
        assert_eq!(format_shape(&[1, 0, 4]), "(1, 0, 4)");
    }

    #[test]
    fn test_extract_record() {
        let container = MemoryContainer::new("t").with_dataset(
            "A/B/x",
            MemoryDataset::new(vec![2, 3], "int32", vec![0.0; 6]),
        );

        let record = InventoryRecord::extract(&container, "A/B/x").unwrap();

        assert_eq!(record.group, "A");
        assert_eq!(record.subgroup, "A/B");
        assert_eq!(record.name, "x");
        assert_eq!(record.shape_text(), "(2, 3)");
        assert_eq!(record.element_type.to_string(), "int32");
        assert_eq!(record.size, 6);
    }

    #[test]
    fn test_extract_unresolved_type_is_not_fatal() {
        let container = MemoryContainer::new("t")
            .with_dataset("A/ref", MemoryDataset::unresolved(vec![4], "opaque (8 bytes)"));

        let record = InventoryRecord::extract(&container, "A/ref").unwrap();

        assert_eq!(
            record.element_type,
            ElementType::Unresolved("opaque (8 bytes)".into())
        );
        assert_eq!(record.size, 4);
    }

    #[test]
    fn test_extract_missing_payload() {
        let container = MemoryContainer::new("t").with_group("A");

        assert!(matches!(
            InventoryRecord::extract(&container, "A"),
            Err(InspectError::MissingPayload { .. })
        ));
        assert!(matches!(
            InventoryRecord::extract(&container, "A/gone"),
            Err(InspectError::MissingPayload { .. })
        ));
    }
}
