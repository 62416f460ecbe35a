//! HDF5 files on disk.
//!
//! Members are classified by link type first: soft and external links are
//! reported as `Other` without being followed, like `H5Ovisit` does. Hard
//! links are then opened as a group or a dataset; whatever opens as neither
//! (committed datatypes) is `Other` too.

use std::path::Path;

use hdf5::types::TypeDescriptor;
use hdf5::{LinkInfo, LinkType};

use crate::data::container::{Container, ElementType, MemberKind, PayloadDescriptor};
use crate::error::{InspectError, Result};

/// Read-only handle to an HDF5 file.
///
/// The file is closed when the handle is dropped.
pub struct Hdf5Container {
    file: hdf5::File,
    location: String,
}

impl Hdf5Container {
    /// Open an HDF5 file read-only.
    pub fn open(path: &Path) -> Result<Self> {
        let location = path.display().to_string();
        let file = hdf5::File::open(path)
            .map_err(|e| InspectError::container_access(location.clone(), e))?;

        log::debug!("Hdf5Container: opened {}", location);

        Ok(Self { file, location })
    }

    fn group_at(&self, path: &str) -> hdf5::Result<hdf5::Group> {
        if path.is_empty() {
            self.file.as_group()
        } else {
            self.file.group(path)
        }
    }

    fn dataset_at(&self, path: &str) -> Result<hdf5::Dataset> {
        self.file
            .dataset(path)
            .map_err(|_| InspectError::missing_payload(path))
    }

    fn member_location(&self, path: &str) -> String {
        format!("{}:/{}", self.location, path)
    }

    /// Type of the link that names `path` inside its parent group.
    fn link_type(&self, path: &str) -> Result<Option<LinkType>> {
        let (parent, name) = path.rsplit_once('/').unwrap_or(("", path));
        let group = self
            .group_at(parent)
            .map_err(|e| InspectError::container_access(self.member_location(parent), e))?;

        group
            .iter_visit_default(
                None,
                |_, link_name, info: LinkInfo, found: &mut Option<LinkType>| {
                    if link_name == name {
                        *found = Some(info.link_type);
                        false
                    } else {
                        true
                    }
                },
            )
            .map_err(|e| InspectError::container_access(self.member_location(path), e))
    }

    fn element_type(dataset: &hdf5::Dataset) -> ElementType {
        match dataset.dtype() {
            Ok(dtype) => resolve_type(dtype.to_descriptor(), dtype.size()),
            Err(e) => {
                log::debug!("Hdf5Container: no datatype for {}: {}", dataset.name(), e);
                ElementType::Unresolved("unknown".to_string())
            }
        }
    }
}

/// Map an HDF5 type descriptor onto an `ElementType`.
///
/// Types without a descriptor (opaque, bitfield, ...) fall back to their
/// storage width.
fn resolve_type(descriptor: hdf5::Result<TypeDescriptor>, size: usize) -> ElementType {
    match descriptor {
        Ok(descriptor) => ElementType::Resolved(descriptor.to_string()),
        Err(_) => ElementType::Unresolved(format!("opaque ({} bytes)", size)),
    }
}

impl Container for Hdf5Container {
    fn id(&self) -> &'static str {
        "hdf5"
    }

    fn location(&self) -> &str {
        &self.location
    }

    fn child_names(&self, group: &str) -> Result<Vec<String>> {
        self.group_at(group)
            .and_then(|g| g.member_names())
            .map_err(|e| InspectError::container_access(self.member_location(group), e))
    }

    fn member_kind(&self, path: &str) -> Result<MemberKind> {
        match self.link_type(path)? {
            None => Err(InspectError::container_access(
                self.member_location(path),
                "no such member",
            )),
            Some(LinkType::Hard) => {
                if self.file.group(path).is_ok() {
                    Ok(MemberKind::Group)
                } else if self.file.dataset(path).is_ok() {
                    Ok(MemberKind::Dataset)
                } else {
                    Ok(MemberKind::Other("named datatype".to_string()))
                }
            }
            Some(link) => Ok(MemberKind::Other(
                format!("{:?} link", link).to_lowercase(),
            )),
        }
    }

    fn object_id(&self, path: &str) -> Result<String> {
        let info = self
            .file
            .loc_info_by_name(path)
            .map_err(|e| InspectError::container_access(self.member_location(path), e))?;

        // Tokens are unique within one file.
        Ok(format!("{:?}", info.token))
    }

    fn describe(&self, path: &str) -> Result<PayloadDescriptor> {
        let dataset = self.dataset_at(path)?;

        Ok(PayloadDescriptor {
            shape: dataset.shape(),
            element_type: Self::element_type(&dataset),
            size: dataset.size(),
        })
    }

    fn read_values(&self, path: &str) -> Result<Vec<f64>> {
        let dataset = self.dataset_at(path)?;
        dataset
            .read_raw::<f64>()
            .map_err(|e| InspectError::container_access(self.member_location(path), e))
    }
}
