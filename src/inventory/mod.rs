//! Dataset inventory of a container.
//!
//! The walker classifies every member, the extractor turns each dataset path
//! into an `InventoryRecord`, and the writer streams records to CSV.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use awake_inspect::inventory::{walk, write_inventory, InventoryWriter};
//!
//! let hierarchy = walk(&container)?;
//! let mut writer = InventoryWriter::create(Path::new("awake_csv.csv"))?;
//! write_inventory(&container, &hierarchy.datasets, &mut writer)?;
//! writer.finish()?;
//! ```

mod record;
mod walker;
mod writer;

#[cfg(test)]
mod tests;

use std::io::Write;

pub use record::{InventoryRecord, PathParts, format_shape};
pub use walker::{Hierarchy, SkippedMember, walk};
pub use writer::{HEADER, InventoryWriter};

use crate::data::Container;
use crate::error::Result;

/// Extract and write one record per dataset path.
///
/// Records are not collected; each is written as soon as it is extracted.
/// Returns the number of rows written.
pub fn write_inventory<W: Write>(
    container: &dyn Container,
    datasets: &[String],
    writer: &mut InventoryWriter<W>,
) -> Result<usize> {
    for path in datasets {
        let record = InventoryRecord::extract(container, path)?;
        writer.write(&record)?;
    }

    Ok(datasets.len())
}
