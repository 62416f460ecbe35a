//! End-to-end run over one event file.
//!
//! Order of operations:
//! 1. locate the event file and decode its timestamp
//! 2. open the container, walk it, stream the inventory CSV and close the CSV
//! 3. read the streak image datasets, then close the container
//! 4. filter and render the preview
//!
//! A failure at any step stops the run; files already written stay on disk.

use std::path::PathBuf;

use chrono::DateTime;
use chrono_tz::Tz;
use ndarray::Array2;

use crate::config::InspectConfig;
use crate::data::{Container, Hdf5Container};
use crate::discovery::{self, InputFile};
use crate::error::Result;
use crate::inventory::{Hierarchy, InventoryWriter, walk, write_inventory};
use crate::preview::{load_streak_image, write_preview};
use crate::timestamp::{FileTimestamp, parse_timezone};

/// What a container yielded while it was open.
#[derive(Debug, Clone)]
pub struct Inspection {
    /// Classified members
    pub hierarchy: Hierarchy,
    /// Rows written to the CSV
    pub rows: usize,
    /// Reshaped streak image, when the preview is enabled
    pub streak: Option<Array2<f64>>,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Event file that was read
    pub input: InputFile,
    /// Acquisition time from the file name, if it carried one
    pub acquired_at: Option<DateTime<Tz>>,
    /// Number of groups
    pub groups: usize,
    /// Number of datasets (and CSV rows)
    pub datasets: usize,
    /// Number of unclassifiable members
    pub skipped: usize,
    /// Inventory written
    pub csv_path: PathBuf,
    /// Preview written, if enabled
    pub image_path: Option<PathBuf>,
}

/// Pick the event file named by the config, or scan for one.
pub fn resolve_input(config: &InspectConfig) -> Result<InputFile> {
    match &config.input_file {
        Some(path) => InputFile::from_path(path),
        None => discovery::locate(&config.input_dir, &config.extension),
    }
}

/// Walk a container, write its inventory and read the streak image.
///
/// The CSV file is flushed and closed before the image datasets are read.
pub fn inspect(container: &dyn Container, config: &InspectConfig) -> Result<Inspection> {
    let hierarchy = walk(container)?;

    let rows = {
        let mut writer = InventoryWriter::create(&config.csv_path)?;
        let rows = write_inventory(container, &hierarchy.datasets, &mut writer)?;
        writer.finish()?;
        rows
    };
    log::info!("Wrote {} inventory rows to {}", rows, config.csv_path.display());

    let streak = if config.render_preview {
        Some(load_streak_image(container)?)
    } else {
        None
    };

    Ok(Inspection {
        hierarchy,
        rows,
        streak,
    })
}

/// Run the whole tool with the given configuration.
pub fn run(config: &InspectConfig) -> Result<RunSummary> {
    let zone = parse_timezone(&config.timezone)?;
    let input = resolve_input(config)?;

    let acquired_at = match FileTimestamp::from_file_name(&input.file_name) {
        Ok(stamp) => {
            let local = stamp.in_zone(zone);
            log::info!("Event {} acquired at {}", input.file_name, local);
            Some(local)
        }
        Err(e) => {
            log::warn!("No acquisition time for {}: {}", input.file_name, e);
            None
        }
    };

    let inspection = {
        let container = Hdf5Container::open(&input.path)?;
        inspect(&container, config)?
    };

    let image_path = match &inspection.streak {
        Some(image) => {
            write_preview(image, &config.preview_options(), &config.image_path)?;
            Some(config.image_path.clone())
        }
        None => None,
    };

    Ok(RunSummary {
        input,
        acquired_at,
        groups: inspection.hierarchy.groups.len(),
        datasets: inspection.hierarchy.datasets.len(),
        skipped: inspection.hierarchy.skipped.len(),
        csv_path: config.csv_path.clone(),
        image_path,
    })
}
