//! Error types for inventory and preview operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while inspecting an event file.
#[derive(Error, Debug)]
pub enum InspectError {
    /// No file in the input directory matches the naming convention
    #[error("No input file matching {pattern} found in {dir:?}")]
    NoInputFile {
        /// Directory that was scanned
        dir: PathBuf,
        /// Pattern the file name had to match
        pattern: String,
    },

    /// More than one file matches the naming convention
    #[error(
        "{count} files match {pattern} in {dir:?}: {list}",
        count = .candidates.len(),
        list = .candidates.join(", ")
    )]
    AmbiguousInput {
        /// Directory that was scanned
        dir: PathBuf,
        /// Pattern the file names matched
        pattern: String,
        /// Matching file names, sorted
        candidates: Vec<String>,
    },

    /// File name does not carry a readable timestamp
    #[error("Invalid event file name '{name}': {reason}")]
    InvalidFileName {
        /// Offending file name
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// Timezone name not present in the tz database
    #[error("Unknown timezone: {name}")]
    UnknownTimezone {
        /// The name that failed to resolve
        name: String,
    },

    /// Container could not be opened or read
    #[error("Cannot read container {location}: {message}")]
    ContainerAccess {
        /// File or member being accessed
        location: String,
        /// Underlying failure
        message: String,
    },

    /// Member does not resolve to a readable dataset
    #[error("Member '{path}' does not resolve to a readable dataset")]
    MissingPayload {
        /// Member path that was requested
        path: String,
    },

    /// Streak image dimensions disagree with the pixel count
    #[error(
        "Streak image is {height}x{width} ({expected} pixels) but the data holds {actual} values"
    )]
    ShapeMismatch {
        /// Declared image height
        height: usize,
        /// Declared image width
        width: usize,
        /// height * width
        expected: usize,
        /// Length of the flat pixel array
        actual: usize,
    },

    /// Streak image cannot be built or rasterized (bad dimension values,
    /// no pixels, too large for a PNG)
    #[error("Cannot render image: {message}")]
    InvalidImage {
        /// Description of the problem
        message: String,
    },

    /// Median filter kernel is not a positive odd size
    #[error("Median kernel size must be odd and positive, got {size}")]
    InvalidKernel {
        /// Requested kernel size
        size: usize,
    },

    /// Configuration values that cannot be used
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the problem
        message: String,
    },

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// PNG encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration file parsing error
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl InspectError {
    /// Create a container access error.
    pub fn container_access(location: impl Into<String>, message: impl ToString) -> Self {
        Self::ContainerAccess {
            location: location.into(),
            message: message.to_string(),
        }
    }

    /// Create a missing payload error.
    pub fn missing_payload(path: impl Into<String>) -> Self {
        Self::MissingPayload { path: path.into() }
    }

    /// Create an invalid file name error.
    pub fn invalid_file_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFileName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = InspectError> = std::result::Result<T, E>;
