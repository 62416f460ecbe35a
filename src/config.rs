//! Configuration file support.
//!
//! Settings can be read from a JSON file; every field is optional and falls
//! back to the built-in defaults. Command line flags are applied on top.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CSV_PATH, DEFAULT_EXTENSION, DEFAULT_FIGURE_SIZE, DEFAULT_IMAGE_PATH,
    DEFAULT_MEDIAN_KERNEL, DEFAULT_TIMEZONE,
};
use crate::error::{InspectError, Result};
use crate::preview::PreviewOptions;

/// Log level setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Directory scanned for the event file
    pub input_dir: PathBuf,

    /// Event file to use instead of scanning `input_dir`
    pub input_file: Option<PathBuf>,

    /// Extension of event files (without the dot)
    pub extension: String,

    /// Inventory CSV output
    pub csv_path: PathBuf,

    /// Preview PNG output
    pub image_path: PathBuf,

    /// Render the streak image preview
    pub render_preview: bool,

    /// IANA timezone for reporting the acquisition time
    pub timezone: String,

    /// Median filter window size (odd)
    pub median_kernel: usize,

    /// Preview size in pixels, `[width, height]`
    pub figure_size: [u32; 2],

    /// Log verbosity level
    pub log_level: LogLevel,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            input_dir: PathBuf::from("."),
            input_file: None,
            extension: DEFAULT_EXTENSION.to_string(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            render_preview: true,
            timezone: DEFAULT_TIMEZONE.to_string(),
            median_kernel: DEFAULT_MEDIAN_KERNEL,
            figure_size: [DEFAULT_FIGURE_SIZE.0, DEFAULT_FIGURE_SIZE.1],
            log_level: LogLevel::default(),
        }
    }
}

impl InspectConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate JSON config text.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings no run could use.
    pub fn validate(&self) -> Result<()> {
        if self.version > CONFIG_VERSION {
            return Err(InspectError::invalid_config(format!(
                "config version {} is newer than supported version {}",
                self.version, CONFIG_VERSION
            )));
        }
        if self.median_kernel == 0 || self.median_kernel % 2 == 0 {
            return Err(InspectError::InvalidKernel {
                size: self.median_kernel,
            });
        }
        if self.figure_size.contains(&0) {
            return Err(InspectError::invalid_config(format!(
                "figure size {}x{} has a zero dimension",
                self.figure_size[0], self.figure_size[1]
            )));
        }
        if self.extension.is_empty() {
            return Err(InspectError::invalid_config("file extension is empty"));
        }
        Ok(())
    }

    /// Preview settings derived from this config.
    pub fn preview_options(&self) -> PreviewOptions {
        PreviewOptions {
            kernel: self.median_kernel,
            figure_size: Some((self.figure_size[0], self.figure_size[1])),
        }
    }
}
