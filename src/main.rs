use std::path::PathBuf;
use std::process::ExitCode;

use awake_inspect::{InspectConfig, LogLevel, Result, run};
use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    name = "awake-inspect",
    about = "Inventory an HDF5 event file and render its streak image"
)]
struct Cli {
    /// JSON config file. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory scanned for `<digits>_<digits>_<digits>.<ext>`
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Event file to read instead of scanning `--dir`
    #[arg(long)]
    input: Option<PathBuf>,

    /// Event file extension, without the dot
    #[arg(long)]
    extension: Option<String>,

    /// Inventory CSV output
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Preview PNG output
    #[arg(long)]
    image: Option<PathBuf>,

    /// Only write the inventory
    #[arg(long)]
    no_image: bool,

    /// IANA timezone used to report the acquisition time
    #[arg(long)]
    timezone: Option<String>,

    /// Median filter window size (odd)
    #[arg(long)]
    kernel: Option<usize>,

    /// Log verbosity.
    ///
    /// `RUST_LOG` is applied on top, so per-module filters still work.
    #[arg(long, value_enum)]
    log_level: Option<LogLevelArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LogLevel {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => LogLevel::Error,
            LogLevelArg::Warn => LogLevel::Warn,
            LogLevelArg::Info => LogLevel::Info,
            LogLevelArg::Debug => LogLevel::Debug,
            LogLevelArg::Trace => LogLevel::Trace,
        }
    }
}

impl Cli {
    fn into_config(self) -> Result<InspectConfig> {
        let mut config = match &self.config {
            Some(path) => InspectConfig::load(path)?,
            None => InspectConfig::default(),
        };

        if let Some(dir) = self.dir {
            config.input_dir = dir;
        }
        if let Some(input) = self.input {
            config.input_file = Some(input);
        }
        if let Some(extension) = self.extension {
            config.extension = extension;
        }
        if let Some(csv) = self.csv {
            config.csv_path = csv;
        }
        if let Some(image) = self.image {
            config.image_path = image;
        }
        if self.no_image {
            config.render_preview = false;
        }
        if let Some(timezone) = self.timezone {
            config.timezone = timezone;
        }
        if let Some(kernel) = self.kernel {
            config.median_kernel = kernel;
        }
        if let Some(level) = self.log_level {
            config.log_level = level.into();
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Log level from flags is only known after the config file is read.
    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    match run(&config) {
        Ok(summary) => {
            log::info!(
                "{}: {} groups, {} datasets, {} skipped",
                summary.input.file_name,
                summary.groups,
                summary.datasets,
                summary.skipped
            );
            if let Some(acquired_at) = summary.acquired_at {
                log::info!("Acquired at {}", acquired_at);
            }
            log::info!("Inventory: {}", summary.csv_path.display());
            if let Some(image_path) = &summary.image_path {
                log::info!("Preview: {}", image_path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application error: {}", e);
            ExitCode::FAILURE
        }
    }
}
