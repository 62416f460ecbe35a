//! Global constants for awake-inspect

/// Streak-camera pixel data (flat array)
pub const STREAK_DATA_PATH: &str = "AwakeEventData/XMPP-STREAK/StreakImage/streakImageData";

/// Streak-camera image height (one-element array)
pub const STREAK_HEIGHT_PATH: &str = "AwakeEventData/XMPP-STREAK/StreakImage/streakImageHeight";

/// Streak-camera image width (one-element array)
pub const STREAK_WIDTH_PATH: &str = "AwakeEventData/XMPP-STREAK/StreakImage/streakImageWidth";

/// Default event file extension
pub const DEFAULT_EXTENSION: &str = "h5";

/// Default inventory output
pub const DEFAULT_CSV_PATH: &str = "awake_csv.csv";

/// Default preview output
pub const DEFAULT_IMAGE_PATH: &str = "awakefig.png";

/// Timezone used to report acquisition time
pub const DEFAULT_TIMEZONE: &str = "Europe/Zurich";

/// Median filter window
pub const DEFAULT_MEDIAN_KERNEL: usize = 3;

/// Preview size in pixels (width, height)
pub const DEFAULT_FIGURE_SIZE: (u32, u32) = (640, 480);
