//! Application-wide constants
//!
//! This module contains all magic numbers and string literals used throughout
//! the runner config, providing a single source of truth for default values.

/// Condition bookkeeping
pub mod condition {
    /// Label used to seed an empty conditions list and to pad short ones
    pub const DEFAULT: &str = "default";
}

/// Defaults for the scalar fields of the runner config
pub mod defaults {
    /// Placeholder used by every unset string field (paths, subject, session, ...)
    pub const PLACEHOLDER: &str = "default";

    /// Default display width in pixels
    pub const WIDTH: u32 = 1024;

    /// Default display height in pixels
    pub const HEIGHT: u32 = 768;

    /// Master volume (0.0 - 1.0)
    pub const VOLUME: f32 = 1.0;

    /// Name of the legacy per-experiment config file
    pub const FILENAME: &str = "config.txt";
}

/// Values written to the display preferences store on shutdown
pub mod shutdown {
    /// Fullscreen flag is cleared so the next launch starts windowed
    pub const FULLSCREEN: bool = false;

    /// Window width written on shutdown
    pub const WIDTH: u32 = 968;

    /// Window height written on shutdown
    pub const HEIGHT: u32 = 768;
}

/// Config file locations
pub mod config {
    /// Application directory under the platform config dir
    pub const APP_DIR: &str = "landmarks";

    /// Host settings file
    pub const SETTINGS_FILENAME: &str = "settings.json";

    /// Display preferences file
    pub const DISPLAY_FILENAME: &str = "display.json";
}

