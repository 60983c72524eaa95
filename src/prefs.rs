//! Display preferences store
//!
//! Window size and fullscreen flag remembered between launches. The config
//! only touches them on shutdown, when they are reset to known values so a
//! run never leaves the next launch fullscreen at an odd resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::shutdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPrefs {
    pub fullscreen: bool,
    pub width: u32,
    pub height: u32,
}

impl DisplayPrefs {
    /// Values written on shutdown
    pub fn shutdown_defaults() -> Self {
        Self {
            fullscreen: shutdown::FULLSCREEN,
            width: shutdown::WIDTH,
            height: shutdown::HEIGHT,
        }
    }
}

/// Where display preferences are kept
pub trait DisplayPrefsStore {
    /// Stored prefs, or `None` if nothing was stored yet
    fn load(&self) -> Result<Option<DisplayPrefs>>;
    fn store(&mut self, prefs: &DisplayPrefs) -> Result<()>;
}

/// Reset the store to the shutdown defaults and return what was written
pub fn reset_display_prefs(store: &mut dyn DisplayPrefsStore) -> Result<DisplayPrefs> {
    let prefs = DisplayPrefs::shutdown_defaults();
    store.store(&prefs).context("Failed to reset display preferences")?;
    info!(
        fullscreen = prefs.fullscreen,
        width = prefs.width,
        height = prefs.height,
        "Reset display preferences"
    );
    Ok(prefs)
}

/// JSON file next to the settings file
#[derive(Debug, Clone)]
pub struct PrefsFile {
    path: PathBuf,
}

impl PrefsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/landmarks/display.json`
    pub fn default_location() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::DISPLAY_FILENAME);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplayPrefsStore for PrefsFile {
    fn load(&self) -> Result<Option<DisplayPrefs>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read display prefs from {:?}", self.path))?;
        let prefs = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse display prefs from {:?}", self.path))?;
        Ok(Some(prefs))
    }

    fn store(&mut self, prefs: &DisplayPrefs) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create prefs directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(prefs).context("Failed to serialize display prefs")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write display prefs to {:?}", self.path))?;
        info!(path = %self.path.display(), "Saved display preferences");
        Ok(())
    }
}

/// In-process store (tests, hosts that persist prefs themselves)
#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    pub current: Option<DisplayPrefs>,
}

impl DisplayPrefsStore for MemoryPrefs {
    fn load(&self) -> Result<Option<DisplayPrefs>> {
        Ok(self.current)
    }

    fn store(&mut self, prefs: &DisplayPrefs) -> Result<()> {
        self.current = Some(*prefs);
        Ok(())
    }
}
