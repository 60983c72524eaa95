//! Host settings file
//!
//! JSON document the host uses to populate a `ConfigState` before the
//! first access. Every field is optional; missing ones take the runner
//! defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::state::ConfigState;
use crate::constants::defaults;
use crate::types::{ExperimentName, LevelRef, RunMode};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunSettings {
    pub version: f32,
    pub width: u32,
    pub height: u32,
    pub volume: f32,
    pub no_fullscreen: bool,
    pub show_fps: bool,
    pub filename: String,
    pub experiment: ExperimentName,
    pub ui: String,
    pub run_mode: RunMode,
    pub subject: String,
    pub session: String,
    pub bootstrapped: bool,

    /// Level references in authored order; absent or empty means
    /// "use the currently active level"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<Vec<LevelRef>>,
    pub randomize_order: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<String>,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            version: 0.0,
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            volume: defaults::VOLUME,
            no_fullscreen: false,
            show_fps: false,
            filename: defaults::FILENAME.to_string(),
            experiment: ExperimentName::default(),
            ui: defaults::PLACEHOLDER.to_string(),
            run_mode: RunMode::default(),
            subject: defaults::PLACEHOLDER.to_string(),
            session: defaults::PLACEHOLDER.to_string(),
            bootstrapped: false,
            levels: None,
            randomize_order: false,
            conditions: Vec::new(),
        }
    }
}

impl RunSettings {
    pub fn path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::SETTINGS_FILENAME);
        path
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path())
    }

    /// Load from `path`; a missing file yields defaults, a malformed one errors
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Settings file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings: RunSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse settings JSON from {:?}", path))?;

        info!(
            path = %path.display(),
            experiment = %settings.experiment,
            levels = settings.levels.as_ref().map_or(0, Vec::len),
            "Loaded settings"
        );
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        fs::write(path, json).with_context(|| format!("Failed to write settings to {:?}", path))?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Build an uninitialized state from these settings
    pub fn into_state(self) -> ConfigState {
        let mut state = ConfigState {
            version: self.version,
            width: self.width,
            height: self.height,
            volume: self.volume,
            no_fullscreen: self.no_fullscreen,
            show_fps: self.show_fps,
            filename: self.filename,
            experiment: self.experiment,
            ui: self.ui,
            run_mode: self.run_mode,
            subject: self.subject,
            session: self.session,
            bootstrapped: self.bootstrapped,
            randomize_order: self.randomize_order,
            ..ConfigState::default()
        };
        state.set_levels(self.levels);
        state.set_conditions(self.conditions);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = RunSettings::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, RunSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{
                "experiment": "maze-1",
                "run_mode": "DEBUG",
                "levels": ["levels/a.level", "levels/b.level"],
                "randomize_order": true
            }"#,
        )
        .unwrap();

        let settings = RunSettings::load_from(&path).unwrap();
        assert_eq!(settings.experiment.as_str(), "maze-1");
        assert_eq!(settings.run_mode, RunMode::Debug);
        assert!(settings.randomize_order);
        assert_eq!(settings.width, 1024);
        assert_eq!(settings.levels.as_ref().map(Vec::len), Some(2));
        assert!(settings.conditions.is_empty());
    }

    #[test]
    fn test_malformed_file_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = RunSettings::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("settings.json"));
    }

    #[test]
    fn test_invalid_experiment_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "experiment": "Bad--Name" }"#).unwrap();
        assert!(RunSettings::load_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = RunSettings {
            subject: "s-014".to_string(),
            conditions: vec!["visual".to_string(), "auditory".to_string()],
            ..RunSettings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(RunSettings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn test_into_state_is_uninitialized() {
        let settings = RunSettings {
            levels: Some(vec![LevelRef::from("levels/a.level")]),
            conditions: vec!["x".to_string(), "y".to_string()],
            randomize_order: true,
            volume: 0.5,
            bootstrapped: true,
            ..RunSettings::default()
        };
        let state = settings.into_state();
        assert!(!state.is_initialized());
        assert!(state.bootstrapped);
        assert!(state.randomize_order);
        assert_eq!(state.volume, 0.5);
        assert_eq!(state.levels().map(<[LevelRef]>::len), Some(1));
        // no alignment before initialization
        assert_eq!(state.conditions().len(), 2);
    }
}
