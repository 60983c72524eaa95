//! Runner config state
//!
//! One `ConfigState` describes a whole session: which levels run, in what
//! order, and under which condition label. The list fields are private so
//! every edit after initialization goes through a mutator that keeps
//! `conditions` and `level_names` the same length.

use anyhow::{bail, Result};
use tracing::info;

use crate::constants::defaults;
use crate::reconcile::reconcile;
use crate::types::{ExperimentName, LevelRef, RunMode};

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    // Display / audio
    pub version: f32,
    pub width: u32,
    pub height: u32,
    pub volume: f32,
    pub no_fullscreen: bool,
    pub show_fps: bool,

    // Experiment identity
    pub filename: String,
    pub experiment: ExperimentName,
    pub ui: String,
    pub run_mode: RunMode,
    pub subject: String,
    pub session: String,

    // Paths (built by the host, only stored here)
    pub home: String,
    pub app_path: String,
    pub exp_path: String,
    pub subject_path: String,

    /// Shuffle `levels` before deriving `level_names`
    pub randomize_order: bool,

    /// Set by the host once its startup level has finished loading
    pub bootstrapped: bool,

    /// Name of the level at the cursor (mirrors `level_names[level_index]`)
    pub level: String,
    /// Condition at the cursor (mirrors `conditions[level_index]`)
    pub condition: String,

    /// `None` means "use the currently active level"
    pub(crate) levels: Option<Vec<LevelRef>>,
    pub(crate) level_names: Vec<String>,
    pub(crate) conditions: Vec<String>,
    pub(crate) level_index: usize,
    pub(crate) initialized: bool,
}

impl Default for ConfigState {
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
            home: defaults::PLACEHOLDER.to_string(),
            app_path: defaults::PLACEHOLDER.to_string(),
            exp_path: defaults::PLACEHOLDER.to_string(),
            subject_path: defaults::PLACEHOLDER.to_string(),
            randomize_order: false,
            bootstrapped: false,
            level: defaults::PLACEHOLDER.to_string(),
            condition: defaults::PLACEHOLDER.to_string(),
            levels: None,
            level_names: Vec::new(),
            conditions: Vec::new(),
            level_index: 0,
            initialized: false,
        }
    }
}

impl ConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn levels(&self) -> Option<&[LevelRef]> {
        self.levels.as_deref()
    }

    /// Supply the level list consumed by initialization
    /// An empty list is treated the same as `None`
    pub fn set_levels(&mut self, levels: Option<Vec<LevelRef>>) {
        self.levels = levels.filter(|l| !l.is_empty());
    }

    /// Level names in execution order
    pub fn level_names(&self) -> &[String] {
        &self.level_names
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    /// Replace the level names; once initialized, conditions are re-aligned
    pub fn set_level_names(&mut self, names: Vec<String>) {
        self.level_names = names;
        self.align_if_initialized();
    }

    /// Replace the conditions; once initialized, they are re-aligned
    pub fn set_conditions(&mut self, conditions: Vec<String>) {
        self.conditions = conditions;
        self.align_if_initialized();
    }

    /// Append a condition (before initialization only; afterwards the list is
    /// pinned to the level count and the extra entry is trimmed)
    pub fn push_condition(&mut self, condition: impl Into<String>) {
        self.conditions.push(condition.into());
        self.align_if_initialized();
    }

    /// Force `conditions.len() == level_names.len()`
    /// Returns `true` when the conditions list changed
    pub fn align(&mut self) -> bool {
        reconcile(&mut self.conditions, self.level_names.len())
    }

    /// After initialization, re-align and refresh the `level`/`condition`
    /// mirrors. A cursor left past the end resets both to the placeholder.
    fn align_if_initialized(&mut self) {
        if !self.initialized {
            return;
        }
        self.align();
        match (self.level_names.get(self.level_index), self.conditions.get(self.level_index)) {
            (Some(level), Some(condition)) => {
                self.level = level.clone();
                self.condition = condition.clone();
            }
            _ => {
                self.level = defaults::PLACEHOLDER.to_string();
                self.condition = defaults::PLACEHOLDER.to_string();
            }
        }
    }

    pub fn set_experiment(&mut self, name: &str) -> Result<()> {
        self.experiment = ExperimentName::parse(name)?;
        Ok(())
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// Move the cursor and mirror the selected pair into `level`/`condition`
    pub fn select_level(&mut self, index: usize) -> Result<()> {
        let Some(name) = self.level_names.get(index) else {
            bail!(
                "level index {index} out of range ({} level(s) configured)",
                self.level_names.len()
            );
        };
        self.level = name.clone();
        self.condition = self
            .conditions
            .get(index)
            .cloned()
            .unwrap_or_else(|| crate::constants::condition::DEFAULT.to_string());
        self.level_index = index;
        info!(index = index, level = %self.level, condition = %self.condition, "Selected level");
        Ok(())
    }

    pub fn current_level(&self) -> Option<&str> {
        self.level_names.get(self.level_index).map(String::as_str)
    }

    pub fn current_condition(&self) -> Option<&str> {
        self.conditions.get(self.level_index).map(String::as_str)
    }

    /// `(index, level, condition)` in execution order
    /// Levels without a condition (only possible before alignment) are skipped
    pub fn plan(&self) -> impl Iterator<Item = (usize, &str, &str)> + '_ {
        self.level_names
            .iter()
            .zip(self.conditions.iter())
            .enumerate()
            .map(|(i, (level, condition))| (i, level.as_str(), condition.as_str()))
    }
}
