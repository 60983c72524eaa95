//! Small value types shared across the config modules

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::defaults;

/// Coarse execution mode; consumed by code outside the config core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunMode {
    #[default]
    New,
    Resume,
    Playback,
    Debug,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunMode::New => "NEW",
            RunMode::Resume => "RESUME",
            RunMode::Playback => "PLAYBACK",
            RunMode::Debug => "DEBUG",
        };
        f.write_str(s)
    }
}

/// Opaque reference to one level asset (e.g. `levels/intro.level`)
/// The config never loads it; names are derived through a `LevelNameExtractor`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelRef(String);

impl LevelRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LevelRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Validated experiment name
///
/// Allowed: lowercase ASCII letters, digits and hyphens. Must begin and end
/// with a letter or digit and may not contain `--`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExperimentName(String);

impl ExperimentName {
    pub fn parse(name: &str) -> Result<Self> {
        if name.is_empty() {
            bail!("experiment name is empty");
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            bail!("experiment name '{name}' contains invalid character '{bad}'");
        }
        if name.starts_with('-') || name.ends_with('-') {
            bail!("experiment name '{name}' must begin and end with a letter or number");
        }
        if name.contains("--") {
            bail!("experiment name '{name}' contains consecutive hyphens");
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ExperimentName {
    fn default() -> Self {
        Self(defaults::PLACEHOLDER.to_string())
    }
}

impl TryFrom<String> for ExperimentName {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<ExperimentName> for String {
    fn from(value: ExperimentName) -> Self {
        value.0
    }
}

impl fmt::Display for ExperimentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
