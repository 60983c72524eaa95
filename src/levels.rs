//! Level collaborators supplied by the host
//!
//! The config never loads levels itself. It only asks the host for names:
//! - `LevelNameExtractor` names each entry of a supplied level list
//! - `CurrentLevelProvider` names the active level when no list was supplied

use std::path::Path;

use crate::types::LevelRef;

/// Produces the identifying name of a level reference
pub trait LevelNameExtractor {
    fn name_of(&self, level: &LevelRef) -> String;
}

/// Reports the level that is currently active in the host
pub trait CurrentLevelProvider {
    fn current_level_name(&self) -> String;
}

/// Names a level by its file stem: `levels/intro.level` -> `intro`
/// References without a stem are used verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct StemNameExtractor;

impl LevelNameExtractor for StemNameExtractor {
    fn name_of(&self, level: &LevelRef) -> String {
        Path::new(level.as_str())
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| level.as_str().to_string())
    }
}

/// Current level known up front (CLI flag, test fixture)
#[derive(Debug, Clone)]
pub struct FixedCurrentLevel(pub String);

impl CurrentLevelProvider for FixedCurrentLevel {
    fn current_level_name(&self) -> String {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_extractor_strips_dir_and_extension() {
        let names = StemNameExtractor;
        assert_eq!(names.name_of(&LevelRef::from("levels/intro.level")), "intro");
        assert_eq!(names.name_of(&LevelRef::from("maze_a.level")), "maze_a");
    }

    #[test]
    fn test_stem_extractor_plain_name() {
        let names = StemNameExtractor;
        assert_eq!(names.name_of(&LevelRef::from("Practice")), "Practice");
    }

    #[test]
    fn test_stem_extractor_no_stem_uses_reference() {
        let names = StemNameExtractor;
        assert_eq!(names.name_of(&LevelRef::from("")), "");
        assert_eq!(names.name_of(&LevelRef::from("..")), "..");
    }

    #[test]
    fn test_fixed_current_level() {
        let current = FixedCurrentLevel("Intro".to_string());
        assert_eq!(current.current_level_name(), "Intro");
    }
}
