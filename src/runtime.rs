//! Host collaborators bundled for initialization
//!
//! Built once by the application's composition root and passed by reference
//! to whatever needs to initialize the config.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::levels::{CurrentLevelProvider, FixedCurrentLevel, LevelNameExtractor, StemNameExtractor};
use crate::shuffle::RandomSource;

pub struct Runtime {
    pub current_level: Box<dyn CurrentLevelProvider>,
    pub names: Box<dyn LevelNameExtractor>,
    pub rng: Box<dyn RandomSource>,
}

impl Runtime {
    pub fn new(
        current_level: Box<dyn CurrentLevelProvider>,
        names: Box<dyn LevelNameExtractor>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self { current_level, names, rng }
    }

    /// Stem-named levels, fixed current level, optional seed
    /// Without a seed the thread-local generator is used
    pub fn with_defaults(current_level: impl Into<String>, seed: Option<u64>) -> Self {
        let rng: Box<dyn RandomSource> = match seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(rand::thread_rng()),
        };
        Self::new(
            Box::new(FixedCurrentLevel(current_level.into())),
            Box::new(StemNameExtractor),
            rng,
        )
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("current_level", &self.current_level.current_level_name())
            .finish_non_exhaustive()
    }
}
