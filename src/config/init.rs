//! One-time population of the derived level list

use tracing::{debug, info};

use crate::config::state::ConfigState;
use crate::constants::condition;
use crate::runtime::Runtime;
use crate::shuffle::shuffle;

/// Derive `level_names` and seed `conditions`; runs at most once per state
///
/// - no level list: `level_names = [current level]`
/// - otherwise: optionally shuffle `levels` in place, then name each entry
/// - empty conditions get a single `"default"` entry
///
/// Conditions are NOT aligned here; see [`initialize_aligned`].
pub fn initialize(state: &mut ConfigState, runtime: &mut Runtime) {
    if state.initialized {
        debug!("Config already initialized, skipping");
        return;
    }
    info!("Initializing the config");

    match state.levels.as_mut() {
        None => {
            let current = runtime.current_level.current_level_name();
            info!(level = %current, "No level list supplied, using the active level");
            state.level_names = vec![current];
        }
        Some(levels) => {
            if state.randomize_order {
                shuffle(levels, runtime.rng.as_mut());
                info!(count = levels.len(), "Shuffled level order");
            }
            state.level_names.clear();
            state
                .level_names
                .extend(levels.iter().map(|level| runtime.names.name_of(level)));
        }
    }

    if state.conditions.is_empty() {
        state.conditions.push(condition::DEFAULT.to_string());
    }

    state.initialized = true;
    info!(
        levels = state.level_names.len(),
        conditions = state.conditions.len(),
        "Config initialized"
    );
}

/// [`initialize`] followed by alignment, so the result always has one
/// condition per level
pub fn initialize_aligned(state: &mut ConfigState, runtime: &mut Runtime) {
    if state.initialized {
        debug!("Config already initialized, skipping");
        return;
    }
    initialize(state, runtime);
    state.align();
}
