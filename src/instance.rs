//! Process-wide config instance
//!
//! There is exactly one live `ConfigState` per process. It is created on
//! first access (or installed by the host beforehand), initialized before
//! anyone sees it, and dropped by [`shutdown`].
//!
//! The first thread that touches the instance owns it until shutdown. Any
//! other thread gets an error instead of a second, racing initialization.
//! The closure passed to [`with_instance`] must not call back into this
//! module; the instance lock is held while it runs.

use anyhow::{bail, Result};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};
use tracing::{info, warn};

use crate::config::{initialize_aligned, ConfigState};
use crate::prefs::{reset_display_prefs, DisplayPrefs, DisplayPrefsStore};
use crate::runtime::Runtime;

struct Slot {
    state: Option<ConfigState>,
    owner: Option<ThreadId>,
}

static INSTANCE: Mutex<Slot> = Mutex::new(Slot { state: None, owner: None });

/// Lock the slot and claim or verify ownership for the calling thread
fn lock_owned() -> Result<MutexGuard<'static, Slot>> {
    let mut slot = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
    let me = thread::current().id();
    let owner = slot.owner;
    match owner {
        Some(owner) if owner != me => {
            warn!(owner = ?owner, caller = ?me, "Config accessed from a non-owner thread");
            bail!("config instance is owned by thread {owner:?}; access from {me:?} is not allowed");
        }
        Some(_) => {}
        None => slot.owner = Some(me),
    }
    Ok(slot)
}

/// Install a host-populated state as the instance, before first access
pub fn install(state: ConfigState) -> Result<()> {
    let mut slot = lock_owned()?;
    if slot.state.is_some() {
        bail!("a config instance is already live; shut it down before installing another");
    }
    info!(experiment = %state.experiment, "Installed config instance");
    slot.state = Some(state);
    Ok(())
}

/// Run `f` against the live instance, creating and initializing it first
/// if needed. The instance handed to `f` is always initialized and has one
/// condition per level.
pub fn with_instance<R>(runtime: &mut Runtime, f: impl FnOnce(&mut ConfigState) -> R) -> Result<R> {
    let mut slot = lock_owned()?;
    let state = slot.state.get_or_insert_with(|| {
        info!("Could not locate a config instance, created one with defaults");
        ConfigState::default()
    });
    if !state.is_initialized() {
        initialize_aligned(state, runtime);
    }
    Ok(f(state))
}

/// Snapshot of the live instance (see [`with_instance`])
pub fn get_instance(runtime: &mut Runtime) -> Result<ConfigState> {
    with_instance(runtime, |state| state.clone())
}

/// Whether an instance currently exists
pub fn is_live() -> bool {
    INSTANCE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .state
        .is_some()
}

/// Drop the instance, release ownership and reset the display preferences
pub fn shutdown(prefs: &mut dyn DisplayPrefsStore) -> Result<DisplayPrefs> {
    {
        let mut slot = lock_owned()?;
        if slot.state.take().is_some() {
            info!("Dropped config instance");
        }
        slot.owner = None;
    }
    reset_display_prefs(prefs)
}

/// Force the slot empty regardless of owner
#[cfg(test)]
pub(crate) fn clear() {
    let mut slot = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
    slot.state = None;
    slot.owner = None;
}
