//! Keeps the conditions list the same length as the level list

use tracing::debug;

use crate::constants::condition;

/// Pad with the default condition or trim from the end until
/// `conditions.len() == target_length`.
///
/// Entries below `min(original_len, target_length)` are never touched.
/// Returns `true` when the list changed.
pub fn reconcile(conditions: &mut Vec<String>, target_length: usize) -> bool {
    let before = conditions.len();
    if before == target_length {
        return false;
    }
    conditions.resize(target_length, condition::DEFAULT.to_string());
    debug!(before = before, after = target_length, "Reconciled conditions with levels");
    true
}

/// Signed variant for host-supplied lengths; negative targets clamp to zero
pub fn reconcile_clamped(conditions: &mut Vec<String>, target_length: i64) -> bool {
    let target = usize::try_from(target_length).unwrap_or(0);
    reconcile(conditions, target)
}
