//! Utility functions for pftrack.

use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// Global set of warned messages (for warn_once).
static WARNED_MESSAGES: OnceLock<Mutex<HashSet<String>>> = OnceLock::new();

/// Log a warning only the first time `message` is seen.
///
/// Returns whether the warning was emitted.
pub fn warn_once(message: &str) -> bool {
    let warned = WARNED_MESSAGES.get_or_init(|| Mutex::new(HashSet::new()));
    let mut guard = warned.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if guard.contains(message) {
        return false;
    }
    log::warn!("{}", message);
    guard.insert(message.to_string());
    true
}
