//! Deduplicated warnings with colored terminal output.
//!
//! Used to report input that is accepted but suspicious, such as a selector
//! combinator token outside the four CSS combinators. Each unique message is
//! printed once per process (or until [`clear_warnings`] is called).

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warning_key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about suspicious input (prints once per unique message)
///
/// Returns `true` if the message was printed, `false` if it had already been
/// reported.
///
/// # Example
/// ```ignore
/// warn_once("Selector", "non-standard combinator '|'");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[allow(clippy::must_use_candidate)]
pub fn warn_once(component: &str, message: &str) -> bool {
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(warning_key(component, message));

    if should_print {
        eprintln!("{}", format!("[kata {component}] ⚠ {message}").yellow());
    }
    should_print
}

/// Check whether a warning has already been reported.
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
#[must_use]
pub fn was_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap()
        .as_ref()
        .is_some_and(|set| set.contains(&warning_key(component, message)))
}

/// Clear all recorded warnings
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap();
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
