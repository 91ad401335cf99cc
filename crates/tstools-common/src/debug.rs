//! Internal precondition checks.
//!
//! These are for invariants the external checker guarantees (for example, a
//! class symbol always has a value declaration). Firing one is a programmer
//! error, never a recoverable condition, so they panic.

/// Panic with a `Debug Failure` message.
#[track_caller]
#[cold]
pub fn fail(message: &str) -> ! {
    panic!("Debug Failure. {message}")
}

/// Panic unless `expression` holds.
///
/// The message closure only runs on failure.
#[track_caller]
#[inline]
pub fn assert(expression: bool, message: impl FnOnce() -> String) {
    if !expression {
        fail(&format!("False expression: {}", message()));
    }
}
