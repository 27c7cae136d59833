//! # Synchronization Utilities
//!
//! Mutex handling for the few places in `hsl_swatch` that share state, which
//! today means the logger's output sink.
//!
//! A mutex becomes poisoned when a thread panics while holding it. Output
//! sinks are safe to keep using after that: a half-written log line is
//! better than a logger that panics on every later record. So production
//! code recovers from poison instead of propagating it.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Production code | [`lock_recover`] |
//! | Need context | [`lock_recover_debug`] |
//! | Test code | `.lock().unwrap()` |
//!
//! ```rust
//! use std::sync::Mutex;
//! use hsl_swatch::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
}

/// Lock a mutex with context logging on poison recovery (debug builds only).
///
/// Same as [`lock_recover`] but prints a warning in debug builds. The
/// warning goes to stderr directly since the caller may be the logger.
#[inline]
pub fn lock_recover_debug<'a, T>(mutex: &'a Mutex<T>, context: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|e| {
        #[cfg(debug_assertions)]
        eprintln!("[hsl_swatch::sync] mutex poison recovered at: {context}");
        #[cfg(not(debug_assertions))]
        let _ = context;
        e.into_inner()
    })
}
