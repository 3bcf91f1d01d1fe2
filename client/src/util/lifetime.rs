//! Screen-lifetime token for async work started by a page.
//!
//! A page creates one token on mount and ends it in `on_cleanup`. Every
//! `spawn_local` continuation checks [`ScreenLifetime::is_alive`] after each
//! `await` and drops its result once the page is gone, so a late response
//! cannot toast or navigate on behalf of a screen the user already left.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ScreenLifetime(Arc<AtomicBool>);

impl ScreenLifetime {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the screen as unmounted. Idempotent.
    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for ScreenLifetime {
    fn default() -> Self {
        Self::new()
    }
}
