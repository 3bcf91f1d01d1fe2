//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! unmount tracking) from page and component logic.

pub mod auth;
pub mod lifetime;
pub mod notify;
