//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: pages own the state signals and pass
//! callbacks down; only `toast_host` reads shared context directly.

pub mod charts;
pub mod confirm_dialog;
pub mod data_table;
pub mod expansion_panel;
pub mod skeleton;
pub mod toast_host;
