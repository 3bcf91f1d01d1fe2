//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`navigation`, `toast`, one module per page) so
//! components depend on small focused models. Transitions are plain methods
//! so they can be unit-tested without a reactive runtime.

pub mod navigation;
pub mod operator_detail;
pub mod personnels;
pub mod toast;
