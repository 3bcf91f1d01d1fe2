//! Route-level page components.

pub mod operator_detail;
pub mod personnels;
