//! In-app navigation state handed from one route to the next.
//!
//! The personnel list stores the selected operator here before navigating to
//! the detail route, so the id never appears in the URL. A full page reload
//! starts with an empty selection.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Route of the operator detail screen.
pub const OPERATOR_DETAIL_ROUTE: &str = "/personnels/detail";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Operator the detail screen should load.
    pub personnel_id: Option<String>,
}

impl NavigationState {
    /// Select an operator and return the route that shows it.
    pub fn select_personnel(&mut self, id: String) -> &'static str {
        self.personnel_id = Some(id);
        OPERATOR_DETAIL_ROUTE
    }
}
