//! Personnel-list state for the `/personnels` route.
//!
//! DESIGN
//! ======
//! Kept apart from the detail screen's state: the list is inventory, the
//! detail screen owns one record plus its delete flow.

#[cfg(test)]
#[path = "personnels_test.rs"]
mod personnels_test;

use crate::net::envelope::ApiError;
use crate::net::types::Operator;
use crate::state::toast::Notice;

pub const PERSONNEL_LIST_FETCH_FAILED: &str = "Personel listesi alınamadı";

/// Operators shown on the personnel list.
#[derive(Clone, Debug, Default)]
pub struct PersonnelsState {
    pub items: Vec<Operator>,
    pub loading: bool,
    /// Pending navigation, consumed by the page's redirect effect.
    pub redirect: Option<&'static str>,
}

impl PersonnelsState {
    /// Store the list fetch result and clear the loading flag.
    pub fn apply_list(&mut self, result: Result<Vec<Operator>, ApiError>) -> Option<Notice> {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(_) => Some(Notice::error(PERSONNEL_LIST_FETCH_FAILED)),
        }
    }

    /// Id of the operator rendered at `row`, if any.
    #[must_use]
    pub fn id_at(&self, row: usize) -> Option<String> {
        self.items.get(row).map(|op| op.id.clone())
    }
}
