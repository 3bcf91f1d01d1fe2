//! View state for the operator detail screen.
//!
//! DESIGN
//! ======
//! The page owns one `RwSignal<OperatorDetailState>`. Every mutation goes
//! through a transition method here so loader results, dialog clicks and
//! delete completion stay testable without a browser. Transitions return the
//! notice to show (if any); the page forwards it to the toast host.
//!
//! Delete flow:
//!
//! ```text
//! Idle --open--> ConfirmOpen --confirm--> Deleting --ok--> (navigate away)
//!  ^                 |    ^                  |
//!  +----dismiss------+    +------failed------+
//! ```

#[cfg(test)]
#[path = "operator_detail_test.rs"]
mod operator_detail_test;

use crate::net::envelope::ApiError;
use crate::net::types::{Mission, Operator};
use crate::state::toast::Notice;

pub const OPERATOR_FETCH_FAILED: &str = "Personel bilgisi alınamadı";
pub const MISSIONS_FETCH_FAILED: &str = "Görev rapolarına ulaşılamadı";
pub const DELETE_SUCCEEDED: &str = "Personel Silindi";
pub const DELETE_FAILED: &str = "Personel Silinemedi";

/// Route shown after a successful delete.
pub const PERSONNEL_LIST_ROUTE: &str = "/personnels";
/// Route opened by any mission history row.
pub const MISSION_DETAIL_ROUTE: &str = "/personnels/detail/mission";

/// Operator id the screen should load.
///
/// Without a selection (direct visit or reload of the detail route) no
/// request is made and the operator fetch error is shown instead.
///
/// # Errors
///
/// Returns the notice to show when there is no selection.
pub fn load_target(personnel_id: Option<String>) -> Result<String, Notice> {
    personnel_id.filter(|id| !id.is_empty()).ok_or(Notice::error(OPERATOR_FETCH_FAILED))
}

/// Where the delete confirmation currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    ConfirmOpen,
    /// DELETE in flight; the dialog cannot be dismissed.
    Deleting,
}

/// Local state of one operator detail screen visit.
#[derive(Clone, Debug, Default)]
pub struct OperatorDetailState {
    /// `None` until the operator fetch succeeds; the skeleton shows meanwhile.
    pub operator: Option<Operator>,
    pub missions: Vec<Mission>,
    pub delete: DeleteFlow,
    /// Pending navigation, consumed by the page's redirect effect.
    pub redirect: Option<&'static str>,
}

impl OperatorDetailState {
    /// Store the operator fetch result.
    ///
    /// On failure the operator stays unset, so the loading placeholder stays
    /// on screen; there is no retry.
    pub fn apply_operator(&mut self, result: Result<Operator, ApiError>) -> Option<Notice> {
        match result {
            Ok(operator) => {
                self.operator = Some(operator);
                None
            }
            Err(_) => Some(Notice::error(OPERATOR_FETCH_FAILED)),
        }
    }

    /// Store the mission fetch result. Failure keeps the previous list.
    pub fn apply_missions(&mut self, result: Result<Vec<Mission>, ApiError>) -> Option<Notice> {
        match result {
            Ok(missions) => {
                self.missions = missions;
                None
            }
            Err(_) => Some(Notice::error(MISSIONS_FETCH_FAILED)),
        }
    }

    #[must_use]
    pub fn modal_visible(&self) -> bool {
        self.delete != DeleteFlow::Idle
    }

    #[must_use]
    pub fn delete_loading(&self) -> bool {
        self.delete == DeleteFlow::Deleting
    }

    /// The history panel can only expand once the operator has loaded.
    #[must_use]
    pub fn mission_history_enabled(&self) -> bool {
        self.operator.is_some()
    }

    /// Delete button pressed.
    pub fn open_delete(&mut self) {
        if self.delete == DeleteFlow::Idle {
            self.delete = DeleteFlow::ConfirmOpen;
        }
    }

    /// Cancel button, backdrop click, or Escape. Ignored while deleting.
    ///
    /// Returns whether the dialog closed.
    pub fn dismiss_delete(&mut self) -> bool {
        match self.delete {
            DeleteFlow::ConfirmOpen => {
                self.delete = DeleteFlow::Idle;
                true
            }
            DeleteFlow::Idle | DeleteFlow::Deleting => false,
        }
    }

    /// Confirm button pressed.
    ///
    /// Returns the operator id to delete and enters `Deleting`. Returns
    /// `None` (no request) when the dialog is not open, a delete is already
    /// in flight, or the operator has not loaded.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.delete != DeleteFlow::ConfirmOpen {
            return None;
        }
        let id = self.operator.as_ref()?.id.clone();
        self.delete = DeleteFlow::Deleting;
        Some(id)
    }

    /// DELETE resolved.
    ///
    /// Success schedules navigation to the personnel list and leaves the
    /// dialog to unmount with the page. Failure clears the loading flag and
    /// keeps the dialog open so the user can confirm again.
    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Notice {
        match result {
            Ok(()) => {
                self.redirect = Some(PERSONNEL_LIST_ROUTE);
                Notice::success(DELETE_SUCCEEDED)
            }
            Err(_) => {
                self.delete = DeleteFlow::ConfirmOpen;
                Notice::error(DELETE_FAILED)
            }
        }
    }

    /// Mission row clicked.
    ///
    /// Every row opens the same detail route; the clicked row's id is not
    /// carried along.
    pub fn open_mission(&mut self, _row: usize) {
        self.redirect = Some(MISSION_DETAIL_ROUTE);
    }

    /// Take the pending navigation target, if any.
    pub fn take_redirect(&mut self) -> Option<&'static str> {
        self.redirect.take()
    }
}
