//! Toast helpers shared by pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! State transitions return `Notice`s; this module pushes them into the
//! shared `ToastState` and, in the browser, removes each toast after
//! [`TOAST_TTL`].

use leptos::prelude::*;

use crate::state::toast::{Notice, ToastState};

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_TTL: std::time::Duration = std::time::Duration::from_secs(4);

/// Show a notice as a toast.
pub fn notify(toasts: RwSignal<ToastState>, notice: Notice) {
    let Some(id) = toasts.try_update(|t| t.push(notice)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(TOAST_TTL).await;
        // The signal may be gone if the whole app unmounted meanwhile.
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Show a notice if a transition produced one.
pub fn notify_opt(toasts: RwSignal<ToastState>, notice: Option<Notice>) {
    if let Some(notice) = notice {
        notify(toasts, notice);
    }
}
