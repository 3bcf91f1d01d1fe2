//! Transient notification queue rendered by `ToastHost`.
//!
//! Pages push [`Notice`]s; the host renders them in arrival order and the
//! `util::notify` helper schedules their removal in the browser.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual severity of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A user-facing message produced by a state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: ToastKind,
    pub message: &'static str,
}

impl Notice {
    #[must_use]
    pub const fn success(message: &'static str) -> Self {
        Self { kind: ToastKind::Success, message }
    }

    #[must_use]
    pub const fn error(message: &'static str) -> Self {
        Self { kind: ToastKind::Error, message }
    }
}

/// A toast currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Queue a notice and return the id of the new toast.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind: notice.kind, message: notice.message.to_owned() });
        id
    }

    /// Remove a toast. Unknown ids are ignored (already dismissed by click).
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}
