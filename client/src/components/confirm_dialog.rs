//! Modal confirmation dialog with cancel and confirm actions.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

/// Keys that close the dialog.
fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Confirmation popup.
///
/// Backdrop click, Escape and the cancel button all call `on_close`; the
/// owner decides whether closing is allowed. While `busy`, both buttons are
/// disabled and the confirm button shows a spinner.
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    confirm_label: &'static str,
    cancel_label: &'static str,
    #[prop(into)] busy: Signal<bool>,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Take focus on open so Escape reaches the keydown handler.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = dialog_ref.get() {
                let _ = el.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = dialog_ref;
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                node_ref=dialog_ref
                class="dialog"
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 class="dialog__title">{title}</h2>
                <div class="modal-button-container">
                    <button class="btn" on:click=move |_| on_close.run(()) disabled=move || busy.get()>
                        {cancel_label}
                    </button>
                    <button
                        class="btn btn--danger"
                        on:click=move |_| on_confirm.run(())
                        disabled=move || busy.get()
                    >
                        <Show when=move || busy.get()>
                            <span class="spin" aria-hidden="true">"⟳"</span>
                        </Show>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
