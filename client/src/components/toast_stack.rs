//! Toast notifications overlay.

use leptos::prelude::*;

use crate::state::toast::{TOAST_LIFETIME_MS, ToastState, ToastVariant};
use crate::util::timer::after_delay;

/// Queue a toast and schedule its dismissal.
pub fn show_toast(
    toasts: RwSignal<ToastState>,
    title: impl Into<String>,
    description: impl Into<String>,
    variant: ToastVariant,
) {
    let mut id = 0;
    toasts.update(|t| id = t.push(title, description, variant));
    after_delay(TOAST_LIFETIME_MS, move || toasts.update(|t| t.dismiss(id)));
}

/// Bottom-right stack of the live toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class="toast"
                                class:toast--destructive=toast.variant == ToastVariant::Destructive
                            >
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__description">{toast.description}</p>
                                </div>
                                <button
                                    class="toast__close"
                                    title="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
