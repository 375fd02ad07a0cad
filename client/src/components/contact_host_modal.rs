//! Modal for composing a message to a listing's host.
//!
//! The send is simulated: after a fixed delay it always succeeds, raises a
//! toast, clears the draft and closes the modal.

#[cfg(test)]
#[path = "contact_host_modal_test.rs"]
mod contact_host_modal_test;

use leptos::prelude::*;

use crate::components::toast_stack::show_toast;
use crate::state::contact::{HostMessage, InquiryType, SEND_DELAY_MS, host_message_sent_copy};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::timer::after_delay;

/// Complete a simulated send: announce it, then reset and close the modal.
///
/// The modal can be dismissed while the send is in flight, which disposes its
/// signals and `on_close`. Only the app-level `toasts` signal is guaranteed to
/// outlive it, so the modal is touched through `try_` accessors only.
pub(crate) fn finish_send(
    toasts: RwSignal<ToastState>,
    host_name: &str,
    sending: RwSignal<bool>,
    draft: RwSignal<HostMessage>,
    on_close: Callback<()>,
) {
    let (title, description) = host_message_sent_copy(host_name);
    show_toast(toasts, title, description, ToastVariant::Default);
    if sending.try_update(|s| *s = false).is_none() {
        return;
    }
    draft.try_update(|d| *d = HostMessage::default());
    on_close.run(());
}

#[component]
pub fn ContactHostModal(
    #[prop(into)] host_name: String,
    #[prop(into)] listing_title: String,
    on_close: Callback<()>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(HostMessage::default());
    let sending = RwSignal::new(false);

    let host = host_name.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        if let Err(msg) = draft.with_untracked(HostMessage::validate) {
            show_toast(toasts, "Please fill in all required fields", msg, ToastVariant::Destructive);
            return;
        }
        sending.set(true);
        let host = host.clone();
        after_delay(SEND_DELAY_MS, move || finish_send(toasts, &host, sending, draft, on_close));
    };

    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
            >
                <h2>"💬 Contact " {host_name}</h2>
                <p class="dialog__subtitle">{format!("Send a message about \"{listing_title}\"")}</p>

                <form class="form" on:submit=on_submit>
                    <div class="form__row">
                        <label class="dialog__label">
                            "Full Name"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="Your name"
                                required
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                placeholder="your@email.com"
                                required
                                prop:value=move || draft.with(|d| d.email.clone())
                                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="dialog__label">
                        "Phone (Optional)"
                        <input
                            class="dialog__input"
                            type="tel"
                            placeholder="(555) 123-4567"
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.phone = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Inquiry Type"
                        <select
                            class="dialog__input"
                            prop:value=move || draft.with(|d| d.inquiry_type.as_str())
                            on:change=move |ev| {
                                draft.update(|d| d.inquiry_type = InquiryType::parse(&event_target_value(&ev)));
                            }
                        >
                            {InquiryType::ALL
                                .into_iter()
                                .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Message"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            placeholder="Hi! I'm interested in your property listing..."
                            required
                            prop:value=move || draft.with(|d| d.message.clone())
                            on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                        ></textarea>
                    </label>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                            {move || if sending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
