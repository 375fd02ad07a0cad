//! Support contact page: message form, contact methods and emergency line.

use leptos::prelude::*;

use crate::components::toast_stack::show_toast;
use crate::data::site::{CONTACT_METHODS, EMERGENCY_HOTLINE};
use crate::state::contact::{
    ContactCategory, SEND_DELAY_MS, SUPPORT_SENT_DESCRIPTION, SUPPORT_SENT_TITLE, SupportMessage,
};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::timer::after_delay;

type FieldRef = fn(&SupportMessage) -> &String;
type FieldMut = fn(&mut SupportMessage) -> &mut String;

fn message_input(
    draft: RwSignal<SupportMessage>,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    get: FieldRef,
    get_mut: FieldMut,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="input"
                type=kind
                placeholder=placeholder
                prop:value=move || draft.with(|d| get(d).clone())
                on:input=move |ev| draft.update(|d| *get_mut(d) = event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let draft = RwSignal::new(SupportMessage::default());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }
        if let Err(msg) = draft.with_untracked(SupportMessage::validate) {
            show_toast(toasts, "Please fill in all required fields", msg, ToastVariant::Destructive);
            return;
        }
        sending.set(true);
        after_delay(SEND_DELAY_MS, move || {
            show_toast(toasts, SUPPORT_SENT_TITLE, SUPPORT_SENT_DESCRIPTION, ToastVariant::Default);
            draft.set(SupportMessage::default());
            sending.set(false);
        });
    };

    let methods = CONTACT_METHODS
        .iter()
        .map(|method| {
            let lines = method.lines.iter().map(|l| view! { <p>{*l}</p> }).collect_view();
            view! {
                <article class="card contact-method">
                    <h3>{method.title}</h3>
                    <p class="muted">{method.description}</p>
                    <div class="contact-method__value">{lines}</div>
                    {method.action.map(|href| view! { <a class="btn btn--outline btn--sm" href=href>"Reach out"</a> })}
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="contact">
            <header class="page-header">
                <h1>"Contact Us"</h1>
                <p class="muted">"Questions, reports or partnership ideas. We read every message."</p>
            </header>

            <div class="contact__layout">
                <section class="card">
                    <h2>"Send us a Message"</h2>
                    <form class="form" on:submit=on_submit>
                        <div class="form__row">
                            {message_input(draft, "Full Name *", "text", "Your full name", |d| &d.name, |d| &mut d.name)}
                            {message_input(draft, "Email *", "email", "your@email.com", |d| &d.email, |d| &mut d.email)}
                        </div>
                        <div class="form__row">
                            {message_input(draft, "Phone", "tel", "+39 123 456 7890", |d| &d.phone, |d| &mut d.phone)}
                            <label class="form__label">
                                "Category"
                                <select
                                    class="input"
                                    prop:value=move || draft.with(|d| d.category.as_str())
                                    on:change=move |ev| {
                                        draft.update(|d| d.category = ContactCategory::parse(&event_target_value(&ev)));
                                    }
                                >
                                    {ContactCategory::ALL
                                        .into_iter()
                                        .map(|c| view! { <option value=c.as_str()>{c.label()}</option> })
                                        .collect_view()}
                                </select>
                            </label>
                        </div>
                        {message_input(draft, "Subject *", "text", "Brief description of your inquiry", |d| &d.subject, |d| {
                            &mut d.subject
                        })}
                        <label class="form__label">
                            "Message *"
                            <textarea
                                class="input"
                                rows="6"
                                placeholder="Please provide details about your inquiry..."
                                prop:value=move || draft.with(|d| d.message.clone())
                                on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                            {move || if sending.get() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </section>

                <aside class="contact__aside">
                    {methods}
                    <article class="card emergency">
                        <h3>"Emergency Support"</h3>
                        <p class="muted">
                            "If you are facing immediate housing discrimination or a safety concern, call our hotline."
                        </p>
                        <a class="btn btn--destructive" href=EMERGENCY_HOTLINE>"Call Emergency Line"</a>
                    </article>
                </aside>
            </div>
        </div>
    }
}
