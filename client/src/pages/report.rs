//! Four-step discrimination report wizard.
//!
//! ARCHITECTURE
//! ============
//! All wizard state lives in one `RwSignal<ReportWizard>`. Step gating,
//! evidence-link bookkeeping and the submit lifecycle are methods on the
//! state type; this page only binds inputs and turns validation failures
//! into toasts.

use leptos::prelude::*;

use crate::components::toast_stack::show_toast;
use crate::state::report::{
    DISCRIMINATION_CATEGORIES, INCOMPLETE_STEP_TITLE, PROPERTY_TYPES, ReportDraft, ReportStep, ReportWizard,
    SUBMIT_DELAY_MS, SUBMIT_SUCCESS_DESCRIPTION, SUBMIT_SUCCESS_TITLE, incomplete_step_description,
};
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::format::plural;
use crate::util::timer::after_delay;

const STEPS: [ReportStep; 4] = [ReportStep::Location, ReportStep::Incident, ReportStep::Evidence, ReportStep::Review];

type FieldRef = fn(&ReportDraft) -> &String;
type FieldMut = fn(&mut ReportDraft) -> &mut String;

/// Text input bound to one draft field.
fn draft_input(
    wizard: RwSignal<ReportWizard>,
    label: &'static str,
    placeholder: &'static str,
    get: FieldRef,
    get_mut: FieldMut,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <input
                class="input"
                type="text"
                placeholder=placeholder
                prop:value=move || wizard.with(|w| get(&w.draft).clone())
                on:input=move |ev| wizard.update(|w| *get_mut(&mut w.draft) = event_target_value(&ev))
            />
        </label>
    }
}

/// Select bound to one draft field, with an empty placeholder option.
fn draft_select(
    wizard: RwSignal<ReportWizard>,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
    get: FieldRef,
    get_mut: FieldMut,
) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            <select
                class="input"
                prop:value=move || wizard.with(|w| get(&w.draft).clone())
                on:change=move |ev| wizard.update(|w| *get_mut(&mut w.draft) = event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options.iter().map(|o| view! { <option value=*o>{*o}</option> }).collect_view()}
            </select>
        </label>
    }
}

fn location_step(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    view! {
        <div class="form">
            {draft_input(wizard, "Street Address", "123 Main Street", |d| &d.street, |d| &mut d.street)}
            <div class="form__row">
                {draft_input(wizard, "City", "Boston", |d| &d.city, |d| &mut d.city)}
                {draft_input(wizard, "State", "MA", |d| &d.state, |d| &mut d.state)}
                {draft_input(wizard, "ZIP Code", "02101", |d| &d.zip_code, |d| &mut d.zip_code)}
            </div>
            {draft_select(
                wizard,
                "Property Type",
                "Select property type",
                PROPERTY_TYPES,
                |d| &d.property_type,
                |d| &mut d.property_type,
            )}
        </div>
    }
}

fn incident_step(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    view! {
        <div class="form">
            {draft_select(
                wizard,
                "Discrimination Category",
                "Select category",
                DISCRIMINATION_CATEGORIES,
                |d| &d.category,
                |d| &mut d.category,
            )}
            <label class="form__label">
                "Date Occurred"
                <input
                    class="input"
                    type="date"
                    prop:value=move || wizard.with(|w| w.draft.date_occurred.clone())
                    on:input=move |ev| wizard.update(|w| w.draft.date_occurred = event_target_value(&ev))
                />
            </label>
            <label class="form__label">
                "Description of Incident"
                <textarea
                    class="input"
                    rows="6"
                    placeholder="Describe what happened, including what was said or done..."
                    prop:value=move || wizard.with(|w| w.draft.description.clone())
                    on:input=move |ev| wizard.update(|w| w.draft.description = event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}

fn evidence_step(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let link_count = Memo::new(move |_| wizard.with(|w| w.draft.evidence_links.len()));

    view! {
        <div class="form">
            <div class="form__label">
                "Evidence Links"
                <p class="muted">"Screenshots, emails, listing URLs or anything else that documents the incident."</p>
                {move || {
                    (0..link_count.get())
                        .map(|index| {
                            view! {
                                <div class="evidence-row">
                                    <input
                                        class="input"
                                        type="url"
                                        placeholder="https://..."
                                        prop:value=move || {
                                            wizard.with(|w| w.draft.evidence_links.get(index).cloned().unwrap_or_default())
                                        }
                                        on:input=move |ev| {
                                            wizard.update(|w| w.set_evidence_link(index, event_target_value(&ev)));
                                        }
                                    />
                                    <Show when=move || { link_count.get() > 1 }>
                                        <button
                                            class="btn btn--ghost btn--icon"
                                            type="button"
                                            title="Remove link"
                                            on:click=move |_| {
                                                wizard.update(|w| {
                                                    w.remove_evidence_link(index);
                                                });
                                            }
                                        >
                                            "✕"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <button class="btn btn--outline btn--sm" type="button" on:click=move |_| wizard.update(ReportWizard::add_evidence_link)>
                    "+ Add Another Link"
                </button>
            </div>
            <label class="form__label">
                "Contact Information"
                <input
                    class="input"
                    type="text"
                    placeholder="Email or phone (optional if evidence is provided)"
                    prop:value=move || wizard.with(|w| w.draft.contact_info.clone())
                    on:input=move |ev| wizard.update(|w| w.draft.contact_info = event_target_value(&ev))
                />
            </label>
        </div>
    }
}

fn review_step(wizard: RwSignal<ReportWizard>) -> impl IntoView {
    let draft = move || wizard.with(|w| w.draft.clone());
    let row = move |label: &'static str, value: String| {
        view! {
            <div class="review__row">
                <span class="review__label">{label}</span>
                <span class="review__value">{value}</span>
            </div>
        }
    };

    view! {
        <div class="review">
            {move || {
                let d = draft();
                let evidence = plural(d.filled_evidence_links().len(), "evidence link");
                let contact = if d.contact_info.trim().is_empty() {
                    "Not provided".to_owned()
                } else {
                    d.contact_info.clone()
                };
                view! {
                    {row("Address", d.address_line())}
                    {row("Property Type", d.property_type.clone())}
                    {row("Category", d.category.clone())}
                    {row("Date Occurred", d.date_occurred.clone())}
                    {row("Description", d.description.clone())}
                    {row("Evidence", evidence)}
                    {row("Contact", contact)}
                }
            }}
            <p class="review__notice muted">
                "Your report is confidential. We review every submission and follow up if you left contact details."
            </p>
        </div>
    }
}

#[component]
pub fn ReportPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let wizard = RwSignal::new(ReportWizard::default());
    let step = Memo::new(move |_| wizard.with(|w| w.step));
    let submitting = Memo::new(move |_| wizard.with(|w| w.submitting));

    let on_next = move |_| {
        let mut outcome = Ok(ReportStep::Location);
        wizard.update(|w| outcome = w.next());
        if let Err(missing) = outcome {
            show_toast(toasts, INCOMPLETE_STEP_TITLE, incomplete_step_description(&missing), ToastVariant::Destructive);
        }
    };

    let on_back = move |_| {
        wizard.update(|w| {
            w.back();
        });
    };

    let on_submit = move |_| {
        let mut started = false;
        wizard.update(|w| started = w.begin_submit());
        if !started {
            return;
        }
        after_delay(SUBMIT_DELAY_MS, move || {
            wizard.update(ReportWizard::finish_submit);
            show_toast(toasts, SUBMIT_SUCCESS_TITLE, SUBMIT_SUCCESS_DESCRIPTION, ToastVariant::Default);
        });
    };

    let indicators = STEPS
        .into_iter()
        .map(|s| {
            view! {
                <li
                    class="wizard__step"
                    class:wizard__step--active=move || step.get() == s
                    class:wizard__step--done={move || step.get() > s}
                >
                    <span class="wizard__step-number">{s.number()}</span>
                    <span class="wizard__step-title">{s.title()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="report">
            <header class="page-header">
                <h1>"Report Housing Discrimination"</h1>
                <p class="muted">"Your report helps protect others. All submissions are confidential."</p>
            </header>

            <div class="card wizard">
                <ol class="wizard__steps">{indicators}</ol>
                <div class="progress">
                    <div class="progress__bar" style:width=move || format!("{}%", step.get().progress_percent())></div>
                </div>
                <p class="muted">
                    {move || format!("Step {} of {}: {}", step.get().number(), ReportStep::COUNT, step.get().title())}
                </p>

                <div class="wizard__body">
                    {move || match step.get() {
                        ReportStep::Location => location_step(wizard).into_any(),
                        ReportStep::Incident => incident_step(wizard).into_any(),
                        ReportStep::Evidence => evidence_step(wizard).into_any(),
                        ReportStep::Review => review_step(wizard).into_any(),
                    }}
                </div>

                <div class="wizard__actions">
                    <button class="btn btn--outline" type="button" disabled=move || step.get().is_first() on:click=on_back>
                        "← Previous"
                    </button>
                    <Show
                        when=move || step.get().is_last()
                        fallback=move || {
                            view! {
                                <button class="btn btn--primary" type="button" on:click=on_next>
                                    "Next →"
                                </button>
                            }
                        }
                    >
                        <button class="btn btn--primary" type="button" disabled=move || submitting.get() on:click=on_submit>
                            {move || if submitting.get() { "Submitting..." } else { "Submit Report" }}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
