//! Searchable FAQ with collapsible answers.

use std::collections::HashSet;

use leptos::prelude::*;

use crate::data::faq::{results_caption, search};

#[component]
pub fn FaqPage() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let results = Memo::new(move |_| query.with(|q| search(q.trim())));
    let matched = Memo::new(move |_| results.with(|r| r.iter().map(|m| m.entries.len()).sum::<usize>()));
    // Expanded entries keyed by question text.
    let open = RwSignal::new(HashSet::<&'static str>::new());

    let toggle = move |question: &'static str| {
        open.update(|set| {
            if !set.remove(question) {
                set.insert(question);
            }
        });
    };

    view! {
        <div class="faq">
            <header class="page-header">
                <h1>"Frequently Asked Questions"</h1>
                <p class="muted">"Everything you need to know about DRAMP, reporting and safe housing."</p>
            </header>

            <input
                class="input faq__search"
                type="search"
                placeholder="Search questions..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <p class="muted">{move || query.with(|q| results_caption(q.trim(), matched.get()))}</p>

            <Show
                when=move || { matched.get() > 0 }
                fallback=|| {
                    view! {
                        <div class="card empty-state">
                            <h3>"No questions found"</h3>
                            <p class="muted">"Try a different search term or contact us directly."</p>
                        </div>
                    }
                }
            >
                {move || {
                    results
                        .get()
                        .into_iter()
                        .map(|category| {
                            let entries = category
                                .entries
                                .into_iter()
                                .map(|entry| {
                                    let q = entry.question;
                                    let is_open = move || open.with(|set| set.contains(q));
                                    view! {
                                        <li class="accordion__item" class:accordion__item--open=is_open>
                                            <button class="accordion__trigger" on:click=move |_| toggle(q)>
                                                {q}
                                                <span class="accordion__chevron">
                                                    {move || if is_open() { "−" } else { "+" }}
                                                </span>
                                            </button>
                                            <Show when=is_open>
                                                <p class="accordion__content">{entry.answer}</p>
                                            </Show>
                                        </li>
                                    }
                                })
                                .collect_view();
                            view! {
                                <section class="card faq__category">
                                    <h2>{category.title}</h2>
                                    <ul class="accordion">{entries}</ul>
                                </section>
                            }
                        })
                        .collect_view()
                }}
            </Show>

            <section class="card cta">
                <h2>"Still have questions?"</h2>
                <p class="muted">"Our support team is here to help."</p>
                <a class="btn btn--primary" href="/contact">"Contact Support"</a>
            </section>
        </div>
    }
}
