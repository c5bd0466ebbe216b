//! Section Tab Bar Component
//!
//! Tab bar for switching between catalog sections.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, Section};

#[component]
pub fn SectionTabBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class="section-tab-bar">
            {Section::ALL
                .into_iter()
                .map(|section| {
                    let is_active = move || store.section().get() == section;
                    let tab_class = move || {
                        if is_active() { "section-tab active" } else { "section-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            aria-selected=move || is_active().to_string()
                            on:click=move |_| { *store.section().write() = section; }
                        >
                            {section.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
