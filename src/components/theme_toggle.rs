//! Theme Toggle Component
//!
//! Switches light/dark theme in the app store and mirrors it as a class
//! on the document element.

use leptos::prelude::*;
use tracing::debug;

use crate::store::{use_app_store, AppStateStoreFields, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = use_app_store();

    Effect::new(move |_| {
        let theme = store.theme().get();
        if let Some(root) = document().document_element() {
            let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
        }
    });

    let toggle = move |_| {
        let next = store.theme().get_untracked().toggled();
        *store.theme().write() = next;
        debug!(theme = ?next, "theme changed");
    };

    view! {
        <button
            class="theme-toggle"
            title=move || if store.theme().get() == Theme::Dark { "Switch to light" } else { "Switch to dark" }
            on:click=toggle
        >
            {move || if store.theme().get().is_dark() { "☾" } else { "☀" }}
        </button>
    }
}
