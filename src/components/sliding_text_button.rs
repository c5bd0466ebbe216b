//! Sliding Text Button
//!
//! On hover the label slides up and out while the hover label slides in.

use leptos::prelude::*;

#[component]
pub fn SlidingTextButton(
    label: &'static str,
    hover_label: &'static str,
    #[prop(optional)] on_click: Option<Callback<()>>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(false);

    view! {
        <button
            class=move || if hovered.get() { "sliding-button hovered" } else { "sliding-button" }
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
            on:focus=move |_| set_hovered.set(true)
            on:blur=move |_| set_hovered.set(false)
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <span class="sliding-track">
                <span class="sliding-label">{label}</span>
                <span class="sliding-label" aria-hidden="true">{hover_label}</span>
            </span>
        </button>
    }
}
