//! Card Stack Component
//!
//! Cards drawn as a depth-offset stack; a click anywhere on the stack
//! expands it into a vertical list and back.

use leptos::prelude::*;
use tracing::debug;

use crate::markdown::render_inline;
use crate::models::StackCard;
use crate::stack::{card_geometry, collapsed_padding, StackConfig};

/// Stacked/expandable card view
#[component]
pub fn CardStack(
    cards: Vec<StackCard>,
    #[prop(optional)] config: StackConfig,
) -> impl IntoView {
    let count = cards.len();
    if count == 0 {
        return ().into_any();
    }
    let (expanded, set_expanded) = signal(false);

    let toggle = move || {
        set_expanded.update(|e| *e = !*e);
        debug!(expanded = expanded.get_untracked(), count, "card stack toggled");
    };

    // Collapsed stacks are absolutely positioned; reserve room for the offsets
    let padding = collapsed_padding(count, &config);

    view! {
        <div
            class=move || if expanded.get() { "card-stack expanded" } else { "card-stack" }
            style=move || if expanded.get() { String::new() } else { format!("padding-bottom: {}px;", padding) }
            role="button"
            tabindex="0"
            aria-expanded=move || expanded.get().to_string()
            on:click=move |_| toggle()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    toggle();
                }
            }
        >
            {cards
                .into_iter()
                .enumerate()
                .map(|(index, card)| {
                    let style = move || card_geometry(index, count, &config, expanded.get()).style();
                    let content = render_inline(&card.content);
                    view! {
                        <article class="stack-card" style=style>
                            <p class="stack-card-content" inner_html=content></p>
                            <div class="stack-card-meta">
                                <span class="stack-card-name">{card.name}</span>
                                <span class="stack-card-designation">{card.designation}</span>
                            </div>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}
