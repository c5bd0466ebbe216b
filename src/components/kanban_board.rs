//! Kanban Board Component
//!
//! Reorderable card list with pointer and keyboard drag-and-drop.
//! Uses leptos-dragdrop; each board owns its own sortable instance.

use leptos::prelude::*;
use leptos_dragdrop::Sortable;

use crate::models::KanbanCard;

/// Sortable kanban card list
#[component]
pub fn KanbanBoard(
    title: &'static str,
    cards: Vec<KanbanCard>,
) -> impl IntoView {
    let board = Sortable::new(cards);
    board.bind();

    let (selected, set_selected) = signal(None::<String>);

    let selected_title = move || {
        let id = selected.get()?;
        board.items.with(|l| {
            l.index_of(&id)
                .map(|i| format!("{} (#{})", l.items()[i].title, i + 1))
        })
    };

    view! {
        <section class="kanban-board">
            <header class="panel-header">
                <h2>{title}</h2>
                <span class="panel-count">{move || board.items.with(|l| l.len())}" cards"</span>
            </header>
            <p class="panel-hint">
                "Drag a card, or focus it and press Space, the arrow keys, then Space again. Escape cancels."
            </p>

            <div class="kanban-list" node_ref=board.container>
                <For
                    each=move || board.items.with(|l| l.items().to_vec())
                    key=|card| card.id.clone()
                    children=move |card| {
                        let id = card.id.clone();
                        let on_mousedown = board.on_mousedown(id.clone());
                        let on_keydown = board.on_keydown(id.clone());

                        // Visual state
                        let card_class = {
                            let id = id.clone();
                            move || {
                                let mut c = String::from("kanban-card");
                                if board.is_dragging(&id) { c.push_str(" dragging"); }
                                if board.is_drop_target(&id) { c.push_str(" drop-target"); }
                                if selected.get().as_deref() == Some(id.as_str()) { c.push_str(" selected"); }
                                c
                            }
                        };
                        let card_style = {
                            let id = id.clone();
                            move || match board.drag_offset(&id) {
                                Some(offset) => format!("transform: translate({}px, {}px);", offset.x, offset.y),
                                None => String::new(),
                            }
                        };
                        let click_id = id.clone();

                        view! {
                            <div class="sortable-slot" data-sortable-id=id>
                                <div
                                    class=card_class
                                    style=card_style
                                    tabindex="0"
                                    role="button"
                                    aria-roledescription="sortable card"
                                    on:mousedown=on_mousedown
                                    on:keydown=on_keydown
                                    on:click=move |_| {
                                        // Suppress the click that trails a drop
                                        if board.drag_just_ended.get_untracked() { return; }
                                        set_selected.set(Some(click_id.clone()));
                                    }
                                >
                                    <span class="kanban-title">{card.title.clone()}</span>
                                    <span class=format!("status-badge {}", card.status.class())>
                                        {card.status.label()}
                                    </span>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <footer class="panel-footer">
                <span class="kanban-order">
                    {move || board.items.with(|l| l.ids().join(" → "))}
                </span>
                {move || selected_title().map(|t| view! { <span class="kanban-selected">"Selected: "{t}</span> })}
            </footer>
        </section>
    }
}
