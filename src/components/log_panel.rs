//! Log Panel Component
//!
//! Shows the most recent lines of the rolling log buffer.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::TerminalFrame;
use crate::context::use_app_context;

/// How often the buffer is checked for new lines
const POLL_MS: u32 = 500;

#[component]
pub fn LogPanel() -> impl IntoView {
    let ctx = use_app_context();
    let lines = RwSignal::new(ctx.log.with_value(|log| log.lines()));

    // Refresh only when the buffer's version moved
    spawn_local(async move {
        let mut seen = ctx.log.try_with_value(|log| log.version()).unwrap_or(0);
        loop {
            TimeoutFuture::new(POLL_MS).await;
            // Panel unmounted
            if lines.try_with_untracked(|_| ()).is_none() {
                break;
            }
            let Some(version) = ctx.log.try_with_value(|log| log.version()) else { break };
            if version != seen {
                seen = version;
                lines.set(ctx.log.with_value(|log| log.lines()));
            }
        }
    });

    let clear = move |_| {
        ctx.log.with_value(|log| log.clear());
        lines.set(Vec::new());
    };

    view! {
        <section class="log-panel">
            <header class="panel-header">
                <h2>"Activity log"</h2>
                <button class="panel-action" on:click=clear>"Clear"</button>
            </header>
            <TerminalFrame title="tracing">
                {move || {
                    let lines = lines.get();
                    if lines.is_empty() {
                        view! { <div class="terminal-line muted">"No log lines yet"</div> }.into_any()
                    } else {
                        lines
                            .into_iter()
                            .map(|line| view! { <div class="terminal-line">{line}</div> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </TerminalFrame>
        </section>
    }
}
