//! Terminal Mock Component
//!
//! A fake terminal window that types out a script.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::typewriter::Typewriter;

/// Window chrome shared by the terminal mock and the log panel
#[component]
pub fn TerminalFrame(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="terminal">
            <div class="terminal-bar">
                <span class="terminal-dot red"></span>
                <span class="terminal-dot yellow"></span>
                <span class="terminal-dot green"></span>
                <span class="terminal-title">{title}</span>
            </div>
            <div class="terminal-body">{children()}</div>
        </div>
    }
}

#[component]
pub fn TerminalMock(
    lines: Vec<String>,
    /// Milliseconds per character
    #[prop(default = 40)] speed_ms: u32,
) -> impl IntoView {
    let writer = RwSignal::new(Typewriter::new(lines));

    // Stops on its own once done, or when the component is gone
    spawn_local(async move {
        loop {
            TimeoutFuture::new(speed_ms).await;
            match writer.try_update(|tw| tw.tick()) {
                Some(true) => continue,
                _ => break,
            }
        }
    });

    let done = move || writer.with(|tw| tw.is_done());

    view! {
        <TerminalFrame title="zsh">
            <div class="terminal-script" on:click=move |_| writer.update(|tw| tw.finish())>
                {move || {
                    writer
                        .with(|tw| tw.visible())
                        .into_iter()
                        .map(|line| view! { <div class="terminal-line">{line}</div> })
                        .collect_view()
                }}
                <span class=move || if done() { "terminal-cursor idle" } else { "terminal-cursor" }>"▋"</span>
            </div>
        </TerminalFrame>
    }
}
