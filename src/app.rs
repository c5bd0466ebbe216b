//! UI Catalog App
//!
//! Header with breadcrumb and theme toggle, a section tab bar, and one
//! catalog section at a time.

use leptos::prelude::*;
use reactive_stores::Store;
use rolling_logger::RollingBuffer;
use tracing::info;

use crate::components::{
    ActivityChart, Breadcrumb, CardStack, KanbanBoard, LogPanel, SectionTabBar, SlidingTextButton,
    TerminalMock, ThemeToggle,
};
use crate::config::CatalogConfig;
use crate::context::{use_app_context, AppContext};
use crate::store::{AppState, AppStateStoreFields, Section, Theme};

#[component]
pub fn App(config: CatalogConfig, log: RollingBuffer) -> impl IntoView {
    // State
    let store = Store::new(AppState::new(Theme::preferred()));
    provide_context(store);
    provide_context(AppContext::new(config, log));

    let path = Signal::derive(move || store.section().get().path().to_string());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="app-title">
                    <h1>"UI Catalog"</h1>
                    <Breadcrumb path=path />
                </div>
                <ThemeToggle />
            </header>

            <SectionTabBar />

            // Sections mount fresh on every switch; their state does not survive
            <main class="main-content">
                {move || match store.section().get() {
                    Section::Dashboard => view! { <DashboardSection /> }.into_any(),
                    Section::CardStack => view! { <CardStackSection /> }.into_any(),
                    Section::Primitives => view! { <PrimitivesSection /> }.into_any(),
                    Section::Log => view! { <LogPanel /> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn DashboardSection() -> impl IntoView {
    let ctx = use_app_context();
    let board = ctx.with_config(|c| c.board.clone());
    let activity = ctx.with_config(|c| c.activity.clone());

    view! {
        <div class="dashboard-grid">
            <KanbanBoard title="Sprint board" cards=board />
            <section class="chart-panel">
                <header class="panel-header">
                    <h2>"Activity"</h2>
                </header>
                <ActivityChart points=activity />
            </section>
        </div>
    }
}

#[component]
fn CardStackSection() -> impl IntoView {
    let ctx = use_app_context();
    let cards = ctx.with_config(|c| c.cards.clone());
    let stack = ctx.with_config(|c| c.stack);

    view! {
        <section class="card-stack-panel">
            <header class="panel-header">
                <h2>"Testimonials"</h2>
            </header>
            <p class="panel-hint">"Click the stack to expand or collapse it."</p>
            <CardStack cards=cards config=stack />
        </section>
    }
}

#[component]
fn PrimitivesSection() -> impl IntoView {
    let ctx = use_app_context();
    let script = ctx.with_config(|c| c.terminal.clone());

    view! {
        <div class="primitives-grid">
            <section class="primitive">
                <h3>"Sliding text button"</h3>
                <SlidingTextButton
                    label="Get started"
                    hover_label="Let's go →"
                    on_click=Callback::new(|_| info!("sliding button clicked"))
                />
            </section>
            <section class="primitive">
                <h3>"Breadcrumb"</h3>
                <Breadcrumb path="/shop/shoes/running shoes".to_string() />
            </section>
            <section class="primitive wide">
                <h3>"Terminal"</h3>
                <TerminalMock lines=script />
            </section>
        </div>
    }
}
