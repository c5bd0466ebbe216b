//! Breadcrumb Component

use leptos::prelude::*;

use crate::crumbs::breadcrumbs;

#[component]
pub fn Breadcrumb(#[prop(into)] path: Signal<String>) -> impl IntoView {
    view! {
        <nav class="breadcrumb" aria-label="Breadcrumb">
            <ol>
                {move || {
                    breadcrumbs(&path.get())
                        .into_iter()
                        .map(|crumb| match crumb.href {
                            Some(href) => view! {
                                <li><a href=href>{crumb.label}</a></li>
                            }.into_any(),
                            None => view! {
                                <li><span aria-current="page">{crumb.label}</span></li>
                            }.into_any(),
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
