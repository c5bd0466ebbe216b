//! Activity Chart Component
//!
//! SVG bar chart for the dashboard.

use leptos::prelude::*;

use crate::chart::bar_layout;
use crate::models::ActivityPoint;

/// Space under the bars for labels
const LABEL_HEIGHT: f64 = 16.0;
const BAR_GAP: f64 = 8.0;

#[component]
pub fn ActivityChart(
    points: Vec<ActivityPoint>,
    #[prop(default = 320.0)] width: f64,
    #[prop(default = 140.0)] height: f64,
) -> impl IntoView {
    let bars = bar_layout(&points, width, height, BAR_GAP);
    let total: f64 = points.iter().map(|p| p.value).sum();
    let (hovered, set_hovered) = signal(None::<usize>);

    let caption = {
        let bars = bars.clone();
        move || match hovered.get().and_then(|i| bars.get(i)) {
            Some(bar) => format!("{}: {}", bar.label, bar.value),
            None => format!("{} events this week", total),
        }
    };

    view! {
        <figure class="activity-chart">
            <svg
                viewBox=format!("0 0 {} {}", width, height + LABEL_HEIGHT)
                width=width.to_string()
                height=(height + LABEL_HEIGHT).to_string()
            >
                {bars
                    .into_iter()
                    .enumerate()
                    .map(|(i, bar)| {
                        let bar_class = move || if hovered.get() == Some(i) { "bar hovered" } else { "bar" };
                        view! {
                            <g
                                on:mouseenter=move |_| set_hovered.set(Some(i))
                                on:mouseleave=move |_| set_hovered.set(None)
                            >
                                <rect
                                    class=bar_class
                                    x=bar.x.to_string()
                                    y=bar.y.to_string()
                                    width=bar.width.to_string()
                                    height=bar.height.to_string()
                                    rx="3"
                                />
                                <text
                                    class="bar-label"
                                    x=(bar.x + bar.width / 2.0).to_string()
                                    y=(height + LABEL_HEIGHT - 2.0).to_string()
                                    text-anchor="middle"
                                >
                                    {bar.label}
                                </text>
                            </g>
                        }
                    })
                    .collect_view()}
            </svg>
            <figcaption>{caption}</figcaption>
        </figure>
    }
}
