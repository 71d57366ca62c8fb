//! Application header with the chart-type switch

use leptos::prelude::*;
use play_core::ChartType;

#[component]
pub fn Header(
    #[prop(into)] chart_type: Signal<ChartType>,
    #[prop(into)] on_change: Callback<ChartType>,
) -> impl IntoView {
    let type_button = move |target: ChartType| {
        view! {
            <button
                class=move || {
                    if chart_type.get() == target {
                        "type-btn active"
                    } else {
                        "type-btn"
                    }
                }
                on:click=move |_| on_change.run(target)
            >
                {target.label()}
            </button>
        }
    };

    view! {
        <header class="pc-header">
            <div class="pc-brand">
                <span class="brand-name">"PlayCharts"</span>
            </div>
            <div class="type-toggle">
                {type_button(ChartType::Pie)}
                {type_button(ChartType::Bar)}
            </div>
        </header>
    }
}
