//! Root application layout
//!
//! Owns the `EditorState` for the session and hands it down through props;
//! there is no global context. Preview, code panel, and editor all derive
//! from the same configuration signals.

use crate::export::{export_png, export_svg};
use crate::{BarChartEditor, CodePanel, Header, PieChartEditor, PreviewHeader};
use leptos::prelude::*;
use play_charts::{BarChartPreview, PieChartPreview};
use play_core::ChartType;
use play_state::EditorState;

#[component]
pub fn App() -> impl IntoView {
    let state = EditorState::new();
    let chart_type = state.chart_type;

    let preview_selector = move || match chart_type.get() {
        ChartType::Pie => ".pie-preview svg",
        ChartType::Bar => ".bar-preview svg",
    };

    view! {
        <div class="playcharts">
            <Header
                chart_type=chart_type
                on_change=Callback::new(move |t| state.set_chart_type(t))
            />

            <main class="pc-main">
                <section class="pc-left">
                    <div class="panel preview-panel">
                        <PreviewHeader
                            on_download_png=Callback::new(move |_| {
                                export_png(
                                    preview_selector(),
                                    chart_type.get().export_basename(),
                                );
                            })
                            on_download_svg=Callback::new(move |_| {
                                export_svg(
                                    preview_selector(),
                                    chart_type.get().export_basename(),
                                );
                            })
                        />
                        {move || match chart_type.get() {
                            ChartType::Pie => {
                                view! {
                                    <PieChartPreview
                                        segments=state.pie.segments
                                        styles=state.pie.styles
                                        options=state.pie.options
                                    />
                                }
                                    .into_any()
                            }
                            ChartType::Bar => {
                                view! {
                                    <BarChartPreview
                                        data=state.bar.data
                                        styles=state.bar.styles
                                    />
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    <div class="panel code-panel-wrap">
                        <CodePanel chart_type=chart_type pie=state.pie bar=state.bar />
                    </div>
                </section>

                <section class="pc-right">
                    <div class="panel editor-panel">
                        {move || match chart_type.get() {
                            ChartType::Pie => {
                                view! { <PieChartEditor pie=state.pie /> }.into_any()
                            }
                            ChartType::Bar => {
                                view! { <BarChartEditor bar=state.bar /> }.into_any()
                            }
                        }}
                    </div>
                </section>
            </main>
        </div>
    }
}
