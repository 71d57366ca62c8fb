//! Generated code panel
//!
//! Re-derives the snippet from the current configuration on every change,
//! highlights the lines that differ from the previous regeneration, and
//! offers copy-to-clipboard and file download.

use crate::export::{alert, copy_to_clipboard, download_text};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use play_codegen::{changed_lines, generate_bar_chart_code, generate_pie_chart_code};
use play_core::ChartType;
use play_state::{BarState, PieState};

const COPY_IDLE: &str = "Copy Code";
const COPY_DONE: &str = "Copied!";

#[component]
pub fn CodePanel(
    #[prop(into)] chart_type: Signal<ChartType>,
    pie: PieState,
    bar: BarState,
) -> impl IntoView {
    // The memo's previous value doubles as the diff baseline
    let generated = Memo::new(move |prev: Option<&(String, Vec<usize>)>| {
        let code = match chart_type.get() {
            ChartType::Pie => generate_pie_chart_code(
                &pie.segments.get(),
                &pie.styles.get(),
                &pie.options.get(),
            ),
            ChartType::Bar => generate_bar_chart_code(&bar.data.get(), &bar.styles.get()),
        };
        let changed = prev
            .map(|(old, _)| changed_lines(old, &code))
            .unwrap_or_default();
        (code, changed)
    });

    let copy_label = RwSignal::new(COPY_IDLE);

    let on_copy = move |_| {
        let (code, _) = generated.get();
        spawn_local(async move {
            match copy_to_clipboard(&code).await {
                Ok(()) => {
                    copy_label.set(COPY_DONE);
                    Timeout::new(2_000, move || copy_label.set(COPY_IDLE)).forget();
                }
                Err(err) => {
                    tracing::error!(?err, "clipboard copy failed");
                    alert("Failed to copy code.");
                }
            }
        });
    };

    let on_download = move |_| {
        let (code, _) = generated.get();
        let filename = chart_type.get().code_filename();
        if let Err(err) = download_text(filename, "text/typescript;charset=utf-8", &code) {
            tracing::error!(?err, "code download failed");
            alert("Failed to download code.");
        }
    };

    view! {
        <div class="code-panel">
            <pre class="code-view">
                <code>
                    {move || {
                        let (code, changed) = generated.get();
                        code.lines()
                            .enumerate()
                            .map(|(i, line)| {
                                let class = if changed.contains(&i) {
                                    "code-line changed"
                                } else {
                                    "code-line"
                                };
                                view! { <span class=class>{line.to_string()} "\n"</span> }
                            })
                            .collect_view()
                    }}
                </code>
            </pre>
            <div class="code-actions">
                <button
                    class="code-copy"
                    on:click=on_copy
                    disabled=move || copy_label.get() == COPY_DONE
                >
                    {move || copy_label.get()}
                </button>
                <button class="code-download" on:click=on_download>
                    "Download Code"
                </button>
            </div>
        </div>
    }
}
