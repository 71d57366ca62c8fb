//! Pie chart editor form

use crate::controls::{parse_entry_value, StyleSlider, ToggleField, PIE_STYLE_SLIDERS};
use leptos::prelude::*;
use play_core::EntryPatch;
use play_state::PieState;

/// Form controls for the pie configuration: legend toggle, segment rows,
/// and one slider per style field from the slider table.
#[component]
pub fn PieChartEditor(pie: PieState) -> impl IntoView {
    let segments = pie.segments;
    let options = pie.options;

    view! {
        <div class="editor pie-editor">
            <section class="editor-section">
                <h3 class="section-title">"Options"</h3>
                <ToggleField
                    label="Legend"
                    checked=Signal::derive(move || options.get().show_legend)
                    on_change=Callback::new(move |show| {
                        pie.update_option(|o| o.show_legend = show);
                    })
                />
            </section>

            <section class="editor-section">
                <h3 class="section-title">"Segments"</h3>
                <For
                    each=move || segments.get()
                    key=|segment| segment.id.clone()
                    children=move |segment| {
                        let id = segment.id.clone();
                        let remove_id = id.clone();
                        let label_id = id.clone();
                        let value_id = id.clone();
                        let color_id = id;
                        view! {
                            <div class="entry-row">
                                <input
                                    type="text"
                                    class="entry-label"
                                    prop:value=segment.label.clone()
                                    on:input=move |ev| {
                                        pie.update_segment(
                                            &label_id,
                                            EntryPatch::label(event_target_value(&ev)),
                                        );
                                    }
                                />
                                <input
                                    type="number"
                                    class="entry-value"
                                    min="0"
                                    step="any"
                                    prop:value=segment.value.to_string()
                                    on:input=move |ev| {
                                        if let Some(value) = parse_entry_value(
                                            &event_target_value(&ev),
                                        ) {
                                            pie.update_segment(&value_id, EntryPatch::value(value));
                                        }
                                    }
                                />
                                <input
                                    type="color"
                                    class="entry-color"
                                    prop:value=segment.color.clone()
                                    on:input=move |ev| {
                                        pie.update_segment(
                                            &color_id,
                                            EntryPatch::color(event_target_value(&ev)),
                                        );
                                    }
                                />
                                <button
                                    class="entry-remove"
                                    on:click=move |_| pie.remove_segment(&remove_id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
                <button class="entry-add" on:click=move |_| pie.add_segment()>
                    "Add Segment"
                </button>
            </section>

            <section class="editor-section">
                <h3 class="section-title">"Styling"</h3>
                {PIE_STYLE_SLIDERS
                    .iter()
                    .map(|spec| {
                        let get = spec.get;
                        let set = spec.set;
                        view! {
                            <StyleSlider
                                label=spec.label
                                min=spec.min
                                max=spec.max
                                step=spec.step
                                value=Signal::derive(move || get(&pie.styles.get()))
                                on_change=Callback::new(move |v| {
                                    pie.update_style(|s| set(s, v));
                                })
                            />
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
