//! Bar chart editor form

use crate::controls::{parse_entry_value, StyleSlider, ToggleField, BAR_STYLE_SLIDERS};
use leptos::prelude::*;
use play_core::{EntryPatch, Orientation};
use play_state::BarState;

/// Form controls for the bar configuration: orientation, axis and display
/// toggles, bar rows, and the slider table.
#[component]
pub fn BarChartEditor(bar: BarState) -> impl IntoView {
    let data = bar.data;
    let styles = bar.styles;

    let orientation_button = move |orientation: Orientation| {
        view! {
            <button
                class=move || {
                    if styles.get().orientation == orientation {
                        "orientation-btn active"
                    } else {
                        "orientation-btn"
                    }
                }
                on:click=move |_| bar.update_style(move |s| s.orientation = orientation)
            >
                {orientation.label()}
            </button>
        }
    };

    view! {
        <div class="editor bar-editor">
            <section class="editor-section">
                <h3 class="section-title">"Layout"</h3>
                <div class="orientation-toggle">
                    {orientation_button(Orientation::Vertical)}
                    {orientation_button(Orientation::Horizontal)}
                </div>
                <ToggleField
                    label="Stacked"
                    checked=Signal::derive(move || styles.get().is_stacked)
                    on_change=Callback::new(move |v| bar.update_style(|s| s.is_stacked = v))
                />
            </section>

            <section class="editor-section">
                <h3 class="section-title">"Axes & Grid"</h3>
                <ToggleField
                    label="X Axis"
                    checked=Signal::derive(move || styles.get().show_x_axis)
                    on_change=Callback::new(move |v| bar.update_style(|s| s.show_x_axis = v))
                />
                <ToggleField
                    label="Y Axis"
                    checked=Signal::derive(move || styles.get().show_y_axis)
                    on_change=Callback::new(move |v| bar.update_style(|s| s.show_y_axis = v))
                />
                <ToggleField
                    label="Grid"
                    checked=Signal::derive(move || styles.get().show_grid)
                    on_change=Callback::new(move |v| bar.update_style(|s| s.show_grid = v))
                />
                <ToggleField
                    label="Legend"
                    checked=Signal::derive(move || styles.get().show_legend)
                    on_change=Callback::new(move |v| bar.update_style(|s| s.show_legend = v))
                />
                <div class="axis-labels">
                    <input
                        type="text"
                        class="axis-label-input"
                        placeholder="X axis label"
                        prop:value=move || styles.get().x_axis_label
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            bar.update_style(move |s| s.x_axis_label = text);
                        }
                    />
                    <input
                        type="text"
                        class="axis-label-input"
                        placeholder="Y axis label"
                        prop:value=move || styles.get().y_axis_label
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            bar.update_style(move |s| s.y_axis_label = text);
                        }
                    />
                </div>
            </section>

            <section class="editor-section">
                <h3 class="section-title">"Bars"</h3>
                <For
                    each=move || data.get()
                    key=|entry| entry.id.clone()
                    children=move |entry| {
                        let remove_id = entry.id.clone();
                        let label_id = entry.id.clone();
                        let value_id = entry.id.clone();
                        let color_id = entry.id.clone();
                        view! {
                            <div class="entry-row">
                                <input
                                    type="text"
                                    class="entry-label"
                                    prop:value=entry.label.clone()
                                    on:input=move |ev| {
                                        bar.update_bar(
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
                                    prop:value=entry.value.to_string()
                                    on:input=move |ev| {
                                        if let Some(value) = parse_entry_value(
                                            &event_target_value(&ev),
                                        ) {
                                            bar.update_bar(&value_id, EntryPatch::value(value));
                                        }
                                    }
                                />
                                <input
                                    type="color"
                                    class="entry-color"
                                    prop:value=entry.color.clone()
                                    on:input=move |ev| {
                                        bar.update_bar(
                                            &color_id,
                                            EntryPatch::color(event_target_value(&ev)),
                                        );
                                    }
                                />
                                <button
                                    class="entry-remove"
                                    on:click=move |_| bar.remove_bar(&remove_id)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    }
                />
                // Same caption as the pie editor
                <button class="entry-add" on:click=move |_| bar.add_bar()>
                    "Add Segment"
                </button>
            </section>

            <section class="editor-section">
                <h3 class="section-title">"Styling"</h3>
                <ToggleField
                    label="Bar Border"
                    checked=Signal::derive(move || styles.get().bar_border)
                    on_change=Callback::new(move |v| bar.update_style(|s| s.bar_border = v))
                />
                <input
                    type="color"
                    class="entry-color"
                    prop:value=move || styles.get().bar_border_color
                    on:input=move |ev| {
                        let color = event_target_value(&ev);
                        bar.update_style(move |s| s.bar_border_color = color);
                    }
                />
                {BAR_STYLE_SLIDERS
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
                                value=Signal::derive(move || get(&styles.get()))
                                on_change=Callback::new(move |v| {
                                    bar.update_style(|s| set(s, v));
                                })
                            />
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
