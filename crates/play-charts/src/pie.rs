//! Pie chart preview component

use crate::sector::{layout_slices, sector_path};
use leptos::prelude::*;
use play_core::{DataEntry, PieOptions, PieStyles};

const VIEW_WIDTH: f64 = 400.0;
const VIEW_HEIGHT: f64 = 300.0;

/// One renderable slice
#[derive(Debug, Clone, PartialEq)]
pub struct SliceView {
    pub id: String,
    pub label: String,
    pub color: String,
    pub path: String,
}

/// Compute the renderable slices for the current configuration.
///
/// Applies the same rule as the code generator: only entries with a positive
/// value become slices, in collection order.
pub fn pie_slice_views(segments: &[DataEntry], styles: &PieStyles) -> Vec<SliceView> {
    let visible: Vec<&DataEntry> = segments.iter().filter(|s| s.value > 0.0).collect();
    let values: Vec<f64> = visible.iter().map(|s| s.value).collect();

    let angles = layout_slices(
        &values,
        styles.start_angle,
        styles.end_angle,
        styles.padding_angle,
    );

    let cx = VIEW_WIDTH / 2.0;
    let cy = VIEW_HEIGHT / 2.0;

    visible
        .iter()
        .zip(angles)
        .map(|(segment, (start, end))| SliceView {
            id: segment.id.clone(),
            label: segment.label.clone(),
            color: segment.color.clone(),
            path: sector_path(
                cx,
                cy,
                styles.inner_radius,
                styles.outer_radius,
                start,
                end,
                styles.corner_radius,
            ),
        })
        .collect()
}

/// Live pie chart preview
#[component]
pub fn PieChartPreview(
    #[prop(into)] segments: Signal<Vec<DataEntry>>,
    #[prop(into)] styles: Signal<PieStyles>,
    #[prop(into)] options: Signal<PieOptions>,
) -> impl IntoView {
    let slices = Memo::new(move |_| pie_slice_views(&segments.get(), &styles.get()));

    view! {
        <div class="pie-preview">
            {move || {
                if slices.get().is_empty() {
                    view! {
                        <div class="preview-empty">
                            "Add segments with positive values to see the chart."
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <svg
                            class="pie-chart"
                            viewBox=format!("0 0 {} {}", VIEW_WIDTH, VIEW_HEIGHT)
                            style="width: 100%; height: 100%;"
                        >
                            {move || {
                                slices
                                    .get()
                                    .into_iter()
                                    .map(|slice| {
                                        view! {
                                            <path
                                                d=slice.path
                                                fill=slice.color
                                                stroke="none"
                                            >
                                                <title>{slice.label}</title>
                                            </path>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </svg>
                    }
                        .into_any()
                }
            }}

            {move || {
                if options.get().show_legend {
                    Some(
                        view! {
                            <div class="chart-legend">
                                {move || {
                                    slices
                                        .get()
                                        .into_iter()
                                        .map(|slice| {
                                            view! {
                                                <div class="legend-item">
                                                    <span
                                                        class="legend-mark"
                                                        style=format!(
                                                            "background-color: {}",
                                                            slice.color,
                                                        )
                                                    />
                                                    <span class="legend-label">{slice.label}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        },
                    )
                } else {
                    None
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: &str, value: f64) -> DataEntry {
        DataEntry {
            id: id.into(),
            label: format!("Segment {id}"),
            value,
            color: "#03C171".into(),
        }
    }

    #[test]
    fn test_preview_filters_like_the_generator() {
        let segments = vec![segment("a", 10.0), segment("b", 0.0), segment("c", -2.0)];
        let slices = pie_slice_views(&segments, &PieStyles::default());
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].id, "a");
    }

    #[test]
    fn test_slices_keep_collection_order() {
        let segments = vec![segment("a", 1.0), segment("b", 2.0), segment("c", 3.0)];
        let slices = pie_slice_views(&segments, &PieStyles::default());
        let ids: Vec<&str> = slices.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_slices_have_paths() {
        let segments = vec![segment("a", 1.0), segment("b", 2.0)];
        let slices = pie_slice_views(&segments, &PieStyles::default());
        for slice in slices {
            assert!(slice.path.starts_with('M'));
        }
    }

    #[test]
    fn test_no_positive_values_no_slices() {
        let segments = vec![segment("a", 0.0)];
        assert!(pie_slice_views(&segments, &PieStyles::default()).is_empty());
    }
}
