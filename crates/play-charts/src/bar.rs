//! Bar chart preview component

use crate::{
    scale::{format_tick, BandScale, LinearScale},
    ChartDimensions, ChartMargin,
};
use leptos::prelude::*;
use play_core::{colors, BarStyles, DataEntry, Orientation};

/// One renderable bar rect
#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub color: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Value-axis tick with its pixel position along the value axis
#[derive(Debug, Clone, PartialEq)]
pub struct TickView {
    pub position: f64,
    pub label: String,
}

/// Fully laid out bar chart, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartView {
    pub dims: ChartDimensions,
    pub bars: Vec<BarView>,
    pub value_ticks: Vec<TickView>,
    /// Category label positions (band centers)
    pub category_ticks: Vec<TickView>,
}

/// Bar thickness in pixels from the relative width setting (0.1 to 1.0)
fn bar_size(bar_width: f64) -> f64 {
    (bar_width * 50.0).clamp(5.0, 50.0)
}

/// Lay out the full chart for the current configuration.
///
/// Every entry becomes a bar regardless of value sign; negative values grow
/// away from the zero baseline, matching the generated code's behavior of
/// including them in the dataset.
pub fn bar_chart_view(data: &[DataEntry], styles: &BarStyles) -> BarChartView {
    let margin = match styles.orientation {
        Orientation::Vertical => ChartMargin::vertical_bars(),
        Orientation::Horizontal => ChartMargin::horizontal_bars(),
    };
    let dims = ChartDimensions::default().with_margin(margin);

    let min = data.iter().map(|d| d.value).fold(0.0_f64, f64::min);
    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);
    let (domain_min, domain_max) = if min == 0.0 && max == 0.0 {
        (0.0, 1.0)
    } else {
        (min, max)
    };

    let size = bar_size(styles.bar_width);

    match styles.orientation {
        Orientation::Vertical => {
            let value_scale = LinearScale::new()
                .domain(domain_min, domain_max)
                .range(dims.inner_height(), 0.0);
            let band = BandScale::new(data.len()).range(0.0, dims.inner_width());
            let baseline = value_scale.scale(0.0);

            let bars = data
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let scaled = value_scale.scale(d.value);
                    BarView {
                        id: d.id.clone(),
                        label: d.label.clone(),
                        value: d.value,
                        color: d.color.clone(),
                        x: band.scale_center(i) - size / 2.0,
                        y: scaled.min(baseline),
                        width: size,
                        height: (scaled - baseline).abs(),
                    }
                })
                .collect();

            let value_ticks = value_scale
                .nice_ticks(5)
                .into_iter()
                .map(|t| TickView {
                    position: value_scale.scale(t),
                    label: format_tick(t),
                })
                .collect();

            let category_ticks = data
                .iter()
                .enumerate()
                .map(|(i, d)| TickView {
                    position: band.scale_center(i),
                    label: d.label.clone(),
                })
                .collect();

            BarChartView {
                dims,
                bars,
                value_ticks,
                category_ticks,
            }
        }
        Orientation::Horizontal => {
            let value_scale = LinearScale::new()
                .domain(domain_min, domain_max)
                .range(0.0, dims.inner_width());
            let band = BandScale::new(data.len()).range(0.0, dims.inner_height());
            let baseline = value_scale.scale(0.0);

            let bars = data
                .iter()
                .enumerate()
                .map(|(i, d)| {
                    let scaled = value_scale.scale(d.value);
                    BarView {
                        id: d.id.clone(),
                        label: d.label.clone(),
                        value: d.value,
                        color: d.color.clone(),
                        x: scaled.min(baseline),
                        y: band.scale_center(i) - size / 2.0,
                        width: (scaled - baseline).abs(),
                        height: size,
                    }
                })
                .collect();

            let value_ticks = value_scale
                .nice_ticks(5)
                .into_iter()
                .map(|t| TickView {
                    position: value_scale.scale(t),
                    label: format_tick(t),
                })
                .collect();

            let category_ticks = data
                .iter()
                .enumerate()
                .map(|(i, d)| TickView {
                    position: band.scale_center(i),
                    label: d.label.clone(),
                })
                .collect();

            BarChartView {
                dims,
                bars,
                value_ticks,
                category_ticks,
            }
        }
    }
}

/// Live bar chart preview
#[component]
pub fn BarChartPreview(
    #[prop(into)] data: Signal<Vec<DataEntry>>,
    #[prop(into)] styles: Signal<BarStyles>,
) -> impl IntoView {
    let chart = Memo::new(move |_| bar_chart_view(&data.get(), &styles.get()));

    view! {
        <div class="bar-preview">
            <svg
                class="bar-chart"
                viewBox=move || chart.get().dims.viewbox()
                style="width: 100%; height: 100%;"
            >
                <g transform=move || chart.get().dims.inner_transform()>
                    // Gridlines run against the bar direction
                    {move || {
                        let s = styles.get();
                        let view = chart.get();
                        if !s.show_grid {
                            return None;
                        }
                        let (w, h) = (view.dims.inner_width(), view.dims.inner_height());
                        Some(
                            view.value_ticks
                                .iter()
                                .map(|tick| {
                                    let (x1, y1, x2, y2) = match s.orientation {
                                        Orientation::Vertical => {
                                            (0.0, tick.position, w, tick.position)
                                        }
                                        Orientation::Horizontal => {
                                            (tick.position, 0.0, tick.position, h)
                                        }
                                    };
                                    view! {
                                        <line
                                            x1=x1
                                            y1=y1
                                            x2=x2
                                            y2=y2
                                            stroke=colors::GRID
                                            stroke-dasharray="3 3"
                                        />
                                    }
                                })
                                .collect_view(),
                        )
                    }}

                    // Bars
                    {move || {
                        let s = styles.get();
                        let stroke = if s.bar_border {
                            s.bar_border_color.clone()
                        } else {
                            "none".to_string()
                        };
                        let stroke_width = s.bar_border_width;
                        let rx = s.bar_corner_radius;
                        chart
                            .get()
                            .bars
                            .into_iter()
                            .map(|bar| {
                                view! {
                                    <rect
                                        x=bar.x
                                        y=bar.y
                                        width=bar.width
                                        height=bar.height
                                        fill=bar.color
                                        stroke=stroke.clone()
                                        stroke-width=stroke_width
                                        rx=rx
                                    >
                                        <title>{format!("{}: {}", bar.label, bar.value)}</title>
                                    </rect>
                                }
                            })
                            .collect_view()
                    }}

                    // Category axis (labels at band centers)
                    {move || {
                        let s = styles.get();
                        let view = chart.get();
                        let show = match s.orientation {
                            Orientation::Vertical => s.show_x_axis,
                            Orientation::Horizontal => s.show_y_axis,
                        };
                        if !show {
                            return None;
                        }
                        let (w, h) = (view.dims.inner_width(), view.dims.inner_height());
                        let axis_line = match s.orientation {
                            Orientation::Vertical => (0.0, h, w, h),
                            Orientation::Horizontal => (0.0, 0.0, 0.0, h),
                        };
                        Some(
                            view! {
                                <line
                                    x1=axis_line.0
                                    y1=axis_line.1
                                    x2=axis_line.2
                                    y2=axis_line.3
                                    stroke=colors::AXIS
                                />
                                {view
                                    .category_ticks
                                    .iter()
                                    .map(|tick| {
                                        let (x, y, anchor) = match s.orientation {
                                            Orientation::Vertical => {
                                                (tick.position, h + 16.0, "middle")
                                            }
                                            Orientation::Horizontal => {
                                                (-8.0, tick.position + 4.0, "end")
                                            }
                                        };
                                        view! {
                                            <text
                                                x=x
                                                y=y
                                                text-anchor=anchor
                                                class="axis-label"
                                                fill=colors::AXIS
                                            >
                                                {tick.label.clone()}
                                            </text>
                                        }
                                    })
                                    .collect_view()}
                            },
                        )
                    }}

                    // Value axis
                    {move || {
                        let s = styles.get();
                        let view = chart.get();
                        let show = match s.orientation {
                            Orientation::Vertical => s.show_y_axis,
                            Orientation::Horizontal => s.show_x_axis,
                        };
                        if !show {
                            return None;
                        }
                        let h = view.dims.inner_height();
                        Some(
                            view.value_ticks
                                .iter()
                                .map(|tick| {
                                    let (x, y, anchor) = match s.orientation {
                                        Orientation::Vertical => {
                                            (-8.0, tick.position + 4.0, "end")
                                        }
                                        Orientation::Horizontal => {
                                            (tick.position, h + 16.0, "middle")
                                        }
                                    };
                                    view! {
                                        <text
                                            x=x
                                            y=y
                                            text-anchor=anchor
                                            class="axis-label"
                                            fill=colors::AXIS
                                        >
                                            {tick.label.clone()}
                                        </text>
                                    }
                                })
                                .collect_view(),
                        )
                    }}
                </g>

                // Axis titles
                {move || {
                    let s = styles.get();
                    let view = chart.get();
                    let mid_x = view.dims.width / 2.0;
                    let mid_y = view.dims.height / 2.0;
                    let bottom = view.dims.height - 6.0;
                    let mut titles = Vec::new();
                    if s.show_x_axis && !s.x_axis_label.is_empty() {
                        titles
                            .push(
                                view! {
                                    <text
                                        x=mid_x
                                        y=bottom
                                        text-anchor="middle"
                                        class="axis-title"
                                        fill=colors::TEXT_MUTED
                                    >
                                        {s.x_axis_label.clone()}
                                    </text>
                                }
                                    .into_any(),
                            );
                    }
                    if s.show_y_axis && !s.y_axis_label.is_empty() {
                        titles
                            .push(
                                view! {
                                    <text
                                        x=12.0
                                        y=mid_y
                                        text-anchor="middle"
                                        class="axis-title"
                                        fill=colors::TEXT_MUTED
                                        transform=format!("rotate(-90, 12, {})", mid_y)
                                    >
                                        {s.y_axis_label.clone()}
                                    </text>
                                }
                                    .into_any(),
                            );
                    }
                    titles.into_iter().collect_view()
                }}
            </svg>

            {move || {
                let s = styles.get();
                if s.show_legend {
                    let series_label = if s.y_axis_label.is_empty() {
                        "Value".to_string()
                    } else {
                        s.y_axis_label.clone()
                    };
                    Some(
                        view! {
                            <div class="chart-legend">
                                <div class="legend-item">
                                    <span
                                        class="legend-mark"
                                        style="background-color: #888888"
                                    />
                                    <span class="legend-label">{series_label}</span>
                                </div>
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

    fn entry(id: &str, value: f64) -> DataEntry {
        DataEntry {
            id: id.into(),
            label: format!("Bar {id}"),
            value,
            color: "#0068CC".into(),
        }
    }

    #[test]
    fn test_every_entry_becomes_a_bar() {
        let data = vec![entry("a", 10.0), entry("b", -5.0), entry("c", 0.0)];
        let view = bar_chart_view(&data, &BarStyles::default());
        assert_eq!(view.bars.len(), 3);
    }

    #[test]
    fn test_negative_bars_hang_below_baseline() {
        let data = vec![entry("a", 10.0), entry("b", -10.0)];
        let view = bar_chart_view(&data, &BarStyles::default());
        // Symmetric domain: both bars have equal height on opposite sides
        assert!((view.bars[0].height - view.bars[1].height).abs() < 1e-9);
        assert!(view.bars[0].y < view.bars[1].y);
    }

    #[test]
    fn test_horizontal_orientation_swaps_axes() {
        let data = vec![entry("a", 10.0)];
        let styles = BarStyles {
            orientation: Orientation::Horizontal,
            ..BarStyles::default()
        };
        let view = bar_chart_view(&data, &styles);
        let bar = &view.bars[0];
        assert!(bar.width > bar.height);
        assert_eq!(bar.height, bar_size(styles.bar_width));
    }

    #[test]
    fn test_bar_size_clamped() {
        assert_eq!(bar_size(0.1), 5.0);
        assert_eq!(bar_size(0.8), 40.0);
        assert_eq!(bar_size(1.0), 50.0);
    }

    #[test]
    fn test_empty_data_still_lays_out() {
        let view = bar_chart_view(&[], &BarStyles::default());
        assert!(view.bars.is_empty());
        assert!(!view.value_ticks.is_empty());
    }

    #[test]
    fn test_category_ticks_follow_entry_order() {
        let data = vec![entry("a", 1.0), entry("b", 2.0)];
        let view = bar_chart_view(&data, &BarStyles::default());
        assert_eq!(view.category_ticks[0].label, "Bar a");
        assert_eq!(view.category_ticks[1].label, "Bar b");
        assert!(view.category_ticks[0].position < view.category_ticks[1].position);
    }
}
