//! Shared form controls and the style slider tables
//!
//! Per-field numeric ranges live in explicit tables rather than being
//! inferred from field names: each slider row names its accessor pair, so
//! the ranges are plain data a test can walk.

use leptos::prelude::*;
use play_core::{BarStyles, PieStyles};

// ============================================================================
// SLIDER TABLES
// ============================================================================

/// One style field exposed as a slider
pub struct SliderSpec<S> {
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub get: fn(&S) -> f64,
    pub set: fn(&mut S, f64),
}

/// Pie style sliders, in editor order
pub const PIE_STYLE_SLIDERS: [SliderSpec<PieStyles>; 6] = [
    SliderSpec {
        label: "Inner Radius",
        min: 0.0,
        max: 100.0,
        step: 1.0,
        get: |s| s.inner_radius,
        set: |s, v| s.inner_radius = v,
    },
    SliderSpec {
        label: "Outer Radius",
        min: 10.0,
        max: 200.0,
        step: 1.0,
        get: |s| s.outer_radius,
        set: |s, v| s.outer_radius = v,
    },
    SliderSpec {
        label: "Padding Angle",
        min: 0.0,
        max: 30.0,
        step: 0.5,
        get: |s| s.padding_angle,
        set: |s, v| s.padding_angle = v,
    },
    SliderSpec {
        label: "Corner Radius",
        min: 0.0,
        max: 50.0,
        step: 1.0,
        get: |s| s.corner_radius,
        set: |s, v| s.corner_radius = v,
    },
    SliderSpec {
        label: "Start Angle",
        min: -360.0,
        max: 360.0,
        step: 1.0,
        get: |s| s.start_angle,
        set: |s, v| s.start_angle = v,
    },
    SliderSpec {
        label: "End Angle",
        min: -360.0,
        max: 360.0,
        step: 1.0,
        get: |s| s.end_angle,
        set: |s, v| s.end_angle = v,
    },
];

/// Bar style sliders, in editor order
pub const BAR_STYLE_SLIDERS: [SliderSpec<BarStyles>; 3] = [
    SliderSpec {
        label: "Bar Width",
        min: 0.1,
        max: 1.0,
        step: 0.1,
        get: |s| s.bar_width,
        set: |s, v| s.bar_width = v,
    },
    SliderSpec {
        label: "Border Width",
        min: 1.0,
        max: 5.0,
        step: 1.0,
        get: |s| s.bar_border_width,
        set: |s, v| s.bar_border_width = v,
    },
    SliderSpec {
        label: "Corner Radius",
        min: 0.0,
        max: 20.0,
        step: 1.0,
        get: |s| s.bar_corner_radius,
        set: |s, v| s.bar_corner_radius = v,
    },
];

// ============================================================================
// INPUT GUARDS
// ============================================================================

/// Parse an entry value from text input. Rejects non-numeric and negative
/// text so invalid input never reaches the store; an empty field parses as
/// zero so clearing the input doesn't wedge the form.
pub fn parse_entry_value(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => None,
    }
}

/// Parse a style value from text input, accepting only finite numbers
/// inside the slider's range
pub fn parse_in_range(text: &str, min: f64, max: f64) -> Option<f64> {
    match text.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= min && v <= max => Some(v),
        _ => None,
    }
}

// ============================================================================
// SLIDER COMPONENT
// ============================================================================

/// A labeled range slider with a synced number input
#[component]
pub fn StyleSlider(
    label: &'static str,
    min: f64,
    max: f64,
    step: f64,
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] on_change: Callback<f64>,
) -> impl IntoView {
    let guarded = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        if let Some(v) = parse_in_range(&text, min, max) {
            on_change.run(v);
        }
    };

    view! {
        <div class="style-slider">
            <div class="slider-head">
                <label class="slider-label">{label}</label>
                <input
                    type="number"
                    class="slider-value"
                    min=min
                    max=max
                    step=step
                    prop:value=move || value.get().to_string()
                    on:input=guarded
                />
            </div>
            <input
                type="range"
                class="slider-track"
                min=min
                max=max
                step=step
                prop:value=move || value.get().to_string()
                on:input=guarded
            />
        </div>
    }
}

/// A labeled on/off switch
#[component]
pub fn ToggleField(
    label: &'static str,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="toggle-field">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="toggle-label">{label}</span>
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_table_covers_every_style_field() {
        let mut styles = PieStyles::default();
        for (i, spec) in PIE_STYLE_SLIDERS.iter().enumerate() {
            (spec.set)(&mut styles, 1000.0 + i as f64);
        }
        assert_eq!(styles.inner_radius, 1000.0);
        assert_eq!(styles.outer_radius, 1001.0);
        assert_eq!(styles.padding_angle, 1002.0);
        assert_eq!(styles.corner_radius, 1003.0);
        assert_eq!(styles.start_angle, 1004.0);
        assert_eq!(styles.end_angle, 1005.0);
    }

    #[test]
    fn test_pie_table_ranges() {
        let by_label = |label: &str| {
            PIE_STYLE_SLIDERS
                .iter()
                .find(|s| s.label == label)
                .unwrap()
        };
        let outer = by_label("Outer Radius");
        assert_eq!((outer.min, outer.max), (10.0, 200.0));
        let padding = by_label("Padding Angle");
        assert_eq!(padding.step, 0.5);
        let start = by_label("Start Angle");
        assert_eq!((start.min, start.max), (-360.0, 360.0));
    }

    #[test]
    fn test_bar_table_ranges() {
        assert_eq!((BAR_STYLE_SLIDERS[0].min, BAR_STYLE_SLIDERS[0].max), (0.1, 1.0));
        assert_eq!((BAR_STYLE_SLIDERS[1].min, BAR_STYLE_SLIDERS[1].max), (1.0, 5.0));
        assert_eq!((BAR_STYLE_SLIDERS[2].min, BAR_STYLE_SLIDERS[2].max), (0.0, 20.0));
    }

    #[test]
    fn test_entry_value_guard() {
        assert_eq!(parse_entry_value("42.5"), Some(42.5));
        assert_eq!(parse_entry_value(""), Some(0.0));
        assert_eq!(parse_entry_value("abc"), None);
        assert_eq!(parse_entry_value("-1"), None);
        assert_eq!(parse_entry_value("NaN"), None);
    }

    #[test]
    fn test_range_guard() {
        assert_eq!(parse_in_range("50", 10.0, 200.0), Some(50.0));
        assert_eq!(parse_in_range("5", 10.0, 200.0), None);
        assert_eq!(parse_in_range("201", 10.0, 200.0), None);
        assert_eq!(parse_in_range("x", 10.0, 200.0), None);
    }
}
