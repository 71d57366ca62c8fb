//! MUI X `<BarChart>` snippet generator

use crate::fmt_js;
use play_core::{BarStyles, DataEntry};
use serde::Serialize;
use serde_json::Value;

/// Dataset row shape in the emitted `const dataset = ...` literal.
/// Field order matters: it is the order the snippet prints.
#[derive(Serialize)]
struct DatasetRow<'a> {
    label: &'a str,
    value: Value,
    color: &'a str,
    id: &'a str,
}

/// JSON number the way `JSON.stringify` prints it: integral values have no
/// decimal point, non-finite values become `null`.
fn json_number(value: f64) -> Value {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
    }
}

/// Generate the TSX snippet reproducing the current bar chart.
///
/// Unlike the pie generator, no value filtering happens here: every entry is
/// included regardless of sign. Hidden axes are suppressed by omitting their
/// configuration blocks entirely, while a hidden legend is expressed with an
/// explicit `hidden` flag; the two strategies are intentionally different.
/// Border styling is rendered in the live preview but only documented as a
/// comment in the snippet. Never fails.
pub fn generate_bar_chart_code(data: &[DataEntry], styles: &BarStyles) -> String {
    let imports = "import React from 'react';\n\
        import { BarChart } from '@mui/x-charts/BarChart';\n\
        import { axisClasses } from '@mui/x-charts/ChartsAxis'; // Retained for potential future use";

    let rows: Vec<DatasetRow<'_>> = data
        .iter()
        .map(|d| DatasetRow {
            label: &d.label,
            value: json_number(d.value),
            color: &d.color,
            id: &d.id,
        })
        .collect();
    // Pretty-printing matches JSON.stringify(rows, null, 2)
    let dataset_string =
        serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string());

    let corner_radius = if styles.bar_corner_radius > 0.0 {
        format!("cornerRadius: {},", fmt_js(styles.bar_corner_radius))
    } else {
        String::new()
    };
    let stack = if styles.is_stacked {
        "stack: 'total', // Enable stacking if isStacked is true"
    } else {
        ""
    };

    let series_string = format!(
        "series={{[\n\
        \x20     {{\n\
        \x20       dataKey: 'value',\n\
        \x20       label: 'Value', // Default label, could be customized later\n\
        \x20       idKey: 'id',\n\
        \x20       {corner_radius} // Add cornerRadius\n\
        \x20       {stack}\n\
        \x20       // Border styling (barBorder, barBorderColor, barBorderWidth) usually requires\n\
        \x20       // custom styling or slotProps to target individual bar elements.\n\
        \x20       // Example: slotProps={{{{ bar: {{ /* ... custom styles ... */ }} }}}}\n\
        \x20     }},\n\
        \x20   ]}}"
    );

    // Axis blocks are omitted entirely when the axis is hidden
    let x_axis_config = if styles.show_x_axis {
        let label = if styles.x_axis_label.is_empty() {
            String::new()
        } else {
            format!("label: '{}',", styles.x_axis_label)
        };
        format!(
            "xAxis={{[{{\n\
            \x20       scaleType: 'band',\n\
            \x20       dataKey: 'label',\n\
            \x20       {label}\n\
            \x20     }}]}}"
        )
    } else {
        String::new()
    };

    let y_axis_config = if styles.show_y_axis {
        let label = if styles.y_axis_label.is_empty() {
            String::new()
        } else {
            format!("label: '{}',", styles.y_axis_label)
        };
        format!(
            "yAxis={{[{{\n\
            \x20       {label}\n\
            \x20     }}]}}"
        )
    } else {
        String::new()
    };

    // Gridlines run against the bar direction: horizontal bars get vertical
    // gridlines and vice versa
    let grid_config = format!(
        "grid={{{{ {}: {} }}}}",
        styles.orientation.inverted().as_str(),
        styles.show_grid
    );

    // Legend defaults to visible; only a hidden legend is spelled out
    let legend_config = if styles.show_legend {
        String::new()
    } else {
        "slotProps={{ legend: { hidden: true } }}".to_string()
    };

    let chart_component = format!(
        "<BarChart\n\
        \x20 dataset={{dataset}}\n\
        \x20 layout=\"{orientation}\"\n\
        \x20 barGapRatio={{{bar_spacing}}}\n\
        \x20 barWidth={{{bar_width}}}\n\
        \x20 {series_string}\n\
        \x20 {x_axis_config}\n\
        \x20 {y_axis_config}\n\
        \x20 {grid_config}\n\
        \x20 {legend_config}\n\
        \x20 // Default width/height for snippet clarity\n\
        \x20 width={{500}}\n\
        \x20 height={{300}}\n\
        />",
        orientation = styles.orientation.as_str(),
        bar_spacing = fmt_js(styles.bar_spacing),
        bar_width = fmt_js(styles.bar_width),
    );

    let code = format!(
        "{imports}\n\n\n\
        // Data for the chart\n\
        const dataset = {dataset_string};\n\n\
        // Component definition\n\
        export default function MyBarChart() {{\n\
        \x20 return (\n\
        \x20   {chart_component}\n\
        \x20 );\n\
        }}"
    );

    code.trim().to_string()
}
