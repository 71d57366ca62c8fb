//! MUI X `<PieChart>` snippet generator

use crate::fmt_js;
use play_core::{DataEntry, PieOptions, PieStyles};

/// Generate the TSX snippet reproducing the current pie chart.
///
/// Entries with non-positive values are excluded, mirroring the preview
/// renderer: both sides of the screen must agree on which segments exist.
/// An empty filtered collection still yields a valid snippet with an empty
/// data array. Never fails.
pub fn generate_pie_chart_code(
    segments: &[DataEntry],
    styles: &PieStyles,
    options: &PieOptions,
) -> String {
    let data_string = segments
        .iter()
        .filter(|s| s.value > 0.0)
        .map(|s| {
            format!(
                "      {{ id: '{}', value: {}, label: '{}', color: '{}' }}",
                s.id,
                fmt_js(s.value),
                s.label,
                s.color
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    // The snippet carries the legend flag in inverted "hidden" form
    let legend_hidden = !options.show_legend;

    let code = format!(
        r#"import {{ PieChart }} from '@mui/x-charts/PieChart';

export default function MyPieChart() {{
  return (
    <PieChart
      series={{[
        {{
          data: [
{data_string}
          ],
          innerRadius: {inner_radius},
          outerRadius: {outer_radius},
          paddingAngle: {padding_angle},
          cornerRadius: {corner_radius},
          startAngle: {start_angle},
          endAngle: {end_angle},
          highlightScope: {{ faded: 'global', highlighted: 'item' }},
          faded: {{ innerRadius: 30, additionalRadius: -10, color: 'gray' }},
          // Hover transitions
          transition: {{
            duration: 400,
            easing: 'cubic-bezier(0.4, 0, 0.2, 1)',
          }},
        }},
      ]}}
      width={{400}}
      height={{300}}
      slotProps={{{{
        legend: {{ hidden: {legend_hidden} }},
      }}}}
      sx={{{{
        // Add smooth transitions for all chart interactions
        '& .MuiChartsLegend-mark': {{
          transition: 'all 0.3s ease-in-out',
          borderRadius: 1,
        }},
        '& .MuiChartsLegend-label': {{
          transition: 'color 0.3s ease-in-out',
        }},
        '& .MuiChartsLegend-series': {{
          transition: 'opacity 0.3s ease-in-out',
        }},
      }}}}
    />
  );
}}"#,
        inner_radius = fmt_js(styles.inner_radius),
        outer_radius = fmt_js(styles.outer_radius),
        padding_angle = fmt_js(styles.padding_angle),
        corner_radius = fmt_js(styles.corner_radius),
        start_angle = fmt_js(styles.start_angle),
        end_angle = fmt_js(styles.end_angle),
    );

    code.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(id: &str, label: &str, value: f64, color: &str) -> DataEntry {
        DataEntry {
            id: id.into(),
            label: label.into(),
            value,
            color: color.into(),
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let segments = vec![segment("a", "S1", 10.0, "#03C171")];
        let styles = PieStyles::default();
        let options = PieOptions::default();

        let first = generate_pie_chart_code(&segments, &styles, &options);
        let second = generate_pie_chart_code(&segments, &styles, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_positive_segments_are_filtered() {
        let segments = vec![
            segment("a", "S1", 10.0, "#03C171"),
            segment("b", "S2", 0.0, "#0068CC"),
            segment("c", "S3", -3.0, "#FF0000"),
        ];
        let code =
            generate_pie_chart_code(&segments, &PieStyles::default(), &PieOptions::default());

        assert!(code.contains("id: 'a'"));
        assert!(!code.contains("id: 'b'"));
        assert!(!code.contains("id: 'c'"));
    }

    #[test]
    fn test_filter_preserves_order() {
        let segments = vec![
            segment("a", "S1", 5.0, "#111111"),
            segment("b", "S2", -1.0, "#222222"),
            segment("c", "S3", 7.0, "#333333"),
        ];
        let code =
            generate_pie_chart_code(&segments, &PieStyles::default(), &PieOptions::default());

        let pos_a = code.find("id: 'a'").unwrap();
        let pos_c = code.find("id: 'c'").unwrap();
        assert!(pos_a < pos_c);
    }

    #[test]
    fn test_legend_hidden_flag_is_inverted() {
        let segments = vec![segment("a", "S1", 10.0, "#03C171")];
        let styles = PieStyles::default();

        let hidden = generate_pie_chart_code(&segments, &styles, &PieOptions::default());
        assert!(hidden.contains("legend: { hidden: true }"));

        let shown = generate_pie_chart_code(
            &segments,
            &styles,
            &PieOptions { show_legend: true },
        );
        assert!(shown.contains("legend: { hidden: false }"));
    }

    #[test]
    fn test_styles_embedded_as_named_properties() {
        let styles = PieStyles {
            inner_radius: 30.0,
            outer_radius: 100.0,
            padding_angle: 1.5,
            corner_radius: 5.0,
            start_angle: -90.0,
            end_angle: 270.0,
        };
        let code = generate_pie_chart_code(&[], &styles, &PieOptions::default());

        assert!(code.contains("innerRadius: 30,"));
        assert!(code.contains("outerRadius: 100,"));
        assert!(code.contains("paddingAngle: 1.5,"));
        assert!(code.contains("cornerRadius: 5,"));
        assert!(code.contains("startAngle: -90,"));
        assert!(code.contains("endAngle: 270,"));
    }

    #[test]
    fn test_empty_collection_yields_valid_snippet() {
        let code = generate_pie_chart_code(&[], &PieStyles::default(), &PieOptions::default());
        assert!(code.starts_with("import { PieChart }"));
        assert!(code.contains("data: ["));
        assert!(code.ends_with('}'));
    }

    #[test]
    fn test_full_row_rendering() {
        let segments = vec![
            segment("a", "S1", 10.0, "#03C171"),
            segment("b", "S2", 0.0, "#0068CC"),
        ];
        let code =
            generate_pie_chart_code(&segments, &PieStyles::default(), &PieOptions::default());

        assert!(code.contains("{ id: 'a', value: 10, label: 'S1', color: '#03C171' }"));
        assert!(!code.contains("id: 'b'"));
        assert!(code.contains("hidden: true"));
    }
}
