//! Style and option records for both chart types
//!
//! Plain data with seed defaults. Range clamping is an editor concern (the
//! slider tables in play-components); nothing here validates cross-field
//! relationships, so an inner radius larger than the outer one is allowed
//! and renders however the preview renders it.

use crate::colors;
use serde::{Deserialize, Serialize};

// ============================================================================
// ORIENTATION
// ============================================================================

/// Bar chart orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// The opposite orientation. Gridlines in the generated code run against
    /// the bar direction: horizontal bars get vertical gridlines.
    pub fn inverted(&self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Horizontal => "Horizontal",
            Self::Vertical => "Vertical",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PIE
// ============================================================================

/// Pie chart styling record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PieStyles {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub padding_angle: f64,
    pub corner_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Default for PieStyles {
    fn default() -> Self {
        Self {
            inner_radius: 30.0,
            outer_radius: 100.0,
            padding_angle: 1.0,
            corner_radius: 5.0,
            start_angle: 0.0,
            end_angle: 360.0,
        }
    }
}

/// Pie chart options beyond geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PieOptions {
    pub show_legend: bool,
}

// ============================================================================
// BAR
// ============================================================================

/// Bar chart styling record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarStyles {
    pub orientation: Orientation,
    pub bar_spacing: f64,
    /// Relative bar width, 0.1 to 1.0
    pub bar_width: f64,
    pub is_stacked: bool,
    pub show_x_axis: bool,
    pub show_y_axis: bool,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub show_grid: bool,
    pub show_legend: bool,
    pub bar_border: bool,
    pub bar_border_color: String,
    /// 1 to 5 px
    pub bar_border_width: f64,
    /// 0 to 20 px
    pub bar_corner_radius: f64,
}

impl Default for BarStyles {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            bar_spacing: 0.2,
            bar_width: 0.8,
            is_stacked: false,
            show_x_axis: true,
            show_y_axis: true,
            x_axis_label: String::new(),
            y_axis_label: String::new(),
            show_grid: true,
            show_legend: false,
            bar_border: false,
            bar_border_color: colors::BAR_BORDER.to_string(),
            bar_border_width: 1.0,
            bar_corner_radius: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_inversion() {
        assert_eq!(Orientation::Horizontal.inverted(), Orientation::Vertical);
        assert_eq!(Orientation::Vertical.inverted(), Orientation::Horizontal);
    }

    #[test]
    fn test_pie_defaults() {
        let styles = PieStyles::default();
        assert_eq!(styles.inner_radius, 30.0);
        assert_eq!(styles.outer_radius, 100.0);
        assert_eq!(styles.padding_angle, 1.0);
        assert_eq!(styles.corner_radius, 5.0);
        assert_eq!(styles.start_angle, 0.0);
        assert_eq!(styles.end_angle, 360.0);
        assert!(!PieOptions::default().show_legend);
    }

    #[test]
    fn test_bar_defaults() {
        let styles = BarStyles::default();
        assert_eq!(styles.orientation, Orientation::Vertical);
        assert_eq!(styles.bar_spacing, 0.2);
        assert_eq!(styles.bar_width, 0.8);
        assert!(!styles.is_stacked);
        assert!(styles.show_x_axis && styles.show_y_axis);
        assert!(styles.x_axis_label.is_empty());
        assert!(styles.show_grid);
        assert!(!styles.show_legend);
        assert!(!styles.bar_border);
        assert_eq!(styles.bar_border_color, "#000000");
        assert_eq!(styles.bar_border_width, 1.0);
        assert_eq!(styles.bar_corner_radius, 0.0);
    }
}
