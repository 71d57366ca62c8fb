//! # play-core
//!
//! Core domain types for the PlayCharts editor: chart data entries, style
//! records, and the pure reducers that mutate them. No UI or reactive
//! dependencies live here so every state transition is unit-testable.

pub mod entry;
pub mod ident;
pub mod style;

pub use entry::*;
pub use ident::*;
pub use style::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// CHART TYPE
// ============================================================================

/// Which editor slice is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Pie,
    Bar,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pie => "Pie Chart",
            Self::Bar => "Bar Chart",
        }
    }

    /// Filename used when the generated snippet is downloaded
    pub fn code_filename(&self) -> &'static str {
        match self {
            Self::Pie => "PlayChartsPieChart.tsx",
            Self::Bar => "PlayChartsBarChart.tsx",
        }
    }

    /// Base name for exported PNG/SVG images
    pub fn export_basename(&self) -> &'static str {
        match self {
            Self::Pie => "PlayChartsPieChart",
            Self::Bar => "PlayChartsBarChart",
        }
    }
}

impl std::fmt::Display for ChartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    /// Seed palette for the default entries created at session start
    pub const SEED: [&str; 3] = ["#03C171", "#0068CC", "#FF0000"];

    /// Placeholder color for entries added through the editor
    pub const PLACEHOLDER: &str = "#CCCCCC";

    /// Default bar border color
    pub const BAR_BORDER: &str = "#000000";

    pub const TEXT_MUTED: &str = "#4F6370";
    pub const GRID: &str = "rgba(0, 0, 0, 0.1)";
    pub const AXIS: &str = "#888888";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_filenames() {
        assert_eq!(ChartType::Pie.code_filename(), "PlayChartsPieChart.tsx");
        assert_eq!(ChartType::Bar.code_filename(), "PlayChartsBarChart.tsx");
    }

    #[test]
    fn test_export_basenames() {
        assert_eq!(ChartType::Pie.export_basename(), "PlayChartsPieChart");
        assert_eq!(ChartType::Bar.export_basename(), "PlayChartsBarChart");
    }
}
