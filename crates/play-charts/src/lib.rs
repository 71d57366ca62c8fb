//! # play-charts
//!
//! SVG chart previews for the PlayCharts editor, built with Leptos.
//! Renders directly from the configuration snapshot so the preview and the
//! generated code always describe the same chart.
//!
//! ## Modules
//!
//! - `scale` - linear and band scales for bar layout
//! - `sector` - annular sector geometry for pie slices
//! - `pie` - pie chart preview component
//! - `bar` - bar chart preview component

pub mod bar;
pub mod pie;
pub mod scale;
pub mod sector;

pub use bar::*;
pub use pie::*;
pub use scale::*;
pub use sector::*;

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    /// Margins for vertical bars (category labels along the bottom)
    pub const fn vertical_bars() -> Self {
        Self::new(20.0, 30.0, 50.0, 45.0)
    }

    /// Margins for horizontal bars (category labels on the left)
    pub const fn horizontal_bars() -> Self {
        Self::new(20.0, 30.0, 30.0, 70.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::vertical_bars()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(500.0, 400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_dimensions() {
        let dims = ChartDimensions::new(500.0, 400.0)
            .with_margin(ChartMargin::new(20.0, 30.0, 50.0, 45.0));
        assert_eq!(dims.inner_width(), 425.0);
        assert_eq!(dims.inner_height(), 330.0);
    }

    #[test]
    fn test_inner_dimensions_never_negative() {
        let dims = ChartDimensions::new(10.0, 10.0)
            .with_margin(ChartMargin::new(20.0, 20.0, 20.0, 20.0));
        assert_eq!(dims.inner_width(), 0.0);
        assert_eq!(dims.inner_height(), 0.0);
    }
}
