//! # play-codegen
//!
//! Pure code generation: maps a chart configuration snapshot to the TSX
//! snippet shown in the code panel. Generators are plain functions of their
//! inputs with no clock, randomness, or DOM access, so identical inputs
//! always produce byte-identical output.
//!
//! ## Modules
//!
//! - `pie` - MUI X `<PieChart>` snippet generator
//! - `bar` - MUI X `<BarChart>` snippet generator
//! - `diff` - line diff used to highlight what changed between regenerations

pub mod bar;
pub mod diff;
pub mod pie;

pub use bar::*;
pub use diff::*;
pub use pie::*;

/// Format a number the way a JS template literal would: integral values
/// print without a decimal point (`30`, not `30.0`).
pub(crate) fn fmt_js(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_js_integral() {
        assert_eq!(fmt_js(30.0), "30");
        assert_eq!(fmt_js(0.0), "0");
        assert_eq!(fmt_js(-360.0), "-360");
    }

    #[test]
    fn test_fmt_js_fractional() {
        assert_eq!(fmt_js(0.5), "0.5");
        assert_eq!(fmt_js(0.2), "0.2");
        assert_eq!(fmt_js(12.25), "12.25");
    }
}
