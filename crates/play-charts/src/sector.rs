//! Annular sector geometry for pie slices
//!
//! Angles follow the MUI X convention the generated code uses: degrees,
//! 0 at twelve o'clock, increasing clockwise.

use std::fmt::Write;

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "M{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        write!(self.commands, "L{:.2},{:.2}", x, y).unwrap();
        self
    }

    pub fn quadratic_to(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        write!(self.commands, "Q{:.2},{:.2},{:.2},{:.2}", x1, y1, x, y).unwrap();
        self
    }

    pub fn arc_to(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        write!(
            self.commands,
            "A{:.2},{:.2},{:.2},{},{},{:.2},{:.2}",
            rx,
            ry,
            rotation,
            large_arc as u8,
            sweep as u8,
            x,
            y
        )
        .unwrap();
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push('Z');
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

/// Point on a circle at `angle_deg` (0 = top, clockwise)
pub fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Distribute values over the available sweep
///
/// Returns one `(start, end)` angle pair per value, in input order. Each
/// slice gives up half the padding angle on each side; a slice squeezed
/// below zero sweep collapses to a degenerate pair rather than going
/// negative. An empty or zero-total input yields no slices.
pub fn layout_slices(
    values: &[f64],
    start_angle: f64,
    end_angle: f64,
    padding_angle: f64,
) -> Vec<(f64, f64)> {
    let total: f64 = values.iter().sum();
    if values.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let available = end_angle - start_angle;
    let pad = padding_angle.max(0.0);
    let mut cursor = start_angle;
    let mut slices = Vec::with_capacity(values.len());

    for &value in values {
        let sweep = value / total * available;
        let mut s = cursor + pad / 2.0;
        let mut e = cursor + sweep - pad / 2.0;
        if e < s {
            let mid = (s + e) / 2.0;
            s = mid;
            e = mid;
        }
        slices.push((s, e));
        cursor += sweep;
    }

    slices
}

/// Build the SVG path for one annular sector
///
/// `corner_radius` rounds the four slice corners with quadratic curves,
/// clamped so rounding never exceeds half the annulus thickness or half the
/// slice sweep. With `inner_radius` near zero the sector degenerates to a
/// plain wedge.
pub fn sector_path(
    cx: f64,
    cy: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    corner_radius: f64,
) -> String {
    let r_out = outer_radius.max(0.0);
    let r_in = inner_radius.clamp(0.0, r_out);

    // A full-turn arc with coincident endpoints renders as nothing; pull the
    // sweep just under 360 degrees instead
    let mut sweep = end_angle - start_angle;
    if sweep >= 360.0 {
        sweep = 359.99;
    }
    if sweep <= 0.0 || r_out <= 0.0 {
        return String::new();
    }
    let end_angle = start_angle + sweep;
    let large = sweep > 180.0;

    let thickness = r_out - r_in;
    let cr = corner_radius.max(0.0).min(thickness / 2.0);

    // Angular inset equivalent to the corner radius at each rim
    let d_out = if cr > 0.0 {
        (cr / r_out).to_degrees().min(sweep / 2.0)
    } else {
        0.0
    };
    let d_in = if cr > 0.0 && r_in > 1.0 {
        (cr / r_in).to_degrees().min(sweep / 2.0)
    } else {
        0.0
    };

    let wedge = r_in < 0.5;

    if cr <= 0.0 {
        let (ox0, oy0) = polar(cx, cy, r_out, start_angle);
        let (ox1, oy1) = polar(cx, cy, r_out, end_angle);
        let builder = PathBuilder::new()
            .move_to(ox0, oy0)
            .arc_to(r_out, r_out, 0.0, large, true, ox1, oy1);

        return if wedge {
            builder.line_to(cx, cy).close().build()
        } else {
            let (ix1, iy1) = polar(cx, cy, r_in, end_angle);
            let (ix0, iy0) = polar(cx, cy, r_in, start_angle);
            builder
                .line_to(ix1, iy1)
                .arc_to(r_in, r_in, 0.0, large, false, ix0, iy0)
                .close()
                .build()
        };
    }

    // Rounded corners: arc between inset endpoints, quadratic curves through
    // the true corner points onto the radial edges
    let (ox0, oy0) = polar(cx, cy, r_out, start_angle + d_out);
    let (ox1, oy1) = polar(cx, cy, r_out, end_angle - d_out);
    let (c_end_out_x, c_end_out_y) = polar(cx, cy, r_out, end_angle);
    let (e_out_x, e_out_y) = polar(cx, cy, r_out - cr, end_angle);
    let (c_start_out_x, c_start_out_y) = polar(cx, cy, r_out, start_angle);
    let (s_out_x, s_out_y) = polar(cx, cy, r_out - cr, start_angle);

    let builder = PathBuilder::new()
        .move_to(ox0, oy0)
        .arc_to(r_out, r_out, 0.0, large, true, ox1, oy1)
        .quadratic_to(c_end_out_x, c_end_out_y, e_out_x, e_out_y);

    let builder = if wedge {
        builder.line_to(cx, cy)
    } else {
        let (e_in_x, e_in_y) = polar(cx, cy, r_in + cr, end_angle);
        let (c_end_in_x, c_end_in_y) = polar(cx, cy, r_in, end_angle);
        let (ix1, iy1) = polar(cx, cy, r_in, end_angle - d_in);
        let (ix0, iy0) = polar(cx, cy, r_in, start_angle + d_in);
        let (c_start_in_x, c_start_in_y) = polar(cx, cy, r_in, start_angle);
        let (s_in_x, s_in_y) = polar(cx, cy, r_in + cr, start_angle);

        builder
            .line_to(e_in_x, e_in_y)
            .quadratic_to(c_end_in_x, c_end_in_y, ix1, iy1)
            .arc_to(r_in, r_in, 0.0, large, false, ix0, iy0)
            .quadratic_to(c_start_in_x, c_start_in_y, s_in_x, s_in_y)
    };

    builder
        .line_to(s_out_x, s_out_y)
        .quadratic_to(c_start_out_x, c_start_out_y, ox0, oy0)
        .close()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polar_top_is_up() {
        let (x, y) = polar(100.0, 100.0, 50.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_polar_clockwise() {
        // 90 degrees clockwise from the top is due right
        let (x, y) = polar(0.0, 0.0, 1.0, 90.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_layout_proportional() {
        let slices = layout_slices(&[1.0, 3.0], 0.0, 360.0, 0.0);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0], (0.0, 90.0));
        assert_eq!(slices[1], (90.0, 360.0));
    }

    #[test]
    fn test_layout_padding_shrinks_each_slice() {
        let slices = layout_slices(&[1.0, 1.0], 0.0, 360.0, 2.0);
        assert_eq!(slices[0], (1.0, 179.0));
        assert_eq!(slices[1], (181.0, 359.0));
    }

    #[test]
    fn test_layout_partial_sweep() {
        let slices = layout_slices(&[1.0, 1.0], 0.0, 180.0, 0.0);
        assert_eq!(slices[0], (0.0, 90.0));
        assert_eq!(slices[1], (90.0, 180.0));
    }

    #[test]
    fn test_layout_zero_total_yields_nothing() {
        assert!(layout_slices(&[], 0.0, 360.0, 0.0).is_empty());
        assert!(layout_slices(&[0.0, 0.0], 0.0, 360.0, 0.0).is_empty());
    }

    #[test]
    fn test_layout_oversized_padding_collapses() {
        let slices = layout_slices(&[1.0, 1000.0], 0.0, 360.0, 10.0);
        let (s, e) = slices[0];
        assert!(e >= s);
    }

    #[test]
    fn test_sector_path_annular() {
        let path = sector_path(200.0, 200.0, 30.0, 100.0, 0.0, 90.0, 0.0);
        assert!(path.starts_with('M'));
        assert!(path.contains("A100.00,100.00"));
        assert!(path.contains("A30.00,30.00"));
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn test_sector_path_wedge_when_no_hole() {
        let path = sector_path(200.0, 200.0, 0.0, 100.0, 0.0, 90.0, 0.0);
        assert!(path.contains("L200.00,200.00"));
        assert!(!path.contains("A0.00"));
    }

    #[test]
    fn test_sector_path_rounded_uses_quadratics() {
        let path = sector_path(200.0, 200.0, 30.0, 100.0, 0.0, 90.0, 5.0);
        assert!(path.contains('Q'));
    }

    #[test]
    fn test_sector_path_full_turn_still_draws() {
        let path = sector_path(200.0, 200.0, 30.0, 100.0, 0.0, 360.0, 0.0);
        assert!(!path.is_empty());
    }

    #[test]
    fn test_sector_path_zero_sweep_is_empty() {
        assert!(sector_path(200.0, 200.0, 30.0, 100.0, 90.0, 90.0, 0.0).is_empty());
    }
}
