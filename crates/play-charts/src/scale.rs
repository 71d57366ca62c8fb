//! Linear and band scales for bar chart layout

/// Linear scale mapping a value domain onto a pixel range
#[derive(Debug, Clone)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }

    /// Generate "nice" tick values (rounded to clean numbers)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let range = max - min;

        if range == 0.0 || count == 0 {
            return vec![min];
        }

        let rough_step = range / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let nice_min = (min / nice_step).floor() * nice_step;
        let nice_max = (max / nice_step).ceil() * nice_step;

        let mut ticks = Vec::new();
        let mut tick = nice_min;

        while tick <= nice_max + nice_step * 0.5 {
            if tick >= min && tick <= max {
                ticks.push(tick);
            }
            tick += nice_step;
        }

        ticks
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

/// Band scale for category positions (one band per bar)
#[derive(Debug, Clone)]
pub struct BandScale {
    domain_count: usize,
    range: (f64, f64),
}

impl BandScale {
    pub fn new(count: usize) -> Self {
        Self {
            domain_count: count,
            range: (0.0, 1.0),
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Step size (band plus gap)
    pub fn step(&self) -> f64 {
        if self.domain_count == 0 {
            return 0.0;
        }

        let (r_min, r_max) = self.range;
        (r_max - r_min) / self.domain_count as f64
    }

    /// Center position for index
    pub fn scale_center(&self, index: usize) -> f64 {
        let (r_min, _) = self.range;
        r_min + (index as f64 + 0.5) * self.step()
    }
}

/// Format a value for axis tick labels
pub fn format_tick(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 500.0);
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // SVG y grows downward, so value axes use an inverted range
        let scale = LinearScale::new().domain(0.0, 10.0).range(330.0, 0.0);
        assert_eq!(scale.scale(0.0), 330.0);
        assert_eq!(scale.scale(10.0), 0.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new().domain(5.0, 5.0).range(0.0, 100.0);
        assert_eq!(scale.scale(5.0), 50.0);
    }

    #[test]
    fn test_nice_ticks_are_clean() {
        let scale = LinearScale::new().domain(0.0, 100.0).range(0.0, 1.0);
        let ticks = scale.nice_ticks(5);
        assert!(!ticks.is_empty());
        for tick in &ticks {
            assert!(tick.fract() == 0.0);
        }
    }

    #[test]
    fn test_band_scale_centers() {
        let scale = BandScale::new(4).range(0.0, 400.0);
        assert_eq!(scale.step(), 100.0);
        assert_eq!(scale.scale_center(0), 50.0);
        assert_eq!(scale.scale_center(3), 350.0);
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::new(0).range(0.0, 400.0);
        assert_eq!(scale.step(), 0.0);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(1_500_000.0), "1.5M");
        assert_eq!(format_tick(2_500.0), "2.5K");
        assert_eq!(format_tick(42.0), "42");
        assert_eq!(format_tick(-5.0), "-5");
        assert_eq!(format_tick(0.25), "0.2");
    }
}
