use crate::domain::forecast::ForecastPeriod;

/// Value Object - per-period display policy for the line chart.
///
/// A year window is dense enough that point markers become clutter, so it
/// draws with radius 0 and the widest tick cap. Shorter windows keep the
/// markers and tighter caps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub point_radius: f64,
    pub max_tick_count: usize,
    pub line_width: f64,
}

impl ChartStyle {
    pub fn for_period(period: ForecastPeriod) -> Self {
        match period {
            ForecastPeriod::Year => Self { point_radius: 0.0, max_tick_count: 12, line_width: 2.0 },
            ForecastPeriod::Month => {
                Self { point_radius: 3.0, max_tick_count: 10, line_width: 2.0 }
            }
            ForecastPeriod::Day => Self { point_radius: 3.0, max_tick_count: 7, line_width: 2.0 },
        }
    }

    pub fn draws_points(&self) -> bool {
        self.point_radius > 0.0
    }

    /// Indices of the x-axis labels to draw for a series of `len` points,
    /// at most `max_tick_count` of them, always starting at the first.
    pub fn tick_indices(&self, len: usize) -> Vec<usize> {
        tick_indices(len, self.max_tick_count)
    }
}

pub fn tick_indices(len: usize, cap: usize) -> Vec<usize> {
    if len == 0 || cap == 0 {
        return Vec::new();
    }
    let step = len.div_ceil(cap);
    (0..len).step_by(step).collect()
}
