use tracing::warn;

use crate::models::AnnualSeries;

/// Centered moving-average filter over an annual anomaly series.
///
/// The window width must be odd; an even width is bumped up by one with a
/// warning. Width 1 is an identity copy. The output is shorter than the
/// input by `width - 1` entries, each output keyed by the year at the
/// center of its window.
pub struct MovingAverageSmoother {
    width: usize,
}

impl MovingAverageSmoother {
    pub fn new(width: usize) -> Self {
        let width = width.max(1);
        let width = if width % 2 == 0 {
            warn!(
                "moving average filter length must be odd, incremented to {}",
                width + 1
            );
            width + 1
        } else {
            width
        };
        Self { width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn smooth(&self, series: &AnnualSeries) -> AnnualSeries {
        if self.width == 1 {
            return series.clone();
        }

        let items: Vec<(i32, f64)> = series.iter().map(|(&year, &value)| (year, value)).collect();
        if items.len() < self.width {
            // Not even one full window; empty output, not an error.
            return AnnualSeries::new();
        }

        if let Some(gap) = first_year_gap(&items) {
            // The running sum spans the gap as if the years were adjacent,
            // matching how the series is keyed; the window centers are
            // still exact year keys.
            warn!(
                "annual series is missing year {}; smoothing windows span the gap",
                gap
            );
        }

        let half = self.width / 2;
        let width_f = self.width as f64;
        let mut smoothed = AnnualSeries::new();

        // First full window is summed directly; every later output is the
        // previous average plus (leading - trailing) / width.
        let mut avg: f64 = items[..self.width].iter().map(|&(_, v)| v).sum::<f64>() / width_f;
        smoothed.insert(items[half].0, avg);

        let mut leading = self.width;
        let mut trailing = 0;
        let mut center = half + 1;

        while leading < items.len() {
            avg += (items[leading].1 - items[trailing].1) / width_f;
            smoothed.insert(items[center].0, avg);
            leading += 1;
            trailing += 1;
            center += 1;
        }

        smoothed
    }
}

/// First year missing from an otherwise consecutive run, if any.
fn first_year_gap(items: &[(i32, f64)]) -> Option<i32> {
    items
        .windows(2)
        .find(|pair| pair[1].0 != pair[0].0 + 1)
        .map(|pair| pair[0].0 + 1)
}
