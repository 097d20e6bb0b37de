use std::collections::BTreeMap;

use crate::models::{BaselineTable, MonthlyAnomalies, TemperatureDataset, MONTHS_PER_YEAR};
use crate::utils::constants::DEFAULT_MIN_BASELINE_SAMPLES;

/// Folds per-station anomalies (observation minus station/month baseline)
/// into global per-year/month means. A station/month only contributes when
/// its baseline was built from at least `min_baseline_samples` reference
/// observations.
pub struct AnomalyAggregator {
    min_baseline_samples: u32,
}

impl AnomalyAggregator {
    pub fn new() -> Self {
        Self {
            min_baseline_samples: DEFAULT_MIN_BASELINE_SAMPLES,
        }
    }

    pub fn with_min_baseline_samples(min_baseline_samples: u32) -> Self {
        Self {
            min_baseline_samples,
        }
    }

    pub fn compute(
        &self,
        dataset: &TemperatureDataset,
        baselines: &BaselineTable,
    ) -> MonthlyAnomalies {
        // Running (sum, contributing-station count) per year/month.
        let mut accumulator: BTreeMap<i32, [(f64, u32); MONTHS_PER_YEAR]> = BTreeMap::new();

        for (station_id, years) in dataset.stations() {
            for (&year, months) in years.iter() {
                // Year rows are created eagerly so that a year whose
                // stations all fail qualification still shows up as
                // all-missing, and falls out at the merge stage.
                let acc = accumulator.entry(year).or_insert([(0.0, 0); MONTHS_PER_YEAR]);

                for (month, slot) in months.iter().enumerate() {
                    let Some(observation) = slot else {
                        continue;
                    };
                    let Some(baseline) = baselines.get(station_id, month) else {
                        continue;
                    };
                    if baseline.sample_count < self.min_baseline_samples {
                        continue;
                    }

                    acc[month].0 += f64::from(observation - baseline.mean);
                    acc[month].1 += 1;
                }
            }
        }

        let mut anomalies = MonthlyAnomalies::new();
        for (year, months) in accumulator {
            let mut row = [None; MONTHS_PER_YEAR];
            for (month, &(sum, count)) in months.iter().enumerate() {
                if count >= 1 {
                    row[month] = Some(sum / f64::from(count));
                }
            }
            anomalies.insert(year, row);
        }

        anomalies
    }
}

impl Default for AnomalyAggregator {
    fn default() -> Self {
        Self::new()
    }
}
