use clap::ValueEnum;

use crate::models::{AnnualSeries, MonthlyAnomalies};

/// How a year's 12 monthly global anomalies collapse into one annual
/// value. Fixed for a whole run; chosen before processing starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MergeMode {
    Average,
    Max,
    Min,
}

/// Reduces monthly global anomalies to an annual series. All three modes
/// reduce over non-missing months only; a year with no valid month
/// produces no entry.
pub struct AnnualMerger {
    mode: MergeMode,
}

impl AnnualMerger {
    pub fn new(mode: MergeMode) -> Self {
        Self { mode }
    }

    pub fn merge(&self, monthly: &MonthlyAnomalies) -> AnnualSeries {
        let mut annual = AnnualSeries::new();

        for (&year, months) in monthly.iter() {
            let valid = months.iter().flatten().copied();

            let merged = match self.mode {
                MergeMode::Average => {
                    let mut sum = 0.0;
                    let mut count = 0u32;
                    for value in valid {
                        sum += value;
                        count += 1;
                    }
                    (count >= 1).then(|| sum / f64::from(count))
                }
                MergeMode::Max => valid.reduce(f64::max),
                MergeMode::Min => valid.reduce(f64::min),
            };

            if let Some(value) = merged {
                annual.insert(year, value);
            }
        }

        annual
    }
}
