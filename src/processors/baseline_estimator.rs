use std::collections::BTreeMap;

use crate::models::{Baseline, BaselineTable, TemperatureDataset, MONTHS_PER_YEAR};
use crate::utils::constants::{FIRST_BASELINE_YEAR, LAST_BASELINE_YEAR};

/// Computes per-station, per-month climatological baselines over the
/// reference period. Stations with no valid reference-period samples get
/// no table entry at all.
pub struct BaselineEstimator {
    first_year: i32,
    last_year: i32,
}

impl BaselineEstimator {
    pub fn new() -> Self {
        Self {
            first_year: FIRST_BASELINE_YEAR,
            last_year: LAST_BASELINE_YEAR,
        }
    }

    pub fn with_period(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year,
        }
    }

    pub fn reference_year_count(&self) -> u32 {
        (self.last_year - self.first_year + 1).max(0) as u32
    }

    pub fn compute(&self, dataset: &TemperatureDataset) -> BaselineTable {
        let mut sums: BTreeMap<u32, [(f64, u32); MONTHS_PER_YEAR]> = BTreeMap::new();

        for (station_id, years) in dataset.stations() {
            // The station's years are sparse; range over the reference
            // window rather than probing year by year.
            for (_, months) in years.range(self.first_year..=self.last_year) {
                let acc = sums
                    .entry(station_id)
                    .or_insert([(0.0, 0); MONTHS_PER_YEAR]);
                for (month, slot) in months.iter().enumerate() {
                    if let Some(temp) = slot {
                        acc[month].0 += f64::from(*temp);
                        acc[month].1 += 1;
                    }
                }
            }
        }

        let mut table = BaselineTable::new();
        for (station_id, months) in sums {
            for (month, &(sum, count)) in months.iter().enumerate() {
                if count >= 1 {
                    table.insert(
                        station_id,
                        month,
                        Baseline {
                            mean: (sum / f64::from(count)) as f32,
                            sample_count: count,
                        },
                    );
                }
            }
        }

        table
    }
}

impl Default for BaselineEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MonthSlots, StationYearRecord};

    fn full_year(station: u32, year: i32, value: f32) -> StationYearRecord {
        StationYearRecord::new(station, year, [Some(value); MONTHS_PER_YEAR])
    }

    #[test]
    fn test_constant_reference_record() {
        // 30 reference years of exactly 5.0 every month.
        let mut dataset = TemperatureDataset::new();
        for year in 1951..=1980 {
            dataset.insert(full_year(1, year, 5.0));
        }

        let table = BaselineEstimator::new().compute(&dataset);
        for month in 0..MONTHS_PER_YEAR {
            let baseline = table.get(1, month).unwrap();
            assert_eq!(baseline.sample_count, 30);
            assert!((baseline.mean - 5.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sample_count_bounded_by_reference_years() {
        let mut dataset = TemperatureDataset::new();
        // Data well past both ends of the reference window.
        for year in 1940..=2000 {
            dataset.insert(full_year(1, year, 10.0));
        }

        let table = BaselineEstimator::new().compute(&dataset);
        let baseline = table.get(1, 0).unwrap();
        assert_eq!(baseline.sample_count, 30);
    }

    #[test]
    fn test_mean_within_observed_bounds() {
        let mut dataset = TemperatureDataset::new();
        dataset.insert(full_year(1, 1951, 3.0));
        dataset.insert(full_year(1, 1952, 7.0));
        dataset.insert(full_year(1, 1953, 5.0));

        let table = BaselineEstimator::new().compute(&dataset);
        let baseline = table.get(1, 6).unwrap();
        assert_eq!(baseline.sample_count, 3);
        assert!(baseline.mean >= 3.0 && baseline.mean <= 7.0);
        assert!((baseline.mean - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_sample_participates() {
        let mut dataset = TemperatureDataset::new();
        let mut slots: MonthSlots = [None; MONTHS_PER_YEAR];
        slots[0] = Some(2.5);
        dataset.insert(StationYearRecord::new(1, 1960, slots));

        let table = BaselineEstimator::new().compute(&dataset);
        let baseline = table.get(1, 0).unwrap();
        assert_eq!(baseline.sample_count, 1);
        assert_eq!(baseline.mean, 2.5);
        assert_eq!(table.get(1, 1), None);
    }

    #[test]
    fn test_station_outside_reference_period_has_no_entry() {
        let mut dataset = TemperatureDataset::new();
        for year in 1990..=2000 {
            dataset.insert(full_year(7, year, 12.0));
        }

        let table = BaselineEstimator::new().compute(&dataset);
        assert_eq!(table.get(7, 0), None);
        assert!(table.is_empty());
    }
}
