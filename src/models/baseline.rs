use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::observation::MONTHS_PER_YEAR;

/// Climatological baseline for one station/month: the mean of the valid
/// observations inside the reference period and how many there were.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub mean: f32,
    pub sample_count: u32,
}

/// Per-station, per-month baseline records. A station absent from the
/// table, or a `None` month slot, means no valid reference-period data
/// exists and the station/month never qualifies for anomaly aggregation.
#[derive(Debug, Clone, Default)]
pub struct BaselineTable {
    entries: BTreeMap<u32, [Option<Baseline>; MONTHS_PER_YEAR]>,
}

impl BaselineTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, station_id: u32, month: usize, baseline: Baseline) {
        debug_assert!(month < MONTHS_PER_YEAR);
        self.entries.entry(station_id).or_insert([None; MONTHS_PER_YEAR])[month] = Some(baseline);
    }

    /// `month` is 0-based. Returns `None` when the station/month has no
    /// baseline, never a default record.
    pub fn get(&self, station_id: u32, month: usize) -> Option<Baseline> {
        debug_assert!(month < MONTHS_PER_YEAR);
        self.entries.get(&station_id)?.get(month).copied().flatten()
    }

    pub fn station_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_station_has_no_baseline() {
        let table = BaselineTable::new();
        assert_eq!(table.get(42, 0), None);
    }

    #[test]
    fn test_insert_and_get() {
        let mut table = BaselineTable::new();
        table.insert(
            42,
            3,
            Baseline {
                mean: 12.5,
                sample_count: 28,
            },
        );

        let baseline = table.get(42, 3).unwrap();
        assert_eq!(baseline.mean, 12.5);
        assert_eq!(baseline.sample_count, 28);
        assert_eq!(table.get(42, 4), None);
    }
}
