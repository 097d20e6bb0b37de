use std::collections::BTreeMap;

use crate::models::observation::{MonthSlots, StationYearRecord, MONTHS_PER_YEAR};

/// Sparse station → year → month temperature store.
///
/// Ordered maps at both levels so enumeration is always ascending by
/// station and year; the smoother and the reporter depend on ascending
/// year order. Built once during ingestion, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TemperatureDataset {
    stations: BTreeMap<u32, BTreeMap<i32, MonthSlots>>,
}

impl TemperatureDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a station-year. A later record for the same station/year
    /// replaces the earlier one, matching GHCN duplicate-line semantics.
    pub fn insert(&mut self, record: StationYearRecord) {
        self.stations
            .entry(record.station_id)
            .or_default()
            .insert(record.year, record.temperatures);
    }

    /// Lookup a single monthly value. `month` is 0-based (0 = January).
    pub fn get(&self, station_id: u32, year: i32, month: usize) -> Option<f32> {
        debug_assert!(month < MONTHS_PER_YEAR);
        self.stations
            .get(&station_id)?
            .get(&year)?
            .get(month)
            .copied()
            .flatten()
    }

    /// Enumerate stations in ascending id order.
    pub fn stations(&self) -> impl Iterator<Item = (u32, &BTreeMap<i32, MonthSlots>)> {
        self.stations.iter().map(|(&id, years)| (id, years))
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Total number of station-year rows held.
    pub fn record_count(&self) -> usize {
        self.stations.values().map(|years| years.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots_with(month: usize, value: f32) -> MonthSlots {
        let mut slots: MonthSlots = [None; MONTHS_PER_YEAR];
        slots[month] = Some(value);
        slots
    }

    #[test]
    fn test_insert_and_get() {
        let mut dataset = TemperatureDataset::new();
        dataset.insert(StationYearRecord::new(12345, 1960, slots_with(0, 4.5)));

        assert_eq!(dataset.get(12345, 1960, 0), Some(4.5));
        assert_eq!(dataset.get(12345, 1960, 1), None);
        assert_eq!(dataset.get(12345, 1961, 0), None);
        assert_eq!(dataset.get(99999, 1960, 0), None);
    }

    #[test]
    fn test_duplicate_year_overwrites() {
        let mut dataset = TemperatureDataset::new();
        dataset.insert(StationYearRecord::new(1, 1960, slots_with(0, 1.0)));
        dataset.insert(StationYearRecord::new(1, 1960, slots_with(0, 2.0)));

        assert_eq!(dataset.get(1, 1960, 0), Some(2.0));
        assert_eq!(dataset.record_count(), 1);
    }

    #[test]
    fn test_ascending_iteration() {
        let mut dataset = TemperatureDataset::new();
        dataset.insert(StationYearRecord::new(30, 1990, slots_with(0, 1.0)));
        dataset.insert(StationYearRecord::new(10, 1950, slots_with(0, 1.0)));
        dataset.insert(StationYearRecord::new(20, 1970, slots_with(0, 1.0)));

        let ids: Vec<u32> = dataset.stations().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
