use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: usize = 12;

/// One calendar year of monthly temperatures for a station, in degrees
/// Celsius. A slot is `None` where the source file had no usable reading;
/// a year always carries exactly 12 slots.
pub type MonthSlots = [Option<f32>; MONTHS_PER_YEAR];

/// One parsed GHCN v2 data line: a station-year with its 12 monthly slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationYearRecord {
    pub station_id: u32,
    pub year: i32,
    pub temperatures: MonthSlots,
}

impl StationYearRecord {
    pub fn new(station_id: u32, year: i32, temperatures: MonthSlots) -> Self {
        Self {
            station_id,
            year,
            temperatures,
        }
    }

    /// Number of months with a usable reading.
    pub fn valid_months(&self) -> usize {
        self.temperatures.iter().filter(|t| t.is_some()).count()
    }
}
