use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{MonthSlots, StationYearRecord, TemperatureDataset, MONTHS_PER_YEAR};
use crate::utils::constants::{
    COUNTRY_OFFSET, COUNTRY_WIDTH, DEFAULT_BUFFER_SIZE, GHCN_MISSING, MIN_GISS_YEAR,
    MMAP_THRESHOLD_BYTES, STATION_OFFSET, STATION_WIDTH, TEMPS_OFFSET, TEMP_FIELD_WIDTH,
    YEAR_OFFSET, YEAR_WIDTH,
};

/// Reader for GHCN v2 monthly mean files (`v2.mean`, `v2.mean_adj`, ...).
///
/// Each line is fixed-width: 3-char country code, 5-char WMO station
/// number, 3-char modifier and 1-char duplicate (both skipped), 4-char
/// year, then twelve 5-char temperatures in tenths of a degree Celsius
/// with -9999 marking a missing month.
pub struct GhcnReader {
    min_year: i32,
    use_mmap: bool,
}

impl GhcnReader {
    pub fn new() -> Self {
        Self {
            min_year: MIN_GISS_YEAR,
            use_mmap: false,
        }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self {
            min_year: MIN_GISS_YEAR,
            use_mmap,
        }
    }

    /// Auto-select the mmap path for files past the size threshold.
    pub fn for_file(path: &Path) -> Result<Self> {
        let large = std::fs::metadata(path)?.len() >= MMAP_THRESHOLD_BYTES;
        Ok(Self::with_mmap(large))
    }

    /// Read a whole source file into a dataset. Open or read failure is
    /// fatal; individual malformed temperature fields degrade to missing.
    pub fn read_dataset(&self, path: &Path) -> Result<TemperatureDataset> {
        let dataset = if self.use_mmap {
            self.read_dataset_mmap(path)?
        } else {
            self.read_dataset_buffered(path)?
        };

        debug!(
            stations = dataset.station_count(),
            station_years = dataset.record_count(),
            "loaded {}",
            path.display()
        );

        Ok(dataset)
    }

    fn read_dataset_buffered(&self, path: &Path) -> Result<TemperatureDataset> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut dataset = TemperatureDataset::new();

        for line_result in reader.lines() {
            let line = line_result?;
            if let Some(record) = self.parse_line(&line) {
                dataset.insert(record);
            }
        }

        Ok(dataset)
    }

    /// Memory-mapped read path for large archive files.
    fn read_dataset_mmap(&self, path: &Path) -> Result<TemperatureDataset> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let content = std::str::from_utf8(&mmap)
            .map_err(|e| ProcessingError::InvalidFormat(format!("Invalid UTF-8: {}", e)))?;

        let mut dataset = TemperatureDataset::new();
        for line in content.lines() {
            if let Some(record) = self.parse_line(line) {
                dataset.insert(record);
            }
        }

        Ok(dataset)
    }

    /// Parse one fixed-width line. Returns `None` for lines that carry no
    /// usable record: too short, unparseable station or year, or a year
    /// before the supported floor.
    fn parse_line(&self, line: &str) -> Option<StationYearRecord> {
        if line.len() < TEMPS_OFFSET {
            return None;
        }

        // Country code is parsed for shape only; station identity follows
        // the WMO number, as GISS does.
        let country = line.get(COUNTRY_OFFSET..COUNTRY_OFFSET + COUNTRY_WIDTH)?;
        country.trim().parse::<u32>().ok()?;

        let station_id = line
            .get(STATION_OFFSET..STATION_OFFSET + STATION_WIDTH)?
            .trim()
            .parse::<u32>()
            .ok()?;

        let year = line
            .get(YEAR_OFFSET..YEAR_OFFSET + YEAR_WIDTH)?
            .trim()
            .parse::<i32>()
            .ok()?;

        if year < self.min_year {
            return None;
        }

        let mut temperatures: MonthSlots = [None; MONTHS_PER_YEAR];
        let temps = line.get(TEMPS_OFFSET..).unwrap_or("");

        for (month, slot) in temperatures.iter_mut().enumerate() {
            let start = month * TEMP_FIELD_WIDTH;
            if start >= temps.len() {
                break; // short line, remaining months stay missing
            }
            let end = (start + TEMP_FIELD_WIDTH).min(temps.len());
            *slot = temps.get(start..end).and_then(parse_temperature_field);
        }

        Some(StationYearRecord::new(station_id, year, temperatures))
    }
}

impl Default for GhcnReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 5-char temperature field in tenths of a degree. Malformed or
/// sentinel fields are missing, not errors.
fn parse_temperature_field(field: &str) -> Option<f32> {
    let tenths = field.trim().parse::<i32>().ok()?;
    if tenths <= GHCN_MISSING {
        return None;
    }
    Some(tenths as f32 / 10.0)
}
