/// First year of usable GHCN coverage; NASA/GISS does not compute
/// anomalies for earlier years.
pub const MIN_GISS_YEAR: i32 = 1880;

/// NASA/GISS climatological baseline period (inclusive).
pub const FIRST_BASELINE_YEAR: i32 = 1951;
pub const LAST_BASELINE_YEAR: i32 = 1980;

/// Number of years in the baseline period.
pub const BASELINE_YEAR_COUNT: u32 = (LAST_BASELINE_YEAR - FIRST_BASELINE_YEAR + 1) as u32;

/// Minimum valid baseline samples for a station/month to qualify.
pub const DEFAULT_MIN_BASELINE_SAMPLES: u32 = 15;

/// Moving-average smoothing filter defaults (years).
pub const DEFAULT_FILTER_WIDTH: usize = 5;
pub const MAX_FILTER_WIDTH: usize = 20;

/// Missing temperature sentinel used in GHCN v2 files.
pub const GHCN_MISSING: i32 = -9999;

/// GHCN v2 fixed-width line offsets.
pub const COUNTRY_OFFSET: usize = 0;
pub const COUNTRY_WIDTH: usize = 3;
pub const STATION_OFFSET: usize = 3;
pub const STATION_WIDTH: usize = 5;
pub const YEAR_OFFSET: usize = 12;
pub const YEAR_WIDTH: usize = 4;
pub const TEMPS_OFFSET: usize = 16;
pub const TEMP_FIELD_WIDTH: usize = 5;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
pub const MMAP_THRESHOLD_BYTES: u64 = 8 * 1024 * 1024; // 8MB
