pub mod anomaly;
pub mod baseline;
pub mod dataset;
pub mod observation;

pub use anomaly::{AnnualSeries, MonthlyAnomalies};
pub use baseline::{Baseline, BaselineTable};
pub use dataset::TemperatureDataset;
pub use observation::{MonthSlots, StationYearRecord, MONTHS_PER_YEAR};
