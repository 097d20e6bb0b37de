use std::collections::BTreeMap;

use crate::models::observation::MONTHS_PER_YEAR;

/// Global mean anomaly per year/month. A `None` slot means no station
/// contributed for that year/month and the merge stage must skip it.
pub type MonthlyAnomalies = BTreeMap<i32, [Option<f64>; MONTHS_PER_YEAR]>;

/// One value per year, ordered ascending: annual global anomalies and
/// their smoothed counterpart.
pub type AnnualSeries = BTreeMap<i32, f64>;
