use std::io::Write;

use crate::error::Result;
use crate::models::AnnualSeries;

/// Writes the aligned multi-source report: one row per year of the first
/// series, one column per source, blank where a source has no value for
/// that year.
pub struct CsvReporter;

impl CsvReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn write_report<W: Write>(&self, series: &[AnnualSeries], out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);

        let Some(first) = series.first() else {
            return Ok(()); // nothing processed, nothing to report
        };

        // Year order follows the first series, ascending; the remaining
        // series align to it or leave the field blank.
        for (&year, &value) in first.iter() {
            let mut row = Vec::with_capacity(series.len() + 1);
            row.push(year.to_string());
            row.push(format_value(value));

            for other in &series[1..] {
                row.push(other.get(&year).map(|&v| format_value(v)).unwrap_or_default());
            }

            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn format_value(value: f64) -> String {
    format!("{:.4}", value)
}
