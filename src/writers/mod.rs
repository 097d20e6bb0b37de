pub mod csv_reporter;

pub use csv_reporter::CsvReporter;
