use rayon::prelude::*;
use tracing::{info, warn};

use crate::cli::args::Cli;
use crate::error::{ProcessingError, Result};
use crate::models::AnnualSeries;
use crate::processors::{AnomalyPipeline, PipelineConfig};
use crate::utils::constants::{BASELINE_YEAR_COUNT, MAX_FILTER_WIDTH};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvReporter;

pub fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;

    info!("smoothing filter length = {} years", config.filter_width);
    info!("will crunch {} temperature file(s)", cli.files.len());

    rayon::ThreadPoolBuilder::new()
        .num_threads(cli.max_workers)
        .build()
        .map_err(|e| ProcessingError::Config(format!("Thread pool setup failed: {}", e)))?
        .install(|| {
            let progress = ProgressReporter::new(
                cli.files.len() as u64,
                "Processing temperature files...",
                cli.quiet,
            );

            // Each source runs its pipeline independently; the report is
            // the single join point. One failed source fails the run.
            let pipeline = AnomalyPipeline::new(config);
            let series: Vec<AnnualSeries> = cli
                .files
                .par_iter()
                .map(|path| {
                    let result = pipeline.process_file(path);
                    progress.increment(1);
                    result
                })
                .collect::<Result<_>>()?;

            progress.finish_with_message("Processing complete");

            let reporter = CsvReporter::new();
            reporter.write_report(&series, std::io::stdout().lock())
        })
}

/// Clamp the tunables into their supported ranges, warning when a value
/// had to move.
fn build_config(cli: &Cli) -> Result<PipelineConfig> {
    let filter_width = cli.filter_width.clamp(1, MAX_FILTER_WIDTH);
    if filter_width != cli.filter_width {
        warn!(
            "filter width {} out of range, clamped to {}",
            cli.filter_width, filter_width
        );
    }

    let min_baseline_samples = cli.min_baseline_samples.clamp(1, BASELINE_YEAR_COUNT);
    if min_baseline_samples != cli.min_baseline_samples {
        warn!(
            "minimum baseline sample count {} out of range, clamped to {}",
            cli.min_baseline_samples, min_baseline_samples
        );
    }

    Ok(PipelineConfig {
        filter_width,
        min_baseline_samples,
        merge_mode: cli.merge_mode,
    })
}
