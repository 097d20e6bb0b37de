use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::AnnualSeries;
use crate::processors::{
    AnnualMerger, AnomalyAggregator, BaselineEstimator, MergeMode, MovingAverageSmoother,
};
use crate::readers::GhcnReader;
use crate::utils::constants::{DEFAULT_FILTER_WIDTH, DEFAULT_MIN_BASELINE_SAMPLES};

/// Per-run tunables, passed explicitly into every stage. There is no
/// process-global configuration.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    pub filter_width: usize,
    pub min_baseline_samples: u32,
    pub merge_mode: MergeMode,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            filter_width: DEFAULT_FILTER_WIDTH,
            min_baseline_samples: DEFAULT_MIN_BASELINE_SAMPLES,
            merge_mode: MergeMode::Average,
        }
    }
}

/// End-to-end driver for one input source: ingest, baseline, aggregate,
/// merge, smooth. Each source owns its dataset and derived maps, so
/// sources can run on separate threads with no shared state.
pub struct AnomalyPipeline {
    config: PipelineConfig,
}

impl AnomalyPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn process_file(&self, path: &Path) -> Result<AnnualSeries> {
        info!("reading temperature data from {}", path.display());
        let reader = GhcnReader::for_file(path)?;
        let dataset = reader.read_dataset(path)?;

        info!("computing baseline temperatures for {}", path.display());
        let baselines = BaselineEstimator::new().compute(&dataset);

        info!("computing global average anomalies for {}", path.display());
        let monthly = AnomalyAggregator::with_min_baseline_samples(self.config.min_baseline_samples)
            .compute(&dataset, &baselines);

        let annual = AnnualMerger::new(self.config.merge_mode).merge(&monthly);

        info!(
            "computing {}-year moving averages for {}",
            self.config.filter_width,
            path.display()
        );
        let smoothed = MovingAverageSmoother::new(self.config.filter_width).smooth(&annual);

        Ok(smoothed)
    }
}
