pub mod annual_merger;
pub mod anomaly_aggregator;
pub mod baseline_estimator;
pub mod pipeline;
pub mod smoother;

pub use annual_merger::{AnnualMerger, MergeMode};
pub use anomaly_aggregator::AnomalyAggregator;
pub use baseline_estimator::BaselineEstimator;
pub use pipeline::{AnomalyPipeline, PipelineConfig};
pub use smoother::MovingAverageSmoother;
