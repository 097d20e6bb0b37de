use clap::Parser;
use std::path::PathBuf;

use crate::processors::MergeMode;
use crate::utils::constants::{DEFAULT_FILTER_WIDTH, DEFAULT_MIN_BASELINE_SAMPLES};

#[derive(Parser)]
#[command(name = "ghcn-anomaly")]
#[command(about = "NASA/GISS-style global temperature anomaly calculator for GHCN v2 archives")]
#[command(version)]
pub struct Cli {
    #[arg(
        short = 'A',
        long = "filter-width",
        default_value_t = DEFAULT_FILTER_WIDTH,
        help = "Moving-average smoothing filter length in years (odd, max 20)"
    )]
    pub filter_width: usize,

    #[arg(
        short = 'B',
        long = "min-baseline-samples",
        default_value_t = DEFAULT_MIN_BASELINE_SAMPLES,
        help = "Minimum valid 1951-1980 samples for a station/month to qualify"
    )]
    pub min_baseline_samples: u32,

    #[arg(
        long,
        value_enum,
        default_value = "average",
        help = "How each year's 12 monthly anomalies merge into one annual value"
    )]
    pub merge_mode: MergeMode,

    #[arg(long, default_value_t = num_cpus::get(), help = "Worker threads for processing sources")]
    pub max_workers: usize,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, help = "Suppress the progress bar")]
    pub quiet: bool,

    #[arg(required = true, help = "GHCN v2 temperature files (v2.mean, v2.mean_adj, ...)")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_at_least_one_file() {
        assert!(Cli::try_parse_from(["ghcn-anomaly"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["ghcn-anomaly", "v2.mean"]).unwrap();
        assert_eq!(cli.filter_width, 5);
        assert_eq!(cli.min_baseline_samples, 15);
        assert_eq!(cli.merge_mode, MergeMode::Average);
        assert_eq!(cli.files.len(), 1);
    }

    #[test]
    fn test_short_options() {
        let cli =
            Cli::try_parse_from(["ghcn-anomaly", "-A", "11", "-B", "20", "v2.mean", "v2.mean_adj"])
                .unwrap();
        assert_eq!(cli.filter_width, 11);
        assert_eq!(cli.min_baseline_samples, 20);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn test_malformed_option_rejected() {
        assert!(Cli::try_parse_from(["ghcn-anomaly", "-A", "lots", "v2.mean"]).is_err());
        assert!(Cli::try_parse_from(["ghcn-anomaly", "--merge-mode", "median", "v2.mean"]).is_err());
    }
}
