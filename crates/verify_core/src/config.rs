//! Sweep settings for the two benchmark layouts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::matrix::RowPolicy;

/// Matrix sizes every benchmark run is expected to cover.
pub const DEFAULT_SIZES: [usize; 8] = [100, 200, 300, 400, 500, 1000, 1500, 2000];

/// Thread counts swept by the multi-threaded benchmark.
pub const DEFAULT_THREAD_COUNTS: [usize; 7] = [2, 4, 6, 8, 10, 12, 14];

/// How benchmark output directories are named under the base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirLayout {
    /// `<size>/`
    BySize,
    /// `<size>_threads_<threads>/`
    ByThreads,
}

impl DirLayout {
    pub fn dir_name(self, size: usize, threads: Option<usize>) -> String {
        match (self, threads) {
            (DirLayout::ByThreads, Some(threads)) => format!("{size}_threads_{threads}"),
            _ => size.to_string(),
        }
    }
}

/// Grid and output locations for one sweep variant.
///
/// Output paths are relative to the process working directory; only the
/// benchmark directories are resolved against the base directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepConfig {
    pub layout: DirLayout,
    pub sizes: Vec<usize>,
    /// Empty for the size-only layout.
    pub thread_counts: Vec<usize>,
    pub row_policy: RowPolicy,
    pub report_file: PathBuf,
    pub timing_file: PathBuf,
    pub plot_file: PathBuf,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::sizes()
    }
}

impl SweepConfig {
    /// Single-threaded benchmark: one directory per size, strict reader.
    pub fn sizes() -> Self {
        Self {
            layout: DirLayout::BySize,
            sizes: DEFAULT_SIZES.to_vec(),
            thread_counts: Vec::new(),
            row_policy: RowPolicy::Strict,
            report_file: PathBuf::from("verification_report.txt"),
            timing_file: PathBuf::from("timings.txt"),
            plot_file: PathBuf::from("multiplication_time_plot.png"),
        }
    }

    /// OpenMP benchmark: one directory per (size, threads) pair, lenient reader.
    pub fn threads() -> Self {
        Self {
            layout: DirLayout::ByThreads,
            sizes: DEFAULT_SIZES.to_vec(),
            thread_counts: DEFAULT_THREAD_COUNTS.to_vec(),
            row_policy: RowPolicy::Lenient,
            report_file: PathBuf::from("verification_report.txt"),
            timing_file: PathBuf::from("timings.txt"),
            plot_file: PathBuf::from("openmp_timings_plot.png"),
        }
    }

    /// Location of the JSON sidecar written next to the text report.
    pub fn report_json_file(&self) -> PathBuf {
        self.report_file.with_extension("json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_name_directories() {
        assert_eq!(DirLayout::BySize.dir_name(1500, None), "1500");
        assert_eq!(DirLayout::ByThreads.dir_name(200, Some(6)), "200_threads_6");
    }

    #[test]
    fn presets_match_benchmark_grids() {
        let sizes = SweepConfig::default();
        assert_eq!(sizes.layout, DirLayout::BySize);
        assert!(sizes.thread_counts.is_empty());
        assert_eq!(sizes.row_policy, RowPolicy::Strict);

        let threads = SweepConfig::threads();
        assert_eq!(threads.thread_counts, DEFAULT_THREAD_COUNTS);
        assert_eq!(threads.sizes.len() * threads.thread_counts.len(), 56);
        assert_eq!(threads.row_policy, RowPolicy::Lenient);
        assert_eq!(
            threads.report_json_file(),
            PathBuf::from("verification_report.json")
        );
    }
}
