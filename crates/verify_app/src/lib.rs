//! Shared glue for the `verify_sizes` and `verify_threads` binaries.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::info;
use verify_core::{
    report::{write_json_report, write_report},
    sweep, DirLayout, SweepConfig,
};
use verify_plot::{plot_size_timings, plot_thread_timings, PlotOutcome};

/// Optional single positional argument: the base directory to scan.
pub fn base_dir_from_args<I>(args: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let base_dir = args.next().map_or_else(|| PathBuf::from("."), PathBuf::from);
    if let Some(extra) = args.next() {
        bail!("unexpected argument: {extra} (usage: <base_dir>)");
    }
    Ok(base_dir)
}

/// Sweeps `base_dir`, writes the report, then plots the timing log.
pub fn run(base_dir: PathBuf, config: &SweepConfig) -> Result<()> {
    info!(base = %base_dir.display(), "starting verification");
    let results = sweep(&base_dir, config);

    write_report(&config.report_file, &results)
        .with_context(|| format!("failed to save {}", config.report_file.display()))?;
    write_json_report(config.report_json_file(), &results)?;
    info!(
        "Verification done. Results saved in {}",
        config.report_file.display()
    );

    info!(log = %config.timing_file.display(), "generating timing plots");
    let outcome = match config.layout {
        DirLayout::BySize => plot_size_timings(&config.timing_file, &config.plot_file)?,
        DirLayout::ByThreads => plot_thread_timings(&config.timing_file, &config.plot_file)?,
    };
    if let PlotOutcome::Written(path) = outcome {
        info!("Timing plots saved to {}", path.display());
    }
    Ok(())
}

pub mod tracer {
    use tracing_subscriber::EnvFilter;

    /// Installs a fmt subscriber honoring `RUST_LOG` (default `info`).
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
