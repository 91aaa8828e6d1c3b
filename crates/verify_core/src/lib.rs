//! Verification core for externally produced matrix-multiplication benchmarks.
//!
//! The crate reads the benchmark's flat matrix files, recomputes the product,
//! sweeps the fixed size (and thread-count) grid, and renders the text report.
//! Chart rendering lives in `verify_plot`; the binaries live in `verify_app`.

pub mod config;
pub mod error;
pub mod fixtures;
pub mod matrix;
pub mod report;
pub mod sweep;
pub mod timing;
pub mod verify;

/// Element type of every matrix read from disk.
pub type Scalar = i64;

/// Row-major integer matrix as produced by the reader.
pub type Matrix = ndarray::Array2<Scalar>;

pub use config::{DirLayout, SweepConfig};
pub use error::{MatrixError, ReportError, TimingError, VerifyError};
pub use matrix::{read_matrix, RowPolicy};
pub use sweep::{
    sweep, sweep_sizes, sweep_threads, SweepEntry, SweepResults, SweepStatus, Tally, ThreadGroups,
};
pub use verify::{verify_dir, verify_directory, Comparison, Outcome};
