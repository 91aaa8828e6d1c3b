//! Verifies `<base>/<size>` benchmark directories and plots `timings.txt`.

use std::env;

use anyhow::Result;
use verify_app::{base_dir_from_args, run, tracer::init_tracing};
use verify_core::SweepConfig;

fn main() -> Result<()> {
    init_tracing();
    let base_dir = base_dir_from_args(env::args().skip(1))?;
    run(base_dir, &SweepConfig::sizes())
}
