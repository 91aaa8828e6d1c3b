//! Walks the fixed parameter grid and verifies each benchmark directory.

use std::{collections::BTreeMap, path::Path};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    config::{DirLayout, SweepConfig},
    matrix::RowPolicy,
    verify::{verify_directory, Outcome},
};

/// Status of a single grid point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "outcome", rename_all = "snake_case")]
pub enum SweepStatus {
    /// No directory for this grid point; the verifier was not invoked.
    Missing,
    Checked(Outcome),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepEntry {
    pub size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
    pub status: SweepStatus,
}

/// Entries grouped by thread count, ascending; sizes keep grid order within a group.
pub type ThreadGroups = BTreeMap<usize, Vec<SweepEntry>>;

/// Counts per status, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub ok: usize,
    pub mismatched: usize,
    pub errored: usize,
    pub missing: usize,
}

impl Tally {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a SweepEntry>) -> Self {
        entries
            .into_iter()
            .fold(Tally::default(), |mut tally, entry| {
                match &entry.status {
                    SweepStatus::Missing => tally.missing += 1,
                    SweepStatus::Checked(Outcome::Ok) => tally.ok += 1,
                    SweepStatus::Checked(Outcome::Mismatch { .. }) => tally.mismatched += 1,
                    SweepStatus::Checked(Outcome::Error { .. }) => tally.errored += 1,
                }
                tally
            })
    }

    pub fn total(&self) -> usize {
        self.ok + self.mismatched + self.errored + self.missing
    }
}

/// Output of a sweep, shaped by the directory layout it was run with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SweepResults {
    BySize(Vec<SweepEntry>),
    ByThreads(ThreadGroups),
}

impl SweepResults {
    pub fn tally(&self) -> Tally {
        match self {
            SweepResults::BySize(entries) => Tally::from_entries(entries),
            SweepResults::ByThreads(groups) => Tally::from_entries(groups.values().flatten()),
        }
    }
}

/// Runs the sweep matching `config.layout`.
pub fn sweep(base_dir: impl AsRef<Path>, config: &SweepConfig) -> SweepResults {
    let base_dir = base_dir.as_ref();
    let results = match config.layout {
        DirLayout::BySize => SweepResults::BySize(sweep_sizes(base_dir, config)),
        DirLayout::ByThreads => SweepResults::ByThreads(sweep_threads(base_dir, config)),
    };
    let tally = results.tally();
    info!(
        base = %base_dir.display(),
        total = tally.total(),
        ok = tally.ok,
        mismatched = tally.mismatched,
        errored = tally.errored,
        missing = tally.missing,
        "sweep finished"
    );
    results
}

/// One entry per configured size, looking for `<base>/<size>`.
pub fn sweep_sizes(base_dir: impl AsRef<Path>, config: &SweepConfig) -> Vec<SweepEntry> {
    let base_dir = base_dir.as_ref();
    config
        .sizes
        .iter()
        .map(|&size| SweepEntry {
            size,
            threads: None,
            status: probe(
                base_dir,
                &DirLayout::BySize.dir_name(size, None),
                config.row_policy,
            ),
        })
        .collect()
}

/// One entry per (threads, size) pair, looking for `<base>/<size>_threads_<threads>`.
pub fn sweep_threads(base_dir: impl AsRef<Path>, config: &SweepConfig) -> ThreadGroups {
    let base_dir = base_dir.as_ref();
    let mut groups = ThreadGroups::new();
    for &threads in &config.thread_counts {
        for &size in &config.sizes {
            let dir_name = DirLayout::ByThreads.dir_name(size, Some(threads));
            let status = probe(base_dir, &dir_name, config.row_policy);
            groups.entry(threads).or_default().push(SweepEntry {
                size,
                threads: Some(threads),
                status,
            });
        }
    }
    groups
}

fn probe(base_dir: &Path, dir_name: &str, policy: RowPolicy) -> SweepStatus {
    let dir = base_dir.join(dir_name);
    if !dir.exists() {
        warn!(dir = %dir.display(), "benchmark directory not found");
        return SweepStatus::Missing;
    }
    debug!(dir = %dir.display(), "verifying");
    let outcome = verify_directory(&dir, policy);
    match &outcome {
        Outcome::Ok => {}
        Outcome::Mismatch { max_abs_diff } => {
            warn!(dir = %dir.display(), max_abs_diff, "claimed result differs from reference");
        }
        Outcome::Error { message } => {
            warn!(dir = %dir.display(), %message, "verification failed");
        }
    }
    SweepStatus::Checked(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(status: SweepStatus) -> SweepEntry {
        SweepEntry {
            size: 100,
            threads: None,
            status,
        }
    }

    #[test]
    fn tally_counts_each_status() {
        let entries = vec![
            entry(SweepStatus::Missing),
            entry(SweepStatus::Checked(Outcome::Ok)),
            entry(SweepStatus::Checked(Outcome::Ok)),
            entry(SweepStatus::Checked(Outcome::Mismatch { max_abs_diff: 3 })),
            entry(SweepStatus::Checked(Outcome::Error {
                message: "boom".into(),
            })),
        ];
        let tally = Tally::from_entries(&entries);
        assert_eq!(
            tally,
            Tally {
                ok: 2,
                mismatched: 1,
                errored: 1,
                missing: 1
            }
        );
        assert_eq!(tally.total(), entries.len());
    }

    #[test]
    fn empty_base_marks_everything_missing() {
        let base = tempfile::tempdir().unwrap();
        let config = SweepConfig::threads();
        let groups = sweep_threads(base.path(), &config);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), config.thread_counts);
        for entries in groups.values() {
            assert_eq!(entries.len(), config.sizes.len());
            assert!(entries.iter().all(|e| e.status == SweepStatus::Missing));
        }
    }
}
