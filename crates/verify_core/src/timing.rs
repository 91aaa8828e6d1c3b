//! Timing log parsing for the benchmark charts.
//!
//! Two layouts exist:
//! - size log: `<size> <time_us>` per line, no header;
//! - thread log: a header line, then `<threads> <size> <time_us>` per line.

use std::{collections::BTreeMap, fs, path::Path};

use tracing::{debug, warn};

use crate::error::TimingError;

pub type TimingValue = i64;

/// One `(size, time)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeTiming {
    pub size: TimingValue,
    pub time_us: TimingValue,
}

/// Samples keyed by thread count, ascending; each series keeps log order.
pub type ThreadSeries = BTreeMap<TimingValue, Vec<SizeTiming>>;

pub fn read_size_timings(path: impl AsRef<Path>) -> Result<Vec<SizeTiming>, TimingError> {
    parse_size_timings(&read_log(path.as_ref())?)
}

pub fn read_thread_timings(path: impl AsRef<Path>) -> Result<ThreadSeries, TimingError> {
    parse_thread_timings(&read_log(path.as_ref())?)
}

fn read_log(path: &Path) -> Result<String, TimingError> {
    fs::read_to_string(path).map_err(|source| TimingError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Lines that do not have exactly two fields are ignored; a two-field line
/// that is not a pair of integers is an error.
pub fn parse_size_timings(text: &str) -> Result<Vec<SizeTiming>, TimingError> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            continue;
        }
        let parsed = parse_fields::<2>(&fields).ok_or_else(|| TimingError::InvalidLine {
            line: idx + 1,
            text: line.trim().to_string(),
        })?;
        records.push(SizeTiming {
            size: parsed[0],
            time_us: parsed[1],
        });
    }
    debug!(records = records.len(), "parsed size timing log");
    Ok(records)
}

/// The first line is a header and is skipped. Three-field lines that fail to
/// parse are skipped with a warning; other shapes are ignored.
pub fn parse_thread_timings(text: &str) -> Result<ThreadSeries, TimingError> {
    let mut lines = text.lines().enumerate();
    if lines.next().is_none() {
        return Err(TimingError::MissingHeader);
    }

    let mut series = ThreadSeries::new();
    for (idx, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            continue;
        }
        match parse_fields::<3>(&fields) {
            Some([threads, size, time_us]) => {
                series
                    .entry(threads)
                    .or_default()
                    .push(SizeTiming { size, time_us });
            }
            None => {
                warn!(line = idx + 1, text = line.trim(), "skipping invalid timing line");
            }
        }
    }
    debug!(series = series.len(), "parsed thread timing log");
    Ok(series)
}

fn parse_fields<const N: usize>(fields: &[&str]) -> Option<[TimingValue; N]> {
    let mut out = [0; N];
    for (slot, field) in out.iter_mut().zip(fields) {
        *slot = field.parse().ok()?;
    }
    Some(out)
}
