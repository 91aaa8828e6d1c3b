//! Plain-text verification report plus a JSON sidecar for tooling.

use std::{fs, path::Path};

use tracing::info;

use crate::{
    error::ReportError,
    sweep::{SweepEntry, SweepResults, SweepStatus, ThreadGroups},
    verify::Outcome,
};

pub const COMPLETION_FOOTER: &str = "Verification completed.";

/// Renders the report for whichever layout produced `results`.
pub fn render_report(results: &SweepResults) -> String {
    match results {
        SweepResults::BySize(entries) => render_size_report(entries),
        SweepResults::ByThreads(groups) => render_thread_report(groups),
    }
}

/// Flat report, one line per size in sweep order.
pub fn render_size_report(entries: &[SweepEntry]) -> String {
    let mut buf = String::new();
    buf.push_str("Verification report:\n");
    buf.push_str(&"=".repeat(50));
    buf.push('\n');
    for entry in entries {
        buf.push_str(&size_line(entry));
        buf.push('\n');
    }
    buf.push_str(&format!("\n{COMPLETION_FOOTER}\n"));
    buf
}

/// Report with one section per thread count, ascending.
pub fn render_thread_report(groups: &ThreadGroups) -> String {
    let mut buf = String::new();
    buf.push_str("OpenMP Matrix Multiplication Verification Report\n");
    buf.push_str(&"=".repeat(60));
    buf.push_str("\n\n");
    for (threads, entries) in groups {
        buf.push_str(&format!("Threads: {threads}\n"));
        buf.push_str(&"-".repeat(40));
        buf.push('\n');
        for entry in entries {
            buf.push_str(&format!(
                "{size}x{size}: {status}\n",
                size = entry.size,
                status = thread_status(&entry.status)
            ));
        }
        buf.push('\n');
    }
    buf.push_str(&format!("\n{COMPLETION_FOOTER}\n"));
    buf
}

fn size_line(entry: &SweepEntry) -> String {
    let size = entry.size;
    match &entry.status {
        SweepStatus::Missing => format!("{size}x{size} folder not found"),
        SweepStatus::Checked(Outcome::Ok) => format!("Multiplication {size}x{size} - OK"),
        SweepStatus::Checked(Outcome::Mismatch { max_abs_diff }) => {
            format!("Multiplication {size}x{size} - ERROR (max diff: {max_abs_diff})")
        }
        SweepStatus::Checked(Outcome::Error { message }) => {
            format!("Multiplication {size}x{size} - ERROR: {message}")
        }
    }
}

fn thread_status(status: &SweepStatus) -> String {
    match status {
        SweepStatus::Missing => "Directory not found".to_string(),
        SweepStatus::Checked(Outcome::Ok) => "OK".to_string(),
        SweepStatus::Checked(Outcome::Mismatch { max_abs_diff }) => {
            format!("Max diff: {max_abs_diff}")
        }
        SweepStatus::Checked(Outcome::Error { message }) => format!("Error: {message}"),
    }
}

/// Writes the text report to `path`, replacing any existing file.
pub fn write_report(path: impl AsRef<Path>, results: &SweepResults) -> Result<(), ReportError> {
    let path = path.as_ref();
    fs::write(path, render_report(results)).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "verification report written");
    Ok(())
}

/// Writes the typed sweep entries as pretty-printed JSON.
pub fn write_json_report(
    path: impl AsRef<Path>,
    results: &SweepResults,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(size: usize, threads: Option<usize>, status: SweepStatus) -> SweepEntry {
        SweepEntry {
            size,
            threads,
            status,
        }
    }

    #[test]
    fn size_report_layout() {
        let entries = vec![
            entry(100, None, SweepStatus::Checked(Outcome::Ok)),
            entry(200, None, SweepStatus::Checked(Outcome::Mismatch { max_abs_diff: 50 })),
            entry(
                300,
                None,
                SweepStatus::Checked(Outcome::Error {
                    message: "bad file".into(),
                }),
            ),
            entry(400, None, SweepStatus::Missing),
        ];
        let expected = format!(
            "Verification report:\n{}\n\
             Multiplication 100x100 - OK\n\
             Multiplication 200x200 - ERROR (max diff: 50)\n\
             Multiplication 300x300 - ERROR: bad file\n\
             400x400 folder not found\n\
             \nVerification completed.\n",
            "=".repeat(50)
        );
        assert_eq!(render_size_report(&entries), expected);
    }

    #[test]
    fn thread_report_groups_ascending() {
        let mut groups = ThreadGroups::new();
        groups.insert(
            4,
            vec![entry(100, Some(4), SweepStatus::Checked(Outcome::Mismatch { max_abs_diff: 2 }))],
        );
        groups.insert(
            2,
            vec![
                entry(100, Some(2), SweepStatus::Checked(Outcome::Ok)),
                entry(200, Some(2), SweepStatus::Missing),
                entry(
                    300,
                    Some(2),
                    SweepStatus::Checked(Outcome::Error {
                        message: "oops".into(),
                    }),
                ),
            ],
        );
        let expected = format!(
            "OpenMP Matrix Multiplication Verification Report\n{}\n\n\
             Threads: 2\n{dash}\n\
             100x100: OK\n\
             200x200: Directory not found\n\
             300x300: Error: oops\n\n\
             Threads: 4\n{dash}\n\
             100x100: Max diff: 2\n\n\
             \nVerification completed.\n",
            "=".repeat(60),
            dash = "-".repeat(40)
        );
        assert_eq!(render_thread_report(&groups), expected);
    }

    #[test]
    fn empty_sweep_still_has_header_and_footer() {
        let text = render_report(&SweepResults::BySize(Vec::new()));
        assert!(text.starts_with("Verification report:\n"));
        assert!(text.ends_with("\n\nVerification completed.\n"));
    }
}
