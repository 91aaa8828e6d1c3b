//! Error types for the reader, verifier, timing parser and report writer.

use std::{collections::BTreeSet, io, path::PathBuf};

use thiserror::Error;

/// Failures while turning a matrix file into a [`crate::Matrix`].
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid integer '{token}' on line {line} of {}", path.display())]
    InvalidToken {
        path: PathBuf,
        line: usize,
        token: String,
    },

    /// Strict reader only: more (or fewer) than one distinct row length.
    #[error("inconsistent row lengths in matrix {}: {lengths:?}", path.display())]
    MalformedMatrix {
        path: PathBuf,
        lengths: BTreeSet<usize>,
    },

    #[error("cannot build a rectangular matrix from {}: {message}", path.display())]
    Shape { path: PathBuf, message: String },
}

/// Failures while checking one benchmark directory.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("shapes {left:?} and {right:?} not aligned for multiplication")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("integer overflow computing reference product element ({row}, {col})")]
    Overflow { row: usize, col: usize },

    #[error("claimed result has shape {claimed:?} but the reference product has shape {expected:?}")]
    ResultShape {
        claimed: (usize, usize),
        expected: (usize, usize),
    },
}

/// Failures while reading a timing log.
#[derive(Debug, Error)]
pub enum TimingError {
    #[error("failed to read timing log {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid timing line {line}: '{text}'")]
    InvalidLine { line: usize, text: String },

    #[error("timing log is empty; expected a header line")]
    MissingHeader,
}

/// Failures while writing the verification report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
