//! Recomputes the product for one benchmark directory and checks the claimed result.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::{
    error::VerifyError,
    matrix::{read_matrix, RowPolicy},
    Matrix,
};

pub const LEFT_FILE: &str = "matrix1.txt";
pub const RIGHT_FILE: &str = "matrix2.txt";
pub const RESULT_FILE: &str = "result.txt";

/// Result of comparing a claimed product against the reference product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Match,
    Mismatch { max_abs_diff: u64 },
}

/// Per-directory verification outcome; errors are folded in as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok,
    Mismatch { max_abs_diff: u64 },
    Error { message: String },
}

impl From<Comparison> for Outcome {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Match => Outcome::Ok,
            Comparison::Mismatch { max_abs_diff } => Outcome::Mismatch { max_abs_diff },
        }
    }
}

impl From<VerifyError> for Outcome {
    fn from(err: VerifyError) -> Self {
        Outcome::Error {
            message: err.to_string(),
        }
    }
}

/// Reads the three matrices in `dir` and compares the claimed result with the reference product.
pub fn verify_dir(dir: impl AsRef<Path>, policy: RowPolicy) -> Result<Comparison, VerifyError> {
    let dir = dir.as_ref();
    let left = read_matrix(dir.join(LEFT_FILE), policy)?;
    let right = read_matrix(dir.join(RIGHT_FILE), policy)?;
    let claimed = read_matrix(dir.join(RESULT_FILE), policy)?;

    let reference = reference_product(&left, &right)?;
    let comparison = compare(&claimed, &reference)?;
    debug!(dir = %dir.display(), ?comparison, "verified directory");
    Ok(comparison)
}

/// Infallible wrapper around [`verify_dir`]: any error becomes [`Outcome::Error`].
pub fn verify_directory(dir: impl AsRef<Path>, policy: RowPolicy) -> Outcome {
    match verify_dir(dir, policy) {
        Ok(comparison) => comparison.into(),
        Err(err) => err.into(),
    }
}

/// Standard matrix product `left · right` with overflow-checked accumulation.
pub fn reference_product(left: &Matrix, right: &Matrix) -> Result<Matrix, VerifyError> {
    if left.ncols() != right.nrows() {
        return Err(VerifyError::DimensionMismatch {
            left: left.dim(),
            right: right.dim(),
        });
    }
    let right_t = right.t().as_standard_layout().into_owned();
    let mut product = Matrix::zeros((left.nrows(), right.ncols()));
    for (row, lhs) in left.rows().into_iter().enumerate() {
        for (col, rhs) in right_t.rows().into_iter().enumerate() {
            product[[row, col]] = lhs
                .iter()
                .zip(rhs.iter())
                .try_fold(0i64, |acc, (a, b)| a.checked_mul(*b)?.checked_add(acc))
                .ok_or(VerifyError::Overflow { row, col })?;
        }
    }
    Ok(product)
}

/// Exact element-wise comparison; on mismatch reports the largest absolute difference.
pub fn compare(claimed: &Matrix, reference: &Matrix) -> Result<Comparison, VerifyError> {
    if claimed.dim() != reference.dim() {
        return Err(VerifyError::ResultShape {
            claimed: claimed.dim(),
            expected: reference.dim(),
        });
    }
    if claimed == reference {
        return Ok(Comparison::Match);
    }
    let max_abs_diff = claimed
        .iter()
        .zip(reference.iter())
        .map(|(lhs, rhs)| lhs.abs_diff(*rhs))
        .max()
        .unwrap_or(0);
    Ok(Comparison::Mismatch { max_abs_diff })
}
