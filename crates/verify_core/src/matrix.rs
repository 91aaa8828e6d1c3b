//! Reader for the benchmark's whitespace-delimited integer matrix files.
//!
//! One row per line, blank lines ignored. The benchmark writes a trailing
//! space after every value, which the tokenizer tolerates.

use std::{collections::BTreeSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{error::MatrixError, Matrix, Scalar};

/// Row-length handling applied by [`read_matrix`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowPolicy {
    /// Every row must have the same number of values.
    #[default]
    Strict,
    /// No row-length check in the reader. A ragged file still cannot become
    /// a rectangular matrix and surfaces as [`MatrixError::Shape`].
    Lenient,
}

/// Loads an integer matrix from `path`.
pub fn read_matrix(path: impl AsRef<Path>, policy: RowPolicy) -> Result<Matrix, MatrixError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = parse_matrix(&text, policy, path)?;
    debug!(
        path = %path.display(),
        rows = matrix.nrows(),
        cols = matrix.ncols(),
        "loaded matrix"
    );
    Ok(matrix)
}

fn parse_matrix(text: &str, policy: RowPolicy, path: &Path) -> Result<Matrix, MatrixError> {
    let rows = parse_rows(text, path)?;
    let lengths: BTreeSet<usize> = rows.iter().map(Vec::len).collect();

    match policy {
        RowPolicy::Strict if lengths.len() != 1 => {
            return Err(MatrixError::MalformedMatrix {
                path: path.to_path_buf(),
                lengths,
            });
        }
        RowPolicy::Lenient if lengths.len() > 1 => {
            warn!(
                path = %path.display(),
                ?lengths,
                "ragged rows passed the lenient reader without a row-length check"
            );
            return Err(MatrixError::Shape {
                path: path.to_path_buf(),
                message: format!("inhomogeneous row lengths {lengths:?}"),
            });
        }
        _ => {}
    }

    let cols = rows.first().map_or(0, Vec::len);
    let shape = (rows.len(), cols);
    let values: Vec<Scalar> = rows.into_iter().flatten().collect();
    Matrix::from_shape_vec(shape, values).map_err(|err| MatrixError::Shape {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

fn parse_rows(text: &str, path: &Path) -> Result<Vec<Vec<Scalar>>, MatrixError> {
    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let row = trimmed
            .split_whitespace()
            .map(|token| {
                token.parse::<Scalar>().map_err(|_| MatrixError::InvalidToken {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tracing_test::traced_test;

    fn parse(text: &str, policy: RowPolicy) -> Result<Matrix, MatrixError> {
        parse_matrix(text, policy, Path::new("matrix.txt"))
    }

    #[test]
    fn reads_rectangular_rows_with_trailing_spaces() {
        let m = parse("1 2 3 \n4 5 6 \n", RowPolicy::Strict).unwrap();
        assert_eq!(m, array![[1, 2, 3], [4, 5, 6]]);
    }

    #[test]
    fn skips_blank_lines() {
        let m = parse("\n  7  -8\n\n\t\n9 10\n\n", RowPolicy::Strict).unwrap();
        assert_eq!(m.dim(), (2, 2));
        assert_eq!(m, array![[7, -8], [9, 10]]);
    }

    #[test]
    fn strict_rejects_ragged_rows_naming_lengths() {
        let err = parse("1 2 3\n4 5\n6 7 8\n", RowPolicy::Strict).unwrap_err();
        match &err {
            MatrixError::MalformedMatrix { lengths, .. } => {
                assert_eq!(lengths.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("{2, 3}"));
    }

    #[test]
    fn strict_rejects_empty_file() {
        let err = parse("\n\n", RowPolicy::Strict).unwrap_err();
        assert!(matches!(err, MatrixError::MalformedMatrix { ref lengths, .. } if lengths.is_empty()));
    }

    #[test]
    #[traced_test]
    fn lenient_reader_warns_about_ragged_rows() {
        assert!(parse("1 2\n3\n", RowPolicy::Lenient).is_err());
        assert!(logs_contain("ragged rows passed the lenient reader"));
    }

    #[test]
    #[traced_test]
    fn strict_reader_does_not_warn() {
        assert!(parse("1 2\n3\n", RowPolicy::Strict).is_err());
        assert!(!logs_contain("ragged rows"));
    }

    #[test]
    fn lenient_skips_row_check_but_cannot_shape_ragged_rows() {
        let err = parse("1 2 3\n4 5\n", RowPolicy::Lenient).unwrap_err();
        assert!(matches!(err, MatrixError::Shape { .. }));

        let empty = parse("", RowPolicy::Lenient).unwrap();
        assert_eq!(empty.dim(), (0, 0));
    }

    #[test]
    fn rejects_non_integer_tokens() {
        let err = parse("1 2\n3 x4\n", RowPolicy::Lenient).unwrap_err();
        match err {
            MatrixError::InvalidToken { line, token, .. } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x4");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_matrix("/nonexistent/dir/matrix1.txt", RowPolicy::Strict).unwrap_err();
        assert!(matches!(err, MatrixError::Io { .. }));
        assert!(err.to_string().contains("matrix1.txt"));
    }
}
