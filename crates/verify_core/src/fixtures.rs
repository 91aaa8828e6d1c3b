//! Deterministic benchmark directories for exercising the verifier.
//!
//! Values are drawn from `0..100` and written in the benchmark's own format
//! (every value followed by a space, one row per line).

use std::{fs, io, path::Path};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
    verify::{LEFT_FILE, RESULT_FILE, RIGHT_FILE},
    Matrix,
};

pub fn generate_matrix(size: usize, seed: u64) -> Matrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Matrix::from_shape_simple_fn((size, size), || rng.gen_range(0..100))
}

pub fn write_matrix(path: impl AsRef<Path>, matrix: &Matrix) -> io::Result<()> {
    let mut text = String::with_capacity(matrix.len() * 3);
    for row in matrix.rows() {
        for value in row {
            text.push_str(&value.to_string());
            text.push(' ');
        }
        text.push('\n');
    }
    fs::write(path, text)
}

/// Creates `dir` with two random operands and their correct product.
pub fn write_case_dir(dir: impl AsRef<Path>, size: usize, seed: u64) -> io::Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let left = generate_matrix(size, seed);
    let right = generate_matrix(size, seed ^ 0xDEAD_BEEF);
    write_matrix(dir.join(LEFT_FILE), &left)?;
    write_matrix(dir.join(RIGHT_FILE), &right)?;
    write_matrix(dir.join(RESULT_FILE), &left.dot(&right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{read_matrix, RowPolicy};

    #[test]
    fn generation_is_seeded() {
        let a = generate_matrix(6, 0xA11CE);
        assert_eq!(a, generate_matrix(6, 0xA11CE));
        assert_ne!(a, generate_matrix(6, 0xB0B));
        assert!(a.iter().all(|v| (0..100).contains(v)));
    }

    #[test]
    fn written_matrix_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("m.txt");
        let m = generate_matrix(5, 7);
        write_matrix(&path, &m).unwrap();
        assert_eq!(read_matrix(&path, RowPolicy::Strict).unwrap(), m);
    }
}
