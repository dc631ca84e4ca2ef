//! Matrix Kernel - Dense Homogeneous Matrix Routines
//!
//! Multiply and invert the fixed `MAT_DIM x MAT_DIM` matrices backing every
//! coordinate map. Inversion uses LU decomposition without pivoting, so any
//! zero pivot is reported as a singular matrix. Permutations are inverted by
//! their constructor instead.
//!
//! @version 0.1.0
//! @author `AutomataNexus` Development Team

use coordml_core::error::{Error, Result};
use coordml_core::types::{format_list, MatrixT, MAT_DIM};

// =============================================================================
// Construction
// =============================================================================

/// Returns the all-zero matrix.
#[must_use]
pub const fn zero_matrix() -> MatrixT {
    [[0.0; MAT_DIM]; MAT_DIM]
}

/// Returns the identity matrix.
#[must_use]
pub fn identity_matrix() -> MatrixT {
    let mut out = zero_matrix();
    for (i, row) in out.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    out
}

// =============================================================================
// Products
// =============================================================================

/// Computes the matrix product `a · b`.
#[must_use]
pub fn matmul(a: &MatrixT, b: &MatrixT) -> MatrixT {
    let mut out = zero_matrix();
    for i in 0..MAT_DIM {
        for j in 0..MAT_DIM {
            for k in 0..MAT_DIM {
                out[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    out
}

// =============================================================================
// Inversion
// =============================================================================

/// Splits `m` into unit lower `L` and upper `U` with `m = L · U`.
fn lu_decompose(m: &MatrixT) -> Result<(MatrixT, MatrixT)> {
    let mut lower = zero_matrix();
    let mut upper = zero_matrix();
    for i in 0..MAT_DIM {
        for j in i..MAT_DIM {
            let mut sum = 0.0;
            for k in 0..i {
                sum += lower[i][k] * upper[k][j];
            }
            upper[i][j] = m[i][j] - sum;
        }

        let pivot = upper[i][i];
        if pivot == 0.0 || !pivot.is_finite() {
            return Err(Error::SingularMatrix { index: i });
        }

        lower[i][i] = 1.0;
        for j in i + 1..MAT_DIM {
            let mut sum = 0.0;
            for k in 0..i {
                sum += lower[j][k] * upper[k][i];
            }
            lower[j][i] = (m[j][i] - sum) / pivot;
        }
    }
    Ok((lower, upper))
}

/// Inverts a unit lower-triangular matrix by forward substitution.
fn invert_lower(lower: &MatrixT) -> MatrixT {
    let mut out = zero_matrix();
    for col in 0..MAT_DIM {
        out[col][col] = 1.0;
        for i in col + 1..MAT_DIM {
            let mut sum = 0.0;
            for k in col..i {
                sum += lower[i][k] * out[k][col];
            }
            out[i][col] = -sum;
        }
    }
    out
}

/// Inverts an upper-triangular matrix with a nonzero diagonal by back
/// substitution.
fn invert_upper(upper: &MatrixT) -> MatrixT {
    let mut out = zero_matrix();
    for col in 0..MAT_DIM {
        out[col][col] = 1.0 / upper[col][col];
        for i in (0..col).rev() {
            let mut sum = 0.0;
            for k in i + 1..=col {
                sum += upper[i][k] * out[k][col];
            }
            out[i][col] = -sum / upper[i][i];
        }
    }
    out
}

/// Computes the inverse of `m` as `U⁻¹ · L⁻¹`.
///
/// # Returns
/// The inverse, or `Error::SingularMatrix` if LU decomposition meets a zero
/// pivot.
pub fn inverse(m: &MatrixT) -> Result<MatrixT> {
    let (lower, upper) = lu_decompose(m)?;
    Ok(matmul(&invert_upper(&upper), &invert_lower(&lower)))
}

// =============================================================================
// Comparison and Formatting
// =============================================================================

/// Returns true if every entry of `a` is within `tol` of `b`.
#[must_use]
pub fn matrix_approx_eq(a: &MatrixT, b: &MatrixT, tol: f64) -> bool {
    a.iter()
        .flatten()
        .zip(b.iter().flatten())
        .all(|(x, y)| (x - y).abs() <= tol)
}

/// Formats a matrix row by row: `[[a\b]\` newline `[c\d]]`.
///
/// Negative zero prints as `0`.
#[must_use]
pub fn matrix_to_string(m: &MatrixT) -> String {
    let rows: Vec<String> = m
        .iter()
        .map(|row| {
            let cleaned: Vec<f64> = row.iter().map(|&v| v + 0.0).collect();
            format_list(&cleaned)
        })
        .collect();
    format!("[{}]", rows.join("\\\n"))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_matrix(rng: &mut StdRng) -> MatrixT {
        let mut m = zero_matrix();
        for (i, row) in m.iter_mut().enumerate() {
            for v in row.iter_mut() {
                *v = rng.gen_range(0.0001..5.0);
            }
            // diagonal dominance keeps pivot-free LU well conditioned
            row[i] += 5.0 * MAT_DIM as f64;
        }
        m
    }

    #[test]
    fn test_identity_string() {
        let expected = "[[1\\0\\0\\0\\0\\0\\0\\0\\0]\\\n\
            [0\\1\\0\\0\\0\\0\\0\\0\\0]\\\n\
            [0\\0\\1\\0\\0\\0\\0\\0\\0]\\\n\
            [0\\0\\0\\1\\0\\0\\0\\0\\0]\\\n\
            [0\\0\\0\\0\\1\\0\\0\\0\\0]\\\n\
            [0\\0\\0\\0\\0\\1\\0\\0\\0]\\\n\
            [0\\0\\0\\0\\0\\0\\1\\0\\0]\\\n\
            [0\\0\\0\\0\\0\\0\\0\\1\\0]\\\n\
            [0\\0\\0\\0\\0\\0\\0\\0\\1]]";
        assert_eq!(matrix_to_string(&identity_matrix()), expected);
    }

    #[test]
    fn test_matmul() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = random_matrix(&mut rng);
        let b = random_matrix(&mut rng);
        let out = matmul(&a, &b);
        for i in 0..MAT_DIM {
            for j in 0..MAT_DIM {
                let expected: f64 = (0..MAT_DIM).map(|k| a[i][k] * b[k][j]).sum();
                assert!((expected - out[i][j]).abs() < 1e-9);
            }
        }
        assert_eq!(matmul(&a, &identity_matrix()), a);
    }

    #[test]
    fn test_inverse_random() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..64 {
            let m = random_matrix(&mut rng);
            let inv = inverse(&m).unwrap();
            let prod = matmul(&inv, &m);
            for i in 0..MAT_DIM {
                for j in 0..MAT_DIM {
                    let expected = if i == j { 1.0 } else { 0.0 };
                    assert_eq!(prod[i][j].round(), expected);
                    assert!((prod[i][j] - expected).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_inverse_rejects_unpivoted_permutation() {
        let mut m = zero_matrix();
        // swap axes 0 and 1 while keeping the rest in place
        let order = [1, 0, 2, 3, 4, 5, 6, 7, 8];
        for (i, &o) in order.iter().enumerate() {
            m[i][o] = 1.0;
        }
        // LU without pivoting rejects the zero leading pivot
        assert_eq!(inverse(&m), Err(Error::SingularMatrix { index: 0 }));

        let mut scaled = identity_matrix();
        scaled[3][3] = 0.25;
        let inv = inverse(&scaled).unwrap();
        assert_eq!(inv[3][3], 4.0);
    }

    #[test]
    fn test_singular() {
        let mut m = identity_matrix();
        m[5][5] = 0.0;
        let err = inverse(&m).unwrap_err();
        assert_eq!(err, Error::SingularMatrix { index: 5 });
    }

    #[test]
    fn test_negative_zero_formatting() {
        let mut m = identity_matrix();
        m[0][1] = -0.0;
        assert!(matrix_to_string(&m).starts_with("[[1\\0\\0"));
    }
}
