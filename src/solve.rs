//! Closed-form ordinary least squares via the normal equations.
//!
//! Used by tests as an exactness oracle for the iterative fitter, and
//! exposed for callers who want the minimizer without running a loop.

use ndarray::{Array1, Array2};

use crate::{
    design::DesignMatrix,
    error::{FitErr, Result},
};

const PIVOT_EPS: f64 = 1e-12;

/// Solves `(XᵗX)·w = Xᵗy` for the minimizing weights.
///
/// The d×d system is eliminated in f64 and the solution rounded back to
/// the crate's working precision.
///
/// # Errors
/// `FitErr::SingularSystem` when the Gram matrix has no unique inverse,
/// e.g. when two feature columns are linearly dependent.
pub fn least_squares(design: &DesignMatrix) -> Result<Array1<f32>> {
    let x = design.x();
    let gram = x.t().dot(&x).mapv(f64::from);
    let rhs = x.t().dot(&design.y()).mapv(f64::from);

    let w = gauss_solve(gram, rhs)?;
    Ok(w.mapv(|v| v as f32))
}

/// Gaussian elimination with partial pivoting on a dense square system.
fn gauss_solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();
    debug_assert_eq!(a.ncols(), n);
    debug_assert_eq!(b.len(), n);

    for col in 0..n {
        // Pick the largest remaining pivot in this column.
        let mut pivot_row = col;
        for row in col + 1..n {
            if a[[row, col]].abs() > a[[pivot_row, col]].abs() {
                pivot_row = row;
            }
        }

        if a[[pivot_row, col]].abs() < PIVOT_EPS {
            return Err(FitErr::SingularSystem { pivot: col });
        }

        if pivot_row != col {
            for k in col..n {
                let tmp = a[[col, k]];
                a[[col, k]] = a[[pivot_row, k]];
                a[[pivot_row, k]] = tmp;
            }
            b.swap(col, pivot_row);
        }

        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut w = Array1::zeros(n);
    for col in (0..n).rev() {
        let mut acc = b[col];
        for k in col + 1..n {
            acc -= a[[col, k]] * w[k];
        }
        w[col] = acc / a[[col, col]];
    }

    Ok(w)
}
