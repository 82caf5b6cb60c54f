//! Loss and gradient kernels over a featurized dataset.
//!
//! For MSE these reduce to the closed forms
//!
//! loss = (1/m) * sum_i (x_i . w - y_i)^2
//! dL/dw = (2/m) * X^T (X w - y)
//!
//! Here they go through [`LossFn`] so the loss stays swappable: the
//! gradient is X^T applied to dL/dpred.

use ndarray::{Array1, ArrayView1, linalg};

use crate::{
    design::DesignMatrix,
    error::{FitErr, Result},
    loss::LossFn,
};

/// Verifies that `weights` matches the design matrix's feature count.
///
/// This is the fail-fast point for the one caller error this crate cares
/// about: a weight vector of the wrong dimensionality.
pub fn check_dims(design: &DesignMatrix, weights: ArrayView1<f32>) -> Result<()> {
    if weights.len() != design.dim() {
        return Err(FitErr::SizeMismatch {
            a: "weights",
            b: "features",
            got: weights.len(),
            expected: design.dim(),
        });
    }

    Ok(())
}

/// Predictions `X·w` for the whole dataset.
pub fn predict(design: &DesignMatrix, weights: ArrayView1<f32>) -> Result<Array1<f32>> {
    check_dims(design, weights)?;
    Ok(design.x().dot(&weights))
}

/// Loss of `weights` against the dataset's targets.
pub fn loss<L: LossFn>(
    design: &DesignMatrix,
    loss_fn: &L,
    weights: ArrayView1<f32>,
) -> Result<f32> {
    let y_pred = predict(design, weights)?;
    Ok(loss_fn.loss(y_pred.view(), design.y()))
}

/// Writes the gradient of the loss with respect to each weight into `grad`.
///
/// `grad` must have the same length as `weights`; the buffer is fully
/// overwritten, so callers can reuse it across steps.
pub fn gradient_into<L: LossFn>(
    design: &DesignMatrix,
    loss_fn: &L,
    weights: ArrayView1<f32>,
    grad: &mut Array1<f32>,
) -> Result<()> {
    check_dims(design, weights)?;
    if grad.len() != design.dim() {
        return Err(FitErr::SizeMismatch {
            a: "gradient buffer",
            b: "features",
            got: grad.len(),
            expected: design.dim(),
        });
    }

    let y_pred = design.x().dot(&weights);
    let d = loss_fn.loss_prime(y_pred.view(), design.y());
    linalg::general_mat_vec_mul(1.0, &design.x().t(), &d, 0.0, grad);

    Ok(())
}
