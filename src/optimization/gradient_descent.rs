use ndarray::{Array1, ArrayView1};

use super::Optimizer;
use crate::error::{FitErr, Result};

/// Plain gradient descent: `w ← w − lr·∇L`.
///
/// No momentum, no adaptive rates; the step size is the learning rate and
/// nothing else.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// # Errors
    /// `FitErr::BadLearningRate` if `learning_rate` is not finite and
    /// positive.
    pub fn new(learning_rate: f32) -> Result<Self> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(FitErr::BadLearningRate { got: learning_rate });
        }

        Ok(Self { learning_rate })
    }

    #[inline]
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }
}

impl Optimizer for GradientDescent {
    fn update(&mut self, weights: &mut Array1<f32>, grad: ArrayView1<f32>) {
        weights.scaled_add(-self.learning_rate, &grad);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn steps_against_the_gradient() {
        let mut gd = GradientDescent::new(0.5).unwrap();
        let mut w = array![1.0_f32, -1.0];
        let g = array![2.0_f32, -4.0];

        gd.update(&mut w, g.view());
        assert_eq!(w, array![0.0, 1.0]);
    }

    #[test]
    fn rejects_bad_rates() {
        assert!(GradientDescent::new(0.0).is_err());
        assert!(GradientDescent::new(-0.1).is_err());
        assert!(GradientDescent::new(f32::NAN).is_err());
        assert!(GradientDescent::new(f32::INFINITY).is_err());
    }
}
