use ndarray::{Array1, ArrayView1};

/// An update rule applied to the weights once per training step.
pub trait Optimizer {
    fn update(&mut self, weights: &mut Array1<f32>, grad: ArrayView1<f32>);
}
