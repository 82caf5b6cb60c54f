use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, Normal};

use crate::error::{FitErr, Result};

/// A single supervised observation (x, y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f32,
    pub y: f32,
}

/// An immutable in-memory collection of (x, y) pairs.
///
/// Inputs and targets are stored as paired buffers of equal length. The
/// dataset never changes after construction; the training loop only reads
/// from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    xs: Vec<f32>,
    ys: Vec<f32>,
}

impl Dataset {
    /// Builds a dataset from owned input and target buffers.
    ///
    /// # Errors
    /// * `FitErr::SizeMismatch` if the buffers differ in length.
    /// * `FitErr::EmptyDataset` if they are empty.
    pub fn new(xs: Vec<f32>, ys: Vec<f32>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(FitErr::SizeMismatch {
                a: "inputs",
                b: "targets",
                got: ys.len(),
                expected: xs.len(),
            });
        }
        if xs.is_empty() {
            return Err(FitErr::EmptyDataset);
        }

        Ok(Self { xs, ys })
    }

    /// Builds a dataset by applying `f` to every input.
    pub fn from_fn(xs: Vec<f32>, f: impl Fn(f32) -> f32) -> Result<Self> {
        let ys = xs.iter().map(|&x| f(x)).collect();
        Self::new(xs, ys)
    }

    /// Like [`Dataset::from_fn`], but perturbs every target with Gaussian
    /// noise of the given standard deviation, drawn from a seeded generator.
    ///
    /// # Panics
    /// - if `noise_sd` is negative or not finite
    pub fn from_fn_noisy(
        xs: Vec<f32>,
        f: impl Fn(f32) -> f32,
        noise_sd: f32,
        seed: u64,
    ) -> Result<Self> {
        assert!(
            noise_sd.is_finite() && noise_sd >= 0.0,
            "noise_sd must be finite and non-negative"
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0.0, noise_sd).unwrap();

        let ys = xs.iter().map(|&x| f(x) + normal.sample(&mut rng)).collect();
        Self::new(xs, ys)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns the sample at `idx` (panics if out of bounds).
    #[inline]
    pub fn sample(&self, idx: usize) -> Sample {
        Sample {
            x: self.xs[idx],
            y: self.ys[idx],
        }
    }

    #[inline]
    pub fn xs(&self) -> &[f32] {
        &self.xs
    }

    #[inline]
    pub fn ys(&self) -> &[f32] {
        &self.ys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffers() {
        let err = Dataset::new(vec![1.0, 2.0], vec![3.0]).unwrap_err();
        assert_eq!(
            err,
            FitErr::SizeMismatch {
                a: "inputs",
                b: "targets",
                got: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Dataset::new(vec![], vec![]).unwrap_err(), FitErr::EmptyDataset);
    }

    #[test]
    fn from_fn_applies_generator() {
        let ds = Dataset::from_fn(vec![0.0, 1.0, 2.0], |x| 2.0 * x + 10.0).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sample(0), Sample { x: 0.0, y: 10.0 });
        assert_eq!(ds.sample(2), Sample { x: 2.0, y: 14.0 });
    }

    #[test]
    fn noisy_generation_is_seeded() {
        let xs: Vec<f32> = (0..16).map(|i| i as f32).collect();
        let a = Dataset::from_fn_noisy(xs.clone(), |x| x, 0.5, 7).unwrap();
        let b = Dataset::from_fn_noisy(xs, |x| x, 0.5, 7).unwrap();
        assert_eq!(a.ys(), b.ys());
        assert_ne!(a.ys(), a.xs());
    }
}
