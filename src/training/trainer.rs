use log::info;
use ndarray::{Array1, ArrayView1};

use crate::{
    config::TrainConfig,
    design::DesignMatrix,
    error::Result,
    loss::{LossFn, Mse},
    metrics::TrainMetrics,
    ops,
    optimization::{GradientDescent, Optimizer},
};

/// Where the loop is in its fixed step budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Done,
}

/// The result of a completed run: fitted weights plus the loss history.
#[derive(Debug, Clone)]
pub struct Fit {
    pub weights: Array1<f32>,
    pub metrics: TrainMetrics,
}

/// Fixed-step gradient-descent loop over a featurized dataset.
///
/// The trainer owns the only mutable state of a run: the weight vector
/// (zero-initialized unless supplied) and a reusable gradient buffer.
/// Each step computes the full-dataset gradient, applies the optimizer's
/// update rule, and on steps divisible by the reporting interval (and on
/// the final step) recomputes the loss, logs it, and records it in the
/// metrics. There is no convergence check: the loop always takes exactly
/// the configured number of steps.
#[derive(Debug)]
pub struct Trainer<O, L> {
    design: DesignMatrix,
    optimizer: O,
    loss_fn: L,
    cfg: TrainConfig,

    weights: Array1<f32>,
    grad: Array1<f32>,
    step: usize,
    metrics: TrainMetrics,
}

impl Trainer<GradientDescent, Mse> {
    /// The standard setup: plain gradient descent under MSE, with the
    /// learning rate taken from `cfg`.
    ///
    /// # Errors
    /// `FitErr::BadLearningRate` if the configured rate is unusable.
    pub fn gradient_descent(design: DesignMatrix, cfg: TrainConfig) -> Result<Self> {
        let optimizer = GradientDescent::new(cfg.learning_rate())?;
        Ok(Self::new(design, optimizer, Mse, cfg))
    }
}

impl<O, L> Trainer<O, L>
where
    O: Optimizer,
    L: LossFn,
{
    /// Starts a run with zero-initialized weights, one per feature.
    pub fn new(design: DesignMatrix, optimizer: O, loss_fn: L, cfg: TrainConfig) -> Self {
        let dim = design.dim();

        Self {
            design,
            optimizer,
            loss_fn,
            cfg,
            weights: Array1::zeros(dim),
            grad: Array1::zeros(dim),
            step: 0,
            metrics: TrainMetrics::default(),
        }
    }

    /// Starts a run from caller-supplied weights.
    ///
    /// # Errors
    /// `FitErr::SizeMismatch` if `weights` does not match the design
    /// matrix's feature count.
    pub fn with_weights(
        design: DesignMatrix,
        optimizer: O,
        loss_fn: L,
        cfg: TrainConfig,
        weights: Vec<f32>,
    ) -> Result<Self> {
        let weights = Array1::from_vec(weights);
        ops::check_dims(&design, weights.view())?;

        let dim = design.dim();
        Ok(Self {
            design,
            optimizer,
            loss_fn,
            cfg,
            weights,
            grad: Array1::zeros(dim),
            step: 0,
            metrics: TrainMetrics::default(),
        })
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        if self.step >= self.cfg.steps() {
            Phase::Done
        } else {
            Phase::Running
        }
    }

    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    #[inline]
    pub fn metrics(&self) -> &TrainMetrics {
        &self.metrics
    }

    /// Takes one update step. A no-op once the step budget is exhausted.
    pub fn step(&mut self) -> Result<Phase> {
        if self.phase() == Phase::Done {
            return Ok(Phase::Done);
        }

        self.step += 1;

        ops::gradient_into(
            &self.design,
            &self.loss_fn,
            self.weights.view(),
            &mut self.grad,
        )?;
        self.optimizer.update(&mut self.weights, self.grad.view());
        self.metrics.bump_step();

        let total = self.cfg.steps();
        if self.step % self.cfg.report_every() == 0 || self.step == total {
            let loss = ops::loss(&self.design, &self.loss_fn, self.weights.view())?;
            info!(
                "step {}/{}: loss {:.6}, weights {:?}",
                self.step,
                total,
                loss,
                self.weights.as_slice().unwrap()
            );
            self.metrics.push_report(self.step, loss);
        }

        Ok(self.phase())
    }

    /// Runs until the step budget is exhausted and returns the fit.
    pub fn run(mut self) -> Result<Fit> {
        while self.phase() == Phase::Running {
            self.step()?;
        }

        Ok(Fit {
            weights: self.weights,
            metrics: self.metrics,
        })
    }
}
