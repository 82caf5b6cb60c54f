/// Loss observed at a reporting step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossReport {
    pub step: usize,
    pub loss: f32,
}

/// Counters and loss history accumulated by a training run.
#[derive(Debug, Clone, Default)]
pub struct TrainMetrics {
    steps: usize,
    reports: Vec<LossReport>,
}

impl TrainMetrics {
    #[inline]
    pub fn bump_step(&mut self) {
        self.steps += 1;
    }

    #[inline]
    pub fn push_report(&mut self, step: usize, loss: f32) {
        self.reports.push(LossReport { step, loss });
    }

    /// Total update steps taken.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Loss history, one entry per reporting interval, in step order.
    #[inline]
    pub fn reports(&self) -> &[LossReport] {
        &self.reports
    }

    /// Loss at the last report, if any report fired.
    pub fn final_loss(&self) -> Option<f32> {
        self.reports.last().map(|r| r.loss)
    }
}
