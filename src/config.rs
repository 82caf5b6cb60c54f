use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

const DEFAULT_STEPS: usize = 1000;
const DEFAULT_LEARNING_RATE: f32 = 0.01;
const DEFAULT_REPORT_EVERY: usize = 100;

/// Immutable bounds for a training run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainConfig {
    steps: NonZeroUsize,
    learning_rate: f32,
    report_every: NonZeroUsize,
}

impl TrainConfig {
    pub fn new(steps: NonZeroUsize, learning_rate: f32, report_every: NonZeroUsize) -> Self {
        Self {
            steps,
            learning_rate,
            report_every,
        }
    }

    /// Total number of update steps the loop will take.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps.get()
    }

    #[inline]
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// A loss report fires on every step divisible by this interval.
    #[inline]
    pub fn report_every(&self) -> usize {
        self.report_every.get()
    }

    /// Parses a config from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    /// Returns a human-readable string if the document cannot be parsed or
    /// a field has the wrong shape.
    pub fn from_json_str(content: &str) -> Result<Self, String> {
        let val: serde_json::Value =
            serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}"))?;

        let uint_field = |key: &str, default: usize| -> Result<usize, String> {
            match &val[key] {
                serde_json::Value::Null => Ok(default),
                v => v
                    .as_u64()
                    .map(|n| n as usize)
                    .ok_or_else(|| format!("{key} must be a non-negative integer")),
            }
        };

        let steps = uint_field("steps", DEFAULT_STEPS)?;
        let report_every = uint_field("report_every", DEFAULT_REPORT_EVERY)?;

        let learning_rate = match &val["learning_rate"] {
            serde_json::Value::Null => DEFAULT_LEARNING_RATE,
            v => v
                .as_f64()
                .map(|f| f as f32)
                .ok_or("learning_rate must be a number")?,
        };

        let steps = NonZeroUsize::new(steps).ok_or("steps must be > 0")?;
        let report_every = NonZeroUsize::new(report_every).ok_or("report_every must be > 0")?;

        Ok(Self {
            steps,
            learning_rate,
            report_every,
        })
    }

    /// Loads a config from a JSON file.
    ///
    /// # Errors
    /// Returns a human-readable string if the file cannot be read or parsed.
    pub fn from_json_file(path: &str) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("cannot read '{path}': {e}"))?;
        Self::from_json_str(&content)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            steps: NonZeroUsize::new(DEFAULT_STEPS).unwrap(),
            learning_rate: DEFAULT_LEARNING_RATE,
            report_every: NonZeroUsize::new(DEFAULT_REPORT_EVERY).unwrap(),
        }
    }
}
