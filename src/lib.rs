pub mod config;
pub mod data;
pub mod design;
pub mod error;
pub mod features;
pub mod loss;
pub mod metrics;
pub mod ops;
pub mod optimization;
pub mod solve;
pub mod training;

pub use config::TrainConfig;
pub use data::{Dataset, Sample};
pub use design::DesignMatrix;
pub use error::{FitErr, Result};
pub use features::{Basis, FeatureMap, Polynomial};
pub use loss::{LossFn, Mse};
pub use metrics::{LossReport, TrainMetrics};
pub use optimization::{GradientDescent, Optimizer};
pub use training::{Fit, Phase, Trainer};
