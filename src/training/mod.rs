mod trainer;

pub use trainer::{Fit, Phase, Trainer};
