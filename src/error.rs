use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, FitErr>;

/// Failures surfaced by dataset construction, fitting and solving.
#[derive(Debug, Clone, PartialEq)]
pub enum FitErr {
    /// Two buffers that must agree in length do not.
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    /// A dataset with zero samples was supplied.
    EmptyDataset,
    /// The normal equations have no unique solution.
    SingularSystem { pivot: usize },
    /// The learning rate is NaN, infinite, or not positive.
    BadLearningRate { got: f32 },
}

impl Display for FitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "size mismatch between {a} and {b}: got {got}, expected {expected}"
            ),
            FitErr::EmptyDataset => write!(f, "dataset has no samples"),
            FitErr::SingularSystem { pivot } => {
                write!(f, "normal equations are singular at pivot column {pivot}")
            }
            FitErr::BadLearningRate { got } => {
                write!(f, "learning rate must be finite and positive, got {got}")
            }
        }
    }
}

impl Error for FitErr {}
