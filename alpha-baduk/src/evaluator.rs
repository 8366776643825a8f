use std::{
    error::Error,
    fmt::{self, Display},
};

use crate::tensor::Tensor;

/// Output of one evaluator query: a prior probability for every move
/// index of the encoding, and a position value in `[-1, 1]` from the
/// perspective of the player to move.
#[derive(Clone, Debug)]
pub struct Evaluation {
    pub priors: Vec<f32>,
    pub value: f32,
}

/// A move evaluator the search can query. Implementations wrap
/// whatever produces priors and values, typically a neural network
/// behind some transport.
pub trait Evaluator {
    fn evaluate(&self, input: &Tensor) -> Result<Evaluation, EvalError>;
}

/// An evaluator query failed. Wraps the underlying transport or model
/// error so search callers can give up on the move cleanly.
#[derive(Debug)]
pub struct EvalError(Box<dyn Error + Send + Sync>);

impl EvalError {
    pub fn new(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        EvalError(source.into())
    }
}

impl Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evaluator failed: {}", self.0)
    }
}

impl Error for EvalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }
}
