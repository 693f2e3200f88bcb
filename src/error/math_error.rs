#[derive(Debug)]
/// Represents all errors that can occur while computing the value of a
/// well-formed expression.
pub enum MathError {
    /// Attempted division by zero. The divisor is compared against zero
    /// exactly, with no tolerance.
    DivisionByZero,
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero."),
        }
    }
}

impl std::error::Error for MathError {}
