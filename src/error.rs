/// Syntax errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// while checking its structure during evaluation. Syntax errors include
/// invalid characters, malformed numeric literals, unbalanced parentheses,
/// and operators left without their operands.
pub mod syntax_error;

/// Arithmetic errors.
///
/// Contains the error types that can be raised while computing the value of
/// an otherwise well-formed expression, such as division by zero.
pub mod math_error;

pub use math_error::MathError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// Represents any failure of the expression pipeline.
///
/// Syntax and calculation failures are kept apart because callers present
/// them differently: a syntax error may point at a character offset in the
/// input, while a calculation failure describes a numeric condition in input
/// that parsed cleanly.
pub enum CalcError {
    /// The expression is lexically or structurally invalid.
    Syntax(SyntaxError),
    /// The expression is valid but its value cannot be computed.
    Math(MathError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Math(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Math(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for CalcError {
    fn from(error: SyntaxError) -> Self {
        Self::Syntax(error)
    }
}

impl From<MathError> for CalcError {
    fn from(error: MathError) -> Self {
        Self::Math(error)
    }
}
