use crate::{
    error::{CalcError, MathError, SyntaxError},
    interpreter::lexer::Token,
};

/// Result type used by the evaluator.
///
/// Evaluation functions return either a value of type `T` or a [`CalcError`]
/// describing the failure.
pub type EvalResult<T> = Result<T, CalcError>;

/// Reduces a token sequence to a single numeric value.
///
/// The evaluator runs a two-stack pass: numbers are pushed onto a value
/// stack, operators onto an operator stack, and operators are applied as
/// soon as precedence or a closing parenthesis demands it. Operators of
/// equal precedence apply left to right. No syntax tree is built.
///
/// The tokenizer guarantees balanced parentheses, but the evaluator still
/// checks every stack access so that hand-built sequences degrade to typed
/// errors instead of panics.
///
/// # Parameters
/// - `tokens`: Token sequence in left-to-right reading order.
///
/// # Returns
/// The numeric value of the expression.
///
/// # Errors
/// - [`SyntaxError::MissingOperand`] when an operator has fewer than two
///   operands available.
/// - [`SyntaxError::MalformedExpression`] when operands or operators are
///   left over once the input is exhausted. The empty sequence fails this
///   way.
/// - [`MathError::DivisionByZero`] when a divisor is exactly zero.
///
/// # Examples
/// ```
/// use unical::interpreter::{evaluator::evaluate, lexer::tokenize};
///
/// let tokens = tokenize("(3 + 4) * 2").unwrap();
/// assert_eq!(evaluate(&tokens).unwrap(), 14.0);
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    let mut values: Vec<f64> = Vec::new();
    let mut ops: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(value) => values.push(*value),
            Token::LParen => ops.push(*token),
            Token::RParen => loop {
                match ops.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => apply_top(op, &mut values)?,
                    // Ran out of operators before reaching a '('.
                    None => return Err(SyntaxError::MissingOperand.into()),
                }
            },
            op => {
                while let Some(top) = ops.last().copied() {
                    if !outranks(top, *op) {
                        break;
                    }
                    ops.pop();
                    apply_top(top, &mut values)?;
                }
                ops.push(*op);
            },
        }
    }

    while let Some(op) = ops.pop() {
        apply_top(op, &mut values)?;
    }

    if let [value] = values[..] {
        Ok(value)
    } else {
        Err(SyntaxError::MalformedExpression.into())
    }
}

/// Pops two operands, applies `op`, and pushes the result back.
///
/// The right operand sits above the left one, so `b` is popped first. A
/// stack with fewer than two values means `op` is missing an operand.
fn apply_top(op: Token, values: &mut Vec<f64>) -> EvalResult<()> {
    let b = values.pop().ok_or(SyntaxError::MissingOperand)?;
    let a = values.pop().ok_or(SyntaxError::MissingOperand)?;
    values.push(apply(op, a, b)?);
    Ok(())
}

/// Computes `a op b` for a binary operator token.
fn apply(op: Token, a: f64, b: f64) -> EvalResult<f64> {
    match op {
        Token::Plus => Ok(a + b),
        Token::Minus => Ok(a - b),
        Token::Star => Ok(a * b),
        Token::Slash => {
            if b == 0.0 {
                return Err(MathError::DivisionByZero.into());
            }
            Ok(a / b)
        },
        // A parenthesis or number can only end up here through a sequence
        // that never passed the tokenizer's balance check.
        _ => Err(SyntaxError::MalformedExpression.into()),
    }
}

/// Numeric binding strength of a binary operator.
/// Parentheses and numbers never bind and rank below every operator.
const fn precedence(op: Token) -> u8 {
    match op {
        Token::Plus | Token::Minus => 1,
        Token::Star | Token::Slash => 2,
        _ => 0,
    }
}

/// Whether the operator on top of the stack must apply before `incoming` is
/// pushed. A `(` on top always stops the drain; draining on equal
/// precedence keeps operators of the same rank left-associative.
const fn outranks(top: Token, incoming: Token) -> bool {
    !matches!(top, Token::LParen | Token::RParen) && precedence(incoming) <= precedence(top)
}
