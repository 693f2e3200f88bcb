//! # unical
//!
//! unical is a console calculator for infix arithmetic expressions.
//! It tokenizes raw text into numbers, operators and parentheses, evaluates
//! the token sequence with a two-stack precedence algorithm, and reports
//! syntax errors together with the exact character offset that caused them.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{evaluator::evaluate, lexer::tokenize},
};

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while turning an
/// expression into a value. It standardizes error reporting and carries the
/// character offset of the failure where one exists, so callers can point at
/// the offending character in the original input.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator, arithmetic).
/// - Attaches character offsets and user-facing messages.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression-processing pipeline.
///
/// This module ties together the lexer and the evaluator to provide the
/// complete path from raw expression text to a numeric result. The token
/// sequence produced by the lexer is the sole interface between the two
/// phases.
///
/// # Responsibilities
/// - Coordinates the core components: lexer and evaluator.
/// - Provides entry points for tokenizing and evaluating user input.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Formats expressions and results for console presentation.
///
/// This module contains the pure formatting primitives the console binary
/// prints with: plain list rendering, linked-chain rendering, fixed-capacity
/// queue chunking, even/odd partitioning of the numeric tokens, and the
/// caret diagnostic that points at a failing character.
///
/// # Responsibilities
/// - Renders token sequences and number groups in the supported styles.
/// - Splits numbers into capacity-bounded display queues.
/// - Builds position-pointing diagnostics for failed input.
pub mod render;
/// General utilities for numeric classification.
///
/// This module provides the small predicates used when grouping the numbers
/// of an expression for display, kept separate from the evaluator because
/// they have no bearing on the computed result.
///
/// # Responsibilities
/// - Decides whether a floating-point value counts as integral.
/// - Decides the parity of an integral value.
pub mod util;

/// Tokenizes and evaluates a full expression in one call.
///
/// This is the main entry point for callers that only need the numeric value
/// of an expression. The tokenizer and evaluator can also be driven
/// separately through [`interpreter::lexer::tokenize`] and
/// [`interpreter::evaluator::evaluate`] when the token sequence itself is of
/// interest, e.g. for display.
///
/// # Errors
/// Returns a [`CalcError`] when the expression is lexically or structurally
/// invalid, or when it divides by zero.
///
/// # Examples
/// ```
/// use unical::evaluate_expression;
///
/// let value = evaluate_expression("3 + 4 * 2").unwrap();
/// assert_eq!(value, 11.0);
///
/// // Division by zero is reported as an error, not a panic.
/// assert!(evaluate_expression("10 / 0").is_err());
/// ```
pub fn evaluate_expression(source: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(source)?;
    evaluate(&tokens)
}
