use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token in an arithmetic expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens such as `42`, `3.14` or `.5`.
    ///
    /// The pattern accepts any run of digits and dots, so a malformed
    /// literal like `1.2.3` surfaces as a single invalid-number error
    /// covering the whole run instead of tokenizing as two adjacent numbers.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the slice is a valid number.
/// - `None`: If the run of digits and dots is not a valid number, which
///   turns the whole run into an error token.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Converts an expression into its token sequence.
///
/// The input is scanned left to right. Whitespace is skipped, numeric
/// literals are parsed as floating-point values, and the six symbols
/// `+ - * / ( )` become their own tokens. Parenthesis balance is validated
/// during the scan: a `)` that closes nothing fails immediately at its
/// offset, and a `(` still open at the end of the input fails at the input
/// length.
///
/// Tokenizing is a pure function of its input; the same text always yields
/// the same sequence.
///
/// # Parameters
/// - `source`: The raw expression text, one expression per call.
///
/// # Returns
/// The token sequence in left-to-right reading order. All-whitespace input
/// yields an empty sequence.
///
/// # Errors
/// Returns a [`SyntaxError`] carrying the character offset of the first
/// invalid character, malformed numeric literal, or unbalanced parenthesis.
///
/// # Examples
/// ```
/// use unical::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("3 + 4").unwrap();
/// assert_eq!(tokens, vec![Token::Number(3.0), Token::Plus, Token::Number(4.0)]);
///
/// let error = tokenize("3 & 2").unwrap_err();
/// assert_eq!(error.position(), Some(2));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut depth: usize = 0;
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(token) => {
                match token {
                    Token::LParen => depth += 1,
                    Token::RParen => {
                        if depth == 0 {
                            return Err(SyntaxError::UnmatchedCloseParen { position });
                        }
                        depth -= 1;
                    },
                    _ => {},
                }
                tokens.push(token);
            },
            Err(()) => return Err(reject(lexer.slice(), position)),
        }
    }

    if depth != 0 {
        return Err(SyntaxError::UnclosedParen { position: source.len() });
    }

    Ok(tokens)
}

/// Collects the numeric tokens of a sequence in their original order.
///
/// The presentation layer groups and chunks the numbers of an expression;
/// this is the hand-off point for that data.
#[must_use]
pub fn numbers(tokens: &[Token]) -> Vec<f64> {
    tokens.iter()
          .filter_map(|token| match token {
              Token::Number(value) => Some(*value),
              _ => None,
          })
          .collect()
}

/// Classifies a slice the lexer could not turn into a token.
///
/// A run starting with a digit or a dot is a malformed numeric literal;
/// anything else is a character outside the expression alphabet.
fn reject(slice: &str, position: usize) -> SyntaxError {
    match slice.chars().next() {
        Some(c) if c.is_ascii_digit() || c == '.' => {
            SyntaxError::InvalidNumber { literal: slice.to_owned(),
                                         position }
        },
        Some(character) => SyntaxError::InvalidCharacter { character, position },
        // The lexer never produces an empty error slice.
        None => SyntaxError::MalformedExpression,
    }
}
