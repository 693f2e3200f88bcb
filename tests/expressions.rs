use unical::{
    error::{CalcError, SyntaxError},
    evaluate_expression,
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, numbers, tokenize},
    },
    render,
    util::num::{is_even, is_integral},
};

fn assert_value(source: &str, expected: f64) {
    match evaluate_expression(source) {
        Ok(value) => assert_eq!(value, expected, "Wrong value for {source:?}"),
        Err(e) => panic!("Expression {source:?} failed: {e}"),
    }
}

fn assert_syntax_error(source: &str) -> SyntaxError {
    match evaluate_expression(source) {
        Ok(value) => panic!("Expression {source:?} evaluated to {value} but was expected to fail"),
        Err(CalcError::Syntax(e)) => e,
        Err(CalcError::Math(e)) => panic!("Expression {source:?} failed arithmetically: {e}"),
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("3 + 4 * 2", 11.0);
    assert_value("(3 + 4) * 2", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("2 + 3 * 4 - 5", 9.0);
    assert_value("((1 + 2) * (3 + 4))", 21.0);
    assert_value("2 * (3 + (4 - 1))", 12.0);
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_value("10 - 3 - 4", 3.0);
    assert_value("20 / 4 / 5", 1.0);
    assert_value("7 - 2 + 1", 6.0);
    assert_value("8 / 2 * 4", 16.0);
}

#[test]
fn literals_and_whitespace() {
    assert_value("42", 42.0);
    assert_value("   1.5 +  2.25 ", 3.75);
    assert_value(".5 * 4", 2.0);
    assert_value("0.125 * 8", 1.0);
}

#[test]
fn token_sequences_read_left_to_right() {
    let tokens = tokenize("3 + 4 * 2").unwrap();
    assert_eq!(tokens,
               vec![Token::Number(3.0),
                    Token::Plus,
                    Token::Number(4.0),
                    Token::Star,
                    Token::Number(2.0)]);
    assert_eq!(numbers(&tokens), vec![3.0, 4.0, 2.0]);
}

#[test]
fn tokenizing_is_pure() {
    let first = tokenize("(1 + 2) * 3").unwrap();
    let second = tokenize("(1 + 2) * 3").unwrap();
    assert_eq!(first, second);
}

#[test]
fn all_whitespace_input_tokenizes_empty_and_fails_to_evaluate() {
    assert!(tokenize("   ").unwrap().is_empty());
    assert!(matches!(assert_syntax_error("   "), SyntaxError::MalformedExpression));
    assert!(matches!(assert_syntax_error(""), SyntaxError::MalformedExpression));
}

#[test]
fn division_by_zero_is_a_calculation_error() {
    for source in ["10 / 0", "1 / (2 - 2)", "3 / 0.0"] {
        match evaluate_expression(source) {
            Err(CalcError::Math(e)) => assert_eq!(e.to_string(), "Division by zero."),
            other => panic!("Expected a calculation error for {source:?}, got {other:?}"),
        }
    }
}

#[test]
fn near_zero_divisors_are_not_zero() {
    assert_value("1 / 0.5", 2.0);
}

#[test]
fn invalid_characters_carry_their_offset() {
    let e = assert_syntax_error("3 & 2");
    assert_eq!(e.to_string(), "Invalid character in expression: '&'");
    assert_eq!(e.position(), Some(2));

    let e = assert_syntax_error("1 + pi");
    assert_eq!(e.position(), Some(4));
}

#[test]
fn malformed_numbers_point_at_the_start_of_the_run() {
    let e = assert_syntax_error("1 + 2.3.4");
    assert_eq!(e.to_string(), "Invalid number format: '2.3.4'");
    assert_eq!(e.position(), Some(4));

    let e = assert_syntax_error("..");
    assert_eq!(e.to_string(), "Invalid number format: '..'");
    assert_eq!(e.position(), Some(0));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    let e = assert_syntax_error("(1 + 2");
    assert_eq!(e.to_string(), "Mismatched parentheses: Not all '(' were closed.");
    assert_eq!(e.position(), Some(6));

    let e = assert_syntax_error("1 + 2)");
    assert_eq!(e.to_string(), "Mismatched parentheses: Extra ')' found.");
    assert_eq!(e.position(), Some(5));

    // The balance check trips on the first offending prefix, even when the
    // overall counts would match.
    let e = assert_syntax_error(") 1 (");
    assert_eq!(e.to_string(), "Mismatched parentheses: Extra ')' found.");
    assert_eq!(e.position(), Some(0));
}

#[test]
fn structural_errors_have_no_position() {
    let e = assert_syntax_error("5 +");
    assert_eq!(e.to_string(), "Malformed expression: Operator is missing an operand.");
    assert_eq!(e.position(), None);

    let e = assert_syntax_error("* 5");
    assert_eq!(e.to_string(), "Malformed expression: Operator is missing an operand.");
    assert_eq!(e.position(), None);

    let e = assert_syntax_error("3 4");
    assert_eq!(e.to_string(), "Malformed expression: Check operators and operands.");
    assert_eq!(e.position(), None);

    assert!(matches!(assert_syntax_error("()"), SyntaxError::MalformedExpression));
}

#[test]
fn evaluator_defends_against_hand_built_sequences() {
    // Sequences like these never come out of the tokenizer, but evaluate()
    // must degrade to an error rather than panic on them.
    let result = evaluate(&[Token::Number(1.0), Token::RParen]);
    assert!(matches!(result, Err(CalcError::Syntax(SyntaxError::MissingOperand))));

    let result = evaluate(&[Token::Number(1.0), Token::LParen, Token::Number(2.0)]);
    assert!(matches!(result,
                     Err(CalcError::Syntax(SyntaxError::MalformedExpression))));
}

#[test]
fn list_rendering_matches_the_console_format() {
    let tokens = tokenize("(3 + 4) * 2").unwrap();
    assert_eq!(render::as_list(&tokens), "[(, 3, +, 4, ), *, 2]");
    assert_eq!(render::as_list(&Vec::<f64>::new()), "[]");
}

#[test]
fn link_rendering_matches_the_console_format() {
    let tokens = tokenize("1 + 2").unwrap();
    assert_eq!(render::as_links(&tokens), "1 -> + -> 2 -> null");
    assert_eq!(render::as_links(&Vec::<f64>::new()), "null");
}

#[test]
fn parity_partition_skips_fractional_numbers() {
    let (evens, odds) = render::partition_by_parity(&[3.0, 4.0, 2.5, -2.0, -3.0, 0.0]);
    assert_eq!(evens, vec![4.0, -2.0, 0.0]);
    assert_eq!(odds, vec![3.0, -3.0]);
}

#[test]
fn near_integers_stay_out_of_both_groups() {
    assert!(!is_integral(1.9999999999999998));

    let (evens, odds) = render::partition_by_parity(&[1.9999999999999998]);
    assert!(evens.is_empty());
    assert!(odds.is_empty());
}

#[test]
fn parity_handles_negative_numbers() {
    assert!(is_even(-4.0));
    assert!(!is_even(-3.0));
    assert!(is_even(0.0));
}

#[test]
fn queue_sink_honors_capacity() {
    let queues = render::sink_into_queues(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
    assert_eq!(queues.len(), 3);
    assert_eq!(queues[0], [1.0, 2.0]);
    assert_eq!(queues[1], [3.0, 4.0]);
    assert_eq!(queues[2], [5.0]);

    assert!(render::sink_into_queues(&[1.0, 2.0], 0).is_empty());
    assert!(render::sink_into_queues(&[], 3).is_empty());
}

#[test]
fn caret_diagnostics_line_up_with_the_offset() {
    let rendered = render::caret_diagnostic("3 & 2", 2);
    assert_eq!(rendered, "Input: 3 & 2\n         ^");
}
