use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use clap::Parser;
use unical::{
    error::CalcError,
    evaluate_expression,
    interpreter::{
        evaluator::evaluate,
        lexer::{Token, numbers, tokenize},
    },
    render,
};

/// unical is an interactive console calculator for arithmetic expressions
/// with `+ - * /`, parentheses, and decimal numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate a single expression, print its value and exit.
    #[arg(short, long)]
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(source) = args.expression {
        match evaluate_expression(&source) {
            Ok(value) => println!("{value}"),
            Err(e) => {
                report_failure(&source, &e);
                std::process::exit(1);
            },
        }
        return;
    }

    println!("\n--- Starting Unified Console Calculator ---");
    println!("Welcome to the Unified Calculator!");
    run(&mut io::stdin().lock());
    println!("\nThank you for using the Unified Calculator. Goodbye!");
}

/// Drives the interactive session: read an expression, then let the user
/// pick representations of it until a new expression or quit is chosen.
fn run(input: &mut impl BufRead) {
    loop {
        let Some((tokens, result)) = read_expression(input) else {
            return;
        };
        if !choose_representation(input, &tokens, result) {
            return;
        }
    }
}

/// Prompts until a line tokenizes and evaluates, returning its token
/// sequence and value. Returns `None` when the session ends, either by
/// request or because the input is exhausted.
fn read_expression(input: &mut impl BufRead) -> Option<(Vec<Token>, f64)> {
    loop {
        prompt("\nEnter a mathematical expression (or type 'exit' to quit): ");

        let line = read_line(input)?;
        let source = line.trim();
        if source.eq_ignore_ascii_case("exit") || source.eq_ignore_ascii_case("quit") {
            println!("\n--- Console Calculator Exited ---");
            return None;
        }

        let outcome = tokenize(source).map_err(CalcError::from)
                                      .and_then(|tokens| {
                                          evaluate(&tokens).map(|value| (tokens, value))
                                      });
        match outcome {
            Ok((tokens, value)) => {
                println!("Expression is valid and computable.");
                return Some((tokens, value));
            },
            Err(e) => {
                report_failure(source, &e);
                println!("Please try again.");
            },
        }
    }
}

/// Prints a failed expression the way the console reports it: the error
/// category and message, and a caret under the offending character when the
/// error carries a position.
fn report_failure(source: &str, error: &CalcError) {
    match error {
        CalcError::Syntax(e) => {
            println!("Syntax Error: {e}");
            if let Some(position) = e.position() {
                println!("{}", render::caret_diagnostic(source, position));
            }
        },
        CalcError::Math(e) => {
            println!("Calculation Error: {e}");
            println!("Input: {source}");
            println!("This expression cannot be computed.");
        },
    }
}

/// Presents the representation menu for a computed expression. Returns
/// `false` when the user quits the program, `true` when a new expression
/// should be read.
fn choose_representation(input: &mut impl BufRead, tokens: &[Token], result: f64) -> bool {
    let all_numbers = numbers(tokens);
    let (even_numbers, odd_numbers) = render::partition_by_parity(&all_numbers);

    loop {
        println!("\nWhat would you like to do with this expression?");
        println!("1. Represent as a linked list (with link format)");
        println!("2. Represent as a queue (with 'Queue Sink')");
        println!("3. Represent as a simple list");
        println!("4. Enter a new expression");
        println!("5. Quit (Exit Program)");
        prompt("Enter your choice (1-5): ");

        let Some(choice) = read_line(input) else {
            return false;
        };
        match choice.trim().parse::<u32>() {
            Ok(1) => linked_mode(tokens, &even_numbers, &odd_numbers, result),
            Ok(2) => queue_mode(input,
                                tokens,
                                &all_numbers,
                                &even_numbers,
                                &odd_numbers,
                                result),
            Ok(3) => list_mode(tokens, &even_numbers, &odd_numbers, result),
            Ok(4) => return true,
            Ok(5) => {
                println!("\n--- Console Calculator Exited ---");
                return false;
            },
            Ok(_) => {
                println!("Invalid choice. Please select 1-5.");
                continue;
            },
            Err(_) => {
                println!("Invalid input. Please enter a number for your choice or capacity.");
                continue;
            },
        }
        println!("----------------------------------------");
    }
}

fn list_mode(tokens: &[Token], even_numbers: &[f64], odd_numbers: &[f64], result: f64) {
    println!("\nRepresentation: {}", render::as_list(tokens));
    println!("Result: {result}");
    println!("Even Numbers: {}", render::as_list(even_numbers));
    println!("Odd Numbers: {}", render::as_list(odd_numbers));
}

fn linked_mode(tokens: &[Token], even_numbers: &[f64], odd_numbers: &[f64], result: f64) {
    println!();
    println!("Representation: {}", render::as_links(tokens));
    println!("Result: {result}");
    println!("Even Numbers: {}", render::as_links(even_numbers));
    println!("Odd Numbers: {}", render::as_links(odd_numbers));
}

fn queue_mode(input: &mut impl BufRead,
              tokens: &[Token],
              all_numbers: &[f64],
              even_numbers: &[f64],
              odd_numbers: &[f64],
              result: f64) {
    prompt("Enter capacity for input number queues: ");
    let Some(input_capacity) = read_capacity(input) else {
        return;
    };
    prompt("Enter capacity for even/odd queues: ");
    let Some(even_odd_capacity) = read_capacity(input) else {
        return;
    };

    println!("\nSinking all numbers from the expression into queues of capacity {input_capacity}...");
    let input_queues = render::sink_into_queues(all_numbers, input_capacity);
    println!("Sinking even/odd numbers into separate queues of capacity {even_odd_capacity}...");
    let even_queues = render::sink_into_queues(even_numbers, even_odd_capacity);
    let odd_queues = render::sink_into_queues(odd_numbers, even_odd_capacity);

    println!("\nFull Expression Queue: {}", render::as_list(tokens));
    println!("Result: {result}");
    println!("\n--- Queue Sink Results ---");
    println!("Input Number Queues (Capacity: {input_capacity}):");
    print_queue_list(&input_queues);
    println!("Even Number Queues (Capacity: {even_odd_capacity}):");
    print_queue_list(&even_queues);
    println!("Odd Number Queues (Capacity: {even_odd_capacity}):");
    print_queue_list(&odd_queues);
}

fn print_queue_list(queues: &[VecDeque<f64>]) {
    if queues.is_empty() {
        println!("  [None]");
        return;
    }
    for (i, queue) in queues.iter().enumerate() {
        println!("  Queue {}: {}", i + 1, render::as_list(queue));
    }
}

/// Reads a queue capacity, reporting invalid input the same way as an
/// invalid menu choice.
fn read_capacity(input: &mut impl BufRead) -> Option<usize> {
    let line = read_line(input)?;
    match line.trim().parse() {
        Ok(capacity) => Some(capacity),
        Err(_) => {
            println!("Invalid input. Please enter a number for your choice or capacity.");
            None
        },
    }
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

/// Reads one line, returning `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Option<String> {
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}
