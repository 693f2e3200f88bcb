use std::{collections::VecDeque, fmt::Display};

use crate::util::num;

/// Renders items the way a plain list prints, e.g. `[3, +, 4]`.
#[must_use]
pub fn as_list<I>(items: I) -> String
    where I: IntoIterator,
          I::Item: Display
{
    let items: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Renders items as a chain of links terminated by `null`,
/// e.g. `3 -> + -> 4 -> null`. An empty collection renders as `null`.
#[must_use]
pub fn as_links<I>(items: I) -> String
    where I: IntoIterator,
          I::Item: Display
{
    let mut links: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    links.push("null".to_owned());
    links.join(" -> ")
}

/// Splits the integral numbers of a group into even and odd sub-groups,
/// preserving order.
///
/// A number only takes part in the split when its fractional part is exactly
/// zero; `2.5` lands in neither group. See [`num::is_integral`] for the
/// exactness of that test.
#[must_use]
pub fn partition_by_parity(group: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut evens = Vec::new();
    let mut odds = Vec::new();

    for &number in group {
        if !num::is_integral(number) {
            continue;
        }
        if num::is_even(number) {
            evens.push(number);
        } else {
            odds.push(number);
        }
    }

    (evens, odds)
}

/// Sinks numbers into fixed-capacity queues, opening a fresh queue whenever
/// the last one is full. A capacity of zero yields no queues at all.
#[must_use]
pub fn sink_into_queues(numbers: &[f64], capacity: usize) -> Vec<VecDeque<f64>> {
    let mut queues: Vec<VecDeque<f64>> = Vec::new();
    if capacity == 0 {
        return queues;
    }

    for &number in numbers {
        if queues.last().is_none_or(|queue| queue.len() >= capacity) {
            queues.push(VecDeque::new());
        }
        if let Some(queue) = queues.last_mut() {
            queue.push_back(number);
        }
    }

    queues
}

/// Builds the two-line diagnostic that points at a failing character: the
/// original input prefixed with `Input: `, and a caret aligned under the
/// character offset the error reported.
#[must_use]
pub fn caret_diagnostic(source: &str, position: usize) -> String {
    let mut out = format!("Input: {source}\n");
    out.push_str(&" ".repeat("Input: ".len() + position));
    out.push('^');
    out
}
