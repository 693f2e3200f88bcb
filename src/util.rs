/// Numeric classification helpers.
///
/// This module provides the predicates used to group the numbers of an
/// expression for display. They classify values only; they never change
/// them, and they play no part in evaluation.
pub mod num;
