/// Returns `true` when `value` has no fractional part.
///
/// The test is the exact `% 1.0` remainder. Values that merely sit close to
/// an integer, such as `1.9999999999999998`, are classified as fractional.
///
/// # Example
/// ```
/// use unical::util::num::is_integral;
///
/// assert!(is_integral(4.0));
/// assert!(is_integral(-3.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(1.9999999999999998));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value % 1.0 == 0.0
}

/// Returns `true` when the integer part of `value` is divisible by two.
///
/// Only meaningful for values that pass [`is_integral`]; the fractional
/// part, if any, is discarded by the truncating cast.
///
/// # Example
/// ```
/// use unical::util::num::is_even;
///
/// assert!(is_even(4.0));
/// assert!(is_even(0.0));
/// assert!(!is_even(-3.0));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn is_even(value: f64) -> bool {
    (value as i64) % 2 == 0
}
