// Recursive factorial for the demo menu; anything below two collapses to one.
pub(crate) fn factorial(n: i64) -> u128 {
    if n <= 1 {
        1
    } else {
        n as u128 * factorial(n - 1)
    }
}
