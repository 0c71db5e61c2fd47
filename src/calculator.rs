/// Returns the sum of two 32-bit integers with two's-complement
/// wraparound, so `add(i32::MAX, 1)` is `i32::MIN` rather than a panic.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Returns the product of two floats under the usual IEEE-754 rules.
pub fn multiply(x: f64, y: f64) -> f64 {
    x * y
}

/// Prefixes a message with the `Message: ` label.
pub fn format_message(message: &str) -> String {
    format!("Message: {message}")
}
