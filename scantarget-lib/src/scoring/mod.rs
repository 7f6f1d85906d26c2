/// Values strictly above this earn the top multiplier
pub const HIGH_VALUE_THRESHOLD: f64 = 100.0;

/// Values strictly above this (and at most the high threshold) earn the
/// mid multiplier
pub const MID_VALUE_THRESHOLD: f64 = 50.0;

pub const HIGH_VALUE_MULTIPLIER: f64 = 1.5;
pub const MID_VALUE_MULTIPLIER: f64 = 1.2;

/// Calculate the total score for a sequence of values
///
/// Single pass: values above 100 count 1.5 times, values above 50 count
/// 1.2 times, everything else counts unchanged. Both comparisons are
/// strict, so 100 lands in the 1.2 bucket and 50 counts unchanged.
/// An empty slice yields zero.
#[must_use]
pub fn calculate_score(items: &[f64]) -> f64 {
    let mut total = 0.0;
    for &item in items {
        if item > HIGH_VALUE_THRESHOLD {
            total += item * HIGH_VALUE_MULTIPLIER;
        } else if item > MID_VALUE_THRESHOLD {
            total += item * MID_VALUE_MULTIPLIER;
        } else {
            total += item;
        }
    }
    total
}
