//! Numerology life path from a date string.

/// Values that stop the reduction even though they exceed 9
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Life path for a date such as `1990-05-15`.
///
/// Non-digit characters are ignored. The digit sum is reduced by summing its
/// decimal digits until it is a single digit or a master number. Returns
/// `None` when the input contains no digits.
pub fn life_path(date_of_birth: &str) -> Option<u32> {
    let digits: Vec<u32> = date_of_birth.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return None;
    }

    let mut sum: u32 = digits.iter().sum();
    while sum > 9 && !MASTER_NUMBERS.contains(&sum) {
        sum = digit_sum(sum);
    }
    Some(sum)
}

fn digit_sum(mut value: u32) -> u32 {
    let mut total = 0;
    while value > 0 {
        total += value % 10;
        value /= 10;
    }
    total
}
