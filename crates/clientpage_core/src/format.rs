/// Insert thousands separators into a run of ASCII digits
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub const UNAVAILABLE_AMOUNT: &str = "$--";

/// Format a value as US-dollar currency, e.g. `$1,234.50` or `-$12.00`
///
/// Non-finite values, and values too large to count in cents, render as
/// [`UNAVAILABLE_AMOUNT`].
pub fn format_currency(value: f64) -> String {
    // Round to whole cents first so 0.999 becomes $1.00, not $0.100
    let scaled = (value.abs() * 100.0).round();
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return UNAVAILABLE_AMOUNT.to_string();
    }
    let total_cents = scaled as u64;
    let dollars = group_thousands(&(total_cents / 100).to_string());
    let cents = total_cents % 100;

    if value.is_sign_negative() && total_cents > 0 {
        format!("-${dollars}.{cents:02}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}
