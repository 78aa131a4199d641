use rust_decimal::{Decimal, RoundingStrategy};

/// Dollars with thousands separators and cents, e.g. `-1234.5` → `"-$1,234.50"`.
/// Anything that rounds to zero cents prints without a sign.
pub(crate) fn format_amount(val: Decimal) -> String {
    let cents = round_to(val.abs(), 2);
    let sign = if val.is_sign_negative() && !cents.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{cents:.2}");
    let (dollars, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{frac}", group_thousands(dollars))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format a percentage with one decimal place, e.g. `33.333` → `"33.3%"`.
pub(crate) fn format_percent(val: Decimal) -> String {
    format!("{:.1}%", round_to(val, 1))
}

/// `part` as a percentage of `whole`, saturating at the `Decimal` bounds.
/// Zero when `whole` is not positive.
pub(crate) fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match part.checked_div(whole) {
        Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
        None if part.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
}

/// Round half away from zero, the way people expect money to round.
pub(crate) fn round_to(val: Decimal, dp: u32) -> Decimal {
    val.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Fit `s` into a column `width` characters wide, ending in "…" when cut.
pub(crate) fn clip(s: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if s.char_indices().nth(width).is_none() {
        return s.to_string();
    }
    let end = s
        .char_indices()
        .nth(width - 1)
        .map_or(s.len(), |(i, _)| i);
    format!("{}…", &s[..end])
}

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;
