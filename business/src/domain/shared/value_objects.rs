use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

/// Number of decimals used whenever an amount is shown to a person.
pub const MONEY_SCALE: i64 = 2;

/// Formats an amount with two decimals, rounding half away from zero.
///
/// `5` becomes `"5.00"`, `2.345` becomes `"2.35"`.
pub fn format_money(amount: &BigDecimal) -> String {
    amount
        .with_scale_round(MONEY_SCALE, RoundingMode::HalfUp)
        .to_string()
}

/// Sums a sequence of amounts, starting from zero.
pub fn sum_money<'a>(amounts: impl IntoIterator<Item = &'a BigDecimal>) -> BigDecimal {
    amounts
        .into_iter()
        .fold(BigDecimal::zero(), |acc, amount| acc + amount)
}

/// Normalizes optional free-text input: blank strings become `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
