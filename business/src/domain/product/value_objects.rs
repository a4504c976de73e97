use std::str::FromStr;
use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use super::errors::ProductError;

/// Plain digits with an optional fraction. Exponents and signs are refused,
/// so a stored price always has a bounded number of digits.
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,12}(\.[0-9]{1,6})?$").expect("valid price pattern")
});

/// Parses a price typed by a person. Prices are non-negative decimals.
pub fn parse_price(raw: &str) -> Result<BigDecimal, ProductError> {
    let raw = raw.trim();
    if !PRICE_PATTERN.is_match(raw) {
        return Err(ProductError::InvalidPrice);
    }
    BigDecimal::from_str(raw).map_err(|_| ProductError::InvalidPrice)
}

/// Parses a stock level typed by a person. Stock is a non-negative integer.
pub fn parse_stock(raw: &str) -> Result<u32, ProductError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ProductError::InvalidStock)
}
