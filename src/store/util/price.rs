//! helpers for currency-prefixed price strings

pub(crate) const CURRENCY_PREFIX: &str = "AED";

/// Numeric part of a price string such as "AED 100". The first
/// contiguous digit run counts; a string without digits is worth 0.
pub(crate) fn numeric_value(price: &str) -> u32 {
    let digits: String = price
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Render an amount the way the backend renders lesson prices.
pub(crate) fn format_amount(amount: u32) -> String {
    format!("{} {}", CURRENCY_PREFIX, amount)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_the_backend_format() {
        assert_eq!(numeric_value("AED 100"), 100);
        assert_eq!(numeric_value("AED 5"), 5);
    }

    #[test]
    fn tolerates_other_prefixes_and_junk() {
        assert_eq!(numeric_value("USD 70"), 70);
        assert_eq!(numeric_value("  90"), 90);
        assert_eq!(numeric_value("AED 120 per term"), 120);
        assert_eq!(numeric_value("free"), 0);
        assert_eq!(numeric_value(""), 0);
    }

    #[test]
    fn formats_with_the_currency_prefix() {
        assert_eq!(format_amount(245), "AED 245");
        assert_eq!(format_amount(0), "AED 0");
    }
}
