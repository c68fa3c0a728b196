//! Minor-unit price formatting for display surfaces.

/// Format a minor-unit price as a whole-major-unit display string, e.g.
/// `format_price(12_500, "USD")` → `"$125"`.
///
/// Rounds to the nearest major unit, half away from zero. Currencies without
/// a known symbol render as `"<CODE> <amount>"`.
#[must_use]
pub fn format_price(cents: i64, currency: &str) -> String {
    let major = (cents.unsigned_abs() + 50) / 100;
    let amount = group_thousands(major);
    let sign = if cents < 0 { "-" } else { "" };
    match currency {
        "USD" => format!("{sign}${amount}"),
        "EUR" => format!("{sign}€{amount}"),
        "GBP" => format!("{sign}£{amount}"),
        code => format!("{sign}{code} {amount}"),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn formats_usd_whole_units() {
        assert_eq!(format_price(12_500, "USD"), "$125");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_price(12_550, "USD"), "$126");
        assert_eq!(format_price(12_549, "USD"), "$125");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_price(125_000_000, "USD"), "$1,250,000");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_price(-500, "USD"), "-$5");
    }

    #[test]
    fn unknown_currency_uses_code() {
        assert_eq!(format_price(9_900, "SEK"), "SEK 99");
    }
}
