//! Expense display formatting
//!
//! Amounts are shown with two decimals and a currency symbol; list dates use
//! a long form such as `January 2nd, 2024`.

use chrono::{Datelike, NaiveDateTime};

/// Format an amount with two decimals, e.g. `$4.50` or `-$3.25`
pub fn format_amount(amount: f64, symbol: &str) -> String {
    if amount == 0.0 {
        format!("{}0.00", symbol)
    } else if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Long date with an ordinal day, e.g. `January 2nd, 2024`
pub fn format_long_date(date: NaiveDateTime) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Truncate a string to at most `max_chars` characters
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(4.5, "$"), "$4.50");
        assert_eq!(format_amount(0.0, "$"), "$0.00");
        assert_eq!(format_amount(1234.567, "€"), "€1234.57");
        assert_eq!(format_amount(-3.25, "$"), "-$3.25");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_amount(-0.0, "$"), "$0.00");
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(date(2024, 1, 2)), "January 2nd, 2024");
        assert_eq!(format_long_date(date(2024, 3, 1)), "March 1st, 2024");
        assert_eq!(format_long_date(date(2024, 3, 11)), "March 11th, 2024");
        assert_eq!(format_long_date(date(2024, 3, 13)), "March 13th, 2024");
        assert_eq!(format_long_date(date(2024, 3, 23)), "March 23rd, 2024");
        assert_eq!(format_long_date(date(2024, 3, 31)), "March 31st, 2024");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Coffee", 10), "Coffee");
        assert_eq!(truncate("Weekly groceries", 8), "Weekly …");
        assert_eq!(truncate("Café au lait", 5), "Café…");
    }
}
