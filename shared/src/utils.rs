// Formatting helpers shared by the engine and the GUI.

// Indonesian (id-ID) number and Rupiah formatting.
// Output matches the ICU rendering of `Intl.NumberFormat("id-ID")`: "." groups thousands,
// whole Rupiah only, and the "Rp" symbol is followed by a no-break space.
pub mod indonesian_format {
    use serde::{Deserialize, Serialize};

    pub const NO_BREAK_SPACE: &str = "\u{a0}";

    /// Parses a run of ASCII digits, skipping anything else.
    ///
    /// An empty or digit-free string is 0. Returns `None` when the amount does not fit in a `u64`.
    pub fn parse_digits(s: &str) -> Option<u64> {
        s.bytes()
            .filter(u8::is_ascii_digit)
            .try_fold(0u64, |acc, b| acc.checked_mul(10)?.checked_add(u64::from(b - b'0')))
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CurrencyFormat {
        pub locale: String,
        pub currency_code: String,
        pub symbol: String,
        pub symbol_separator: String, // Should be char, but JSON string is easier
        pub grouping_separator: String,
    }

    impl Default for CurrencyFormat {
        fn default() -> Self {
            Self {
                locale: "id-ID".to_string(),
                currency_code: "IDR".to_string(),
                symbol: "Rp".to_string(),
                symbol_separator: NO_BREAK_SPACE.to_string(),
                grouping_separator: ".".to_string(),
            }
        }
    }

    impl CurrencyFormat {
        /// `1000000` -> `"1.000.000"`
        pub fn format_grouped(&self, value: u64) -> String {
            let digits = value.to_string();
            let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * self.grouping_separator.len());
            for (idx, ch) in digits.chars().enumerate() {
                if idx > 0 && (digits.len() - idx) % 3 == 0 {
                    grouped.push_str(&self.grouping_separator);
                }
                grouped.push(ch);
            }
            grouped
        }

        /// Text shown in the editable amount field.
        ///
        /// Nothing typed renders as `""` rather than `"0"`; anything else is the grouped value,
        /// so `"000"` shows as `"0"` and `"0075"` as `"75"`.
        pub fn format_input(&self, raw_digits: &str) -> String {
            if !raw_digits.bytes().any(|b| b.is_ascii_digit()) {
                return String::new();
            }
            // Past u64::MAX the field shows the saturated amount. The next keystroke submits that
            // text, so the canonical digits settle on u64::MAX and the overflow digits are gone.
            self.format_grouped(parse_digits(raw_digits).unwrap_or(u64::MAX))
        }

        /// `1250000` -> `"Rp\u{a0}1.250.000"`, never with fractional digits.
        pub fn format_currency(&self, value: u64) -> String {
            format!("{}{}{}", self.symbol, self.symbol_separator, self.format_grouped(value))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_digits() {
            assert_eq!(parse_digits(""), Some(0));
            assert_eq!(parse_digits("000"), Some(0));
            assert_eq!(parse_digits("1.250.000"), Some(1_250_000));
            assert_eq!(parse_digits("18446744073709551615"), Some(u64::MAX));
            assert_eq!(parse_digits("18446744073709551616"), None);
        }

        #[test]
        fn test_format_grouped() {
            let fmt = CurrencyFormat::default();
            assert_eq!(fmt.format_grouped(0), "0");
            assert_eq!(fmt.format_grouped(999), "999");
            assert_eq!(fmt.format_grouped(1000), "1.000");
            assert_eq!(fmt.format_grouped(1_000_000), "1.000.000");
            assert_eq!(fmt.format_grouped(12_345_678), "12.345.678");
            assert_eq!(fmt.format_grouped(u64::MAX), "18.446.744.073.709.551.615");
        }

        #[test]
        fn test_format_input_empty_is_blank() {
            let fmt = CurrencyFormat::default();
            assert_eq!(fmt.format_input(""), "");
        }

        #[test]
        fn test_format_input_groups_without_symbol() {
            let fmt = CurrencyFormat::default();
            let shown = fmt.format_input("1000000");
            assert_eq!(shown, "1.000.000");
            assert!(!shown.contains("Rp"));
        }

        #[test]
        fn test_format_input_zero_digits() {
            let fmt = CurrencyFormat::default();
            assert_eq!(fmt.format_input("000"), "0");
            assert_eq!(fmt.format_input("0075"), "75");
        }

        #[test]
        fn test_format_input_saturates_and_stays_there() {
            let fmt = CurrencyFormat::default();
            let shown = fmt.format_input("99999999999999999999999");
            assert_eq!(shown, "18.446.744.073.709.551.615");

            // Typing another digit re-submits the saturated text plus the keystroke.
            let resubmitted = format!("{}9", shown);
            assert_eq!(parse_digits(&resubmitted), None);
            assert_eq!(fmt.format_input(&resubmitted), shown);
            assert_eq!(parse_digits(&shown), Some(u64::MAX));
        }

        #[test]
        fn test_format_currency() {
            let fmt = CurrencyFormat::default();
            assert_eq!(fmt.format_currency(0), "Rp\u{a0}0");
            assert_eq!(fmt.format_currency(11_000), "Rp\u{a0}11.000");
            assert_eq!(fmt.format_currency(1_250_000), "Rp\u{a0}1.250.000");
            assert!(!fmt.format_currency(137_500).contains(','));
        }

        #[test]
        fn test_custom_separators() {
            let fmt = CurrencyFormat {
                symbol_separator: " ".to_string(),
                grouping_separator: "\u{2009}".to_string(),
                ..CurrencyFormat::default()
            };
            assert_eq!(fmt.format_currency(5000), "Rp 5\u{2009}000");
        }
    }
}
