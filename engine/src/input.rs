//! Input sanitizer.
//!
//! Whatever the user types or pastes ("Rp 1.250.000", "12 500", "abc") is reduced to its
//! ASCII digits before anything else sees it. Nothing here can fail.

use shared::utils::indonesian_format::parse_digits;
use tracing::warn;

/// Keeps only `0`-`9`, in their original order.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Same as [`sanitize`], with a missing value treated as empty text.
pub fn sanitize_optional(text: Option<&str>) -> String {
    text.map(sanitize).unwrap_or_default()
}

/// Turns canonical digits into the amount they represent.
///
/// Empty digits are 0. Amounts beyond `u64::MAX` saturate instead of failing.
pub fn parse_canonical(digits: &str) -> u64 {
    match parse_digits(digits) {
        Some(value) => value,
        None => {
            warn!("Amount with {} digits exceeds u64 range, saturating", digits.len());
            u64::MAX
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_strips_grouping_and_symbol() {
        assert_eq!(sanitize("Rp\u{a0}1.250.000"), "1250000");
        assert_eq!(sanitize(" 12 500,- "), "12500");
    }

    #[test]
    fn test_sanitize_without_digits_is_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("abc"), "");
        assert_eq!(sanitize_optional(None), "");
        assert_eq!(sanitize_optional(Some("x9y")), "9");
    }

    #[test]
    fn test_sanitize_keeps_leading_zeros() {
        assert_eq!(sanitize("007"), "007");
    }

    #[test]
    fn test_sanitize_ignores_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits are not 0-9.
        assert_eq!(sanitize("\u{661}\u{662}3\u{ff14}"), "3");
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(parse_canonical(""), 0);
        assert_eq!(parse_canonical("000"), 0);
        assert_eq!(parse_canonical("1250000"), 1_250_000);
    }

    #[test]
    fn test_parse_canonical_saturates() {
        assert_eq!(parse_canonical("99999999999999999999999"), u64::MAX);
    }

    proptest! {
        #[test]
        fn sanitize_output_is_digits_only(s in any::<String>()) {
            prop_assert!(sanitize(&s).chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn sanitize_is_idempotent(s in any::<String>()) {
            let once = sanitize(&s);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitize_preserves_digit_order(s in "[0-9a-z.,Rp ]{0,40}") {
            let expected: String = s.chars().filter(|c| c.is_ascii_digit()).collect();
            prop_assert_eq!(sanitize(&s), expected);
        }

        #[test]
        fn parse_canonical_matches_std_for_u64(v in any::<u64>()) {
            prop_assert_eq!(parse_canonical(&v.to_string()), v);
        }
    }
}
