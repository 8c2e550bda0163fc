// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of characters a day field may hold.
pub const MAX_DAY_LEN: usize = 2;

static NON_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^0-9]+").expect("static pattern"));

/// Filters a raw day-field value down to what the input accepts: ASCII
/// decimal digits only, at most [`MAX_DAY_LEN`] of them.
///
/// Applied on every keystroke, so a non-digit is dropped silently instead
/// of surfacing as a validation failure later. Sanitization is a separate
/// stage from validation: [`crate::EventStore::add`] only relies on day
/// fields being empty or 1-2 digit strings by the time it runs.
pub fn sanitize_day_input(raw: &str) -> String {
    let digits = NON_DIGITS.replace_all(raw, "");
    digits.chars().take(MAX_DAY_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_non_digits() {
        assert_eq!(sanitize_day_input("3a2!b"), "32");
    }

    #[test]
    fn test_truncates_to_two_digits() {
        assert_eq!(sanitize_day_input("123"), "12");
    }

    #[test]
    fn test_keeps_short_digit_strings() {
        assert_eq!(sanitize_day_input(""), "");
        assert_eq!(sanitize_day_input("7"), "7");
        assert_eq!(sanitize_day_input("31"), "31");
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        // U+0663 is an Arabic-Indic digit; only ASCII digits survive.
        assert_eq!(sanitize_day_input("٣1"), "1");
    }

    #[test]
    fn test_strip_then_truncate() {
        assert_eq!(sanitize_day_input("a1b2c3"), "12");
    }
}
