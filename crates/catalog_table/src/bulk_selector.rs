//! Input parsing and decision rules for the "select first N rows" control.

pub const NEGATIVE_COUNT_MESSAGE: &str = "Input can not be negative";

pub fn over_limit_message(max: u32) -> String {
    format!("Can not select more than {max} records at once")
}

/// Parses the leading integer of `raw`, treating input without one as zero.
///
/// Leading whitespace and one sign are accepted; parsing stops at the first non-digit, so
/// `"12abc"` is 12 and `"3.7"` is 3. Values past the `i64` range saturate.
pub fn parse_bulk_count(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(digit - b'0');
        value = value.saturating_mul(10);
        value = if negative {
            value.saturating_sub(digit)
        } else {
            value.saturating_add(digit)
        };
    }
    value
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkSelectionPlan {
    /// Count exceeds the upstream page-size ceiling.
    Reject { max: u32 },
    /// Drop back to "no explicit selection".
    Clear,
    /// Fetch page 1 with this many rows and select them all.
    Fetch { limit: u32 },
}

/// Decides what a fired debounce does for a non-negative `count`.
pub fn plan_bulk_selection(count: i64, max: u32) -> BulkSelectionPlan {
    if count > i64::from(max) {
        BulkSelectionPlan::Reject { max }
    } else if count <= 0 {
        BulkSelectionPlan::Clear
    } else {
        // count is in 1..=max here, so it fits in u32.
        BulkSelectionPlan::Fetch {
            limit: count as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_follows_leading_integer_rules() {
        assert_eq!(parse_bulk_count("5"), 5);
        assert_eq!(parse_bulk_count("  42"), 42);
        assert_eq!(parse_bulk_count("12abc"), 12);
        assert_eq!(parse_bulk_count("3.7"), 3);
        assert_eq!(parse_bulk_count("+8"), 8);
        assert_eq!(parse_bulk_count("-4"), -4);
        assert_eq!(parse_bulk_count("-0"), 0);
    }

    #[test]
    fn parse_treats_non_numeric_input_as_zero() {
        assert_eq!(parse_bulk_count(""), 0);
        assert_eq!(parse_bulk_count("abc"), 0);
        assert_eq!(parse_bulk_count("-"), 0);
        assert_eq!(parse_bulk_count(" . 5"), 0);
    }

    #[test]
    fn parse_saturates_huge_values() {
        assert_eq!(parse_bulk_count("99999999999999999999999"), i64::MAX);
        assert_eq!(parse_bulk_count("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn plan_covers_clear_fetch_and_ceiling() {
        assert_eq!(plan_bulk_selection(0, 100), BulkSelectionPlan::Clear);
        assert_eq!(
            plan_bulk_selection(1, 100),
            BulkSelectionPlan::Fetch { limit: 1 }
        );
        assert_eq!(
            plan_bulk_selection(100, 100),
            BulkSelectionPlan::Fetch { limit: 100 }
        );
        assert_eq!(
            plan_bulk_selection(101, 100),
            BulkSelectionPlan::Reject { max: 100 }
        );
        assert_eq!(
            over_limit_message(100),
            "Can not select more than 100 records at once"
        );
    }
}
