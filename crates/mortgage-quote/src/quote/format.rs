//! Grouped-thousands display formatting for dollar amounts.

/// Render an amount with comma separators: `500000` becomes `"500,000"`.
pub fn format_amount(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (offset, digit) in digits.chars().enumerate() {
        if offset > 0 && (digits.len() - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Inverse of [`format_amount`]: strip separators and parse.
///
/// Blank input means a cleared field and maps to `Ok(None)` rather than zero, so a
/// user can empty the field before typing a new amount.
pub fn parse_amount(input: &str) -> Result<Option<u64>, AmountParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let digits: String = trimmed.chars().filter(|c| *c != ',').collect();
    digits
        .parse::<u64>()
        .map(Some)
        .map_err(|_| AmountParseError(input.to_string()))
}

#[derive(Debug, thiserror::Error)]
#[error("'{0}' is not a valid dollar amount")]
pub struct AmountParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_commas() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1_000), "1,000");
        assert_eq!(format_amount(500_000), "500,000");
        assert_eq!(format_amount(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn round_trips_through_parse() {
        for value in [0, 1, 999, 1_000, 999_999, u64::MAX] {
            assert_eq!(
                parse_amount(&format_amount(value)).expect("parses"),
                Some(value)
            );
        }
    }

    #[test]
    fn blank_input_means_cleared_field() {
        assert_eq!(parse_amount("").expect("ok"), None);
        assert_eq!(parse_amount("   ").expect("ok"), None);
    }

    #[test]
    fn tolerates_unconventional_separator_placement() {
        assert_eq!(parse_amount("1,2,3").expect("parses"), Some(123));
        assert_eq!(parse_amount(" 400,000 ").expect("parses"), Some(400_000));
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(parse_amount("12a").is_err());
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("$100").is_err());
    }
}
