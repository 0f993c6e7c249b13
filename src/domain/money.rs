use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// Daily rates and rental totals are never negative, so the parser rejects
/// negative input outright. $60.00/day = 6000 cents.
pub type Cents = i64;

/// Format cents as a two-decimal currency string (without a currency symbol).
/// Example: 6000 -> "60.00", 54000 -> "540.00"
pub fn format_cents(cents: Cents) -> String {
    format!("{}.{:02}", cents / 100, (cents % 100).abs())
}

/// Parse a decimal string into cents.
/// Example: "60.00" -> 6000, "12.5" -> 1250, "100" -> 10000
/// More than two decimal places are truncated, matching display precision.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err(ParseCentsError::Negative);
    }

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimal)) => {
            if decimal.contains('.') {
                return Err(ParseCentsError::InvalidFormat);
            }
            (units, decimal)
        }
        None => (input, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError::InvalidFormat);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?
    };

    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        // A single digit like "5" means 50 cents
        1 => {
            decimal_str
                .parse::<i64>()
                .map_err(|_| ParseCentsError::InvalidFormat)?
                * 10
        }
        _ => decimal_str[..2]
            .parse()
            .map_err(|_| ParseCentsError::InvalidFormat)?,
    };

    Ok(units * 100 + decimal_cents)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCentsError {
    InvalidFormat,
    Negative,
}

impl fmt::Display for ParseCentsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCentsError::InvalidFormat => write!(f, "invalid price format"),
            ParseCentsError::Negative => write!(f, "price cannot be negative"),
        }
    }
}

impl std::error::Error for ParseCentsError {}
