use thiserror::Error;

/// Prices are kept as integer cents so that listings and totals never drift.
/// $25,000.00 is stored as 2_500_000.
pub type Cents = i64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParsePriceError {
    #[error("price is empty")]
    Empty,

    #[error("'{0}' is not a valid price")]
    Malformed(String),

    #[error("price '{0}' is too large")]
    Overflow(String),
}

/// Render cents as a dollar amount, e.g. 2_500_000 -> "$25000.00".
pub fn format_price(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, magnitude / 100, magnitude % 100)
}

/// Parse a user-entered price into cents.
///
/// Accepts an optional sign, an optional leading `$`, whole units and up to
/// two decimal places: "25000", "$25000.5", "-12.34". Anything past the
/// second decimal digit is rejected rather than rounded.
pub fn parse_price(input: &str) -> Result<Cents, ParsePriceError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParsePriceError::Empty);
    }

    let malformed = || ParsePriceError::Malformed(trimmed.to_string());
    let overflow = || ParsePriceError::Overflow(trimmed.to_string());

    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix('$').unwrap_or(rest);

    let (units, fraction) = rest.split_once('.').unwrap_or((rest, ""));
    if units.is_empty() && fraction.is_empty() {
        return Err(malformed());
    }
    if !units.chars().all(|c| c.is_ascii_digit())
        || !fraction.chars().all(|c| c.is_ascii_digit())
        || fraction.len() > 2
    {
        return Err(malformed());
    }

    let units: i64 = if units.is_empty() {
        0
    } else {
        units.parse().map_err(|_| overflow())?
    };
    let fraction: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().map_err(|_| malformed())? * 10,
        _ => fraction.parse().map_err(|_| malformed())?,
    };

    let cents = units
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction))
        .ok_or_else(overflow)?;

    Ok(if negative { -cents } else { cents })
}
