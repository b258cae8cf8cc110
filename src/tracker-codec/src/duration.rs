use chrono::TimeDelta;

use crate::error::DurationError;

type Result<T> = std::result::Result<T, DurationError>;

/// Largest magnitude a duration may reach before the sign is applied.
/// One past `i64::MAX` so that the negative extreme stays representable.
const MAX_MAGNITUDE: u64 = 1 << 63;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(3_600 * 1_000_000_000),
        _ => None,
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

fn push_digit(value: u64, digit: u8) -> Option<u64> {
    value
        .checked_mul(10)
        .and_then(|v| v.checked_add(u64::from(digit - b'0')))
        .filter(|v| *v <= MAX_MAGNITUDE)
}

/// Nanoseconds in one `<whole>.<fraction><unit>` component.
fn component(whole: &str, fraction: &str, scale: u64) -> Result<u64> {
    let mut value = 0u64;
    for digit in whole.bytes() {
        value = push_digit(value, digit).ok_or(DurationError::Overflow)?;
    }
    value = value
        .checked_mul(scale)
        .filter(|v| *v <= MAX_MAGNITUDE)
        .ok_or(DurationError::Overflow)?;

    // Fraction digits past u64 precision are dropped.
    let mut numerator = 0u64;
    let mut denominator = 1.0f64;
    for digit in fraction.bytes() {
        match push_digit(numerator, digit) {
            Some(next) => {
                numerator = next;
                denominator *= 10.0;
            }
            None => break,
        }
    }

    if numerator > 0 {
        let extra = (numerator as f64 * (scale as f64 / denominator)) as u64;
        value = value
            .checked_add(extra)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::Overflow)?;
    }

    Ok(value)
}

/// Parses a compound duration such as `45m`, `1h30m`, `1.5h` or `-300ms`.
///
/// The input is an optional sign followed by one or more decimal numbers,
/// each with a unit suffix (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`). A lone `0`
/// needs no unit.
pub fn parse_duration(input: &str) -> Result<TimeDelta> {
    let (negative, mut rest) = if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(DurationError::InvalidSyntax);
    }

    let mut total = 0u64;
    while !rest.is_empty() {
        let (whole, after) = split_digits(rest);
        let (fraction, after) = match after.strip_prefix('.') {
            Some(after) => split_digits(after),
            None => ("", after),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(DurationError::InvalidSyntax);
        }

        let unit_len = after
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after.len());
        let (unit, after) = after.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit);
        }
        let scale =
            unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        total = total
            .checked_add(component(whole, fraction, scale)?)
            .filter(|v| *v <= MAX_MAGNITUDE)
            .ok_or(DurationError::Overflow)?;
        rest = after;
    }

    let nanos = if negative {
        if total == MAX_MAGNITUDE {
            i64::MIN
        } else {
            -(total as i64)
        }
    } else {
        i64::try_from(total).map_err(|_| DurationError::Overflow)?
    };

    Ok(TimeDelta::nanoseconds(nanos))
}
