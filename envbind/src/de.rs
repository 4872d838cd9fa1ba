//! Coercion helpers called by macro-generated binding code
//!
//! Each helper is a pure function of (source key, raw text) to a typed
//! value or a [`BindError`]; the key only provides error context.

use std::time::Duration;

use crate::error::{BindError, DurationError};

/// Coerce a boolean literal.
///
/// Accepts the `strconv`-style set: `1`, `t`, `T`, `true`, `TRUE`, `True`
/// and the matching false forms. Nothing else, in particular no other case
/// variants.
#[doc(hidden)]
pub fn boolean(key: &str, value: &str) -> Result<bool, BindError> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(BindError::ParseBool {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}

/// Coerce a base-10 signed integer.
#[doc(hidden)]
pub fn integer(key: &str, value: &str) -> Result<i64, BindError> {
    value.parse::<i64>().map_err(|source| BindError::ParseInt {
        key: key.to_owned(),
        value: value.to_owned(),
        source,
    })
}

/// Coerce a duration literal.
#[doc(hidden)]
pub fn duration(key: &str, value: &str) -> Result<Duration, BindError> {
    parse_duration(value).map_err(|source| BindError::ParseDuration {
        key: key.to_owned(),
        value: value.to_owned(),
        source,
    })
}

/// Reject a field whose declared type is outside the supported set.
///
/// Generated in place of a coercion call, so the failure surfaces at the
/// field's position in declaration order.
#[doc(hidden)]
pub fn unsupported(key: &str, declared_type: &str) -> Result<(), BindError> {
    Err(BindError::UnsupportedKind {
        key: key.to_owned(),
        declared_type: declared_type.to_owned(),
    })
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Unit table, longer symbols first so `ms` wins over `m`.
const UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("ms", 1_000_000),
    ("s", NANOS_PER_SEC),
    ("m", 60 * NANOS_PER_SEC),
    ("h", 3_600 * NANOS_PER_SEC),
];

/// Parse a human duration literal: one or more `<count><unit>` groups
/// (`"5s"`, `"2h30m"`, `"1.5h"`), or a bare unsigned integer counted in
/// nanoseconds. An optional leading `+` is allowed; negatives are not.
fn parse_duration(input: &str) -> Result<Duration, DurationError> {
    if input.is_empty() {
        return Err(DurationError::Empty);
    }
    if input.starts_with('-') {
        return Err(DurationError::Negative);
    }
    let s = input.strip_prefix('+').unwrap_or(input);
    if s.is_empty() {
        return Err(DurationError::MissingCount);
    }

    // A bare integer is a nanosecond count.
    if s.bytes().all(|b| b.is_ascii_digit()) {
        let nanos: u64 = s.parse().map_err(|_| DurationError::OutOfRange)?;
        return Ok(Duration::from_nanos(nanos));
    }

    let mut total: u128 = 0;
    let mut rest = s;
    while !rest.is_empty() {
        let (group, after) = parse_group(rest)?;
        total = total.checked_add(group).ok_or(DurationError::OutOfRange)?;
        rest = after;
    }
    let nanos = u64::try_from(total).map_err(|_| DurationError::OutOfRange)?;
    Ok(Duration::from_nanos(nanos))
}

/// Parse one `<digits>[.<digits>]<unit>` group, returning its nanosecond
/// count and the unconsumed tail.
fn parse_group(s: &str) -> Result<(u128, &str), DurationError> {
    let int_len = s.bytes().take_while(u8::is_ascii_digit).count();
    let (int_part, after_int) = s.split_at(int_len);

    let (frac_part, after_number) = match after_int.strip_prefix('.') {
        Some(r) => {
            let frac_len = r.bytes().take_while(u8::is_ascii_digit).count();
            r.split_at(frac_len)
        }
        None => ("", after_int),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(DurationError::MissingCount);
    }

    let (unit_nanos, after_unit) = match_unit(after_number)?;

    let whole: u128 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| DurationError::OutOfRange)?
    };
    let mut nanos = whole
        .checked_mul(unit_nanos)
        .ok_or(DurationError::OutOfRange)?;

    if !frac_part.is_empty() {
        // Integer arithmetic: digits past the 18th cannot shift the result
        // by a whole nanosecond for any supported unit.
        let digits = &frac_part[..frac_part.len().min(18)];
        let frac: u128 = digits.parse().map_err(|_| DurationError::OutOfRange)?;
        let denom = 10u128.pow(digits.len() as u32);
        nanos = nanos
            .checked_add(frac * unit_nanos / denom)
            .ok_or(DurationError::OutOfRange)?;
    }

    Ok((nanos, after_unit))
}

fn match_unit(s: &str) -> Result<(u128, &str), DurationError> {
    for (symbol, nanos) in UNITS {
        if let Some(rest) = s.strip_prefix(symbol) {
            return Ok((*nanos, rest));
        }
    }
    if s.is_empty() {
        return Err(DurationError::MissingUnit);
    }
    let symbol: String = s
        .chars()
        .take_while(|c| !c.is_ascii_digit() && *c != '.')
        .collect();
    Err(DurationError::UnknownUnit(symbol))
}
