// src/utils/de.rs

//! Lenient deserializers for upstream payloads.
//!
//! The upstream backend is not strict about JSON types: numeric fields such as
//! `maxMarks` sometimes arrive as strings, and an unanswered question can be
//! reported as `null`, a missing key or an empty string.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Accepts `100`, `100.0` or `"100"` and yields an integer.
///
/// Strings are read the way `parseInt` reads them: leading whitespace and an
/// optional sign, then digits up to the first non-digit.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Int(n) => Ok(n),
        RawNumber::Float(f) if f.is_finite() => Ok(f.trunc() as i64),
        RawNumber::Float(f) => Err(de::Error::custom(format!("non-finite number {f}"))),
        RawNumber::Text(s) => leading_int(&s)
            .ok_or_else(|| de::Error::custom(format!("'{s}' is not a number"))),
    }
}

/// Treats `null`, a missing key and `""` as `None`.
/// Use together with `#[serde(default)]`.
pub fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
