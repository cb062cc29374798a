//! Page count coercion
//!
//! Page counts are typed free-form into a text field and coerced with the
//! same rules a browser applies in `Number(text)`:
//!
//! | Input | Result |
//! |-------|--------|
//! | `""`, `"   "` | `0` |
//! | `"120"`, `" 42 "`, `"+7"`, `"-.5"`, `"1e3"` | decimal value |
//! | `"0x1F"`, `"0o17"`, `"0b101"` | unsigned integer in that radix |
//! | `"Infinity"`, `"-Infinity"` | infinite |
//! | anything else | [`Pages::Invalid`] |
//!
//! Coercion never fails: text that is not a number becomes the invalid
//! sentinel and is stored as such.
//!
//! ## Serialization
//!
//! Finite values serialize as JSON numbers (integral values without a
//! fraction). Non-finite values serialize as `null`, matching what a browser
//! JSON serializer writes for `NaN` and `Infinity`; `null` reads back as
//! [`Pages::Invalid`].

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest integer an f64 represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Page count of a book.
///
/// Construct through [`Pages::coerce`] or [`Pages::from_f64`]; both map NaN
/// to [`Pages::Invalid`], so `Number` never holds NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pages {
    /// A numeric page count (finite or infinite, never NaN)
    Number(f64),
    /// The text did not coerce to a number
    Invalid,
}

impl Pages {
    /// Coerce free-form text into a page count.
    pub fn coerce(text: &str) -> Self {
        let trimmed = text.trim_matches(is_number_whitespace);
        if trimmed.is_empty() {
            return Pages::Number(0.0);
        }
        match parse_number(trimmed) {
            Some(value) => Pages::from_f64(value),
            None => Pages::Invalid,
        }
    }

    /// Wrap a float, mapping NaN to the invalid sentinel.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            Pages::Invalid
        } else {
            Pages::Number(value)
        }
    }

    /// Numeric value, if valid.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Pages::Number(v) => Some(*v),
            Pages::Invalid => None,
        }
    }

    /// Whether coercion produced a number.
    pub fn is_valid(&self) -> bool {
        matches!(self, Pages::Number(_))
    }
}

impl Default for Pages {
    fn default() -> Self {
        Pages::Number(0.0)
    }
}

impl From<u32> for Pages {
    fn from(value: u32) -> Self {
        Pages::Number(f64::from(value))
    }
}

impl fmt::Display for Pages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pages::Invalid => f.write_str("NaN"),
            Pages::Number(v) if v.is_infinite() => {
                if v.is_sign_positive() {
                    f.write_str("Infinity")
                } else {
                    f.write_str("-Infinity")
                }
            }
            // -0 prints as 0
            Pages::Number(v) if *v == 0.0 => f.write_str("0"),
            Pages::Number(v) if v.abs() >= 1e21 || v.abs() < 1e-6 => {
                let exp = format!("{:e}", v);
                match exp.split_once('e') {
                    Some((mantissa, e)) if !e.starts_with('-') => write!(f, "{}e+{}", mantissa, e),
                    _ => f.write_str(&exp),
                }
            }
            Pages::Number(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Pages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Pages::Number(v) if v.is_finite() => {
                if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*v as i64)
                } else {
                    serializer.serialize_f64(*v)
                }
            }
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Pages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PagesVisitor)
    }
}

struct PagesVisitor;

impl<'de> Visitor<'de> for PagesVisitor {
    type Value = Pages;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Pages, E> {
        Ok(Pages::Number(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Pages, E> {
        Ok(Pages::Number(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Pages, E> {
        Ok(Pages::from_f64(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Pages, E> {
        Ok(Pages::Invalid)
    }

    fn visit_none<E: de::Error>(self) -> Result<Pages, E> {
        Ok(Pages::Invalid)
    }
}

fn is_number_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn parse_number(s: &str) -> Option<f64> {
    if let Some(prefixed) = parse_prefixed_integer(s) {
        return prefixed;
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    if !is_decimal_literal(s) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Outer `None`: no radix prefix. Inner `None`: prefix with bad digits.
fn parse_prefixed_integer(s: &str) -> Option<Option<f64>> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(None);
    }
    Some(digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    }))
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;

    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        frac_digits = i - frac_start;
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}
