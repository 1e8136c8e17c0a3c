//! Count inputs and their coercion rules.
//!
//! Rooms, bathrooms, kitchens and living rooms are stored as numeric strings
//! (they come straight from text inputs); walls, windows, balconies and
//! laundry loads are stored as integers. Both shapes coerce to a `u32` count:
//! leniently (anything unusable becomes 0) or strictly (a [`PricingError`]).

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Leading-integer scan: skip leading whitespace, read an optional sign and the
/// run of digits that follows. Trailing text is ignored. `None` when no digit
/// was found.
fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: i64 = 0;
    let mut seen = false;
    for d in digits {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

fn clamp_lenient(value: i64) -> u32 {
    if value <= 0 {
        0
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

fn strict_text(field: &'static str, raw: &str) -> Result<u32, PricingError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Some(rest) = trimmed.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PricingError::NegativeCount {
                field,
                value: raw.to_string(),
            });
        }
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PricingError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }
    trimmed.parse::<u32>().map_err(|_| PricingError::CountTooLarge {
        field,
        value: raw.to_string(),
    })
}

/// A count stored as text, e.g. `numberOfRooms: "3"`.
///
/// The original text is kept as-is so documents round-trip unchanged; the
/// numeric value is derived on demand. JSON numbers are accepted on input and
/// kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomCount(String);

/// A fresh order starts every count at `"0"`.
impl Default for RoomCount {
    fn default() -> Self {
        Self::from(0u32)
    }
}

impl<'de> Deserialize<'de> for RoomCount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = CountInput::deserialize(deserializer)?;
        Ok(match raw {
            CountInput::Text(s) => RoomCount(s),
            CountInput::Integer(n) => RoomCount(n.to_string()),
            CountInput::Float(f) => RoomCount(f.to_string()),
        })
    }
}

impl RoomCount {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lenient value: `"3"` is 3, `"3 rooms"` is 3, `""`, `"abc"` and
    /// negatives are 0.
    pub fn value(&self) -> u32 {
        leading_integer(&self.0).map(clamp_lenient).unwrap_or(0)
    }

    /// Strict value: blank is 0, anything but plain digits is an error.
    pub fn strict_value(&self, field: &'static str) -> Result<u32, PricingError> {
        strict_text(field, &self.0)
    }
}

impl From<u32> for RoomCount {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for RoomCount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A raw count as it arrives over JSON: integer, float or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CountInput {
    /// Lenient coercion. Never fails; non-finite, negative and non-numeric
    /// input is 0, fractions truncate toward zero.
    pub fn lenient(&self) -> u32 {
        match self {
            CountInput::Integer(n) => clamp_lenient(*n),
            CountInput::Float(f) => {
                if !f.is_finite() || *f <= 0.0 {
                    0
                } else if *f >= f64::from(u32::MAX) {
                    u32::MAX
                } else {
                    f.trunc() as u32
                }
            }
            CountInput::Text(s) => leading_integer(s).map(clamp_lenient).unwrap_or(0),
        }
    }

    /// Strict coercion for the validating path.
    pub fn strict(&self, field: &'static str) -> Result<u32, PricingError> {
        match self {
            CountInput::Integer(n) => {
                if *n < 0 {
                    return Err(PricingError::NegativeCount {
                        field,
                        value: n.to_string(),
                    });
                }
                u32::try_from(*n).map_err(|_| PricingError::CountTooLarge {
                    field,
                    value: n.to_string(),
                })
            }
            CountInput::Float(f) => {
                if !f.is_finite() {
                    return Err(PricingError::NonFiniteCount { field });
                }
                if *f < 0.0 {
                    return Err(PricingError::NegativeCount {
                        field,
                        value: f.to_string(),
                    });
                }
                if f.fract() != 0.0 {
                    return Err(PricingError::FractionalCount {
                        field,
                        value: f.to_string(),
                    });
                }
                if *f > f64::from(u32::MAX) {
                    return Err(PricingError::CountTooLarge {
                        field,
                        value: f.to_string(),
                    });
                }
                Ok(*f as u32)
            }
            CountInput::Text(s) => strict_text(field, s),
        }
    }
}

impl From<u32> for CountInput {
    fn from(value: u32) -> Self {
        CountInput::Integer(i64::from(value))
    }
}

impl From<&str> for CountInput {
    fn from(value: &str) -> Self {
        CountInput::Text(value.to_string())
    }
}
