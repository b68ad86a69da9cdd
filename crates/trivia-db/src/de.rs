//! Lenient integer fields for request payloads.
//!
//! Browser clients post `<select>` values as strings, so integer fields take
//! either a JSON number or a numeric string such as `"3"`.

use serde::{Deserialize, Deserializer, de::Error};

/// An integer sent as a JSON number or as a numeric string
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LenientInt {
    Number(i64),
    Text(String),
}

impl LenientInt {
    /// The integer value; `None` for text that is not a base-10 integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `deserialize_with` helper for integer fields that also accept numeric strings
pub fn lenient_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let value = LenientInt::deserialize(deserializer)?;
    value
        .as_i64()
        .and_then(|n| T::try_from(n).ok())
        .ok_or_else(|| D::Error::custom(format!("expected an integer, got {value:?}")))
}
