//! Decimal amounts that the backend may send either as JSON numbers or as numeric strings.

use serde::Deserialize;

/// A decimal amount coerced from a JSON number or a numeric-looking string.
///
/// Strings are trimmed before parsing and an empty string is zero.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawAmount")]
pub struct Amount(f64);

impl Amount {
    /// Wrap an already numeric amount.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The amount as a number.
    pub fn as_f64(self) -> f64 {
        self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl TryFrom<RawAmount> for Amount {
    type Error = String;

    fn try_from(value: RawAmount) -> Result<Self, Self::Error> {
        match value {
            RawAmount::Number(number) => Ok(Amount(number)),
            RawAmount::Text(text) => {
                let text = text.trim();

                if text.is_empty() {
                    return Ok(Amount(0.0));
                }

                text.parse::<f64>()
                    .ok()
                    .filter(|number| number.is_finite())
                    .map(Amount)
                    .ok_or_else(|| format!("\"{text}\" is not a valid amount"))
            }
        }
    }
}
