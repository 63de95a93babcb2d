//! Serde helpers for `f64` fields that may hold a non-finite value.
//!
//! JSON has no literal for infinity or NaN, so a non-finite value is
//! written as its Rust spelling (`"inf"`, `"-inf"`, `"NaN"`). Finite values
//! stay plain numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Float {
    Number(f64),
    Text(String),
}

impl From<f64> for Float {
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Self::Number(value)
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl Float {
    fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => text
                .parse()
                .map_err(|_| E::custom(format!("invalid float: {text:?}"))),
        }
    }
}

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Float::from(*value).serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Float::deserialize(deserializer)?.into_f64()
}

/// The same encoding for `Option<f64>`; `None` stays `null`.
pub mod option {
    use super::Float;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value.map(Float::from).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Float>::deserialize(deserializer)?
            .map(Float::into_f64)
            .transpose()
    }
}
