/// `Option<T>` that travels as `""` when unset.
///
/// Missing, `null` and blank strings all read back as `None`.
pub mod blank_as_none {
    use std::{fmt::Display, str::FromStr};

    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some).map_err(D::Error::custom),
        }
    }
}

/// `null` reads back the same as a missing key.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Deserialize<'de> + Default,
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Salary values arrive as either a JSON string or a number.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer};

    use super::Loose;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Loose>::deserialize(deserializer)? {
            Some(Loose::Text(s)) => s,
            Some(Loose::Int(n)) => n.to_string(),
            Some(Loose::Float(n)) => n.to_string(),
            None => String::new(),
        })
    }
}

/// Integer, float, numeric string or `null`. Anything unreadable is 0.
pub mod number_or_zero {
    use serde::{Deserialize, Deserializer};

    use super::Loose;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<Loose>::deserialize(deserializer)? {
            Some(Loose::Int(n)) => n as f64,
            Some(Loose::Float(n)) => n,
            Some(Loose::Text(s)) => s.trim().parse().unwrap_or(0.0),
            None => 0.0,
        })
    }
}

/// Whole numbers go out as JSON integers (`1001`, not `1001.0`).
pub mod whole_number {
    use serde::Serializer;

    // Beyond 2^53 an f64 no longer holds every integer exactly.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
            serializer.serialize_i64(*value as i64)
        } else {
            serializer.serialize_f64(*value)
        }
    }
}
