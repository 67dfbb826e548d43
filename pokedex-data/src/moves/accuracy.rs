use core::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

use crate::UnrecognizedVocabularyError;

/// The base accuracy of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// The base chance for the move to hit, as a percentage.
    Chance(u8),
    /// The move never misses.
    ///
    /// Raw data writes this as `null`.
    NeverMisses,
}

impl Accuracy {
    pub const MAX_CHANCE: u8 = 100;

    pub fn percentage(&self) -> Option<u8> {
        match self {
            Self::Chance(n) => Some(*n),
            Self::NeverMisses => None,
        }
    }
}

impl Default for Accuracy {
    fn default() -> Self {
        Self::Chance(Self::MAX_CHANCE)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chance(n) => write!(f, "{n}"),
            Self::NeverMisses => write!(f, "never-misses"),
        }
    }
}

impl FromStr for Accuracy {
    type Err = UnrecognizedVocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "never-misses" | "exempt" => Ok(Self::NeverMisses),
            _ => Err(UnrecognizedVocabularyError::new(s, "accuracy")),
        }
    }
}

impl Serialize for Accuracy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Chance(n) => serializer.serialize_u8(*n),
            Self::NeverMisses => serializer.serialize_none(),
        }
    }
}

struct AccuracyVisitor;

impl<'de> Visitor<'de> for AccuracyVisitor {
    type Value = Accuracy;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer between 0 and 100, null, or \"never-misses\"")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match u8::try_from(v) {
            Ok(n) if n <= Accuracy::MAX_CHANCE => Ok(Accuracy::Chance(n)),
            _ => Err(E::invalid_value(Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Self::Value::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(&v), &self))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Accuracy::NeverMisses)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Accuracy::NeverMisses)
    }
}

impl<'de> Deserialize<'de> for Accuracy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(AccuracyVisitor)
    }
}
