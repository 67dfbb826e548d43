use core::fmt;

use serde::{
    Deserialize,
    Serialize,
    Serializer,
    de::{
        Unexpected,
        Visitor,
    },
};

/// The base power of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    /// Fixed base power.
    Base(u16),
    /// The move deals no direct damage.
    ///
    /// Raw data writes this as `null`.
    Status,
}

impl Power {
    pub fn value(&self) -> Option<u16> {
        match self {
            Self::Base(n) => Some(*n),
            Self::Status => None,
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(n) => write!(f, "{n}"),
            Self::Status => write!(f, "-"),
        }
    }
}

impl Serialize for Power {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Base(n) => serializer.serialize_u16(*n),
            Self::Status => serializer.serialize_none(),
        }
    }
}

struct PowerVisitor;

impl<'de> Visitor<'de> for PowerVisitor {
    type Value = Power;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer, null, or \"status\"")
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        u16::try_from(v)
            .map(Power::Base)
            .map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
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
        match v {
            "status" => Ok(Power::Status),
            _ => Err(E::invalid_value(Unexpected::Str(&v), &self)),
        }
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Power::Status)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Power::Status)
    }
}

impl<'de> Deserialize<'de> for Power {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(PowerVisitor)
    }
}
