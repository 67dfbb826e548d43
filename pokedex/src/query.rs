use core::fmt;

use pokedex_data::normalize_name;

/// A lookup request for a single resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Query {
    /// Exact lookup by ID.
    Id(u64),
    /// Lookup by normalized name, falling back to approximate matching.
    Name(String),
}

impl Query {
    /// Parses user input.
    ///
    /// Input made up entirely of digits (ignoring surrounding whitespace) is always an ID, even if
    /// some resource is literally named with digits. Anything else is a normalized name.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            // Digits beyond u64 cannot match any ID, so saturating keeps the lookup numeric.
            return Self::Id(trimmed.parse().unwrap_or(u64::MAX));
        }
        Self::Name(normalize_name(trimmed))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => write!(f, "\"{name}\""),
        }
    }
}

impl From<u32> for Query {
    fn from(value: u32) -> Self {
        Self::Id(value.into())
    }
}

impl From<u64> for Query {
    fn from(value: u64) -> Self {
        Self::Id(value)
    }
}

impl From<&str> for Query {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<&String> for Query {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Query {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

#[cfg(test)]
mod query_test {
    use pretty_assertions::assert_eq;

    use crate::Query;

    #[test]
    fn parses_digits_as_id() {
        assert_eq!(Query::parse("25"), Query::Id(25));
        assert_eq!(Query::parse(" 25 "), Query::Id(25));
        assert_eq!(Query::parse("000"), Query::Id(0));
        assert_eq!(Query::from(151u32), Query::Id(151));
    }

    #[test]
    fn saturates_oversized_id() {
        assert_eq!(
            Query::parse("99999999999999999999999"),
            Query::Id(u64::MAX)
        );
    }

    #[test]
    fn parses_anything_else_as_normalized_name() {
        assert_eq!(Query::parse("Mr Mime"), Query::Name("mr-mime".to_owned()));
        assert_eq!(Query::parse(" PIKACHU "), Query::Name("pikachu".to_owned()));
        assert_eq!(Query::parse("porygon2"), Query::Name("porygon2".to_owned()));
        assert_eq!(Query::parse("-1"), Query::Name("-1".to_owned()));
        assert_eq!(Query::parse(""), Query::Name(String::new()));
    }

    #[test]
    fn displays_query() {
        assert_eq!(Query::Id(4).to_string(), "#4");
        assert_eq!(Query::parse("Charmander").to_string(), "\"charmander\"");
    }
}
