//! Mapping of raw string tokens into closed vocabularies.
//!
//! Every vocabulary parses case-insensitively, but the policy for unknown tokens differs by field:
//!
//! - Growth rate is strict. An unknown token is an [`UnrecognizedVocabularyError`].
//! - Learn method is lenient. An unknown token falls back to [`LearnMethod::LevelUp`].
//! - Region, type, and damage class are cosmetic. An unknown token maps to [`None`].
use core::{
    fmt::Display,
    str::FromStr,
};

use crate::{
    DamageClass,
    Gender,
    GrowthRate,
    LearnMethod,
    Nature,
    Region,
    Type,
    UnrecognizedVocabularyError,
};

/// A closed set of values parsed from raw string tokens.
pub trait Vocabulary: FromStr + Display + Copy {
    /// Human-readable name of the vocabulary, used in errors.
    const NAME: &'static str;

    /// Parses a raw token, failing if it has no mapping.
    fn parse_token(token: &str) -> Result<Self, UnrecognizedVocabularyError> {
        Self::from_str(token.trim()).map_err(|_| UnrecognizedVocabularyError::new(token, Self::NAME))
    }
}

impl Vocabulary for Region {
    const NAME: &'static str = "region";
}

impl Vocabulary for Type {
    const NAME: &'static str = "type";
}

impl Vocabulary for DamageClass {
    const NAME: &'static str = "damage class";
}

impl Vocabulary for GrowthRate {
    const NAME: &'static str = "growth rate";
}

impl Vocabulary for LearnMethod {
    const NAME: &'static str = "learn method";
}

impl Vocabulary for Nature {
    const NAME: &'static str = "nature";
}

impl Vocabulary for Gender {
    const NAME: &'static str = "gender";
}

fn cosmetic<V: Vocabulary>(token: &str) -> Option<V> {
    match V::parse_token(token) {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!("ignoring {err}");
            None
        }
    }
}

/// Maps a growth rate token.
pub fn growth_rate(token: &str) -> Result<GrowthRate, UnrecognizedVocabularyError> {
    GrowthRate::parse_token(token)
}

/// Maps a learn method token, falling back to [`LearnMethod::LevelUp`].
pub fn learn_method(token: &str) -> LearnMethod {
    match LearnMethod::parse_token(token) {
        // Form changes are learned on the spot, which is closest to leveling up.
        Ok(LearnMethod::FormChange) | Err(_) => LearnMethod::LevelUp,
        Ok(method) => method,
    }
}

/// Maps a region token.
pub fn region(token: &str) -> Option<Region> {
    cosmetic(token)
}

/// Maps an elemental type token.
pub fn elemental_type(token: &str) -> Option<Type> {
    cosmetic(token)
}

/// Maps a damage class token.
pub fn damage_class(token: &str) -> Option<DamageClass> {
    cosmetic(token)
}
