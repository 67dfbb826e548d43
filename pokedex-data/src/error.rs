use std::path::PathBuf;

use thiserror::Error;

/// A raw token that has no mapping in the target vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {vocabulary} token \"{token}\"")]
pub struct UnrecognizedVocabularyError {
    /// The offending token, exactly as it appeared in the raw data.
    pub token: String,
    /// The name of the vocabulary the token was mapped against.
    pub vocabulary: &'static str,
}

impl UnrecognizedVocabularyError {
    pub fn new(token: &str, vocabulary: &'static str) -> Self {
        Self {
            token: token.to_owned(),
            vocabulary,
        }
    }
}

/// Error raised while building a typed resource from a raw record.
///
/// Construction fails closed: any missing or mistyped required field is reported here, along with
/// enough context to find the offending record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A required field is missing or has the wrong shape.
    #[error("malformed {category} record {record}: field \"{field}\" {reason}")]
    MalformedRecord {
        category: String,
        record: String,
        field: String,
        reason: String,
    },
    /// A strictly-mapped field holds a token outside of its vocabulary.
    #[error("invalid {category} record {record}: field \"{field}\": {source}")]
    UnrecognizedVocabulary {
        category: String,
        record: String,
        field: String,
        #[source]
        source: UnrecognizedVocabularyError,
    },
}

impl ConstructionError {
    /// The field that failed construction.
    pub fn field(&self) -> &str {
        match self {
            Self::MalformedRecord { field, .. } => field,
            Self::UnrecognizedVocabulary { field, .. } => field,
        }
    }

    /// The category of the record that failed construction.
    pub fn category(&self) -> &str {
        match self {
            Self::MalformedRecord { category, .. } => category,
            Self::UnrecognizedVocabulary { category, .. } => category,
        }
    }
}

/// Fatal error raised when reference data cannot be loaded within the retry budget.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to load reference data from {} after {attempts} attempt(s): {reason}", .root.display())]
pub struct DataLoadError {
    /// Directory that was scanned.
    pub root: PathBuf,
    /// Number of attempts made before giving up.
    pub attempts: u32,
    /// Description of the last failure.
    pub reason: String,
}
