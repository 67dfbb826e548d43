use serde::de::DeserializeOwned;
use serde_json::{
    Map,
    Value,
};

use crate::{
    Category,
    ConstructionError,
    UnrecognizedVocabularyError,
    normalize_name,
};

/// An untyped field-map, exactly as read from a reference data file.
pub type RawRecord = Map<String, Value>;

/// Reads the `id` field of a raw record, if it holds a valid ID.
pub fn record_id(record: &RawRecord) -> Option<u32> {
    record
        .get("id")
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
}

/// Reads the `name` field of a raw record, if it holds a string.
pub fn record_name(record: &RawRecord) -> Option<&str> {
    record.get("name").and_then(Value::as_str)
}

/// Describes a record for error messages, using whatever identity it has.
pub fn describe_record(record: &RawRecord) -> String {
    match (record_id(record), record_name(record)) {
        (Some(id), Some(name)) => format!("#{id} \"{name}\""),
        (Some(id), None) => format!("#{id}"),
        (None, Some(name)) => format!("\"{name}\""),
        (None, None) => "<unidentified>".to_owned(),
    }
}

/// Reads typed fields out of a [`RawRecord`].
///
/// Every failure is converted into a [`ConstructionError`] that names the category, the record,
/// and the offending field.
pub struct RecordReader<'r> {
    category: Category,
    record: &'r RawRecord,
    label: String,
}

impl<'r> RecordReader<'r> {
    pub fn new(category: Category, record: &'r RawRecord) -> Self {
        Self {
            category,
            record,
            label: describe_record(record),
        }
    }

    /// Reads the identity shared by all resources.
    ///
    /// The name must be a non-empty string and is normalized.
    pub fn identity(&self) -> Result<(u32, String), ConstructionError> {
        let id = self.required::<u32>("id")?;
        let name = normalize_name(&self.required::<String>("name")?);
        if name.is_empty() {
            return Err(self.malformed("name", "is empty"));
        }
        Ok((id, name))
    }

    /// Reads a field that must be present.
    ///
    /// An explicit `null` is passed through to `T`, so types with a null sentinel may still accept
    /// it.
    pub fn required<T: DeserializeOwned>(&self, field: &str) -> Result<T, ConstructionError> {
        let value = self
            .record
            .get(field)
            .ok_or_else(|| self.malformed(field, "is missing"))?;
        T::deserialize(value).map_err(|err| self.malformed(field, format!("is invalid: {err}")))
    }

    /// Reads a field that may be missing or `null`.
    pub fn optional<T: DeserializeOwned>(
        &self,
        field: &str,
    ) -> Result<Option<T>, ConstructionError> {
        match self.record.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::deserialize(value)
                .map(Some)
                .map_err(|err| self.malformed(field, format!("is invalid: {err}"))),
        }
    }

    /// Creates an error for a malformed field.
    pub fn malformed(&self, field: &str, reason: impl Into<String>) -> ConstructionError {
        ConstructionError::MalformedRecord {
            category: self.category.to_string(),
            record: self.label.clone(),
            field: field.to_owned(),
            reason: reason.into(),
        }
    }

    /// Creates an error for a field holding a token outside of its vocabulary.
    pub fn unrecognized(
        &self,
        field: &str,
        source: UnrecognizedVocabularyError,
    ) -> ConstructionError {
        ConstructionError::UnrecognizedVocabulary {
            category: self.category.to_string(),
            record: self.label.clone(),
            field: field.to_owned(),
            source,
        }
    }
}
