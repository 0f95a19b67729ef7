use std::fmt;
use thiserror::Error;

/// The record field a validation failure refers to.
///
/// The `Display` form is the field's name as it appears in the data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    StudentId,
    EmailId,
    ClassId,
    Tags,
}

impl Field {
    /// Human-readable constraint for values of this field.
    pub fn constraint(self) -> &'static str {
        match self {
            Field::Name => {
                "Names should only contain alphanumeric characters and spaces, and it should not be blank"
            }
            Field::StudentId => {
                "Student ids should be one letter, followed by 7 digits, followed by one letter (e.g. A1234567S)"
            }
            Field::EmailId => {
                "Email ids should be one letter followed by 7 digits (e.g. E1234567)"
            }
            Field::ClassId => "Class ids should be non-empty and only contain alphanumeric characters",
            Field::Tags => "Tags names should be alphanumeric and contain no whitespace",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::StudentId => "studentId",
            Field::EmailId => "emailId",
            Field::ClassId => "classId",
            Field::Tags => "tags",
        };
        f.write_str(name)
    }
}

/// A single field value failed its constraint.
///
/// `reason` narrows the failure down when the validator knows more than the
/// field's general constraint (which character of a tag was rejected).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {field} {value:?}: {}{}", .field.constraint(), reason_suffix(.reason))]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
    pub reason: Option<String>,
}

impl ValidationError {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            reason: None,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    match reason {
        Some(reason) => format!(" ({reason})"),
        None => String::new(),
    }
}

/// Why a persisted collection was rejected.
///
/// `index` is the zero-based position of the offending entry in the `persons` array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorruptionError {
    #[error("person #{index}: {field} field is missing")]
    MissingField { index: usize, field: Field },

    #[error("person #{index}: {source}")]
    InvalidField {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("person #{index}: persons list contains duplicate person(s) (student id {student_id})")]
    Duplicate { index: usize, student_id: String },
}

#[derive(Error, Debug)]
pub enum WhoDatError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A person with the same student id/email id already exists: {incoming} collides with {existing}")]
    DuplicateIdentity { existing: String, incoming: String },

    #[error("Person not found: {0}")]
    NotFound(String),

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error("Data file could not be loaded: {0}")]
    DataCorruption(#[from] CorruptionError),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WhoDatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_field_and_constraint() {
        let err = ValidationError::new(Field::StudentId, "A12");
        let msg = err.to_string();
        assert!(msg.contains("studentId"));
        assert!(msg.contains("\"A12\""));
        assert!(msg.contains("7 digits"));
    }

    #[test]
    fn validation_error_appends_reason() {
        let err =
            ValidationError::new(Field::Tags, "a b").with_reason("tag cannot contain whitespace");
        assert_eq!(err.reason.as_deref(), Some("tag cannot contain whitespace"));
        assert!(err.to_string().ends_with("(tag cannot contain whitespace)"));
    }

    #[test]
    fn duplicate_corruption_mentions_duplicate() {
        let err = CorruptionError::Duplicate {
            index: 1,
            student_id: "A1234567S".to_string(),
        };
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn invalid_field_wraps_validation_source() {
        let err: WhoDatError = CorruptionError::InvalidField {
            index: 0,
            source: ValidationError::new(Field::EmailId, "x"),
        }
        .into();
        match err {
            WhoDatError::DataCorruption(CorruptionError::InvalidField { source, .. }) => {
                assert_eq!(source.field, Field::EmailId);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
