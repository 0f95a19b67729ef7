//! Tag support for whodat.
//!
//! Tags are short labels attached to a record (`NeedHelp`, `LateSubmission`).
//! A record holds a set of tags: order is irrelevant and repeated labels
//! collapse into one.
//!
//! ## Tag Naming Rules
//!
//! See [`validation`] for the full rules. In summary: alphanumeric only, no
//! whitespace, not empty.

pub mod validation;

use std::collections::BTreeSet;
use std::fmt;

use crate::error::{Field, ValidationError};

pub use validation::{validate_tag, TagValidationError};

/// A validated tag label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn parse(label: impl Into<String>) -> Result<Self, ValidationError> {
        let label = label.into();
        match validate_tag(&label) {
            Ok(()) => Ok(Self(label)),
            Err(err) => {
                Err(ValidationError::new(Field::Tags, label).with_reason(err.to_string()))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// The tag set carried by a record.
pub type TagSet = BTreeSet<Tag>;

/// Parses every label, failing on the first invalid one.
pub fn parse_tags<I, S>(labels: I) -> Result<TagSet, ValidationError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    labels.into_iter().map(Tag::parse).collect()
}
