//! Conversion between [`RecordStore`] and the persisted JSON document.
//!
//! ## File Format
//!
//! ```text
//! { "persons": [
//!     { "name": "John", "studentId": "A1234567S", "emailId": "E1234567",
//!       "classId": "311", "tags": ["NeedHelp"] },
//!     ...
//! ] }
//! ```
//!
//! Entry fields are `Option` on the way in so that a missing field is reported
//! as corruption naming the field, not as a generic parse failure. A missing
//! `tags` array is read as no tags.
//!
//! Decoding is all-or-nothing: the first invalid field or the first entry that
//! shares an identity with an earlier one aborts the whole decode.

use serde::{Deserialize, Serialize};

use crate::error::{CorruptionError, Field, Result, ValidationError};
use crate::model::{ClassId, EmailId, Name, Record, StudentId};
use crate::store::record_store::RecordStore;
use crate::tags::{Tag, TagSet};

/// Top-level persisted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub persons: Vec<RecordEntry>,
}

/// One persisted record, not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    pub name: Option<String>,
    pub student_id: Option<String>,
    pub email_id: Option<String>,
    pub class_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<&Record> for RecordEntry {
    fn from(record: &Record) -> Self {
        Self {
            name: Some(record.name().to_string()),
            student_id: Some(record.student_id().to_string()),
            email_id: Some(record.email_id().to_string()),
            class_id: Some(record.class_id().to_string()),
            tags: record.tags().iter().map(|t| t.as_str().to_string()).collect(),
        }
    }
}

impl RecordEntry {
    /// Validates this entry, reporting failures against its position `index`.
    pub fn to_record(&self, index: usize) -> std::result::Result<Record, CorruptionError> {
        let invalid = |source: ValidationError| CorruptionError::InvalidField { index, source };

        let name = required(&self.name, index, Field::Name)?;
        let student_id = required(&self.student_id, index, Field::StudentId)?;
        let email_id = required(&self.email_id, index, Field::EmailId)?;
        let class_id = required(&self.class_id, index, Field::ClassId)?;

        let name = Name::parse(name).map_err(invalid)?;
        let student_id = StudentId::parse(student_id).map_err(invalid)?;
        let email_id = EmailId::parse(email_id).map_err(invalid)?;
        let class_id = ClassId::parse(class_id).map_err(invalid)?;
        let tags = self
            .tags
            .iter()
            .map(|t| Tag::parse(t.as_str()))
            .collect::<std::result::Result<TagSet, _>>()
            .map_err(invalid)?;

        Ok(Record::new(name, student_id, email_id, class_id, tags))
    }
}

fn required(
    value: &Option<String>,
    index: usize,
    field: Field,
) -> std::result::Result<&str, CorruptionError> {
    value
        .as_deref()
        .ok_or(CorruptionError::MissingField { index, field })
}

/// Encodes `store` as a document, one entry per record in store order.
pub fn encode(store: &RecordStore) -> StoreDocument {
    StoreDocument {
        persons: store.iter().map(RecordEntry::from).collect(),
    }
}

/// Decodes a document into a store.
///
/// Returns [`crate::error::WhoDatError::DataCorruption`] for the first invalid
/// field or duplicate identity.
pub fn decode(document: &StoreDocument) -> Result<RecordStore> {
    let mut store = RecordStore::new();
    for (index, entry) in document.persons.iter().enumerate() {
        let record = entry.to_record(index)?;
        if store.contains(&record) {
            return Err(CorruptionError::Duplicate {
                index,
                student_id: record.student_id().to_string(),
            }
            .into());
        }
        store.add(record)?;
    }
    Ok(store)
}
