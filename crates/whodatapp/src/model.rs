//! # Domain Model: Records and Their Fields
//!
//! This module defines the [`Record`] type (one student in the registry), the
//! validated field types it is built from, and [`RecordEdit`], the set of field
//! overrides applied by the edit workflow.
//!
//! ## Validation
//!
//! Every field is a newtype with a `parse` constructor. Parsing either yields a
//! valid value or a [`ValidationError`] naming the field and its constraint.
//! Values are stored exactly as given: nothing is trimmed or case-folded.
//!
//! | Field | Rule |
//! |-------|------|
//! | `name` | alphanumeric first char, then alphanumerics and spaces |
//! | `studentId` | letter, 7 digits, letter (`A1234567S`) |
//! | `emailId` | letter, 7 digits (`E1234567`) |
//! | `classId` | one or more ASCII alphanumerics (`311`, `T01`) |
//!
//! ## Two Notions of Equality
//!
//! - **Strong equality** (`==`): all five fields equal, tags compared as sets.
//!   Used to locate an exact record.
//! - **Identity** ([`Record::is_same_identity`]): student id *or* email id match.
//!   Two records with the same identity may not coexist in a store.
//!
//! ## Immutability
//!
//! A `Record` has no setters. Edits go through [`RecordEdit::apply`], which
//! builds a new record and leaves the original untouched.

use std::fmt;

use crate::error::{Field, ValidationError};
use crate::tags::{Tag, TagSet};

const STUDENT_ID_DIGITS: usize = 7;
const EMAIL_ID_DIGITS: usize = 7;

/// A person's display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let mut chars = value.chars();
        let valid = match chars.next() {
            Some(first) if first.is_alphanumeric() => {
                chars.all(|ch| ch.is_alphanumeric() || ch == ' ')
            }
            _ => false,
        };
        if valid {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(Field::Name, value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Matriculation code: one letter, seven digits, one letter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StudentId(String);

impl StudentId {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let bytes = value.as_bytes();
        let valid = bytes.len() == STUDENT_ID_DIGITS + 2
            && bytes[0].is_ascii_alphabetic()
            && bytes[1..=STUDENT_ID_DIGITS].iter().all(u8::is_ascii_digit)
            && bytes[STUDENT_ID_DIGITS + 1].is_ascii_alphabetic();
        if valid {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(Field::StudentId, value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Short email code: one letter followed by seven digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailId(String);

impl EmailId {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let bytes = value.as_bytes();
        let valid = bytes.len() == EMAIL_ID_DIGITS + 1
            && bytes[0].is_ascii_alphabetic()
            && bytes[1..].iter().all(u8::is_ascii_digit);
        if valid {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(Field::EmailId, value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Grouping label such as a tutorial or lab class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassId(String);

impl ClassId {
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !value.is_empty() && value.chars().all(|ch| ch.is_ascii_alphanumeric()) {
            Ok(Self(value))
        } else {
            Err(ValidationError::new(Field::ClassId, value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })*
    };
}

display_as_str!(Name, StudentId, EmailId, ClassId);

/// One student in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    student_id: StudentId,
    email_id: EmailId,
    class_id: ClassId,
    tags: TagSet,
}

impl Record {
    pub fn new(
        name: Name,
        student_id: StudentId,
        email_id: EmailId,
        class_id: ClassId,
        tags: TagSet,
    ) -> Self {
        Self {
            name,
            student_id,
            email_id,
            class_id,
            tags,
        }
    }

    /// Validates five raw field values and builds a record.
    ///
    /// Fields are checked in declaration order; the first failure is returned.
    pub fn parse<I, S>(
        name: &str,
        student_id: &str,
        email_id: &str,
        class_id: &str,
        tags: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::new(
            Name::parse(name)?,
            StudentId::parse(student_id)?,
            EmailId::parse(email_id)?,
            ClassId::parse(class_id)?,
            crate::tags::parse_tags(tags)?,
        ))
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn student_id(&self) -> &StudentId {
        &self.student_id
    }

    pub fn email_id(&self) -> &EmailId {
        &self.email_id
    }

    pub fn class_id(&self) -> &ClassId {
        &self.class_id
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// True if both records share a student id or an email id.
    pub fn is_same_identity(&self, other: &Record) -> bool {
        self.student_id == other.student_id || self.email_id == other.email_id
    }

    /// True if both the student id and the email id are unchanged.
    pub fn has_same_identity_fields(&self, other: &Record) -> bool {
        self.student_id == other.student_id && self.email_id == other.email_id
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Student ID: {}; Email ID: {}; Class ID: {}; Tags: ",
            self.name, self.student_id, self.email_id, self.class_id
        )?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

/// Field overrides for the edit workflow.
///
/// Unset fields keep the original value. A tag override replaces the whole
/// set; it is never merged element-wise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordEdit {
    pub name: Option<Name>,
    pub student_id: Option<StudentId>,
    pub email_id: Option<EmailId>,
    pub class_id: Option<ClassId>,
    pub tags: Option<TagSet>,
}

impl RecordEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_student_id(mut self, student_id: StudentId) -> Self {
        self.student_id = Some(student_id);
        self
    }

    pub fn with_email_id(mut self, email_id: EmailId) -> Self {
        self.email_id = Some(email_id);
        self
    }

    pub fn with_class_id(mut self, class_id: ClassId) -> Self {
        self.class_id = Some(class_id);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.student_id.is_none()
            && self.email_id.is_none()
            && self.class_id.is_none()
            && self.tags.is_none()
    }

    /// Builds the edited copy of `original`.
    pub fn apply(&self, original: &Record) -> Record {
        Record::new(
            self.name.clone().unwrap_or_else(|| original.name.clone()),
            self.student_id
                .clone()
                .unwrap_or_else(|| original.student_id.clone()),
            self.email_id
                .clone()
                .unwrap_or_else(|| original.email_id.clone()),
            self.class_id
                .clone()
                .unwrap_or_else(|| original.class_id.clone()),
            self.tags.clone().unwrap_or_else(|| original.tags.clone()),
        )
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Record;

    pub fn record(
        name: &str,
        student_id: &str,
        email_id: &str,
        class_id: &str,
        tags: &[&str],
    ) -> Record {
        Record::parse(name, student_id, email_id, class_id, tags.iter().copied())
            .expect("fixture record must be valid")
    }

    pub fn john() -> Record {
        record("John", "A1234567S", "E1234567", "311", &[])
    }

    pub fn alice() -> Record {
        record("Alice Pauline", "A0000001B", "E0000001", "T01", &["friends"])
    }

    pub fn bob() -> Record {
        record("Bob Choo", "A0000002C", "E0000002", "T02", &["NeedHelp", "friends"])
    }

    pub fn carl() -> Record {
        record("Carl Kurz", "A0000003D", "E0000003", "T01", &[])
    }

    pub fn typical_records() -> Vec<Record> {
        vec![alice(), bob(), carl()]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_parse_reads_back_fields_unchanged() {
        let rec = Record::parse("Mary Ann 2", "a1234567b", "E7654321", "T01", ["x1"]).unwrap();
        assert_eq!(rec.name().as_str(), "Mary Ann 2");
        assert_eq!(rec.student_id().as_str(), "a1234567b");
        assert_eq!(rec.email_id().as_str(), "E7654321");
        assert_eq!(rec.class_id().as_str(), "T01");
        assert_eq!(
            rec.tags().iter().map(Tag::as_str).collect::<Vec<_>>(),
            vec!["x1"]
        );
    }

    #[test]
    fn test_name_rules() {
        assert!(Name::parse("John Doe").is_ok());
        assert!(Name::parse("R2D2").is_ok());
        assert!(Name::parse("").is_err());
        assert!(Name::parse(" John").is_err());
        assert!(Name::parse("John*").is_err());
    }

    #[test]
    fn test_student_id_rules() {
        assert!(StudentId::parse("A1234567S").is_ok());
        assert!(StudentId::parse("a1234567s").is_ok());
        assert!(StudentId::parse("A123456S").is_err());
        assert!(StudentId::parse("A12345678").is_err());
        assert!(StudentId::parse("11234567S").is_err());
        assert!(StudentId::parse("A1234567SX").is_err());
        assert!(StudentId::parse("").is_err());
    }

    #[test]
    fn test_email_id_rules() {
        assert!(EmailId::parse("E1234567").is_ok());
        assert!(EmailId::parse("e1234567").is_ok());
        assert!(EmailId::parse("E123456").is_err());
        assert!(EmailId::parse("E12345678").is_err());
        assert!(EmailId::parse("12345678").is_err());
        assert!(EmailId::parse("john@example.com").is_err());
    }

    #[test]
    fn test_class_id_rules() {
        assert!(ClassId::parse("311").is_ok());
        assert!(ClassId::parse("T01").is_ok());
        assert!(ClassId::parse("").is_err());
        assert!(ClassId::parse("T 01").is_err());
    }

    #[test]
    fn test_parse_reports_first_bad_field() {
        let err =
            Record::parse("John", "bad", "also bad", "311", Vec::<String>::new()).unwrap_err();
        assert_eq!(err.field, Field::StudentId);
        assert_eq!(err.value, "bad");
    }

    #[test]
    fn test_strong_equality_compares_tags_as_sets() {
        let a = record("John", "A1234567S", "E1234567", "311", &["b", "a"]);
        let b = record("John", "A1234567S", "E1234567", "311", &["a", "b", "a"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_identity_is_either_field() {
        let base = john();
        let same_sid = record("Jane", "A1234567S", "E7654321", "312", &[]);
        let same_email = record("Jane", "A7654321X", "E1234567", "312", &[]);
        let different = record("Jane", "A7654321X", "E7654321", "312", &[]);

        assert!(base.is_same_identity(&same_sid));
        assert!(base.is_same_identity(&same_email));
        assert!(!base.is_same_identity(&different));
        assert_ne!(base, same_sid);
    }

    #[test]
    fn test_edit_keeps_unset_fields() {
        let original = bob();
        let edit = RecordEdit::new().with_class_id(ClassId::parse("T09").unwrap());
        let edited = edit.apply(&original);

        assert_eq!(edited.class_id().as_str(), "T09");
        assert_eq!(edited.name(), original.name());
        assert_eq!(edited.tags(), original.tags());
        assert_eq!(original.class_id().as_str(), "T02");
    }

    #[test]
    fn test_edit_replaces_whole_tag_set() {
        let original = bob();
        let edit = RecordEdit::new().with_tags([Tag::parse("solo").unwrap()]);
        let edited = edit.apply(&original);

        assert_eq!(edited.tags().len(), 1);
        assert!(edited.tags().contains(&Tag::parse("solo").unwrap()));
        assert_eq!(original.tags().len(), 2);
    }

    #[test]
    fn test_empty_tag_override_clears_tags() {
        let edited = RecordEdit::new().with_tags([]).apply(&bob());
        assert!(edited.tags().is_empty());
    }

    #[test]
    fn test_edit_is_empty() {
        assert!(RecordEdit::new().is_empty());
        assert!(!RecordEdit::new()
            .with_name(Name::parse("X").unwrap())
            .is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            bob().to_string(),
            "Bob Choo; Student ID: A0000002C; Email ID: E0000002; Class ID: T02; Tags: [NeedHelp][friends]"
        );
    }
}
