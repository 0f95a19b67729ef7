//! The in-memory record collection.
//!
//! [`RecordStore`] owns its records and guarantees that no two of them share a
//! student id or an email id. Every mutating method either keeps that
//! invariant or returns an error and leaves the store untouched.
//!
//! Records are kept in insertion order. Callers only ever see shared
//! references or clones, so a stored record can not be modified in place.

use log::debug;

use crate::error::{Result, WhoDatError};
use crate::model::{Record, RecordEdit, StudentId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an unvalidated snapshot.
    pub fn from_records(snapshot: Vec<Record>) -> Result<Self> {
        let mut store = Self::new();
        store.reset_from(snapshot)?;
        Ok(store)
    }

    /// True if some stored record shares a student id or email id with `candidate`.
    pub fn contains(&self, candidate: &Record) -> bool {
        self.records.iter().any(|r| r.is_same_identity(candidate))
    }

    /// Appends `record` unless it collides with a stored record.
    ///
    /// The check and the insertion happen under the same `&mut` borrow.
    pub fn add(&mut self, record: Record) -> Result<()> {
        if let Some(existing) = self.records.iter().find(|r| r.is_same_identity(&record)) {
            return Err(duplicate(existing, &record));
        }
        self.records.push(record);
        Ok(())
    }

    /// Substitutes `new` for the record strongly equal to `old`, keeping its position.
    ///
    /// Identity collisions are not checked here; see [`RecordStore::edit`].
    pub fn replace(&mut self, old: &Record, new: Record) -> Result<()> {
        let pos = self
            .records
            .iter()
            .position(|r| r == old)
            .ok_or_else(|| WhoDatError::NotFound(old.student_id().to_string()))?;
        self.records[pos] = new;
        Ok(())
    }

    /// Applies `edit` to the record with the given student id.
    ///
    /// The edited record is accepted when its student id and email id are both
    /// unchanged, or when it collides with no *other* stored record. On error
    /// the store is left as it was.
    pub fn edit(&mut self, student_id: &StudentId, edit: &RecordEdit) -> Result<Record> {
        if edit.is_empty() {
            return Err(WhoDatError::NothingToEdit);
        }

        let pos = self
            .records
            .iter()
            .position(|r| r.student_id() == student_id)
            .ok_or_else(|| WhoDatError::NotFound(student_id.to_string()))?;
        let original = &self.records[pos];
        let edited = edit.apply(original);

        if !original.has_same_identity_fields(&edited) {
            let clash = self
                .records
                .iter()
                .enumerate()
                .find(|(i, r)| *i != pos && r.is_same_identity(&edited));
            if let Some((_, existing)) = clash {
                return Err(duplicate(existing, &edited));
            }
        }

        debug!(
            "event=record_edit student_id={} new_student_id={}",
            student_id,
            edited.student_id()
        );
        self.records[pos] = edited.clone();
        Ok(edited)
    }

    pub fn remove_all(&mut self) {
        self.records.clear();
    }

    /// Replaces the whole contents with `snapshot`.
    ///
    /// Fails on the first pair of records sharing an identity; the current
    /// contents are kept in that case.
    pub fn reset_from(&mut self, snapshot: Vec<Record>) -> Result<()> {
        for (i, record) in snapshot.iter().enumerate() {
            if let Some(existing) = snapshot[..i].iter().find(|r| r.is_same_identity(record)) {
                return Err(duplicate(existing, record));
            }
        }
        self.records = snapshot;
        Ok(())
    }

    pub fn find_by_student_id(&self, student_id: &StudentId) -> Option<&Record> {
        self.records.iter().find(|r| r.student_id() == student_id)
    }

    /// Read-only view in insertion order.
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Records matching `predicate`, in store order.
    pub fn filtered<P>(&self, mut predicate: P) -> Vec<Record>
    where
        P: FnMut(&Record) -> bool,
    {
        self.records
            .iter()
            .filter(|&r| predicate(r))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn duplicate(existing: &Record, incoming: &Record) -> WhoDatError {
    WhoDatError::DuplicateIdentity {
        existing: existing.student_id().to_string(),
        incoming: incoming.student_id().to_string(),
    }
}
