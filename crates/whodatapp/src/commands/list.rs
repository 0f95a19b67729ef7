use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

/// Which records to list.
#[derive(Default)]
pub enum RecordFilter {
    #[default]
    All,
    ClassId(String),
    Tag(String),
    Custom(Box<dyn Fn(&Record) -> bool>),
}

impl RecordFilter {
    fn matches(&self, record: &Record) -> bool {
        match self {
            RecordFilter::All => true,
            RecordFilter::ClassId(class_id) => record.class_id().as_str() == class_id,
            RecordFilter::Tag(tag) => record.tags().iter().any(|t| t.as_str() == tag),
            RecordFilter::Custom(predicate) => predicate(record),
        }
    }
}

pub fn run(store: &RecordStore, filter: &RecordFilter) -> Result<CmdResult> {
    let listed = store.filtered(|r| filter.matches(r));

    let mut result = CmdResult::default();
    if matches!(filter, RecordFilter::All) {
        result.add_message(CmdMessage::info("Listed all persons"));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} persons listed!",
            listed.len()
        )));
    }
    Ok(result.with_listed(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::*;

    fn typical_store() -> RecordStore {
        RecordStore::from_records(typical_records()).unwrap()
    }

    #[test]
    fn lists_all_in_order() {
        let result = run(&typical_store(), &RecordFilter::All).unwrap();
        assert_eq!(result.listed, typical_records());
    }

    #[test]
    fn filters_by_class() {
        let result = run(&typical_store(), &RecordFilter::ClassId("T02".into())).unwrap();
        assert_eq!(result.listed, vec![bob()]);
        assert_eq!(result.messages[0].content, "1 persons listed!");
    }

    #[test]
    fn filters_by_tag() {
        let result = run(&typical_store(), &RecordFilter::Tag("friends".into())).unwrap();
        assert_eq!(result.listed, vec![alice(), bob()]);
    }

    #[test]
    fn filters_by_custom_predicate() {
        let filter = RecordFilter::Custom(Box::new(|r| r.name().as_str().starts_with('C')));
        let result = run(&typical_store(), &filter).unwrap();
        assert_eq!(result.listed, vec![carl()]);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let result = run(&RecordStore::new(), &RecordFilter::All).unwrap();
        assert!(result.listed.is_empty());
    }
}
