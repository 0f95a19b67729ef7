use tempfile::TempDir;
use whodatapp::api::WhoDatApi;
use whodatapp::commands::list::RecordFilter;
use whodatapp::config::WhoDatConfig;
use whodatapp::model::{ClassId, StudentId};
use whodatapp::{Record, RecordEdit, WhoDatError};

fn record(name: &str, sid: &str, email: &str, class: &str) -> Record {
    Record::parse(name, sid, email, class, Vec::<String>::new()).unwrap()
}

fn config_in(dir: &TempDir) -> WhoDatConfig {
    WhoDatConfig {
        data_file: dir.path().join("nested").join("whodat.json"),
    }
}

#[test]
fn test_first_run_then_reopen() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);

    let mut api = WhoDatApi::from_config(&config).unwrap();
    assert!(api.store().is_empty());
    api.add_record(record("John", "A1234567S", "E1234567", "311"))
        .unwrap();
    api.add_record(record("Mary", "A7654321X", "E7654321", "311"))
        .unwrap();

    let reopened = WhoDatApi::from_config(&config).unwrap();
    assert_eq!(reopened.store(), api.store());
}

#[test]
fn test_duplicate_add_scenario() {
    let dir = TempDir::new().unwrap();
    let mut api = WhoDatApi::from_config(&config_in(&dir)).unwrap();
    api.add_record(record("John", "A1234567S", "E1234567", "311"))
        .unwrap();

    let err = api
        .add_record(record("John", "A1234567S", "E7654321", "311"))
        .unwrap_err();
    assert!(matches!(err, WhoDatError::DuplicateIdentity { .. }));

    api.add_record(record("Mary", "A7654321X", "E7654321", "311"))
        .unwrap();
    let names: Vec<_> = api
        .store()
        .iter()
        .map(|r| r.name().as_str().to_string())
        .collect();
    assert_eq!(names, vec!["John", "Mary"]);
}

#[test]
fn test_edit_then_list_by_class() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let mut api = WhoDatApi::from_config(&config).unwrap();
    api.add_record(record("John", "A1234567S", "E1234567", "311"))
        .unwrap();
    api.add_record(record("Mary", "A7654321X", "E7654321", "311"))
        .unwrap();

    let sid = StudentId::parse("A7654321X").unwrap();
    let edit = RecordEdit::new().with_class_id(ClassId::parse("T01").unwrap());
    api.edit_record(&sid, &edit).unwrap();

    let reopened = WhoDatApi::from_config(&config).unwrap();
    let listed = reopened
        .list_records(&RecordFilter::ClassId("T01".into()))
        .unwrap()
        .listed;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].student_id(), &sid);
}

#[test]
fn test_clear_persists_empty_list() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    let mut api = WhoDatApi::from_config(&config).unwrap();
    api.add_record(record("John", "A1234567S", "E1234567", "311"))
        .unwrap();
    api.clear().unwrap();

    let text = std::fs::read_to_string(&config.data_file).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!({ "persons": [] }));
}
