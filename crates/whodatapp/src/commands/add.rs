use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore, record: Record) -> Result<CmdResult> {
    store.add(record.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "New person added: {}",
        record
    )));
    Ok(result.with_affected(vec![record]))
}
