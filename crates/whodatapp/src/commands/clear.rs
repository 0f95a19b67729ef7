use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run(store: &mut RecordStore) -> Result<CmdResult> {
    store.remove_all();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Contact list has been cleared!"));
    Ok(result)
}
