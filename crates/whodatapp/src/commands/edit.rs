use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecordEdit, StudentId};
use crate::store::RecordStore;

/// Edits the record whose student id is exactly `student_id`.
pub fn run(
    store: &mut RecordStore,
    student_id: &StudentId,
    edit: &RecordEdit,
) -> Result<CmdResult> {
    let edited = store.edit(student_id, edit)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Edited Person: {}", edited)));
    Ok(result.with_affected(vec![edited]))
}
