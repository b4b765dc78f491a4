use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::store::RecordStore;
use tracing::info;

/// Removes every student whose id equals `id`.
///
/// The store is only rewritten when something was removed.
pub fn run<S: RecordStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let students = store.load()?;
    let (removed, kept): (Vec<_>, Vec<_>) = students.into_iter().partition(|s| s.id == id);

    if removed.is_empty() {
        return Err(RosterError::StudentNotFound(id.to_string()));
    }

    store.save(&kept)?;
    info!(id, removed = removed.len(), "student deleted");

    let mut result = CmdResult::default().with_affected_students(removed);
    result.add_message(CmdMessage::success(format!(
        "Student {} deleted successfully.",
        id
    )));
    Ok(result)
}
