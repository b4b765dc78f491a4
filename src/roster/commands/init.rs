use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S) -> Result<CmdResult> {
    let created = store.initialize()?;
    let mut result = CmdResult::default();
    if created {
        let message = match store.location() {
            Some(path) => format!("Created data file at {}", path.display()),
            None => "Created empty roster".to_string(),
        };
        result.add_message(CmdMessage::info(message));
    }
    Ok(result)
}
