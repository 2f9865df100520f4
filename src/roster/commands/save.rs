use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format;
use crate::roster::Roster;
use crate::store::DataStore;
use std::path::Path;

pub fn run<S: DataStore>(roster: &Roster, store: &mut S, path: &Path) -> Result<CmdResult> {
    store.write(path, &format::render(roster.students())?)?;

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Data saved successfully to {}.",
        path.display()
    ))))
}
