use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::{self, LoadPolicy};
use crate::roster::Roster;
use crate::store::DataStore;
use std::path::Path;

/// Appends every row of the file at `path` to the roster.
///
/// The whole file is parsed before the first record is added, so an open
/// failure or a rejected row leaves the roster exactly as it was.
pub fn run<S: DataStore>(
    roster: &mut Roster,
    store: &S,
    path: &Path,
    policy: LoadPolicy,
) -> Result<CmdResult> {
    let contents = store.read(path)?;
    let rows = format::parse(&contents, policy)?;

    let added: Vec<_> = rows
        .into_iter()
        .map(|fields| roster.add(fields).clone())
        .collect();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data loaded successfully from {}.",
        path.display()
    )));
    result.add_message(CmdMessage::info(match added.len() {
        1 => "1 student added.".to_string(),
        n => format!("{} students added.", n),
    }));
    Ok(result.with_affected_students(added))
}
