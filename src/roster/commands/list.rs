use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn run(roster: &Roster) -> Result<CmdResult> {
    if roster.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No students found!")));
    }
    Ok(CmdResult::default().with_listed_students(roster.students().to_vec()))
}
