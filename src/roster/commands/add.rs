use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::StudentFields;
use crate::roster::Roster;

pub fn run(roster: &mut Roster, fields: StudentFields) -> Result<CmdResult> {
    let student = roster.add(fields).clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student added successfully with ID: {}",
        student.id
    )));
    Ok(result.with_affected_students(vec![student]))
}
