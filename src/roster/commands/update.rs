use crate::commands::{not_found, roster_id, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::StudentFields;
use crate::roster::Roster;

pub fn run(roster: &mut Roster, id: i64, fields: StudentFields) -> Result<CmdResult> {
    let Some(key) = roster_id(id) else {
        return Ok(not_found(id));
    };

    match roster.update(key, fields) {
        Ok(student) => {
            let student = student.clone();
            Ok(CmdResult::default()
                .with_message(CmdMessage::success("Student updated successfully!"))
                .with_affected_students(vec![student]))
        }
        Err(RosterError::StudentNotFound(_)) => Ok(not_found(id)),
        Err(e) => Err(e),
    }
}
