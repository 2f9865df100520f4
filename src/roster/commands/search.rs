use crate::commands::{no_name_match_message, not_found, roster_id, CmdResult};
use crate::error::Result;
use crate::roster::Roster;

pub fn by_id(roster: &Roster, id: i64) -> Result<CmdResult> {
    Ok(match roster_id(id).and_then(|key| roster.get(key)) {
        Some(student) => CmdResult::default().with_listed_students(vec![student.clone()]),
        None => not_found(id),
    })
}

/// Case-sensitive substring search over names, in roster order.
pub fn by_name(roster: &Roster, term: &str) -> Result<CmdResult> {
    let found: Vec<_> = roster.find_by_name(term).into_iter().cloned().collect();
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(no_name_match_message(term)));
    }
    Ok(CmdResult::default().with_listed_students(found))
}
