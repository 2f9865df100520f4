//! Deleting by id and by name.
//!
//! Deleting by name is a dialogue: the name is a substring, so it may match
//! nothing, one record, or several. The confirmation and disambiguation steps
//! belong to the UI, so they are delegated to a [`DeleteResolver`]. The
//! command only decides which question to ask and what to do with the answer.

use crate::commands::{no_name_match_message, not_found, roster_id, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::Student;
use crate::roster::Roster;

/// UI-supplied answers for an ambiguous delete.
pub trait DeleteResolver {
    /// A single record matched. Return `true` to delete it.
    fn confirm(&mut self, student: &Student) -> Result<bool>;

    /// Several records matched. Return the id to delete, or `None` to cancel.
    /// The id is not checked against `matches`.
    fn choose(&mut self, matches: &[Student]) -> Result<Option<i64>>;
}

pub fn by_id(roster: &mut Roster, id: i64) -> Result<CmdResult> {
    let Some(key) = roster_id(id) else {
        return Ok(not_found(id));
    };

    match roster.remove(key) {
        Ok(removed) => Ok(CmdResult::default()
            .with_message(CmdMessage::success("Student deleted successfully!"))
            .with_affected_students(vec![removed])),
        Err(RosterError::StudentNotFound(_)) => Ok(not_found(id)),
        Err(e) => Err(e),
    }
}

pub fn by_name<R: DeleteResolver + ?Sized>(
    roster: &mut Roster,
    term: &str,
    resolver: &mut R,
) -> Result<CmdResult> {
    let matches: Vec<Student> = roster.find_by_name(term).into_iter().cloned().collect();

    let chosen = match matches.as_slice() {
        [] => return Ok(CmdResult::default().with_message(no_name_match_message(term))),
        [only] => {
            if resolver.confirm(only)? {
                Some(i64::from(only.id))
            } else {
                None
            }
        }
        many => resolver.choose(many)?,
    };

    match chosen {
        Some(id) => by_id(roster, id),
        None => Ok(CmdResult::default().with_message(CmdMessage::info("Deletion canceled."))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::RosterFixture;

    /// Replays canned answers and records what it was asked.
    #[derive(Default)]
    struct Scripted {
        confirm_answer: bool,
        choice: Option<i64>,
        confirmed: Vec<Student>,
        offered: Vec<Vec<Student>>,
    }

    impl DeleteResolver for Scripted {
        fn confirm(&mut self, student: &Student) -> Result<bool> {
            self.confirmed.push(student.clone());
            Ok(self.confirm_answer)
        }

        fn choose(&mut self, matches: &[Student]) -> Result<Option<i64>> {
            self.offered.push(matches.to_vec());
            Ok(self.choice)
        }
    }

    fn names(roster: &Roster) -> Vec<&str> {
        roster.students().iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn by_id_removes_and_renumbers() {
        let mut fx = RosterFixture::new()
            .with_student("Ann", 20, 3.5)
            .with_student("Bob", 21, 3.2);

        let result = by_id(&mut fx.roster, 1).unwrap();
        assert_eq!(result.messages[0].content, "Student deleted successfully!");
        assert_eq!(result.affected_students[0].name, "Ann");
        assert_eq!(fx.roster.students(), &[Student::new(1, "Bob", 21, 3.2)]);
    }

    #[test]
    fn by_id_unknown_is_a_noop() {
        let mut fx = RosterFixture::new().with_students(2);
        let result = by_id(&mut fx.roster, 9).unwrap();
        assert_eq!(result.messages[0].content, "Student with ID 9 not found!");
        assert_eq!(fx.roster.len(), 2);

        let result = by_id(&mut fx.roster, -3).unwrap();
        assert_eq!(result.messages[0].content, "Student with ID -3 not found!");
        assert_eq!(fx.roster.len(), 2);
    }

    #[test]
    fn by_name_without_matches_asks_nothing() {
        let mut fx = RosterFixture::new().with_student("Ann", 20, 3.5);
        let mut resolver = Scripted::default();

        let result = by_name(&mut fx.roster, "Zed", &mut resolver).unwrap();
        assert_eq!(
            result.messages[0].content,
            "No student found with name containing \"Zed\"."
        );
        assert!(resolver.confirmed.is_empty());
        assert!(resolver.offered.is_empty());
        assert_eq!(fx.roster.len(), 1);
    }

    #[test]
    fn single_match_deletes_only_when_confirmed() {
        let mut fx = RosterFixture::new()
            .with_student("Ann", 20, 3.5)
            .with_student("Bob", 21, 3.2);

        let mut declined = Scripted::default();
        let result = by_name(&mut fx.roster, "Ann", &mut declined).unwrap();
        assert_eq!(result.messages[0].content, "Deletion canceled.");
        assert_eq!(declined.confirmed[0].name, "Ann");
        assert_eq!(names(&fx.roster), vec!["Ann", "Bob"]);

        let mut accepted = Scripted {
            confirm_answer: true,
            ..Default::default()
        };
        by_name(&mut fx.roster, "Ann", &mut accepted).unwrap();
        assert_eq!(fx.roster.students(), &[Student::new(1, "Bob", 21, 3.2)]);
    }

    #[test]
    fn many_matches_delete_the_chosen_id() {
        let mut fx = RosterFixture::new()
            .with_student("Ann Lee", 20, 3.5)
            .with_student("Bob", 21, 3.2)
            .with_student("Lee Park", 22, 3.8);

        let mut resolver = Scripted {
            choice: Some(3),
            ..Default::default()
        };
        let result = by_name(&mut fx.roster, "Lee", &mut resolver).unwrap();

        let offered: Vec<u32> = resolver.offered[0].iter().map(|s| s.id).collect();
        assert_eq!(offered, vec![1, 3]);
        assert_eq!(result.affected_students[0].name, "Lee Park");
        assert_eq!(names(&fx.roster), vec!["Ann Lee", "Bob"]);
    }

    #[test]
    fn many_matches_cancelled_leaves_roster_alone() {
        let mut fx = RosterFixture::new()
            .with_student("Ann Lee", 20, 3.5)
            .with_student("Lee Park", 22, 3.8);

        let mut resolver = Scripted::default();
        let result = by_name(&mut fx.roster, "Lee", &mut resolver).unwrap();
        assert_eq!(result.messages[0].content, "Deletion canceled.");
        assert_eq!(fx.roster.len(), 2);
    }

    #[test]
    fn chosen_id_that_does_not_exist_is_not_found() {
        let mut fx = RosterFixture::new()
            .with_student("Ann Lee", 20, 3.5)
            .with_student("Lee Park", 22, 3.8);

        let mut resolver = Scripted {
            choice: Some(42),
            ..Default::default()
        };
        let result = by_name(&mut fx.roster, "Lee", &mut resolver).unwrap();
        assert_eq!(result.messages[0].content, "Student with ID 42 not found!");
        assert_eq!(fx.roster.len(), 2);
    }
}
