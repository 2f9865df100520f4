//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for
//! every roster operation, whatever the UI.
//!
//! `RosterApi` owns the [`Roster`] and the [`DataStore`]; commands borrow them
//! for the length of one call. It does no printing and holds no business
//! logic of its own.
//!
//! ## Generic Over DataStore
//!
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`
//!
//! API tests check dispatch and wiring only; behaviour is tested in the
//! command modules.

use crate::commands;
use crate::error::Result;
use crate::model::StudentFields;
use crate::roster::Roster;
use crate::store::DataStore;
use std::path::Path;

pub struct RosterApi<S: DataStore> {
    roster: Roster,
    store: S,
    load_policy: LoadPolicy,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            roster: Roster::new(),
            store,
            load_policy: LoadPolicy::default(),
        }
    }

    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    pub fn add_student(
        &mut self,
        name: impl Into<String>,
        age: i32,
        gpa: f64,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.roster, StudentFields::new(name, age, gpa))
    }

    pub fn update_student(
        &mut self,
        id: i64,
        name: impl Into<String>,
        age: i32,
        gpa: f64,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.roster, id, StudentFields::new(name, age, gpa))
    }

    pub fn delete_by_id(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::delete::by_id(&mut self.roster, id)
    }

    pub fn delete_by_name<R: DeleteResolver + ?Sized>(
        &mut self,
        term: &str,
        resolver: &mut R,
    ) -> Result<commands::CmdResult> {
        commands::delete::by_name(&mut self.roster, term, resolver)
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.roster)
    }

    pub fn search_by_id(&self, id: i64) -> Result<commands::CmdResult> {
        commands::search::by_id(&self.roster, id)
    }

    pub fn search_by_name(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::by_name(&self.roster, term)
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<commands::CmdResult> {
        commands::load::run(
            &mut self.roster,
            &self.store,
            path.as_ref(),
            self.load_policy,
        )
    }

    pub fn save_file(&mut self, path: impl AsRef<Path>) -> Result<commands::CmdResult> {
        commands::save::run(&self.roster, &mut self.store, path.as_ref())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::delete::DeleteResolver;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
pub use crate::format::LoadPolicy;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;
    use crate::store::memory::InMemoryStore;

    struct AlwaysYes;

    impl DeleteResolver for AlwaysYes {
        fn confirm(&mut self, _student: &Student) -> Result<bool> {
            Ok(true)
        }

        fn choose(&mut self, matches: &[Student]) -> Result<Option<i64>> {
            Ok(matches.first().map(|s| i64::from(s.id)))
        }
    }

    fn api() -> RosterApi<InMemoryStore> {
        RosterApi::new(InMemoryStore::new())
    }

    #[test]
    fn crud_dispatch() {
        let mut api = api();
        api.add_student("Ann", 20, 3.5).unwrap();
        api.add_student("Bob", 21, 3.2).unwrap();
        api.update_student(2, "Bobby", 22, 3.3).unwrap();
        assert_eq!(api.roster().get(2).unwrap().name, "Bobby");

        api.delete_by_id(1).unwrap();
        let listed = api.list_students().unwrap().listed_students;
        assert_eq!(listed, vec![Student::new(1, "Bobby", 22, 3.3)]);
    }

    #[test]
    fn example_scenario() {
        let mut api = api();
        let ann = api.add_student("Ann", 20, 3.5).unwrap();
        assert_eq!(ann.affected_students[0].id, 1);
        let bob = api.add_student("Bob", 21, 3.2).unwrap();
        assert_eq!(bob.affected_students[0].id, 2);

        api.delete_by_id(1).unwrap();
        let listed = api.list_students().unwrap().listed_students;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].to_string(), "ID: 1, Name: Bob, Age: 21, GPA: 3.2");
    }

    #[test]
    fn delete_by_name_uses_the_resolver() {
        let mut api = api();
        api.add_student("Ann", 20, 3.5).unwrap();
        api.delete_by_name("Ann", &mut AlwaysYes).unwrap();
        assert!(api.roster().is_empty());
    }

    #[test]
    fn searches_dispatch() {
        let mut api = api();
        api.add_student("Ann", 20, 3.5).unwrap();
        assert_eq!(api.search_by_id(1).unwrap().listed_students.len(), 1);
        assert_eq!(api.search_by_name("An").unwrap().listed_students.len(), 1);
    }

    #[test]
    fn load_honours_the_configured_policy() {
        let mut store = InMemoryStore::new();
        store.insert_file("s.csv", "ID,Name,Age,GPA\n1,Ann,x,3.5\n");

        let mut strict = RosterApi::new(store).with_load_policy(LoadPolicy::Strict);
        assert!(strict.load_file("s.csv").is_err());
        assert!(strict.roster().is_empty());
    }

    #[test]
    fn save_then_load_round_trip() {
        let mut api = api();
        api.add_student("Ann", 20, 3.5).unwrap();
        api.add_student("Bob", 21, 3.2).unwrap();
        api.save_file("out.csv").unwrap();
        assert!(api.store().file("out.csv").is_some());

        api.load_file("out.csv").unwrap();
        let names: Vec<&str> = api
            .roster()
            .students()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ann", "Bob", "Ann", "Bob"]);
    }
}
