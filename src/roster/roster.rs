//! # The Record Store
//!
//! [`Roster`] keeps students in insertion order and guarantees that their ids
//! always form the dense sequence `1..=N`.
//!
//! ## Ids are positions, not identities
//!
//! Ids are user-facing handles, not stable keys. Removing a record shifts
//! every later record down by one, and their ids follow:
//!
//! ```text
//! before: 1 Ann   2 Bob   3 Cy
//! remove(1)
//! after:  1 Bob   2 Cy
//! ```
//!
//! ## The index
//!
//! Lookups by id go through a `HashMap<u32, usize>` from id to position in the
//! backing `Vec`. The map never holds references into the vector, so growing or
//! shifting the vector cannot leave it dangling; it is rebuilt wholesale after
//! every removal.
//!
//! The next id comes from an explicit counter rather than from the last
//! element, and is recomputed whenever the roster renumbers.

use crate::error::{Result, RosterError};
use crate::model::{Student, StudentFields};
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<Student>,
    index: HashMap<u32, usize>,
    next_id: u32,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            students: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The id the next [`Roster::add`] will assign.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Appends a record and returns it with its freshly assigned id.
    pub fn add(&mut self, fields: StudentFields) -> &Student {
        let id = self.next_id;
        self.next_id += 1;

        let position = self.students.len();
        self.students.push(Student::new(id, fields.name, fields.age, fields.gpa));
        self.index.insert(id, position);

        &self.students[position]
    }

    pub fn get(&self, id: u32) -> Option<&Student> {
        self.index.get(&id).map(|&position| &self.students[position])
    }

    /// Overwrites name, age and gpa in place. The id and position never change.
    pub fn update(&mut self, id: u32, fields: StudentFields) -> Result<&Student> {
        let position = *self
            .index
            .get(&id)
            .ok_or(RosterError::StudentNotFound(id))?;

        let student = &mut self.students[position];
        student.name = fields.name;
        student.age = fields.age;
        student.gpa = fields.gpa;
        Ok(&self.students[position])
    }

    /// Removes a record and renumbers the survivors.
    ///
    /// The returned record carries the id it had at the moment of removal.
    pub fn remove(&mut self, id: u32) -> Result<Student> {
        let position = self
            .index
            .remove(&id)
            .ok_or(RosterError::StudentNotFound(id))?;

        let removed = self.students.remove(position);
        self.renumber();
        Ok(removed)
    }

    /// Records whose name contains `term`, in roster order.
    pub fn find_by_name(&self, term: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.name_contains(term))
            .collect()
    }

    fn renumber(&mut self) {
        self.index.clear();
        for (position, student) in self.students.iter_mut().enumerate() {
            student.id = position as u32 + 1;
            self.index.insert(student.id, position);
        }
        self.next_id = self.students.len() as u32 + 1;
    }
}
