use serde::{Deserialize, Serialize};
use std::fmt;

/// A single student record.
///
/// The `id` is owned by the [`Roster`](crate::roster::Roster): it is assigned
/// on insertion and rewritten whenever the roster renumbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub age: i32,
    pub gpa: f64,
}

impl Student {
    pub fn new(id: u32, name: impl Into<String>, age: i32, gpa: f64) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            gpa,
        }
    }

    /// Case-sensitive substring match on the name.
    pub fn name_contains(&self, term: &str) -> bool {
        self.name.contains(term)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {}, Name: {}, Age: {}, GPA: {}",
            self.id, self.name, self.age, self.gpa
        )
    }
}

/// The editable part of a record, as supplied by add and update.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub age: i32,
    pub gpa: f64,
}

impl StudentFields {
    pub fn new(name: impl Into<String>, age: i32, gpa: f64) -> Self {
        Self {
            name: name.into(),
            age,
            gpa,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_like_a_listing_line() {
        let student = Student::new(1, "Bob", 21, 3.2);
        assert_eq!(student.to_string(), "ID: 1, Name: Bob, Age: 21, GPA: 3.2");
    }

    #[test]
    fn whole_gpa_drops_the_fraction() {
        let student = Student::new(4, "Cy", 30, 3.0);
        assert_eq!(student.to_string(), "ID: 4, Name: Cy, Age: 30, GPA: 3");
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let student = Student::new(1, "Ann Lee", 20, 3.5);
        assert!(student.name_contains("Lee"));
        assert!(!student.name_contains("lee"));
    }
}
