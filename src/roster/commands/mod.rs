use crate::model::Student;

pub mod add;
pub mod delete;
pub mod list;
pub mod load;
pub mod save;
pub mod search;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, changed or removed by the command.
    pub affected_students: Vec<Student>,
    /// Records the UI should show, in order.
    pub listed_students: Vec<Student>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_students(mut self, students: Vec<Student>) -> Self {
        self.affected_students = students;
        self
    }

    pub fn with_listed_students(mut self, students: Vec<Student>) -> Self {
        self.listed_students = students;
        self
    }
}

/// Ids arrive as whatever integer the user typed. Only those that fit a
/// roster id can name a record; the rest are simply not found.
pub(crate) fn roster_id(id: i64) -> Option<u32> {
    u32::try_from(id).ok().filter(|&id| id > 0)
}

pub(crate) fn not_found(id: i64) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::warning(format!(
        "Student with ID {} not found!",
        id
    )))
}

pub(crate) fn no_name_match_message(term: &str) -> CmdMessage {
    CmdMessage::warning(format!("No student found with name containing \"{}\".", term))
}
