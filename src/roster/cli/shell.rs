//! The interactive menu loop.
//!
//! One state, "waiting at the menu", plus a short dialogue per command. Every
//! dialogue either reaches the API or is abandoned through `cancel` / `0`,
//! and always returns to the menu. Only command 9 or the end of input leaves
//! the loop.

use super::prompt::Prompter;
use super::render;
use roster::api::{CmdMessage, CmdResult, DeleteResolver, RosterApi};
use roster::error::{Result, RosterError};
use roster::model::Student;
use roster::store::DataStore;
use std::io::{BufRead, Write};
use std::path::Path;

const GOODBYE: &str = "Exiting the program. Goodbye!";

enum Flow {
    Continue,
    Exit,
}

/// `None` means the user backed out before anything ran.
type Outcome = Result<Option<CmdResult>>;

pub struct Shell<S: DataStore, R, W> {
    api: RosterApi<S>,
    prompter: Prompter<R, W>,
}

impl<S: DataStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(api: RosterApi<S>, prompter: Prompter<R, W>) -> Self {
        Self { api, prompter }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (RosterApi<S>, Prompter<R, W>) {
        (self.api, self.prompter)
    }

    /// Loads `startup_file`, then serves the menu until exit.
    ///
    /// A startup file that cannot be read is reported and the session starts
    /// empty.
    pub fn run(&mut self, startup_file: &Path) -> Result<()> {
        let loaded = self.api.load_file(startup_file).map(Some);
        self.report(loaded)?;

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) | Err(RosterError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        render::write_message(self.prompter.output(), &CmdMessage::info(GOODBYE))?;
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        render::write_menu(self.prompter.output())?;
        let choice: i64 = self.prompter.ask_number("Enter your choice: ")?;

        let outcome = match choice {
            1 => self.add(),
            2 => self.update(),
            3 => self.delete(),
            4 => self.api.list_students().map(Some),
            5 => self.search_by_id(),
            6 => self.search_by_name(),
            7 => self.load(),
            8 => self.save(),
            9 => return Ok(Flow::Exit),
            _ => Ok(Some(CmdResult::default().with_message(CmdMessage::warning(
                "Invalid choice! Please try again.",
            )))),
        };

        self.report(outcome)?;
        Ok(Flow::Continue)
    }

    /// Renders an outcome. Command errors are shown and swallowed; only a
    /// closed input escapes.
    fn report(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Ok(Some(result)) => render::write_result(self.prompter.output(), &result)?,
            Ok(None) => {}
            Err(RosterError::InputClosed) => return Err(RosterError::InputClosed),
            Err(e) => render::write_error(self.prompter.output(), &e)?,
        }
        Ok(())
    }

    fn add(&mut self) -> Outcome {
        let Some(name) = self
            .prompter
            .ask_cancelable("Enter Name (or type 'cancel' to exit): ")?
        else {
            return Ok(None);
        };
        let age: i32 = self.prompter.ask_number("Enter Age: ")?;
        let gpa = self.ask_gpa("Enter GPA: ")?;

        self.api.add_student(name, age, gpa).map(Some)
    }

    fn update(&mut self) -> Outcome {
        let id: i64 = self
            .prompter
            .ask_number("Enter ID of the student to update (or type '0' to cancel): ")?;
        if id == 0 {
            return Ok(None);
        }

        let Some(name) = self
            .prompter
            .ask_cancelable("Enter new Name (or type 'cancel' to exit): ")?
        else {
            return Ok(None);
        };
        let age: i32 = self.prompter.ask_number("Enter new Age: ")?;
        let gpa = self.ask_gpa("Enter new GPA: ")?;

        self.api.update_student(id, name, age, gpa).map(Some)
    }

    fn delete(&mut self) -> Outcome {
        writeln!(self.prompter.output(), "Delete by:\n1. ID\n2. Name")?;
        let how: i64 = self.prompter.ask_number("Enter your choice: ")?;

        match how {
            1 => {
                let id: i64 = self
                    .prompter
                    .ask_number("Enter ID of the student to delete (or type '0' to cancel): ")?;
                if id == 0 {
                    return Ok(None);
                }
                self.api.delete_by_id(id).map(Some)
            }
            2 => {
                let Some(name) = self.prompter.ask_cancelable(
                    "Enter name of the student to delete (or type 'cancel' to exit): ",
                )?
                else {
                    return Ok(None);
                };
                self.api.delete_by_name(&name, &mut self.prompter).map(Some)
            }
            _ => Ok(Some(
                CmdResult::default().with_message(CmdMessage::warning("Invalid choice!")),
            )),
        }
    }

    fn search_by_id(&mut self) -> Outcome {
        let id: i64 = self
            .prompter
            .ask_number("Enter ID of the student to search (or type '0' to cancel): ")?;
        if id == 0 {
            return Ok(None);
        }
        self.api.search_by_id(id).map(Some)
    }

    fn search_by_name(&mut self) -> Outcome {
        let Some(name) = self
            .prompter
            .ask_cancelable("Enter name (first or last) to search (or type 'cancel' to exit): ")?
        else {
            return Ok(None);
        };
        self.api.search_by_name(&name).map(Some)
    }

    fn load(&mut self) -> Outcome {
        let Some(file) = self
            .prompter
            .ask_cancelable("Enter filename to load data from (or type 'cancel' to exit): ")?
        else {
            return Ok(None);
        };
        self.api.load_file(file.trim()).map(Some)
    }

    fn save(&mut self) -> Outcome {
        let Some(file) = self
            .prompter
            .ask_cancelable("Enter filename to save data to (or type 'cancel' to exit): ")?
        else {
            return Ok(None);
        };
        self.api.save_file(file.trim()).map(Some)
    }

    /// GPAs must survive a save and reload, so NaN and infinities are refused.
    fn ask_gpa(&mut self, prompt: &str) -> Result<f64> {
        self.prompter
            .ask_number_where(prompt, |gpa: &f64| gpa.is_finite())
    }
}

/// Console side of delete-by-name: show the matches, then ask.
impl<R: BufRead, W: Write> DeleteResolver for Prompter<R, W> {
    fn confirm(&mut self, student: &Student) -> Result<bool> {
        writeln!(self.output(), "Found 1 student:")?;
        render::write_students(self.output(), std::slice::from_ref(student))?;

        let answer = self.ask("Are you sure you want to delete this student? (yes/no): ")?;
        Ok(answer.trim() == "yes")
    }

    fn choose(&mut self, matches: &[Student]) -> Result<Option<i64>> {
        writeln!(self.output(), "Found {} students:", matches.len())?;
        render::write_students(self.output(), matches)?;

        let id: i64 = self.ask_number(
            "Enter the ID of the student you want to delete (or type '0' to cancel): ",
        )?;
        Ok((id != 0).then_some(id))
    }
}
