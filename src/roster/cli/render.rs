use colored::Colorize;
use roster::api::{CmdMessage, CmdResult, MessageLevel};
use roster::error::RosterError;
use roster::model::Student;
use std::io::{self, Write};

const MENU_TITLE: &str = "Student Management System";

const MENU_ITEMS: [&str; 9] = [
    "Add Student",
    "Update Student",
    "Delete Student",
    "Display All Students",
    "Search Student by ID",
    "Search Student by Name",
    "Load Students from File",
    "Save Students to File",
    "Exit",
];

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", MENU_TITLE.bold())?;
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item)?;
    }
    Ok(())
}

pub fn write_students<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    for student in students {
        writeln!(out, "{}", student)?;
    }
    Ok(())
}

pub fn write_message<W: Write>(out: &mut W, message: &CmdMessage) -> io::Result<()> {
    match message.level {
        MessageLevel::Info => writeln!(out, "{}", message.content.dimmed()),
        MessageLevel::Success => writeln!(out, "{}", message.content.green()),
        MessageLevel::Warning => writeln!(out, "{}", message.content.yellow()),
        MessageLevel::Error => writeln!(out, "{}", message.content.red()),
    }
}

pub fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        write_message(out, message)?;
    }
    Ok(())
}

/// Listed records first, then the messages.
pub fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    write_students(out, &result.listed_students)?;
    write_messages(out, &result.messages)
}

pub fn write_error<W: Write>(out: &mut W, error: &RosterError) -> io::Result<()> {
    write_message(out, &CmdMessage::error(format!("Error: {}", error)))
}
