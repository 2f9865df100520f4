//! # CSV Format
//!
//! Student files are flat comma-separated text:
//!
//! ```text
//! ID,Name,Age,GPA
//! 1,Ann,20,3.5
//! 2,Bob,21,3.2
//! ```
//!
//! There is no quoting, so a name containing a comma cannot be stored
//! faithfully. The header is always written verbatim and always skipped, never
//! validated, on the way in. The id column is parsed but discarded: records
//! get fresh ids from the roster on load.
//!
//! Fields are read as raw bytes and decoded lossily, so a name in a legacy
//! encoding comes through with replacement characters instead of failing the
//! load.
//!
//! ## Load policies
//!
//! - [`LoadPolicy::Lenient`] reads rows best-effort. Missing or unparsable
//!   fields fall back to defaults (empty name, age 0, gpa 0) and nothing is
//!   reported.
//! - [`LoadPolicy::Strict`] rejects the whole file at the first bad row.
//!
//! Blank lines are skipped under both policies.

use crate::error::{Result, RosterError};
use crate::model::{Student, StudentFields};
use csv::{ByteRecord, QuoteStyle, ReaderBuilder, WriterBuilder};
use std::borrow::Cow;
use std::str::FromStr;

pub const HEADER: &str = "ID,Name,Age,GPA";

const FIELD_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    #[default]
    Lenient,
    Strict,
}

/// Parses file contents into the fields of each row, skipping the header.
pub fn parse(contents: impl AsRef<[u8]>, policy: LoadPolicy) -> Result<Vec<StudentFields>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .quoting(false)
        .flexible(true)
        .from_reader(contents.as_ref());

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        if is_blank(&record) {
            continue;
        }

        let row = match policy {
            LoadPolicy::Lenient => parse_lenient(&record),
            LoadPolicy::Strict => parse_strict(&record).map_err(|message| RosterError::Parse {
                // 1-based, counting the header.
                line: record.position().map_or(0, |p| p.line() as usize),
                message,
            })?,
        };
        rows.push(row);
    }

    Ok(rows)
}

/// Renders the header plus one line per student, in the given order.
pub fn render(students: &[Student]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::with_capacity(HEADER.len() + 1 + students.len() * 24));

    writer.write_record(HEADER.split(','))?;
    for s in students {
        writer.write_record([
            s.id.to_string(),
            s.name.clone(),
            s.age.to_string(),
            s.gpa.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// A whitespace-only line reads as a single blank field.
fn is_blank(record: &ByteRecord) -> bool {
    record.len() == 1 && text(&record[0]).trim().is_empty()
}

fn text(field: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(field)
}

fn number<T: FromStr>(field: &[u8]) -> Option<T> {
    text(field).trim().parse().ok()
}

fn parse_lenient(record: &ByteRecord) -> StudentFields {
    let name = record.get(1).map(text).unwrap_or_default();
    let age = record.get(2).and_then(number::<i32>).unwrap_or(0);
    let gpa = record.get(3).and_then(number::<f64>).unwrap_or(0.0);

    StudentFields::new(name, age, gpa)
}

fn parse_strict(record: &ByteRecord) -> std::result::Result<StudentFields, String> {
    if record.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            record.len()
        ));
    }

    number::<u32>(&record[0]).ok_or_else(|| format!("invalid id '{}'", text(&record[0])))?;
    let age = number::<i32>(&record[2])
        .ok_or_else(|| format!("invalid age '{}'", text(&record[2])))?;
    let gpa = number::<f64>(&record[3])
        .filter(|g| g.is_finite())
        .ok_or_else(|| format!("invalid gpa '{}'", text(&record[3])))?;

    Ok(StudentFields::new(text(&record[1]), age, gpa))
}
