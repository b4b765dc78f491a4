use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::error::RosterError;
use roster::model::Student;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const COURSE_WIDTH: usize = 10;
const EMAIL_WIDTH: usize = 25;
const RULE_WIDTH: usize = 65;

pub(super) fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=== Student Management System ===".bold())?;
    writeln!(out, "1. Add Student")?;
    writeln!(out, "2. Search Student")?;
    writeln!(out, "3. Delete Student")?;
    writeln!(out, "4. View All Students")?;
    writeln!(out, "5. Exit")
}

pub(super) fn print_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("--- {} ---", title).bold())
}

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, error: &RosterError) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

pub(super) fn print_student_details<W: Write>(out: &mut W, student: &Student) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Student Details Found:".bold())?;
    writeln!(out, "ID     : {}", student.id)?;
    writeln!(out, "Name   : {}", student.name)?;
    writeln!(out, "Course : {}", student.course)?;
    writeln!(out, "Email  : {}", student.email)
}

pub(super) fn print_students_table<W: Write>(out: &mut W, students: &[Student]) -> io::Result<()> {
    if students.is_empty() {
        return writeln!(out, "{}", "No records found.".dimmed());
    }

    let header = table_row(["ID", "Name", "Course", "Email"]);
    writeln!(out, "{}", header.bold())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for s in students {
        writeln!(
            out,
            "{}",
            table_row([&s.id, &s.name, &s.course, &s.email])
        )?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub(super) fn print_config<W: Write>(out: &mut W, config: &RosterConfig) -> io::Result<()> {
    writeln!(out, "data-file = {}", config.data_file.display())?;
    writeln!(out, "email-policy = {}", config.email_policy)
}

fn table_row<S: AsRef<str>>(cells: [S; 4]) -> String {
    let [id, name, course, email] = cells;
    let line = format!(
        "{} {} {} {}",
        pad_to_width(id.as_ref(), ID_WIDTH),
        pad_to_width(name.as_ref(), NAME_WIDTH),
        pad_to_width(course.as_ref(), COURSE_WIDTH),
        pad_to_width(email.as_ref(), EMAIL_WIDTH),
    );
    line.trim_end().to_string()
}

/// Left-aligns `s` in a column of `width` display cells, truncating with an
/// ellipsis when it does not fit.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut cell = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(cell.width());
    cell.push_str(&" ".repeat(padding));
    cell
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
