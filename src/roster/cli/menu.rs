use super::render::{
    print_error, print_heading, print_menu, print_messages, print_student_details,
    print_students_table,
};
use colored::Colorize;
use roster::api::RosterApi;
use roster::error::{Result, RosterError};
use roster::store::RecordStore;
use std::io::{BufRead, Write};
use tracing::{debug, error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Choice {
    Add,
    Search,
    Delete,
    List,
    Exit,
}

impl Choice {
    pub(super) fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Search),
            "3" => Some(Choice::Delete),
            "4" => Some(Choice::List),
            "5" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// The interactive loop. Reads choices from `input` and writes everything the
/// operator sees to `out`.
pub(super) struct Menu<'a, S: RecordStore, R: BufRead, W: Write> {
    api: &'a mut RosterApi<S>,
    input: R,
    out: W,
}

impl<'a, S: RecordStore, R: BufRead, W: Write> Menu<'a, S, R, W> {
    pub(super) fn new(api: &'a mut RosterApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    /// Runs until the operator picks Exit or input ends.
    pub(super) fn run(&mut self) -> Result<()> {
        match self.api.init() {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(e) => {
                error!(error = %e, "failed to initialize data file");
                print_error(&mut self.out, &e)?;
            }
        }

        loop {
            print_menu(&mut self.out)?;
            let Some(line) = self.prompt("Enter your choice (1-5): ")? else {
                break;
            };

            let keep_going = match Choice::parse(&line) {
                Some(choice) => self.dispatch(choice)?,
                None => {
                    writeln!(
                        self.out,
                        "{}",
                        "Invalid choice. Please try again.".red()
                    )?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }

        writeln!(self.out, "Exiting system. Goodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Returns `false` on Exit or when input ran out mid-operation.
    fn dispatch(&mut self, choice: Choice) -> Result<bool> {
        debug!(?choice, "menu choice");
        match choice {
            Choice::Add => self.add(),
            Choice::Search => self.search(),
            Choice::Delete => self.delete(),
            Choice::List => self.list(),
            Choice::Exit => Ok(false),
        }
    }

    fn add(&mut self) -> Result<bool> {
        print_heading(&mut self.out, "Add New Student")?;
        let Some(id) = self.prompt("Enter Student ID: ")? else {
            return Ok(false);
        };
        if let Err(e) = self.api.check_new_id(&id) {
            self.report(e)?;
            return Ok(true);
        }
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(false);
        };
        if let Err(e) = self.api.check_name(&name) {
            self.report(e)?;
            return Ok(true);
        }
        let Some(course) = self.prompt("Enter Course: ")? else {
            return Ok(false);
        };
        let Some(email) = self.prompt("Enter Email: ")? else {
            return Ok(false);
        };

        match self.api.add_student(&id, &name, &course, &email) {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn search(&mut self) -> Result<bool> {
        print_heading(&mut self.out, "Search Student")?;
        let Some(id) = self.prompt("Enter Student ID to Search: ")? else {
            return Ok(false);
        };

        match self.api.search_student(&id) {
            Ok(result) => {
                for student in &result.listed_students {
                    print_student_details(&mut self.out, student)?;
                }
            }
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn delete(&mut self) -> Result<bool> {
        print_heading(&mut self.out, "Delete Student")?;
        let Some(id) = self.prompt("Enter Student ID to Delete: ")? else {
            return Ok(false);
        };

        match self.api.delete_student(&id) {
            Ok(result) => print_messages(&mut self.out, &result.messages)?,
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    fn list(&mut self) -> Result<bool> {
        print_heading(&mut self.out, "View All Students")?;
        match self.api.list_students() {
            Ok(result) => print_students_table(&mut self.out, &result.listed_students)?,
            Err(e) => self.report(e)?,
        }
        Ok(true)
    }

    /// Operation failures are shown to the operator; the loop carries on.
    fn report(&mut self, e: RosterError) -> Result<()> {
        debug!(error = %e, "operation failed");
        print_error(&mut self.out, &e)?;
        Ok(())
    }

    /// Prints `label`, reads one line and trims it. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
