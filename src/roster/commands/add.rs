use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{is_valid_email, is_valid_id, is_valid_name, EmailPolicy, NewStudent, Student};
use crate::store::RecordStore;
use tracing::{info, warn};

/// Validates `input` against the current roster and appends it.
///
/// Checks run in order: numeric id, unique id, non-empty name, email. The
/// first failure is returned and nothing is written.
pub fn run<S: RecordStore>(
    store: &mut S,
    input: NewStudent,
    email_policy: EmailPolicy,
) -> Result<CmdResult> {
    let mut students = store.load()?;

    check_id(&students, &input.id)?;
    check_name(&input.name)?;

    let mut result = CmdResult::default();
    if !is_valid_email(&input.email) {
        match email_policy {
            EmailPolicy::Reject => return Err(RosterError::InvalidEmail(input.email)),
            EmailPolicy::Warn => {
                warn!(id = %input.id, email = %input.email, "saving student with suspicious email");
                result.add_message(CmdMessage::warning(format!(
                    "Email '{}' does not contain '@'; saved anyway.",
                    input.email
                )));
            }
        }
    }

    let student = input.into_student();
    students.push(student.clone());
    store.save(&students)?;
    info!(id = %student.id, "student added");

    result.add_message(CmdMessage::success("Student added successfully!"));
    result.affected_students.push(student);
    Ok(result)
}

/// Numeric first, then unique. Stored ids are compared trimmed so a
/// hand-edited `" 7"` still blocks a new `7`.
pub fn check_id(students: &[Student], id: &str) -> Result<()> {
    if !is_valid_id(id) {
        return Err(RosterError::InvalidId(id.to_string()));
    }
    if students.iter().any(|s| s.id.trim() == id) {
        return Err(RosterError::DuplicateId(id.to_string()));
    }
    Ok(())
}

pub fn check_name(name: &str) -> Result<()> {
    if !is_valid_name(name) {
        return Err(RosterError::EmptyName);
    }
    Ok(())
}
