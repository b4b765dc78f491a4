use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Column order of the backing file. The header row is exactly these names.
pub const FIELDS: [&str; 4] = ["id", "name", "course", "email"];

/// A stored student record.
///
/// Field order matches [`FIELDS`]; the CSV store (de)serializes positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub course: String,
    pub email: String,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        course: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            course: course.into(),
            email: email.into(),
        }
    }
}

/// Unvalidated input for the add operation. Fields are trimmed on construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub course: String,
    pub email: String,
}

impl NewStudent {
    pub fn new(id: &str, name: &str, course: &str, email: &str) -> Self {
        Self {
            id: id.trim().to_string(),
            name: name.trim().to_string(),
            course: course.trim().to_string(),
            email: email.trim().to_string(),
        }
    }

    pub fn into_student(self) -> Student {
        Student {
            id: self.id,
            name: self.name,
            course: self.course,
            email: self.email,
        }
    }
}

/// How an email without an `@` is treated when adding a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailPolicy {
    /// Refuse the record.
    #[default]
    Reject,
    /// Save the record and attach a warning.
    Warn,
}

impl fmt::Display for EmailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmailPolicy::Reject => write!(f, "reject"),
            EmailPolicy::Warn => write!(f, "warn"),
        }
    }
}

impl FromStr for EmailPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(EmailPolicy::Reject),
            "warn" => Ok(EmailPolicy::Warn),
            other => Err(format!(
                "Invalid email policy '{}' (expected 'reject' or 'warn')",
                other
            )),
        }
    }
}

/// An id is a non-empty run of ASCII decimal digits.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}
