use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("ID must be numeric (got '{0}')")]
    InvalidId(String),

    #[error("Student ID {0} already exists")]
    DuplicateId(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Invalid email format (must contain '@'): '{0}'")]
    InvalidEmail(String),

    #[error("Student ID {0} not found")]
    StudentNotFound(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
