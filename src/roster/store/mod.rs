//! # Storage Layer
//!
//! The [`RecordStore`] trait is the only thing the command layer knows about
//! persistence. A store hands out the whole record list and takes the whole
//! list back; there are no partial updates.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production store over a single comma-delimited file
//!   - Header row `id,name,course,email`, one student per row
//!   - Every save rewrites the entire file
//!
//! - [`memory::InMemoryStore`]: non-persistent store for tests
//!
//! ## Storage Format
//!
//! ```text
//! id,name,course,email
//! 1001,Ada Lovelace,Mathematics,ada@example.com
//! 1002,"Hopper, Grace",CS,grace@example.com
//! ```
//!
//! Fields containing commas, quotes or newlines are quoted so they survive a
//! save/load round trip unchanged.

use crate::error::Result;
use crate::model::Student;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for student record storage.
pub trait RecordStore {
    /// Make sure the backing storage exists with a header row.
    /// Returns `true` when it had to be created.
    fn initialize(&mut self) -> Result<bool>;

    /// All records in stored order. Missing storage yields an empty list.
    fn load(&self) -> Result<Vec<Student>>;

    /// Replace the stored records with `students`, in order.
    fn save(&mut self, students: &[Student]) -> Result<()>;

    /// Where the records live, for file-based stores.
    fn location(&self) -> Option<PathBuf> {
        None
    }
}
