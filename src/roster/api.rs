//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! roster operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (ids are trimmed, add input is wrapped in [`NewStudent`])
//! - **Carries settings** the commands need (the email policy)
//!
//! It does no printing and holds no business rules; validation lives in
//! `commands/add.rs`.
//!
//! `RosterApi<S: RecordStore>` is generic over the storage backend:
//! `RosterApi<CsvStore>` in production, `RosterApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{EmailPolicy, NewStudent};
use crate::store::RecordStore;
use std::path::{Path, PathBuf};

pub struct RosterApi<S: RecordStore> {
    store: S,
    email_policy: EmailPolicy,
    config_dir: PathBuf,
}

impl<S: RecordStore> RosterApi<S> {
    pub fn new(store: S, email_policy: EmailPolicy, config_dir: PathBuf) -> Self {
        Self {
            store,
            email_policy,
            config_dir,
        }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn add_student(
        &mut self,
        id: &str,
        name: &str,
        course: &str,
        email: &str,
    ) -> Result<commands::CmdResult> {
        let input = NewStudent::new(id, name, course, email);
        commands::add::run(&mut self.store, input, self.email_policy)
    }

    /// Early id check for interactive add: numeric, then not already taken.
    pub fn check_new_id(&self, id: &str) -> Result<()> {
        let students = self.store.load()?;
        commands::add::check_id(&students, id.trim())
    }

    pub fn check_name(&self, name: &str) -> Result<()> {
        commands::add::check_name(name.trim())
    }

    pub fn search_student(&self, id: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, id.trim())
    }

    pub fn delete_student(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id.trim())
    }

    pub fn list_students(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn email_policy(&self) -> EmailPolicy {
        self.email_policy
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
