//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`roster`].
//!
//! ### Naked Execution (`roster`)
//!
//! Running `roster` with no subcommand opens the interactive menu:
//!
//! ```text
//! === Student Management System ===
//! 1. Add Student
//! 2. Search Student
//! 3. Delete Student
//! 4. View All Students
//! 5. Exit
//! ```
//!
//! The data file is created (header only) on startup if it does not exist.
//! A failure there is logged and shown, and the menu still opens.
//!
//! ### Flags
//!
//! - `--file <PATH>` picks the data file (beats `$ROSTER_FILE` and the config file)
//! - `--email-policy reject|warn` overrides the configured email policy
//! - `-v` raises log verbosity; logs go to stderr
//!
//! ### Config (`roster config [key] [value]`)
//!
//! Shows or sets `data-file` and `email-policy` in `config.json`.
//!
//! ## Module Structure
//!
//! - `commands`: Context wiring, logging setup and dispatch
//! - `menu`: The interactive loop
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod menu;
mod render;
pub mod setup;

pub use commands::run;
