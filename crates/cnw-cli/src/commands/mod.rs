// crates/cnw-cli/src/commands/mod.rs
//
// Command module declarations for the cnw CLI.

pub mod events;
pub mod extend;
pub mod init;
pub mod mint;
pub mod ownership;
pub mod status;
pub mod token;

use std::path::PathBuf;

use crate::output::OutputFormat;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved path of the collection state file.
    pub state_path: PathBuf,
    pub format: OutputFormat,
}
