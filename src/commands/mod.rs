//! Subcommands of the `caesar-lab` binary.
//!
//! Each command holds its parsed arguments and implements
//! [`CommandExecutor`]; output formatting lives in [`render`].

mod alphabet;
mod analyze;
mod cipher;
mod menu;
mod render;

pub use alphabet::AlphabetCommand;
pub use analyze::AnalyzeCommand;
pub use cipher::{CipherArgs, CipherCommand};
pub use menu::MenuCommand;

use anyhow::Result;

pub trait CommandExecutor {
    fn execute(&self) -> Result<()>;
}
