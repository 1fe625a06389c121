use anyhow::Result;
use clap::Args;

use caesar_lab::validation::Keyword;

use super::CommandExecutor;

/// Print the permuted alphabet for a keyword.
#[derive(Args, Debug)]
pub struct AlphabetCommand {
    /// Permutation keyword (letters only, at least 7)
    pub keyword: Keyword,
}

impl CommandExecutor for AlphabetCommand {
    fn execute(&self) -> Result<()> {
        println!("{}", self.keyword.alphabet());
        Ok(())
    }
}
