use anyhow::Result;
use clap::Args;
use tracing::info;

use caesar_lab::validation::{require_text, Keyword, ShiftKey};
use caesar_lab::{CaesarCipher, Operation};

use super::CommandExecutor;

#[derive(Args, Debug)]
pub struct CipherArgs {
    /// Shift key, an integer between 1 and 25
    #[arg(short, long)]
    pub shift: ShiftKey,

    /// Permutation keyword (letters only, at least 7); standard alphabet when omitted
    #[arg(short, long)]
    pub keyword: Option<Keyword>,

    /// Text to process; everything but letters is discarded
    #[arg(required = true)]
    pub text: String,
}

/// Encrypt or decrypt one message.
#[derive(Debug)]
pub struct CipherCommand {
    operation: Operation,
    args: CipherArgs,
}

impl CipherCommand {
    pub fn new(operation: Operation, args: CipherArgs) -> Self {
        Self { operation, args }
    }
}

impl CommandExecutor for CipherCommand {
    fn execute(&self) -> Result<()> {
        let text = require_text(&self.args.text)?;

        let cipher = match &self.args.keyword {
            Some(keyword) => {
                let cipher = CaesarCipher::new(self.args.shift.get(), keyword.alphabet());
                println!("Generated Permuted Alphabet: {}", cipher.alphabet());
                cipher
            }
            None => CaesarCipher::standard(self.args.shift.get()),
        };

        info!(operation = %self.operation, shift = %self.args.shift, "processing text");

        println!("{}", cipher.apply(text, self.operation));
        Ok(())
    }
}
