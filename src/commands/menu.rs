use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Args;

use caesar_lab::validation::{require_text, Keyword, ShiftKey, ValidationError};
use caesar_lab::{Alphabet, CaesarCipher, Operation};

use super::CommandExecutor;

/// Interactive menu: standard cipher, permutation cipher, or exit.
#[derive(Args, Debug)]
pub struct MenuCommand {}

impl CommandExecutor for MenuCommand {
    fn execute(&self) -> Result<()> {
        let stdin = io::stdin();
        let mut session = Session {
            input: stdin.lock(),
            output: io::stdout().lock(),
        };
        session.run()
    }
}

struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "\n--- Caesar Cipher Menu ---")?;
            writeln!(self.output, "1. Standard Caesar Cipher")?;
            writeln!(self.output, "2. Caesar Cipher with Permutation Key")?;
            writeln!(self.output, "3. Exit")?;

            let Some(choice) = self.prompt("Select an option: ")? else {
                return Ok(());
            };

            match choice.trim() {
                "1" => {
                    writeln!(self.output, "\n--- Standard Caesar Cipher ---")?;
                    if !self.run_cipher(false)? {
                        return Ok(());
                    }
                }
                "2" => {
                    writeln!(self.output, "\n--- Caesar Cipher with Permutation Key ---")?;
                    if !self.run_cipher(true)? {
                        return Ok(());
                    }
                }
                "3" => {
                    writeln!(self.output, "Exiting program.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid option. Please choose 1, 2, or 3.")?,
            }
        }
    }

    /// Returns `false` when input ended mid-dialogue.
    fn run_cipher(&mut self, permuted: bool) -> Result<bool> {
        let Some(operation) = self.ask::<Operation>("Enter operation (encrypt/decrypt): ")? else {
            return Ok(false);
        };
        let Some(shift) = self.ask::<ShiftKey>("Enter the shift key (an integer between 1 and 25): ")? else {
            return Ok(false);
        };

        let alphabet = if permuted {
            let Some(keyword) = self.ask::<Keyword>(
                "Enter the permutation keyword (at least 7 letters long, no numbers/symbols): ",
            )?
            else {
                return Ok(false);
            };
            let alphabet = keyword.alphabet();
            writeln!(self.output, "Generated Permuted Alphabet: {alphabet}")?;
            alphabet
        } else {
            Alphabet::standard()
        };

        let Some(text) = self.ask_with("Enter the text to process: ", |raw| {
            require_text(raw).map(str::to_string)
        })?
        else {
            return Ok(false);
        };

        let result = CaesarCipher::new(shift.get(), alphabet).apply(&text, operation);
        writeln!(self.output, "\nResult: {result}")?;
        Ok(true)
    }

    fn ask<T>(&mut self, message: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr<Err = ValidationError>,
    {
        self.ask_with(message, str::parse::<T>)
    }

    /// Re-prompt until `parse` accepts the line; `None` on end of input.
    fn ask_with<T>(
        &mut self,
        message: &str,
        parse: impl Fn(&str) -> Result<T, ValidationError>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
