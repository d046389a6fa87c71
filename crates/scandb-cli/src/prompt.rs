//! Line input with validation loops.
//!
//! Numeric prompts re-prompt until the input parses and is in range;
//! EOF or Ctrl-C cancels the prompt (`Ok(None)`), which callers treat as
//! "back out of the current menu". Invalid input never reaches the core.

use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error as ThisError;

///
/// PromptError
///
/// Terminal I/O failures. Interrupt and EOF are not errors; they cancel.
///

#[derive(Debug, ThisError)]
pub enum PromptError {
    #[error("terminal error: {0}")]
    Readline(#[from] ReadlineError),
}

///
/// Prompter
///

pub struct Prompter {
    editor: DefaultEditor,
}

impl Prompter {
    pub fn new() -> Result<Self, PromptError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }

    /// Read one line. `None` on EOF or interrupt.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
            Err(err) => Err(PromptError::Readline(err)),
        }
    }

    /// Read a non-empty trimmed line, re-prompting on empty input.
    pub fn read_text(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                println!("Please enter a non-empty value.");
                continue;
            }
            return Ok(Some(trimmed.to_string()));
        }
    }

    /// Read an unsigned integer, re-prompting until the input parses.
    pub fn read_u32(&mut self, prompt: &str) -> Result<Option<u32>, PromptError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<u32>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => println!("Please enter a whole number."),
            }
        }
    }

    /// Read a non-negative float, re-prompting until the input parses.
    pub fn read_f64(&mut self, prompt: &str) -> Result<Option<f64>, PromptError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<f64>() {
                Ok(n) if n.is_finite() && n >= 0.0 => return Ok(Some(n)),
                _ => println!("Please enter a non-negative number."),
            }
        }
    }

    /// Read a menu choice in `1..=max`, re-prompting on anything else.
    pub fn read_choice(&mut self, prompt: &str, max: u32) -> Result<Option<u32>, PromptError> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_choice(&line, max) {
                Some(choice) => return Ok(Some(choice)),
                None => println!("Please choose an option between 1 and {max}."),
            }
        }
    }
}

/// Parse a menu choice in `1..=max`.
fn parse_choice(input: &str, max: u32) -> Option<u32> {
    let choice: u32 = input.trim().parse().ok()?;
    (1..=max).contains(&choice).then_some(choice)
}

#[cfg(test)]
mod tests {
    use super::parse_choice;

    #[test]
    fn parse_choice_accepts_in_range_numbers() {
        assert_eq!(parse_choice("1", 4), Some(1));
        assert_eq!(parse_choice(" 4 ", 4), Some(4));
    }

    #[test]
    fn parse_choice_rejects_out_of_range_and_garbage() {
        assert_eq!(parse_choice("0", 4), None);
        assert_eq!(parse_choice("5", 4), None);
        assert_eq!(parse_choice("two", 4), None);
        assert_eq!(parse_choice("", 4), None);
        assert_eq!(parse_choice("-1", 4), None);
    }
}
