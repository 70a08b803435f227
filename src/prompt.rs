//! Line-oriented console prompts.
//!
//! [`Prompter`] wraps an input and an output stream so sessions can run
//! against the real terminal or against in-memory buffers in tests. All
//! retry logic of the tool lives here: required text fields and numbered
//! menus re-prompt until they get an acceptable answer.

use std::{
    fmt::Display,
    io::{BufRead, Write},
    num::IntErrorKind
};

use crate::{
    error::{AppResult, input_error, output_error},
    output::{OutputOptions, format_menu}
};

/// Outcome of parsing one menu answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index of the chosen option
    Valid(usize),
    OutOfRange,
    NotANumber
}

/// Parse a menu answer against `count` options numbered from 1.
///
/// Integers too large for `i64` are still numbers, just out of range.
///
/// # Example
///
/// ```
/// use sql_query_generator::prompt::{MenuChoice, parse_menu_choice};
///
/// assert_eq!(parse_menu_choice(" 2 ", 9), MenuChoice::Valid(1));
/// assert_eq!(parse_menu_choice("0", 9), MenuChoice::OutOfRange);
/// assert_eq!(parse_menu_choice("two", 9), MenuChoice::NotANumber);
/// ```
pub fn parse_menu_choice(answer: &str, count: usize) -> MenuChoice {
    match answer.trim().parse::<i64>() {
        Ok(n) if n >= 1 && (n as u64) <= count as u64 => MenuChoice::Valid(n as usize - 1),
        Ok(_) => MenuChoice::OutOfRange,
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            MenuChoice::OutOfRange
        }
        Err(_) => MenuChoice::NotANumber
    }
}

/// Prompts over a pair of streams
pub struct Prompter<R, W> {
    input:  R,
    output: W,
    opts:   OutputOptions
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, opts: OutputOptions) -> Self {
        Self {
            input,
            output,
            opts
        }
    }

    pub fn options(&self) -> &OutputOptions {
        &self.opts
    }

    /// Consume the prompter and return the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line
    pub fn say(&mut self, text: &str) -> AppResult<()> {
        writeln!(self.output, "{}", text)
            .map_err(|e| output_error(format!("Failed to write to console: {}", e)))
    }

    /// Show `prompt` and read one answer line without its line terminator.
    ///
    /// # Errors
    ///
    /// Fails when the input stream is closed or unreadable.
    pub fn ask(&mut self, prompt: &str) -> AppResult<String> {
        write!(self.output, "{}", prompt)
            .and_then(|_| self.output.flush())
            .map_err(|e| output_error(format!("Failed to write to console: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| input_error(format!("Failed to read from console: {}", e)))?;
        if read == 0 {
            return Err(input_error("Input closed before an answer was given"));
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Like [`ask`](Self::ask) but with surrounding whitespace removed
    pub fn ask_trimmed(&mut self, prompt: &str) -> AppResult<String> {
        Ok(self.ask(prompt)?.trim().to_string())
    }

    /// Trimmed answer, or `default` when the answer is blank
    pub fn ask_or(&mut self, prompt: &str, default: &str) -> AppResult<String> {
        let answer = self.ask_trimmed(prompt)?;
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Ask until a non-blank answer is given; returns it trimmed.
    ///
    /// `field` names the value in the retry message, e.g. `"Table name"`.
    pub fn ask_required(&mut self, prompt: &str, field: &str) -> AppResult<String> {
        loop {
            let answer = self.ask_trimmed(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say(&format!(
                "{} cannot be empty. Please enter a valid {}.",
                field,
                field.to_lowercase()
            ))?;
        }
    }

    /// Show a numbered menu and ask until a listed number is entered.
    pub fn select<'a, T: Display>(&mut self, title: &str, options: &'a [T]) -> AppResult<&'a T> {
        let menu = format_menu(title, options, &self.opts);
        self.say(&menu)?;

        let prompt = format!("Enter your choice (1-{}): ", options.len());
        loop {
            let answer = self.ask(&prompt)?;
            match parse_menu_choice(&answer, options.len()) {
                MenuChoice::Valid(index) => return Ok(&options[index]),
                MenuChoice::OutOfRange => {
                    self.say(&format!(
                        "Please enter a number between 1 and {}.",
                        options.len()
                    ))?;
                }
                MenuChoice::NotANumber => self.say("Invalid input, please enter a number.")?
            }
        }
    }
}
