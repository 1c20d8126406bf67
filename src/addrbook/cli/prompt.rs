use super::Session;
use addrbook::error::{BookError, Result};
use addrbook::model::Phone;
use addrbook::parser::is_cancel_word;
use addrbook::store::DataStore;
use colored::Colorize;
use std::io::{BufRead, Write};

const POSITION_PROMPT: &str = "Type \"exit\" to exit or enter the position of the phone: ";
const NOT_AN_INTEGER: &str = "Please enter a valid integer index.";
const BAD_PHONE: &str =
    "Please enter a valid phone number. Recommended format: \"+380123456789\" or \"0123456789\".";
const PAGE_PROMPT: &str =
    "Enter anything to continue watching list or type 'exit' / 'stop' / 'close' for exit: ";
const PAGE_STOP_WORDS: [&str; 3] = ["exit", "stop", "close"];

impl<S: DataStore, R: BufRead, W: Write> Session<S, R, W> {
    /// Asks for a 1-based position among `count` phones until one is valid.
    /// `None` when the user cancels or input ends.
    pub(super) fn prompt_position(&mut self, count: usize) -> Result<Option<usize>> {
        loop {
            let Some(answer) = self.read_line(POSITION_PROMPT)? else {
                return Ok(None);
            };
            if is_cancel_word(&answer) {
                return Ok(None);
            }
            match answer.trim().parse::<i64>() {
                Ok(n) if n >= 1 && (n as u64) <= count as u64 => return Ok(Some(n as usize)),
                Ok(_) => writeln!(
                    self.out,
                    "{}",
                    BookError::InvalidPosition.user_message().yellow()
                )?,
                Err(_) => writeln!(self.out, "{}", NOT_AN_INTEGER.yellow())?,
            }
        }
    }

    /// Asks for a replacement phone for `name` until it normalizes.
    pub(super) fn prompt_phone(&mut self, name: &str) -> Result<Option<Phone>> {
        let prompt = format!("Enter new phone number for contact - {}: ", name);
        loop {
            let Some(answer) = self.read_line(&prompt)? else {
                return Ok(None);
            };
            if is_cancel_word(&answer) {
                return Ok(None);
            }
            match Phone::parse(&answer) {
                Ok(phone) => return Ok(Some(phone)),
                Err(_) => writeln!(self.out, "{}", BAD_PHONE.yellow())?,
            }
        }
    }

    /// Whether to show the next page of `show all`.
    pub(super) fn prompt_next_page(&mut self) -> Result<bool> {
        let Some(answer) = self.read_line(PAGE_PROMPT)? else {
            return Ok(false);
        };
        let answer = answer.trim().to_ascii_lowercase();
        Ok(!PAGE_STOP_WORDS.contains(&answer.as_str()))
    }
}
