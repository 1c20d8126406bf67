use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Case-sensitive substring search over names and phones, in insertion order.
pub fn run(book: &AddressBook, term: &str) -> Result<CmdResult> {
    let term = term.trim();
    if term.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(
            "Enter the search request and try again.",
        )));
    }

    let found: Vec<_> = book.iter().filter(|r| r.matches(term)).cloned().collect();
    if found.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(
            "No records were found with your search request.",
        )));
    }

    let header = format!(
        "{} records were found with your search request:",
        found.len()
    );
    Ok(CmdResult::default()
        .with_listed(found)
        .with_message(CmdMessage::info(header)))
}
