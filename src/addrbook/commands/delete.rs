use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Name;

pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let name = Name::new(name)?;
    let removed = book.remove(name.as_str())?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact {} was deleted from phonebook.",
            removed.name
        )))
        .with_affected(vec![removed]))
}
