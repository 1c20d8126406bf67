use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::model::Birthday;
use chrono::NaiveDate;

use super::helpers::{existing, existing_mut};

/// Sets or replaces a contact's birthday.
pub fn set(book: &mut AddressBook, name: &str, date: Option<&str>) -> Result<CmdResult> {
    let record = existing_mut(book, name)?;
    let date = date.ok_or(BookError::MissingArgument("the birthday (dd.mm or dd.mm.yyyy)"))?;
    record.set_birthday(Birthday::parse(date)?);

    let message = format!("Added birthday to {}'s record.", record.name);
    Ok(CmdResult::default()
        .with_affected(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}

/// Days left until the contact's next birthday, counted from `today`.
pub fn when(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = existing(book, name)?;
    Ok(CmdResult::default().with_message(CmdMessage::info(record.birthday_message(today))))
}
