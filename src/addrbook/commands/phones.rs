use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Phone;

use super::helpers::{existing, existing_mut, position_to_index};

/// Adds a phone unless the contact already has it.
pub fn append(book: &mut AddressBook, name: &str, phone: Option<&str>) -> Result<CmdResult> {
    let record = existing_mut(book, name)?;

    let Some(phone) = phone else {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Enter the phone you want to add for {}. Try again.",
            record.name
        ))));
    };
    let phone = Phone::parse(phone)?;

    if record.has_phone(&phone) {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "{} is already in {}'s phones. Try again.",
            phone, record.name
        ))));
    }

    record.add_phone(phone.clone());
    let message = format!("To {}'s phones was added {}.", record.name, phone);
    Ok(CmdResult::default()
        .with_affected(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}

/// Phones offered for selection by the change/remove prompts.
pub fn choices(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = existing(book, name)?;
    let result = CmdResult::default().with_phones(record.phones.clone());
    if record.phones.is_empty() {
        return Ok(result.with_message(CmdMessage::warning(format!(
            "{} hasn't any phone yet.",
            record.name
        ))));
    }
    Ok(result.with_message(CmdMessage::info(format!("{} phone numbers:", record.name))))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = existing(book, name)?;
    let result = CmdResult::default().with_phones(record.phones.clone());
    if record.phones.is_empty() {
        return Ok(result.with_message(CmdMessage::info(format!(
            "{} has no phone numbers.",
            record.name
        ))));
    }
    Ok(result.with_message(CmdMessage::info(format!("{} phone numbers:", record.name))))
}

/// Replaces the phone at a 1-based position.
pub fn replace(
    book: &mut AddressBook,
    name: &str,
    position: usize,
    phone: Phone,
) -> Result<CmdResult> {
    let record = existing_mut(book, name)?;
    let index = position_to_index(position, record.phones.len())?;
    let old = record.replace_phone(index, phone.clone())?;

    let message = format!("{}'s phone {} was changed to {}.", record.name, old, phone);
    Ok(CmdResult::default()
        .with_affected(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}

/// Removes the phone at a 1-based position.
pub fn remove(book: &mut AddressBook, name: &str, position: usize) -> Result<CmdResult> {
    let record = existing_mut(book, name)?;
    let index = position_to_index(position, record.phones.len())?;
    let old = record.remove_phone(index)?;

    let message = format!("{}'s phone {} was deleted.", record.name, old);
    Ok(CmdResult::default()
        .with_affected(vec![record.clone()])
        .with_message(CmdMessage::success(message)))
}
